use sqlx::PgConnection;

use super::spec::{COLUMNS, ExperienceEntry};
use crate::prelude::Result;

pub struct ExperienceSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ExperienceSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ExperienceSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<ExperienceEntry>> {
        let row = sqlx::query_as::<_, ExperienceEntry>(&format!(
            "SELECT {COLUMNS} FROM experiences WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<ExperienceEntry>> {
        let rows = sqlx::query_as::<_, ExperienceEntry>(&format!(
            r#"SELECT {COLUMNS} FROM experiences ORDER BY "order" ASC, id ASC"#
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&mut self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM experiences")
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(count)
    }
}
