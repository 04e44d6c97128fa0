use sqlx::PgConnection;

use super::spec::{COLUMNS, SkillEntry};
use crate::prelude::Result;

pub struct SkillSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SkillSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SkillSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<SkillEntry>> {
        let row = sqlx::query_as::<_, SkillEntry>(&format!(
            "SELECT {COLUMNS} FROM skills WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<SkillEntry>> {
        let rows = sqlx::query_as::<_, SkillEntry>(&format!(
            r#"SELECT {COLUMNS} FROM skills ORDER BY "order" ASC, id ASC"#
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&mut self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills")
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(count)
    }
}
