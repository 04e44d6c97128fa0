use sqlx::PgConnection;

use super::spec::{AchievementEntry, COLUMNS};
use crate::prelude::Result;

pub struct AchievementSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> AchievementSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        AchievementSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<AchievementEntry>> {
        let row = sqlx::query_as::<_, AchievementEntry>(&format!(
            "SELECT {COLUMNS} FROM achievements WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<AchievementEntry>> {
        let rows = sqlx::query_as::<_, AchievementEntry>(&format!(
            r#"SELECT {COLUMNS} FROM achievements ORDER BY "order" ASC, id ASC"#
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&mut self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM achievements")
            .fetch_one(&mut *self.pool)
            .await?;
        Ok(count)
    }
}
