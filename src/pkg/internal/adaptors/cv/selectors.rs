use sqlx::PgConnection;

use super::spec::{COLUMNS, CvFileEntry, CvFileSummary, SUMMARY_COLUMNS};
use crate::prelude::Result;

pub struct CvSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CvSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CvSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<CvFileEntry>> {
        let row = sqlx::query_as::<_, CvFileEntry>(&format!(
            "SELECT {COLUMNS} FROM cv_files WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<CvFileSummary>> {
        let rows = sqlx::query_as::<_, CvFileSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM cv_files ORDER BY uploaded_at DESC, id DESC"
        ))
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_active(&mut self) -> Result<Option<CvFileEntry>> {
        let row = sqlx::query_as::<_, CvFileEntry>(&format!(
            "SELECT {COLUMNS} FROM cv_files WHERE is_active LIMIT 1"
        ))
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
