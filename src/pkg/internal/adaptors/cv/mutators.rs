use serde::Deserialize;
use sqlx::{Connection, PgConnection, Postgres, QueryBuilder};
use validator::Validate;

use super::spec::{CvFileSummary, SUMMARY_COLUMNS, strip_data_url, validate_base64};
use crate::prelude::Result;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCvFile {
    #[validate(length(min = 1, message = "Filename is required"))]
    pub filename: String,
    #[validate(length(min = 1, message = "Original name is required"))]
    pub original_name: String,
    #[validate(custom(function = "validate_base64"))]
    pub file_data: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CvFilePatch {
    #[validate(length(min = 1, message = "Filename cannot be empty"))]
    pub filename: Option<String>,
    #[validate(length(min = 1, message = "Original name cannot be empty"))]
    pub original_name: Option<String>,
    #[validate(custom(function = "validate_base64"))]
    pub file_data: Option<String>,
}

impl CvFilePatch {
    fn is_empty(&self) -> bool {
        self.filename.is_none() && self.original_name.is_none() && self.file_data.is_none()
    }
}

pub struct CvMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> CvMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        CvMutator { pool }
    }

    /// New uploads start inactive.
    pub async fn create(&mut self, cv: NewCvFile) -> Result<CvFileSummary> {
        let row = sqlx::query_as::<_, CvFileSummary>(&format!(
            r#"
            INSERT INTO cv_files (filename, original_name, file_data)
            VALUES ($1, $2, $3)
            RETURNING {SUMMARY_COLUMNS}
            "#
        ))
        .bind(&cv.filename)
        .bind(&cv.original_name)
        .bind(strip_data_url(&cv.file_data))
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, patch: CvFilePatch) -> Result<Option<CvFileSummary>> {
        if patch.is_empty() {
            let row = sqlx::query_as::<_, CvFileSummary>(&format!(
                "SELECT {SUMMARY_COLUMNS} FROM cv_files WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&mut *self.pool)
            .await?;
            return Ok(row);
        }
        let mut query = QueryBuilder::<Postgres>::new("UPDATE cv_files SET ");
        {
            let mut set = query.separated(", ");
            if let Some(filename) = patch.filename {
                set.push("filename = ").push_bind_unseparated(filename);
            }
            if let Some(original_name) = patch.original_name {
                set.push("original_name = ").push_bind_unseparated(original_name);
            }
            if let Some(file_data) = patch.file_data {
                set.push("file_data = ")
                    .push_bind_unseparated(strip_data_url(&file_data).to_string());
            }
        }
        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {SUMMARY_COLUMNS}"));
        let row = query
            .build_query_as::<CvFileSummary>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    /// Makes `id` the only active CV. The clear and the set commit together,
    /// and the table lock serialises concurrent activations. Returns `None`
    /// without touching any row when `id` does not exist.
    pub async fn set_active(&mut self, id: i32) -> Result<Option<CvFileSummary>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("LOCK TABLE cv_files IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;
        let exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM cv_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            tracing::debug!("cv {} not found, activation skipped", id);
            return Ok(None);
        }
        sqlx::query("UPDATE cv_files SET is_active = FALSE WHERE is_active AND id <> $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let row = sqlx::query_as::<_, CvFileSummary>(&format!(
            "UPDATE cv_files SET is_active = TRUE WHERE id = $1 RETURNING {SUMMARY_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cv_files WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::pkg::internal::adaptors::cv::selectors::CvSelector;

    fn upload(name: &str) -> NewCvFile {
        NewCvFile {
            filename: format!("{name}.pdf"),
            original_name: format!("{name} CV.pdf"),
            file_data: "data:application/pdf;base64,JVBERi0xLjQK".into(),
        }
    }

    #[test]
    fn rejects_non_base64_payload() {
        let mut cv = upload("nelson");
        cv.file_data = "%%%".into();
        let errors = cv.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("file_data"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn activation_leaves_exactly_one_active(pool: PgPool) -> Result<()> {
        let mut conn = pool.acquire().await?;
        let first = CvMutator::new(&mut conn).create(upload("first")).await?;
        let second = CvMutator::new(&mut conn).create(upload("second")).await?;
        assert!(!first.is_active);

        CvMutator::new(&mut conn).set_active(first.id).await?.unwrap();
        let activated = CvMutator::new(&mut conn).set_active(second.id).await?.unwrap();
        assert!(activated.is_active);

        let active: Vec<_> = CvSelector::new(&mut conn)
            .get_all()
            .await?
            .into_iter()
            .filter(|cv| cv.is_active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);

        let served = CvSelector::new(&mut conn).get_active().await?.unwrap();
        assert_eq!(served.decode().unwrap(), b"%PDF-1.4\n");
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn activating_missing_id_changes_nothing(pool: PgPool) -> Result<()> {
        let mut conn = pool.acquire().await?;
        let cv = CvMutator::new(&mut conn).create(upload("only")).await?;
        CvMutator::new(&mut conn).set_active(cv.id).await?;
        assert!(CvMutator::new(&mut conn).set_active(cv.id + 99).await?.is_none());
        let active = CvSelector::new(&mut conn).get_active().await?.unwrap();
        assert_eq!(active.id, cv.id);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn rename_keeps_payload(pool: PgPool) -> Result<()> {
        let mut conn = pool.acquire().await?;
        let cv = CvMutator::new(&mut conn).create(upload("draft")).await?;
        let renamed = CvMutator::new(&mut conn)
            .update(
                cv.id,
                CvFilePatch {
                    original_name: Some("Final CV.pdf".into()),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();
        assert_eq!(renamed.original_name, "Final CV.pdf");
        assert_eq!(renamed.filename, cv.filename);
        let full = CvSelector::new(&mut conn).get_by_id(cv.id).await?.unwrap();
        assert_eq!(full.file_data, "JVBERi0xLjQK");

        CvMutator::new(&mut conn).delete(cv.id).await?;
        assert!(CvSelector::new(&mut conn).get_by_id(cv.id).await?.is_none());
        Ok(())
    }
}
