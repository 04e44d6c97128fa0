use serde::Deserialize;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use validator::Validate;

use super::selectors::ExperienceSelector;
use super::spec::{COLUMNS, ExperienceEntry};
use crate::prelude::Result;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewExperience {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Period is required"))]
    pub period: String,
    #[validate(length(min = 1, message = "At least one responsibility is required"))]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ExperiencePatch {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: Option<String>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,
    #[validate(length(min = 1, message = "Period cannot be empty"))]
    pub period: Option<String>,
    #[validate(length(min = 1, message = "At least one responsibility is required"))]
    pub responsibilities: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl ExperiencePatch {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.period.is_none()
            && self.responsibilities.is_none()
            && self.order.is_none()
    }
}

pub struct ExperienceMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ExperienceMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ExperienceMutator { pool }
    }

    pub async fn create(&mut self, experience: NewExperience) -> Result<ExperienceEntry> {
        let row = sqlx::query_as::<_, ExperienceEntry>(&format!(
            r#"
            INSERT INTO experiences (title, company, location, period, responsibilities, "order")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&experience.title)
        .bind(&experience.company)
        .bind(&experience.location)
        .bind(&experience.period)
        .bind(&experience.responsibilities)
        .bind(experience.order)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: i32,
        patch: ExperiencePatch,
    ) -> Result<Option<ExperienceEntry>> {
        if patch.is_empty() {
            return ExperienceSelector::new(&mut *self.pool).get_by_id(id).await;
        }
        let mut query = QueryBuilder::<Postgres>::new("UPDATE experiences SET ");
        {
            let mut set = query.separated(", ");
            if let Some(title) = patch.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(company) = patch.company {
                set.push("company = ").push_bind_unseparated(company);
            }
            if let Some(location) = patch.location {
                set.push("location = ").push_bind_unseparated(location);
            }
            if let Some(period) = patch.period {
                set.push("period = ").push_bind_unseparated(period);
            }
            if let Some(responsibilities) = patch.responsibilities {
                set.push("responsibilities = ")
                    .push_bind_unseparated(responsibilities);
            }
            if let Some(order) = patch.order {
                set.push(r#""order" = "#).push_bind_unseparated(order);
            }
        }
        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {COLUMNS}"));
        let row = query
            .build_query_as::<ExperienceEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
