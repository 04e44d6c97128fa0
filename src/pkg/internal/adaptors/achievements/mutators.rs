use serde::Deserialize;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use validator::Validate;

use super::selectors::AchievementSelector;
use super::spec::{AchievementEntry, COLUMNS};
use crate::pkg::internal::adaptors::nullable;
use crate::prelude::Result;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Issuer is required"))]
    pub issuer: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Image url is required"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub order: i32,
}

/// `description: Some(None)` clears the column, `None` leaves it alone.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AchievementPatch {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub issuer: Option<String>,
    #[validate(length(min = 1))]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    pub order: Option<i32>,
}

impl AchievementPatch {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.issuer.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.order.is_none()
    }
}

pub struct AchievementMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> AchievementMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        AchievementMutator { pool }
    }

    pub async fn create(&mut self, achievement: NewAchievement) -> Result<AchievementEntry> {
        let row = sqlx::query_as::<_, AchievementEntry>(&format!(
            r#"
            INSERT INTO achievements (title, issuer, date, description, image_url, category, "order")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&achievement.title)
        .bind(&achievement.issuer)
        .bind(&achievement.date)
        .bind(&achievement.description)
        .bind(&achievement.image_url)
        .bind(&achievement.category)
        .bind(achievement.order)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: i32,
        patch: AchievementPatch,
    ) -> Result<Option<AchievementEntry>> {
        if patch.is_empty() {
            return AchievementSelector::new(&mut *self.pool).get_by_id(id).await;
        }
        let mut query = QueryBuilder::<Postgres>::new("UPDATE achievements SET ");
        {
            let mut set = query.separated(", ");
            if let Some(title) = patch.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(issuer) = patch.issuer {
                set.push("issuer = ").push_bind_unseparated(issuer);
            }
            if let Some(date) = patch.date {
                set.push("date = ").push_bind_unseparated(date);
            }
            if let Some(description) = patch.description {
                set.push("description = ").push_bind_unseparated(description);
            }
            if let Some(image_url) = patch.image_url {
                set.push("image_url = ").push_bind_unseparated(image_url);
            }
            if let Some(category) = patch.category {
                set.push("category = ").push_bind_unseparated(category);
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
            .build_query_as::<AchievementEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
