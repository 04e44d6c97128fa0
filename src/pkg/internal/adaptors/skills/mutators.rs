use serde::Deserialize;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use validator::Validate;

use super::selectors::SkillSelector;
use super::spec::{COLUMNS, DEFAULT_BG_COLOR, DEFAULT_ICON_COLOR, SkillEntry};
use crate::prelude::Result;

fn default_bg_color() -> String {
    DEFAULT_BG_COLOR.into()
}

fn default_icon_color() -> String {
    DEFAULT_ICON_COLOR.into()
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    #[validate(length(min = 1, message = "Icon is required"))]
    pub icon: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default = "default_bg_color")]
    #[validate(length(min = 1))]
    pub bg_color: String,
    #[serde(default = "default_icon_color")]
    #[validate(length(min = 1))]
    pub icon_color: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    #[validate(length(min = 1, message = "Icon cannot be empty"))]
    pub icon: Option<String>,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub bg_color: Option<String>,
    #[validate(length(min = 1))]
    pub icon_color: Option<String>,
    pub order: Option<i32>,
}

impl SkillPatch {
    fn is_empty(&self) -> bool {
        self.icon.is_none()
            && self.title.is_none()
            && self.category.is_none()
            && self.bg_color.is_none()
            && self.icon_color.is_none()
            && self.order.is_none()
    }
}

pub struct SkillMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> SkillMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        SkillMutator { pool }
    }

    pub async fn create(&mut self, skill: NewSkill) -> Result<SkillEntry> {
        let row = sqlx::query_as::<_, SkillEntry>(&format!(
            r#"
            INSERT INTO skills (icon, title, category, bg_color, icon_color, "order")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&skill.icon)
        .bind(&skill.title)
        .bind(&skill.category)
        .bind(&skill.bg_color)
        .bind(&skill.icon_color)
        .bind(skill.order)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, patch: SkillPatch) -> Result<Option<SkillEntry>> {
        if patch.is_empty() {
            return SkillSelector::new(&mut *self.pool).get_by_id(id).await;
        }
        let mut query = QueryBuilder::<Postgres>::new("UPDATE skills SET ");
        {
            let mut set = query.separated(", ");
            if let Some(icon) = patch.icon {
                set.push("icon = ").push_bind_unseparated(icon);
            }
            if let Some(title) = patch.title {
                set.push("title = ").push_bind_unseparated(title);
            }
            if let Some(category) = patch.category {
                set.push("category = ").push_bind_unseparated(category);
            }
            if let Some(bg_color) = patch.bg_color {
                set.push("bg_color = ").push_bind_unseparated(bg_color);
            }
            if let Some(icon_color) = patch.icon_color {
                set.push("icon_color = ").push_bind_unseparated(icon_color);
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
            .build_query_as::<SkillEntry>()
            .fetch_optional(&mut *self.pool)
            .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
