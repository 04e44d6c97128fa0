use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub(crate) const COLUMNS: &str =
    r#"id, title, issuer, date, description, image_url, category, "order""#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AchievementEntry {
    pub id: i32,
    pub title: String,
    pub issuer: String,
    /// Display text such as "Sep 25, 2025"; never parsed.
    pub date: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub order: i32,
}
