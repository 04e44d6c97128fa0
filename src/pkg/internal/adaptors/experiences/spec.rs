use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub(crate) const COLUMNS: &str =
    r#"id, title, company, location, period, responsibilities, "order""#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub order: i32,
}
