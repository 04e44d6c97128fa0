use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub(crate) const COLUMNS: &str = r#"id, icon, title, category, bg_color, icon_color, "order""#;

pub const DEFAULT_BG_COLOR: &str = "bg-primary/10";
pub const DEFAULT_ICON_COLOR: &str = "text-primary";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub category: String,
    pub bg_color: String,
    pub icon_color: String,
    pub order: i32,
}
