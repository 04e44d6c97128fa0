pub mod achievements;
pub mod cv;
pub mod experiences;
pub mod skills;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null` in patch payloads.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

