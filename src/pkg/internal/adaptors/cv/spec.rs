use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::ValidationError;

pub(crate) const SUMMARY_COLUMNS: &str = "id, filename, original_name, uploaded_at, is_active";
pub(crate) const COLUMNS: &str =
    "id, filename, original_name, file_data, uploaded_at, is_active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CvFileEntry {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    /// Base64 of the uploaded document.
    pub file_data: String,
    pub uploaded_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Listing shape: everything but the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CvFileSummary {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub is_active: bool,
}

impl CvFileEntry {
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(strip_data_url(&self.file_data))
    }
}

/// Drops a leading `data:<mime>;base64,` if the client sent a data URL.
pub fn strip_data_url(data: &str) -> &str {
    match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(";base64,").map_or(data, |(_, body)| body),
        None => data,
    }
}

pub fn validate_base64(data: &str) -> Result<(), ValidationError> {
    let body = strip_data_url(data);
    if body.is_empty() {
        return Err(ValidationError::new("empty").with_message("File data is required".into()));
    }
    STANDARD
        .decode(body)
        .map(|_| ())
        .map_err(|_| ValidationError::new("base64").with_message("File data must be base64".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix() {
        assert_eq!(strip_data_url("data:application/pdf;base64,JVBERi0="), "JVBERi0=");
        assert_eq!(strip_data_url("JVBERi0="), "JVBERi0=");
        assert_eq!(strip_data_url("data:nonsense"), "data:nonsense");
    }

    #[test]
    fn base64_check() {
        assert!(validate_base64("JVBERi0xLjQK").is_ok());
        assert!(validate_base64("data:application/pdf;base64,JVBERi0xLjQK").is_ok());
        assert!(validate_base64("not base64!").is_err());
        assert!(validate_base64("").is_err());
    }
}
