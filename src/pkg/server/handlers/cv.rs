use axum::{
    Json,
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    pkg::{
        internal::adaptors::cv::{
            mutators::{CvFilePatch, CvMutator, NewCvFile},
            selectors::CvSelector,
            spec::{CvFileEntry, CvFileSummary},
        },
        server::{
            extract::ValidatedJson,
            handlers::Deleted,
            state::{AppState, GetTxn},
        },
    },
    prelude::{Error, Result},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCv {
    pub filename: String,
    pub original_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Keeps the header value a single quoted token.
fn attachment(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    let cleaned = if cleaned.trim().is_empty() {
        "cv.pdf".to_string()
    } else {
        cleaned
    };
    format!("attachment; filename=\"{}\"", cleaned)
}

pub async fn active(State(state): State<AppState>) -> Result<Json<ActiveCv>> {
    let mut conn = state.db_pool.acquire().await?;
    let cv = CvSelector::new(&mut conn)
        .get_active()
        .await?
        .ok_or(Error::NotFound("active cv"))?;
    Ok(Json(ActiveCv {
        filename: cv.filename,
        original_name: cv.original_name,
        uploaded_at: cv.uploaded_at,
    }))
}

pub async fn download(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let mut conn = state.db_pool.acquire().await?;
    let cv = CvSelector::new(&mut conn)
        .get_active()
        .await?
        .ok_or(Error::NotFound("active cv"))?;
    let bytes = cv
        .decode()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    tracing::debug!("serving cv {} ({} bytes)", cv.id, bytes.len());
    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, attachment(&cv.original_name)),
        ],
        bytes,
    ))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CvFileSummary>>> {
    let mut conn = state.db_pool.acquire().await?;
    Ok(Json(CvSelector::new(&mut conn).get_all().await?))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CvFileEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    CvSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound("cv"))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewCvFile>,
) -> Result<Json<CvFileSummary>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = CvMutator::new(&mut tx).create(input).await?;
    tx.commit().await?;
    tracing::info!("uploaded cv {} ({})", entry.id, &entry.original_name);
    Ok(Json(entry))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<CvFilePatch>,
) -> Result<Json<CvFileSummary>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = CvMutator::new(&mut tx)
        .update(id, patch)
        .await?
        .ok_or(Error::NotFound("cv"))?;
    tx.commit().await?;
    tracing::info!("updated cv {}", id);
    Ok(Json(entry))
}

pub async fn activate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CvFileSummary>> {
    let mut conn = state.db_pool.acquire().await?;
    let entry = CvMutator::new(&mut conn)
        .set_active(id)
        .await?
        .ok_or(Error::NotFound("cv"))?;
    tracing::info!("cv {} is now active", id);
    Ok(Json(entry))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Deleted>> {
    let mut tx = state.db_pool.begin_txn().await?;
    if CvMutator::new(&mut tx).delete(id).await? {
        tracing::info!("deleted cv {}", id);
    }
    tx.commit().await?;
    Ok(Json(Deleted::ok()))
}

#[cfg(test)]
mod tests {
    use super::attachment;

    #[test]
    fn attachment_header_is_sanitised() {
        assert_eq!(attachment("Nelson CV.pdf"), "attachment; filename=\"Nelson CV.pdf\"");
        assert_eq!(attachment("a\"b\r\n.pdf"), "attachment; filename=\"ab.pdf\"");
        assert_eq!(attachment("\"\""), "attachment; filename=\"cv.pdf\"");
    }
}
