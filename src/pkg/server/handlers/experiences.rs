use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    pkg::{
        internal::adaptors::experiences::{
            mutators::{ExperienceMutator, ExperiencePatch, NewExperience},
            selectors::ExperienceSelector,
            spec::ExperienceEntry,
        },
        server::{
            extract::ValidatedJson,
            handlers::Deleted,
            state::{AppState, GetTxn},
        },
    },
    prelude::{Error, Result},
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ExperienceEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    Ok(Json(ExperienceSelector::new(&mut conn).get_all().await?))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ExperienceEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    ExperienceSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound("experience"))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewExperience>,
) -> Result<Json<ExperienceEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = ExperienceMutator::new(&mut tx).create(input).await?;
    tx.commit().await?;
    tracing::info!("created experience {} ({})", entry.id, &entry.title);
    Ok(Json(entry))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<ExperiencePatch>,
) -> Result<Json<ExperienceEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = ExperienceMutator::new(&mut tx)
        .update(id, patch)
        .await?
        .ok_or(Error::NotFound("experience"))?;
    tx.commit().await?;
    tracing::info!("updated experience {}", id);
    Ok(Json(entry))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Deleted>> {
    let mut tx = state.db_pool.begin_txn().await?;
    if ExperienceMutator::new(&mut tx).delete(id).await? {
        tracing::info!("deleted experience {}", id);
    }
    tx.commit().await?;
    Ok(Json(Deleted::ok()))
}
