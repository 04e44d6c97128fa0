use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    pkg::{
        internal::adaptors::skills::{
            mutators::{NewSkill, SkillMutator, SkillPatch},
            selectors::SkillSelector,
            spec::SkillEntry,
        },
        server::{
            extract::ValidatedJson,
            handlers::Deleted,
            state::{AppState, GetTxn},
        },
    },
    prelude::{Error, Result},
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SkillEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    Ok(Json(SkillSelector::new(&mut conn).get_all().await?))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SkillEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    SkillSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound("skill"))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewSkill>,
) -> Result<Json<SkillEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = SkillMutator::new(&mut tx).create(input).await?;
    tx.commit().await?;
    tracing::info!("created skill {} ({})", entry.id, &entry.title);
    Ok(Json(entry))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(patch): ValidatedJson<SkillPatch>,
) -> Result<Json<SkillEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = SkillMutator::new(&mut tx)
        .update(id, patch)
        .await?
        .ok_or(Error::NotFound("skill"))?;
    tx.commit().await?;
    tracing::info!("updated skill {}", id);
    Ok(Json(entry))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Deleted>> {
    let mut tx = state.db_pool.begin_txn().await?;
    if SkillMutator::new(&mut tx).delete(id).await? {
        tracing::info!("deleted skill {}", id);
    }
    tx.commit().await?;
    Ok(Json(Deleted::ok()))
}
