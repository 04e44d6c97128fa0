use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    pkg::{
        internal::adaptors::achievements::{selectors::AchievementSelector, spec::AchievementEntry},
        server::state::AppState,
    },
    prelude::{Error, Result},
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AchievementEntry>>> {
    let mut conn = state.db_pool.acquire().await?;
    Ok(Json(AchievementSelector::new(&mut conn).get_all().await?))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AchievementEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    AchievementSelector::new(&mut conn)
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound("achievement"))
}
