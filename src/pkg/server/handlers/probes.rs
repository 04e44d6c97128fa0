use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<Json<Value>> {
    sqlx::query("select 1").execute(&*state.db_pool).await?;
    tracing::debug!("store reachable");
    Ok(Json(json!({
        "status": "ok",
        "connections": state.db_pool.size(),
        "idle": state.db_pool.num_idle(),
    })))
}
