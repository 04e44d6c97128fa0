use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    pkg::{internal::auth::ADMIN_HEADER, server::state::AppState},
    prelude::{Error, Result},
};

pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let presented = request
        .headers()
        .get(ADMIN_HEADER)
        .and_then(|v| v.to_str().ok());
    if !state.authenticator.verify(presented) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "admin authentication denied"
        );
        return Err(Error::Unauthorized);
    }
    Ok(next.run(request).await)
}
