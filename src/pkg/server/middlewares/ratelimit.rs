use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    pkg::server::state::AppState,
    prelude::{Error, Result},
};

fn client_key(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into())
}

pub async fn limit_contact(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let key = client_key(&request, state.trust_proxy);
    if let Err(retry_after) = state.contact_limiter.check(&key).await {
        tracing::warn!(client = %key, "contact rate limit exceeded");
        return Err(Error::RateLimited { retry_after });
    }
    Ok(next.run(request).await)
}
