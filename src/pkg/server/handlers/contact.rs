use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    pkg::{
        internal::email::contact::ContactMessage,
        server::{extract::ValidatedJson, state::AppState},
    },
    prelude::{Error, Result},
};

pub async fn send(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ContactMessage>,
) -> Result<Json<Value>> {
    let mailer = state.mailer.as_deref().ok_or(Error::MailUnavailable)?;
    input.send(mailer).await?;
    tracing::info!("contact message from {} relayed", &input.email);
    Ok(Json(json!({
        "success": true,
        "message": "Email sent successfully"
    })))
}
