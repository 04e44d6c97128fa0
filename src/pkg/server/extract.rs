use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::prelude::{Error, Result};

/// JSON body that has passed its `Validate` rules. Both malformed JSON and
/// rule violations are rejected with 400.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| Error::MalformedPayload(e.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
