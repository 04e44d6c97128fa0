use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("validation error")]
    Validation(#[from] ValidationErrors),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Too many contact form submissions, please try again later.")]
    RateLimited { retry_after: u64 },
    #[error("Email service is temporarily unavailable")]
    MailUnavailable,
    #[error("mail delivery failed: {0}")]
    Mail(String),
    #[error("improperly configured: {0}")]
    Misconfigured(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedPayload(_) => "ERR-VAL-000",
            Error::Validation(_) => "ERR-VAL-001",
            Error::Unauthorized => "ERR-AUTH-001",
            Error::NotFound(_) => "ERR-NOTFOUND-001",
            Error::RateLimited { .. } => "ERR-RATE-001",
            Error::MailUnavailable => "ERR-MAIL-001",
            Error::Mail(_) => "ERR-MAIL-002",
            Error::Misconfigured(_) => "ERR-CONF-001",
            Error::Database(_) | Error::Migrate(_) => "ERR-DB-000",
            Error::Template(_) | Error::Io(_) | Error::Join(_) => "ERR-SYS-000",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::MalformedPayload(_) | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Error::MailUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let body = match &self {
            Error::Validation(errors) => json!({
                "success": false,
                "code": code,
                "message": "Validation error",
                "errors": errors,
            }),
            Error::MalformedPayload(detail) => json!({
                "success": false,
                "code": code,
                "message": "Validation error",
                "errors": detail,
            }),
            _ if status.is_server_error() && !matches!(self, Error::MailUnavailable) => {
                tracing::error!(code, "request failed: {}", &self);
                json!({
                    "success": false,
                    "code": code,
                    "message": "Internal server error",
                })
            }
            _ => json!({
                "success": false,
                "code": code,
                "message": self.to_string(),
            }),
        };
        let mut response = (status, Json(body)).into_response();
        if let Error::RateLimited { retry_after } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(RETRY_AFTER, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, message = "Field cannot be empty"))]
        name: String,
    }

    async fn body_of(err: Error) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_carry_field_detail() {
        let errors = Named { name: String::new() }.validate().unwrap_err();
        let (status, body) = body_of(Error::from(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "ERR-VAL-001");
        assert!(body["errors"].get("name").is_some());
    }

    #[tokio::test]
    async fn store_errors_do_not_leak_detail() {
        let (status, body) = body_of(Error::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["code"], "ERR-DB-000");
    }

    #[tokio::test]
    async fn rate_limited_sets_retry_after() {
        let response = Error::RateLimited { retry_after: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[RETRY_AFTER], "42");
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(Error::NotFound("skill").status(), StatusCode::NOT_FOUND);
        assert_eq!(Error::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::MailUnavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
