use std::{sync::Arc, time::Duration};

use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions};

use crate::{
    conf::settings,
    pkg::internal::{
        auth::{Authenticator, SharedSecret},
        email::Mailer,
        ratelimit::RateLimiter,
    },
    prelude::Result,
};

pub fn db_pool() -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

pub trait GetTxn {
    fn begin_txn(&self) -> impl Future<Output = Result<Transaction<'static, Postgres>>> + Send;
}

impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub authenticator: Arc<dyn Authenticator>,
    pub contact_limiter: Arc<RateLimiter>,
    /// Honour `X-Forwarded-For` when keying the contact limiter.
    pub trust_proxy: bool,
    pub mailer: Option<Arc<Mailer>>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let mailer = match settings.smtp() {
            Some(smtp) => Some(Mailer::new(&smtp)?),
            None => {
                tracing::warn!("smtp not configured, contact relay disabled");
                None
            }
        };
        Ok(AppState::from_parts(
            db_pool()?,
            Arc::new(SharedSecret::new(&settings.admin_password)),
            RateLimiter::new(
                settings.contact_rate_limit_max,
                Duration::from_secs(settings.contact_rate_limit_window_secs),
            ),
            settings.trust_proxy,
            mailer,
        ))
    }

    pub fn from_parts(
        db_pool: PgPool,
        authenticator: Arc<dyn Authenticator>,
        contact_limiter: RateLimiter,
        trust_proxy: bool,
        mailer: Option<Mailer>,
    ) -> AppState {
        AppState {
            db_pool: Arc::new(db_pool),
            authenticator,
            contact_limiter: Arc::new(contact_limiter),
            trust_proxy,
            mailer: mailer.map(Arc::new),
        }
    }
}
