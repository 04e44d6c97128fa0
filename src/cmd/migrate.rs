use sqlx::migrate::Migrator;

use crate::{
    prelude::Result,
    pkg::server::state::{GetTxn, db_pool},
};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let pool = db_pool()?;
    tracing::debug!("connecting to db");
    let mut tx = pool.begin_txn().await?;
    MIGRATOR.run(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!("migrations applied successfully");
    Ok(())
}
