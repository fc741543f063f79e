use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_domain::StorageKind;
use backend_infrastructure::{AppConfig, Argon2PasswordHasher, MemoryStore, PostgresStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    /// Opens the configured store (running migrations for PostgreSQL) and wires the ports.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let passwords = Arc::new(Argon2PasswordHasher::new());

        let state = match config.storage_kind()? {
            StorageKind::Postgres => {
                let db_config = config.to_db_config()?;
                let store = Arc::new(PostgresStore::connect(&db_config).await?);
                AppState::new(runtime_config, store, passwords)
            }
            StorageKind::Memory => {
                info!("using in-memory storage; data is lost on exit");
                AppState::new(runtime_config, Arc::new(MemoryStore::new()), passwords)
            }
        };

        Ok(Self { state })
    }
}
