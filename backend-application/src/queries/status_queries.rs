use std::time::Duration;

use tokio::time::timeout;
use tracing::error;

use crate::dtos::DatabaseStatus;
use crate::AppState;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Row counts per table; a failed or slow store is reported, never raised.
pub async fn database_status(state: &AppState) -> DatabaseStatus {
    match timeout(STATUS_TIMEOUT, state.status.table_counts()).await {
        Ok(Ok(counts)) => DatabaseStatus {
            connected: true,
            counts: Some(counts),
            error: None,
        },
        Ok(Err(err)) => {
            error!("database status check failed: {:#}", err);
            DatabaseStatus {
                connected: false,
                counts: None,
                error: Some(format!("{:#}", err)),
            }
        }
        Err(_) => {
            error!("database status check timed out");
            DatabaseStatus {
                connected: false,
                counts: None,
                error: Some(format!(
                    "database did not respond within {}s",
                    STATUS_TIMEOUT.as_secs()
                )),
            }
        }
    }
}
