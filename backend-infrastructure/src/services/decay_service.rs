use chrono::Utc;
use tracing::{error, info};

use backend_application::commands::effect_commands::decay_effects;
use backend_application::AppState;

use crate::utils::next_daily_run;

/// Runs the effect decay sweep once a day at the configured UTC time.
pub async fn schedule_effect_decay(state: AppState) {
    loop {
        let next = next_daily_run(
            Utc::now(),
            state.config.effect_decay_hour,
            state.config.effect_decay_minute,
        );
        info!(next = %next, "next effect decay sweep scheduled");
        let wait = next.signed_duration_since(Utc::now());
        let sleep_ms = wait.num_milliseconds().max(0) as u64;
        tokio::time::sleep(std::time::Duration::from_millis(sleep_ms)).await;

        if let Err(err) = decay_effects(&state).await {
            error!("effect decay sweep failed: {}", err);
        }
    }
}
