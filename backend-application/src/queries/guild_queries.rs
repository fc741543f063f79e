use chrono::{Duration, Utc};

use crate::{Actor, AppError, AppState};
use backend_domain::{GuildId, GuildSummary};

pub const ACTIVE_WINDOW_DAYS: i64 = 7;

pub async fn guild_summary(
    state: &AppState,
    actor: &Actor,
    guild_id: GuildId,
) -> Result<GuildSummary, AppError> {
    actor.require_member(guild_id)?;
    let active_since = Utc::now() - Duration::days(ACTIVE_WINDOW_DAYS);
    state
        .guilds
        .guild_summary(guild_id, active_since)
        .await?
        .ok_or_else(|| AppError::not_found("guild"))
}
