use tracing::info;

use crate::access::mastered_guild;
use crate::dtos::UpdateGuildRequest;
use crate::{Actor, AppError, AppState};
use backend_domain::guild_code::{is_valid_guild_code, normalize_guild_code};
use backend_domain::{normalize_optional_text, Guild, GuildId, GuildPatch};

pub async fn update_guild(
    state: &AppState,
    actor: &Actor,
    guild_id: GuildId,
    payload: UpdateGuildRequest,
) -> Result<Guild, AppError> {
    let guild = mastered_guild(state, actor, guild_id).await?;

    let code = match normalize_optional_text(payload.code) {
        Some(raw) => {
            let code = normalize_guild_code(&raw);
            if !is_valid_guild_code(&code) {
                return Err(AppError::BadRequest(
                    "code must be 6 uppercase letters or digits".to_string(),
                ));
            }
            Some(code)
        }
        None => None,
    };
    let patch = GuildPatch {
        name: normalize_optional_text(payload.name),
        code,
        description: normalize_optional_text(payload.description),
    };
    if patch.is_empty() {
        return Ok(guild);
    }

    let guild = state.guilds.update_guild(guild_id, &patch).await?;
    info!(guild_id = %guild_id, "guild updated");
    Ok(guild)
}
