use tracing::info;

use crate::commands::input::valid_email;
use crate::dtos::UpdateUserRequest;
use crate::{Actor, AppError, AppState};
use backend_domain::{normalize_optional_text, User, UserId, UserPatch};

pub async fn update_user(
    state: &AppState,
    actor: &Actor,
    user_id: UserId,
    payload: UpdateUserRequest,
) -> Result<User, AppError> {
    actor.require_self(user_id)?;

    let email = match normalize_optional_text(payload.email) {
        Some(raw) => Some(valid_email(&raw)?),
        None => None,
    };
    let patch = UserPatch {
        name: normalize_optional_text(payload.name),
        email,
    };
    if patch.is_empty() {
        return Ok(actor.user.clone());
    }

    let user = state.users.update_user(user_id, &patch).await?;
    info!(user_id = %user_id, "user updated");
    Ok(user)
}
