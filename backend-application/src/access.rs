// Caller identity and guild-scoped authorization checks

use backend_domain::{Character, Guild, GuildId, User, UserId};

use crate::{AppError, AppState};

/// The authenticated user behind a request.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user: User,
}

impl Actor {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }

    pub fn require_self(&self, user_id: UserId) -> Result<(), AppError> {
        if self.user.id == user_id {
            Ok(())
        } else {
            Err(AppError::forbidden("cannot act on behalf of another user"))
        }
    }

    pub fn require_member(&self, guild_id: GuildId) -> Result<(), AppError> {
        if self.user.guild_id == Some(guild_id) {
            Ok(())
        } else {
            Err(AppError::forbidden("not a member of this guild"))
        }
    }

    pub fn require_guildmaster(&self, guild: &Guild) -> Result<(), AppError> {
        if self.user.is_guildmaster() && guild.owner_id == self.user.id {
            Ok(())
        } else {
            Err(AppError::forbidden("guild master of this guild only"))
        }
    }

    /// The character's own player, or the master of its guild.
    pub fn require_character_access(
        &self,
        character: &Character,
        guild: &Guild,
    ) -> Result<(), AppError> {
        if character.user_id == self.user.id {
            return Ok(());
        }
        self.require_guildmaster(guild)
            .map_err(|_| AppError::forbidden("not your character"))
    }
}

pub async fn load_guild(state: &AppState, guild_id: GuildId) -> Result<Guild, AppError> {
    state
        .guilds
        .find_guild(guild_id)
        .await?
        .ok_or_else(|| AppError::not_found("guild"))
}

pub async fn load_character(
    state: &AppState,
    character_id: backend_domain::CharacterId,
) -> Result<Character, AppError> {
    state
        .characters
        .find_character(character_id)
        .await?
        .ok_or_else(|| AppError::not_found("character"))
}

/// Loads a guild and checks the actor masters it.
pub async fn mastered_guild(
    state: &AppState,
    actor: &Actor,
    guild_id: GuildId,
) -> Result<Guild, AppError> {
    let guild = load_guild(state, guild_id).await?;
    actor.require_guildmaster(&guild)?;
    Ok(guild)
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::Role;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(role: Role, guild_id: Option<GuildId>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Anna".to_string(),
            email: "anna@x.com".to_string(),
            password_hash: String::new(),
            role,
            guild_id,
            created_at: Utc::now(),
        }
    }

    fn guild(owner_id: UserId) -> Guild {
        Guild {
            id: Uuid::new_v4(),
            name: "Dragons".to_string(),
            code: "ABC123".to_string(),
            description: None,
            owner_id,
            member_count: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn guildmaster_check_requires_role_and_ownership() {
        let master = Actor::new(user(Role::Guildmaster, None));
        let owned = guild(master.id());
        assert!(master.require_guildmaster(&owned).is_ok());

        let other = guild(Uuid::new_v4());
        assert!(matches!(
            master.require_guildmaster(&other),
            Err(AppError::Forbidden(_))
        ));

        let mut player_user = user(Role::Player, None);
        player_user.id = owned.owner_id;
        let player = Actor::new(player_user);
        assert!(player.require_guildmaster(&owned).is_err());
    }

    #[test]
    fn membership_is_checked_against_the_users_guild() {
        let guild_id = Uuid::new_v4();
        let actor = Actor::new(user(Role::Player, Some(guild_id)));
        assert!(actor.require_member(guild_id).is_ok());
        assert!(actor.require_member(Uuid::new_v4()).is_err());

        let loner = Actor::new(user(Role::Player, None));
        assert!(loner.require_member(guild_id).is_err());
    }
}
