// User entity
// Account identity; the password hash never leaves the process

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{GuildId, Role, UserId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub guild_id: Option<GuildId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_guildmaster(&self) -> bool {
        self.role == Role::Guildmaster
    }
}

/// Validated account data ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
