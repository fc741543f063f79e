// Guild entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{GuildId, UserId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub owner_id: UserId,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGuild {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GuildPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

impl GuildPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none() && self.description.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSummary {
    #[serde(flatten)]
    pub guild: Guild,
    pub active_players: i64,
    pub quest_count: i64,
}

/// How an onboarding flow locates the guild to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuildTarget {
    Code(String),
    Id(GuildId),
}
