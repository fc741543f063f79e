// Quest entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CharacterId, GuildId, QuestId, QuestStatus, UserId};

pub const DEFAULT_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestRewards {
    #[serde(alias = "exp")]
    pub experience: i64,
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedCharacter {
    pub id: CharacterId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: QuestId,
    pub guild_id: GuildId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub quest_type: String,
    pub difficulty: i32,
    pub status: QuestStatus,
    pub rewards: QuestRewards,
    pub assigned_character_id: Option<CharacterId>,
    pub assigned_character: Option<AssignedCharacter>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewQuest {
    pub guild_id: GuildId,
    pub title: String,
    pub description: String,
    pub quest_type: String,
    pub difficulty: i32,
    pub rewards: QuestRewards,
    pub created_by: Option<UserId>,
}
