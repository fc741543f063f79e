use serde::Serialize;

use crate::entities::{
    Achievement, ActivityLog, Character, Effect, Guild, InventoryItem, Quest, Reward, User,
};
use crate::value_objects::{CharacterId, Currency, RewardId};

/// Result of any onboarding flow: the three rows created or linked together.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    pub user: User,
    pub guild: Guild,
    pub character: Character,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub character: Character,
    pub active_effects: Vec<Effect>,
    pub recent_activity: Vec<ActivityLog>,
    pub achievements: Vec<Achievement>,
}

/// Amounts actually credited to a character after effect modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    pub experience: i64,
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
    pub levels_gained: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub quest: Quest,
    pub character: Character,
    pub credited: Credit,
    pub unlocked: Vec<Achievement>,
}

#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    pub reward_id: RewardId,
    pub character_id: CharacterId,
    pub currency: Currency,
    pub cost: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub character: Character,
    pub reward: Reward,
    pub item: InventoryItem,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NotificationCounts {
    pub quests: i64,
    pub inventory: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCounts {
    pub users: i64,
    pub guilds: i64,
    pub characters: i64,
    pub quests: i64,
    pub effects: i64,
    pub rewards: i64,
    pub inventory_items: i64,
    pub achievements: i64,
    pub activity_logs: i64,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub session_secret: String,
    pub session_ttl_hours: u64,
    pub guild_code_max_attempts: u32,
    pub effect_decay_enabled: bool,
    pub effect_decay_hour: u32,
    pub effect_decay_minute: u32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub storage: StorageKind,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}
