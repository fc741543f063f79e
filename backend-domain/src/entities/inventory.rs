// Inventory and achievement entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::{CharacterId, RewardId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub character_id: CharacterId,
    pub reward_id: Option<RewardId>,
    pub name: String,
    pub category: String,
    pub is_used: bool,
    pub acquired_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub character_id: CharacterId,
    pub key: String,
    pub title: String,
    pub unlocked_at: DateTime<Utc>,
}
