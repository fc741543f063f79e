// Reward entity
// Shop item; `stock == None` means unlimited

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Currency, GuildId, RewardId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
}

impl Price {
    pub fn amount(&self, currency: Currency) -> i64 {
        match currency {
            Currency::Bronze => self.bronze,
            Currency::Silver => self.silver,
            Currency::Gold => self.gold,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: RewardId,
    pub guild_id: GuildId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub stock: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReward {
    pub guild_id: GuildId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: Price,
    pub stock: Option<i32>,
    pub is_active: bool,
}
