// Character entity
// A user's in-game avatar: level, experience and coin balances

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{CharacterId, Currency, GuildId, UserId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub user_id: UserId,
    pub guild_id: GuildId,
    pub name: String,
    pub level: i32,
    pub experience: i64,
    pub max_experience: i64,
    pub bronze_coins: i64,
    pub silver_coins: i64,
    pub gold_coins: i64,
    pub streak: i32,
    pub completed_quests: i32,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn balance(&self, currency: Currency) -> i64 {
        match currency {
            Currency::Bronze => self.bronze_coins,
            Currency::Silver => self.silver_coins,
            Currency::Gold => self.gold_coins,
        }
    }

    pub fn balance_mut(&mut self, currency: Currency) -> &mut i64 {
        match currency {
            Currency::Bronze => &mut self.bronze_coins,
            Currency::Silver => &mut self.silver_coins,
            Currency::Gold => &mut self.gold_coins,
        }
    }
}

/// Direct credit issued by a guild master.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grant {
    pub experience: i64,
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
    pub reason: Option<String>,
}

impl Grant {
    pub fn is_empty(&self) -> bool {
        self.experience == 0 && self.bronze == 0 && self.silver == 0 && self.gold == 0
    }
}
