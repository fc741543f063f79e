// Identifier value objects

use uuid::Uuid;

pub type UserId = Uuid;
pub type GuildId = Uuid;
pub type CharacterId = Uuid;
pub type QuestId = Uuid;
pub type EffectId = Uuid;
pub type RewardId = Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
