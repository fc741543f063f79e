use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Achievement, ActivityLog, Approval, Character, Credit, Effect, Grant, Guild, GuildPatch,
    GuildSummary, GuildTarget, NewAccount, NewEffect, NewGuild, NewQuest, NewReward,
    NotificationCounts, Onboarding, Purchase, PurchaseOrder, Quest, Reward, TableCounts, User,
    UserPatch,
};
use crate::value_objects::{
    CharacterId, EffectId, GuildId, QuestId, QuestStatus, RewardId, UserId,
};
use crate::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    /// Applies the patch; a taken email yields `DomainError::Conflict`.
    async fn update_user(&self, id: UserId, patch: &UserPatch) -> DomainResult<User>;
}

/// Guild reads plus the onboarding transactions. Every onboarding call writes all of
/// its rows or none of them.
#[async_trait]
pub trait GuildRepository: Send + Sync {
    async fn find_guild(&self, id: GuildId) -> DomainResult<Option<Guild>>;
    async fn find_guild_by_code(&self, code: &str) -> DomainResult<Option<Guild>>;
    async fn guild_code_exists(&self, code: &str) -> DomainResult<bool>;
    async fn guild_summary(
        &self,
        id: GuildId,
        active_since: DateTime<Utc>,
    ) -> DomainResult<Option<GuildSummary>>;
    async fn update_guild(&self, id: GuildId, patch: &GuildPatch) -> DomainResult<Guild>;

    async fn create_guildmaster(
        &self,
        account: NewAccount,
        guild: NewGuild,
    ) -> DomainResult<Onboarding>;
    async fn join_guild(&self, account: NewAccount, target: GuildTarget)
        -> DomainResult<Onboarding>;
    async fn invite_user(&self, email: &str, guild_id: GuildId) -> DomainResult<Onboarding>;
}

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    async fn find_character(&self, id: CharacterId) -> DomainResult<Option<Character>>;
    async fn find_character_by_user(&self, user_id: UserId) -> DomainResult<Option<Character>>;
    /// PLAYER characters of a guild, level desc then experience desc.
    async fn list_guild_players(&self, guild_id: GuildId) -> DomainResult<Vec<Character>>;
    async fn recent_activity(
        &self,
        character_id: CharacterId,
        limit: usize,
    ) -> DomainResult<Vec<ActivityLog>>;
    async fn list_achievements(&self, character_id: CharacterId)
        -> DomainResult<Vec<Achievement>>;
    async fn grant(
        &self,
        character_id: CharacterId,
        grant: &Grant,
    ) -> DomainResult<(Character, Credit)>;
    async fn notification_counts(
        &self,
        guild_id: GuildId,
        character_id: Option<CharacterId>,
    ) -> DomainResult<NotificationCounts>;
}

/// Quest storage. Transition methods lock the quest (and, for approval, the character)
/// and apply `services::quest_lifecycle` under that lock.
#[async_trait]
pub trait QuestRepository: Send + Sync {
    /// Ordered by lifecycle rank, then newest first.
    async fn list_quests(
        &self,
        guild_id: GuildId,
        status: Option<QuestStatus>,
    ) -> DomainResult<Vec<Quest>>;
    async fn find_quest(&self, id: QuestId) -> DomainResult<Option<Quest>>;
    async fn create_quest(&self, quest: NewQuest) -> DomainResult<Quest>;
    async fn start_quest(&self, id: QuestId, character_id: CharacterId) -> DomainResult<Quest>;
    async fn complete_quest(&self, id: QuestId) -> DomainResult<Quest>;
    async fn approve_quest(&self, id: QuestId) -> DomainResult<Approval>;
    async fn expire_quest(&self, id: QuestId) -> DomainResult<Quest>;
}

#[async_trait]
pub trait EffectRepository: Send + Sync {
    async fn find_effect(&self, id: EffectId) -> DomainResult<Option<Effect>>;
    async fn list_effects(
        &self,
        character_id: CharacterId,
        active_only: bool,
    ) -> DomainResult<Vec<Effect>>;
    async fn create_effect(&self, effect: NewEffect) -> DomainResult<Effect>;
    async fn set_effect_duration(&self, id: EffectId, duration: i32) -> DomainResult<Effect>;
    /// Decrements every active effect by one; returns the number of rows touched.
    async fn decay_effects(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait RewardRepository: Send + Sync {
    async fn list_rewards(&self, guild_id: GuildId) -> DomainResult<Vec<Reward>>;
    async fn find_reward(&self, id: RewardId) -> DomainResult<Option<Reward>>;
    async fn create_reward(&self, reward: NewReward) -> DomainResult<Reward>;
    /// Debit, stock decrement, inventory grant and activity log in one transaction.
    async fn purchase_reward(&self, order: PurchaseOrder) -> DomainResult<Purchase>;
}

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn table_counts(&self) -> DomainResult<TableCounts>;
}
