//! In-process store for development and tests.
//!
//! All tables sit behind one mutex. A write clones the tables, applies the change to
//! the copy and swaps it in only when every step succeeded, so a failed write leaves
//! no trace. `fail_next_commit` makes the next write fail at that final step.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::warn;

use backend_domain::effects::{decayed, set_duration};
use backend_domain::ports::{
    CharacterRepository, EffectRepository, GuildRepository, QuestRepository, RewardRepository,
    StatusRepository, UserRepository,
};
use backend_domain::progression::{
    credit_grant, credit_quest, milestones_reached, starting_character,
};
use backend_domain::{
    new_id, quest_lifecycle, shop, Achievement, ActivityLog, Approval, Character, CharacterId,
    Credit, DomainError, DomainResult, Effect, EffectId, EffectModifiers, Grant, Guild, GuildId,
    GuildPatch, GuildSummary, GuildTarget, InventoryItem, NewAccount, NewActivity, NewEffect,
    NewGuild, NewQuest, NewReward, NotificationCounts, Onboarding, Purchase, PurchaseOrder, Quest,
    QuestId, QuestStatus, Reward, RewardId, Role, TableCounts, User, UserId, UserPatch,
};

use super::journal;

#[derive(Debug, Clone, Default)]
struct Tables {
    users: Vec<User>,
    guilds: Vec<Guild>,
    characters: Vec<Character>,
    quests: Vec<Quest>,
    effects: Vec<Effect>,
    rewards: Vec<Reward>,
    inventory: Vec<InventoryItem>,
    achievements: Vec<Achievement>,
    activity: Vec<ActivityLog>,
}

impl Tables {
    fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    fn ensure_email_free(&self, email: &str, except: Option<UserId>) -> DomainResult<()> {
        match self.user_by_email(email) {
            Some(user) if Some(user.id) != except => {
                Err(DomainError::Conflict("email is already registered".to_string()))
            }
            _ => Ok(()),
        }
    }

    fn insert_user(
        &mut self,
        account: &NewAccount,
        guild_id: Option<GuildId>,
        now: DateTime<Utc>,
    ) -> DomainResult<User> {
        self.ensure_email_free(&account.email, None)?;
        let user = User {
            id: new_id(),
            name: account.name.clone(),
            email: account.email.clone(),
            password_hash: account.password_hash.clone(),
            role: account.role,
            guild_id,
            created_at: now,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    fn guild_mut(&mut self, target: &GuildTarget) -> DomainResult<&mut Guild> {
        self.guilds
            .iter_mut()
            .find(|guild| match target {
                GuildTarget::Code(code) => &guild.code == code,
                GuildTarget::Id(id) => &guild.id == id,
            })
            .ok_or_else(|| DomainError::not_found("guild"))
    }

    fn character_mut(&mut self, id: CharacterId) -> DomainResult<&mut Character> {
        self.characters
            .iter_mut()
            .find(|character| character.id == id)
            .ok_or_else(|| DomainError::not_found("character"))
    }

    fn quest_mut(&mut self, id: QuestId) -> DomainResult<&mut Quest> {
        self.quests
            .iter_mut()
            .find(|quest| quest.id == id)
            .ok_or_else(|| DomainError::not_found("quest"))
    }

    fn log(&mut self, entry: NewActivity, now: DateTime<Utc>) {
        self.activity.push(ActivityLog {
            id: new_id(),
            guild_id: entry.guild_id,
            character_id: entry.character_id,
            activity_type: entry.activity_type,
            title: entry.title,
            description: entry.description,
            created_at: now,
        });
    }

    fn log_all(&mut self, entries: Vec<NewActivity>, now: DateTime<Utc>) {
        for entry in entries {
            self.log(entry, now);
        }
    }

    /// Keeps only the achievements the character does not hold yet.
    fn unlock(&mut self, candidates: Vec<Achievement>) -> Vec<Achievement> {
        let mut unlocked = Vec::new();
        for achievement in candidates {
            let held = self.achievements.iter().any(|existing| {
                existing.character_id == achievement.character_id && existing.key == achievement.key
            });
            if !held {
                self.achievements.push(achievement.clone());
                unlocked.push(achievement);
            }
        }
        unlocked
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_next_commit: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next write runs fully and is then discarded with a store error.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    async fn write<T, F>(&self, apply: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Tables, DateTime<Utc>) -> DomainResult<T> + Send,
        T: Send,
    {
        let mut tables = self.tables.lock().await;
        let mut staged = tables.clone();
        let value = apply(&mut staged, Utc::now())?;
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            warn!("memory store: injected commit failure");
            return Err(DomainError::Store(anyhow!("commit failed")));
        }
        *tables = staged;
        Ok(value)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.user_by_email(email).cloned())
    }

    async fn update_user(&self, id: UserId, patch: &UserPatch) -> DomainResult<User> {
        let patch = patch.clone();
        self.write(move |tables, _| {
            if let Some(email) = &patch.email {
                tables.ensure_email_free(email, Some(id))?;
            }
            let user = tables
                .users
                .iter_mut()
                .find(|user| user.id == id)
                .ok_or_else(|| DomainError::not_found("user"))?;
            if let Some(name) = patch.name {
                user.name = name;
            }
            if let Some(email) = patch.email {
                user.email = email;
            }
            Ok(user.clone())
        })
        .await
    }
}

#[async_trait]
impl GuildRepository for MemoryStore {
    async fn find_guild(&self, id: GuildId) -> DomainResult<Option<Guild>> {
        let tables = self.tables.lock().await;
        Ok(tables.guilds.iter().find(|guild| guild.id == id).cloned())
    }

    async fn find_guild_by_code(&self, code: &str) -> DomainResult<Option<Guild>> {
        let tables = self.tables.lock().await;
        Ok(tables.guilds.iter().find(|guild| guild.code == code).cloned())
    }

    async fn guild_code_exists(&self, code: &str) -> DomainResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables.guilds.iter().any(|guild| guild.code == code))
    }

    async fn guild_summary(
        &self,
        id: GuildId,
        active_since: DateTime<Utc>,
    ) -> DomainResult<Option<GuildSummary>> {
        let tables = self.tables.lock().await;
        let Some(guild) = tables.guilds.iter().find(|guild| guild.id == id).cloned() else {
            return Ok(None);
        };
        let mut active = tables
            .activity
            .iter()
            .filter(|entry| entry.guild_id == id && entry.created_at >= active_since)
            .filter_map(|entry| entry.character_id)
            .collect::<Vec<_>>();
        active.sort();
        active.dedup();
        let quest_count = tables.quests.iter().filter(|quest| quest.guild_id == id).count();
        Ok(Some(GuildSummary {
            guild,
            active_players: active.len() as i64,
            quest_count: quest_count as i64,
        }))
    }

    async fn update_guild(&self, id: GuildId, patch: &GuildPatch) -> DomainResult<Guild> {
        let patch = patch.clone();
        self.write(move |tables, _| {
            if let Some(code) = &patch.code {
                let taken = tables
                    .guilds
                    .iter()
                    .any(|guild| &guild.code == code && guild.id != id);
                if taken {
                    return Err(DomainError::Conflict("guild code is already taken".to_string()));
                }
            }
            let guild = tables.guild_mut(&GuildTarget::Id(id))?;
            if let Some(name) = patch.name {
                guild.name = name;
            }
            if let Some(code) = patch.code {
                guild.code = code;
            }
            if let Some(description) = patch.description {
                guild.description = Some(description);
            }
            Ok(guild.clone())
        })
        .await
    }

    async fn create_guildmaster(
        &self,
        account: NewAccount,
        guild: NewGuild,
    ) -> DomainResult<Onboarding> {
        self.write(move |tables, now| {
            if tables.guilds.iter().any(|existing| existing.code == guild.code) {
                return Err(DomainError::Conflict("guild code is already taken".to_string()));
            }
            let mut user = tables.insert_user(&account, None, now)?;
            let guild = Guild {
                id: new_id(),
                name: guild.name,
                code: guild.code,
                description: guild.description,
                owner_id: user.id,
                member_count: 1,
                created_at: now,
            };
            tables.guilds.push(guild.clone());
            user.guild_id = Some(guild.id);
            if let Some(stored) = tables.users.iter_mut().find(|stored| stored.id == user.id) {
                stored.guild_id = Some(guild.id);
            }
            let character = starting_character(user.id, guild.id, &user.name, now);
            tables.characters.push(character.clone());
            tables.log(journal::guild_created(&guild, &user, &character), now);
            Ok(Onboarding {
                user,
                guild,
                character,
            })
        })
        .await
    }

    async fn join_guild(
        &self,
        account: NewAccount,
        target: GuildTarget,
    ) -> DomainResult<Onboarding> {
        self.write(move |tables, now| {
            tables.ensure_email_free(&account.email, None)?;
            let guild_id = tables.guild_mut(&target)?.id;
            let user = tables.insert_user(&account, Some(guild_id), now)?;
            let character = starting_character(user.id, guild_id, &user.name, now);
            tables.characters.push(character.clone());
            let guild = {
                let guild = tables.guild_mut(&GuildTarget::Id(guild_id))?;
                guild.member_count += 1;
                guild.clone()
            };
            tables.log(journal::member_joined(&guild, &user, &character), now);
            Ok(Onboarding {
                user,
                guild,
                character,
            })
        })
        .await
    }

    async fn invite_user(&self, email: &str, guild_id: GuildId) -> DomainResult<Onboarding> {
        let email = email.to_string();
        self.write(move |tables, now| {
            let user = tables
                .users
                .iter_mut()
                .find(|user| user.email == email)
                .ok_or_else(|| DomainError::not_found("user"))?;
            if user.guild_id.is_some() {
                return Err(DomainError::Validation(
                    "user already belongs to a guild".to_string(),
                ));
            }
            user.guild_id = Some(guild_id);
            let user = user.clone();

            let guild = {
                let guild = tables.guild_mut(&GuildTarget::Id(guild_id))?;
                guild.member_count += 1;
                guild.clone()
            };
            let character = match tables
                .characters
                .iter_mut()
                .find(|character| character.user_id == user.id)
            {
                Some(character) => {
                    character.guild_id = guild_id;
                    character.updated_at = now;
                    character.clone()
                }
                None => {
                    let character = starting_character(user.id, guild_id, &user.name, now);
                    tables.characters.push(character.clone());
                    character
                }
            };
            tables.log(journal::member_joined(&guild, &user, &character), now);
            Ok(Onboarding {
                user,
                guild,
                character,
            })
        })
        .await
    }
}

#[async_trait]
impl CharacterRepository for MemoryStore {
    async fn find_character(&self, id: CharacterId) -> DomainResult<Option<Character>> {
        let tables = self.tables.lock().await;
        Ok(tables.characters.iter().find(|character| character.id == id).cloned())
    }

    async fn find_character_by_user(&self, user_id: UserId) -> DomainResult<Option<Character>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .characters
            .iter()
            .find(|character| character.user_id == user_id)
            .cloned())
    }

    async fn list_guild_players(&self, guild_id: GuildId) -> DomainResult<Vec<Character>> {
        let tables = self.tables.lock().await;
        let mut players = tables
            .characters
            .iter()
            .filter(|character| character.guild_id == guild_id)
            .filter(|character| {
                tables
                    .users
                    .iter()
                    .any(|user| user.id == character.user_id && user.role == Role::Player)
            })
            .cloned()
            .collect::<Vec<_>>();
        players.sort_by_key(|character| (Reverse(character.level), Reverse(character.experience)));
        Ok(players)
    }

    async fn recent_activity(
        &self,
        character_id: CharacterId,
        limit: usize,
    ) -> DomainResult<Vec<ActivityLog>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .activity
            .iter()
            .rev()
            .filter(|entry| entry.character_id == Some(character_id))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_achievements(
        &self,
        character_id: CharacterId,
    ) -> DomainResult<Vec<Achievement>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .achievements
            .iter()
            .filter(|achievement| achievement.character_id == character_id)
            .cloned()
            .collect())
    }

    async fn grant(
        &self,
        character_id: CharacterId,
        grant: &Grant,
    ) -> DomainResult<(Character, Credit)> {
        let grant = grant.clone();
        self.write(move |tables, now| {
            let character = tables.character_mut(character_id)?;
            let old_level = character.level;
            let credit = credit_grant(character, &grant, now)?;
            let character = character.clone();
            let candidates = milestones_reached(character.id, old_level, character.level, now);
            let unlocked = tables.unlock(candidates);
            tables.log_all(
                journal::reward_granted(&character, &credit, grant.reason.as_deref(), &unlocked),
                now,
            );
            Ok((character, credit))
        })
        .await
    }

    async fn notification_counts(
        &self,
        guild_id: GuildId,
        character_id: Option<CharacterId>,
    ) -> DomainResult<NotificationCounts> {
        let tables = self.tables.lock().await;
        let quests = tables
            .quests
            .iter()
            .filter(|quest| quest.guild_id == guild_id)
            .filter(|quest| match quest.status {
                QuestStatus::Available => true,
                QuestStatus::InProgress => {
                    character_id.is_some() && quest.assigned_character_id == character_id
                }
                _ => false,
            })
            .count();
        let inventory = match character_id {
            Some(character_id) => tables
                .inventory
                .iter()
                .filter(|item| item.character_id == character_id && !item.is_used)
                .count(),
            None => 0,
        };
        Ok(NotificationCounts {
            quests: quests as i64,
            inventory: inventory as i64,
        })
    }
}

#[async_trait]
impl QuestRepository for MemoryStore {
    async fn list_quests(
        &self,
        guild_id: GuildId,
        status: Option<QuestStatus>,
    ) -> DomainResult<Vec<Quest>> {
        let tables = self.tables.lock().await;
        let mut quests = tables
            .quests
            .iter()
            .rev()
            .filter(|quest| quest.guild_id == guild_id)
            .filter(|quest| status.map_or(true, |status| quest.status == status))
            .cloned()
            .collect::<Vec<_>>();
        quests.sort_by_key(|quest| (quest.status.rank(), Reverse(quest.created_at)));
        Ok(quests)
    }

    async fn find_quest(&self, id: QuestId) -> DomainResult<Option<Quest>> {
        let tables = self.tables.lock().await;
        Ok(tables.quests.iter().find(|quest| quest.id == id).cloned())
    }

    async fn create_quest(&self, quest: NewQuest) -> DomainResult<Quest> {
        self.write(move |tables, now| {
            if !tables.guilds.iter().any(|guild| guild.id == quest.guild_id) {
                return Err(DomainError::not_found("guild"));
            }
            let quest = Quest {
                id: new_id(),
                guild_id: quest.guild_id,
                title: quest.title,
                description: quest.description,
                quest_type: quest.quest_type,
                difficulty: quest.difficulty,
                status: QuestStatus::Available,
                rewards: quest.rewards,
                assigned_character_id: None,
                assigned_character: None,
                created_by: quest.created_by,
                created_at: now,
                updated_at: now,
            };
            tables.quests.push(quest.clone());
            tables.log(journal::quest_created(&quest), now);
            Ok(quest)
        })
        .await
    }

    async fn start_quest(&self, id: QuestId, character_id: CharacterId) -> DomainResult<Quest> {
        self.write(move |tables, now| {
            let character = tables.character_mut(character_id)?.clone();
            let quest = tables.quest_mut(id)?;
            quest_lifecycle::start(quest, &character, now)?;
            let quest = quest.clone();
            tables.log(journal::quest_started(&quest, &character), now);
            Ok(quest)
        })
        .await
    }

    async fn complete_quest(&self, id: QuestId) -> DomainResult<Quest> {
        self.write(move |tables, now| {
            let quest = tables.quest_mut(id)?;
            quest_lifecycle::complete(quest, now)?;
            let quest = quest.clone();
            tables.log(journal::quest_completed(&quest), now);
            Ok(quest)
        })
        .await
    }

    async fn approve_quest(&self, id: QuestId) -> DomainResult<Approval> {
        self.write(move |tables, now| {
            let quest = tables.quest_mut(id)?;
            let character_id = quest_lifecycle::approve(quest, now)?;
            let quest = quest.clone();

            let modifiers = EffectModifiers::from_effects(
                tables
                    .effects
                    .iter()
                    .filter(|effect| effect.character_id == character_id),
            );
            let character = tables.character_mut(character_id)?;
            let old_level = character.level;
            let credited = credit_quest(character, &quest.rewards, &modifiers, now)?;
            let character = character.clone();

            let candidates = milestones_reached(character.id, old_level, character.level, now);
            let unlocked = tables.unlock(candidates);
            tables.log_all(
                journal::quest_approved(&quest, &character, &credited, &unlocked),
                now,
            );
            Ok(Approval {
                quest,
                character,
                credited,
                unlocked,
            })
        })
        .await
    }

    async fn expire_quest(&self, id: QuestId) -> DomainResult<Quest> {
        self.write(move |tables, now| {
            let quest = tables.quest_mut(id)?;
            let assigned = quest_lifecycle::expire(quest, now)?;
            let quest = quest.clone();
            if let Some(character_id) = assigned {
                let character = tables.character_mut(character_id)?;
                character.streak = 0;
                character.updated_at = now;
            }
            tables.log(journal::quest_expired(&quest), now);
            Ok(quest)
        })
        .await
    }
}

#[async_trait]
impl EffectRepository for MemoryStore {
    async fn find_effect(&self, id: EffectId) -> DomainResult<Option<Effect>> {
        let tables = self.tables.lock().await;
        Ok(tables.effects.iter().find(|effect| effect.id == id).cloned())
    }

    async fn list_effects(
        &self,
        character_id: CharacterId,
        active_only: bool,
    ) -> DomainResult<Vec<Effect>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .effects
            .iter()
            .rev()
            .filter(|effect| effect.character_id == character_id)
            .filter(|effect| !active_only || effect.is_active())
            .cloned()
            .collect())
    }

    async fn create_effect(&self, effect: NewEffect) -> DomainResult<Effect> {
        self.write(move |tables, now| {
            let character = tables.character_mut(effect.character_id)?.clone();
            let effect = Effect {
                id: new_id(),
                character_id: character.id,
                name: effect.name,
                effect_type: effect.effect_type,
                duration: effect.duration,
                max_duration: effect.duration,
                multipliers: effect.multipliers,
                restrictions: effect.restrictions,
                bonuses: effect.bonuses,
                created_at: now,
            };
            tables.effects.push(effect.clone());
            tables.log(journal::effect_applied(&character, &effect), now);
            Ok(effect)
        })
        .await
    }

    async fn set_effect_duration(&self, id: EffectId, duration: i32) -> DomainResult<Effect> {
        self.write(move |tables, now| {
            let effect = tables
                .effects
                .iter_mut()
                .find(|effect| effect.id == id)
                .ok_or_else(|| DomainError::not_found("effect"))?;
            set_duration(effect, duration);
            let effect = effect.clone();
            let character = tables.character_mut(effect.character_id)?.clone();
            tables.log(journal::effect_updated(&character, &effect), now);
            Ok(effect)
        })
        .await
    }

    async fn decay_effects(&self) -> DomainResult<u64> {
        self.write(|tables, _| {
            let mut touched = 0;
            for effect in tables.effects.iter_mut().filter(|effect| effect.is_active()) {
                effect.duration = decayed(effect.duration);
                touched += 1;
            }
            Ok(touched)
        })
        .await
    }
}

#[async_trait]
impl RewardRepository for MemoryStore {
    async fn list_rewards(&self, guild_id: GuildId) -> DomainResult<Vec<Reward>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .rewards
            .iter()
            .rev()
            .filter(|reward| reward.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn find_reward(&self, id: RewardId) -> DomainResult<Option<Reward>> {
        let tables = self.tables.lock().await;
        Ok(tables.rewards.iter().find(|reward| reward.id == id).cloned())
    }

    async fn create_reward(&self, reward: NewReward) -> DomainResult<Reward> {
        self.write(move |tables, now| {
            let reward = Reward {
                id: new_id(),
                guild_id: reward.guild_id,
                name: reward.name,
                description: reward.description,
                category: reward.category,
                price: reward.price,
                stock: reward.stock,
                is_active: reward.is_active,
                created_at: now,
            };
            tables.rewards.push(reward.clone());
            Ok(reward)
        })
        .await
    }

    async fn purchase_reward(&self, order: PurchaseOrder) -> DomainResult<Purchase> {
        self.write(move |tables, now| {
            let mut character = tables.character_mut(order.character_id)?.clone();
            let mut reward = tables
                .rewards
                .iter()
                .find(|reward| reward.id == order.reward_id)
                .cloned()
                .ok_or_else(|| DomainError::not_found("reward"))?;

            let paid =
                shop::purchase(&mut character, &mut reward, order.currency, order.cost, now)?;
            *tables.character_mut(character.id)? = character.clone();
            if let Some(stored) = tables.rewards.iter_mut().find(|stored| stored.id == reward.id) {
                *stored = reward.clone();
            }

            let item = InventoryItem {
                id: new_id(),
                character_id: character.id,
                reward_id: Some(reward.id),
                name: reward.name.clone(),
                category: reward.category.clone(),
                is_used: false,
                acquired_at: now,
            };
            tables.inventory.push(item.clone());
            tables.log(
                journal::reward_purchased(&character, &reward, paid, order.currency),
                now,
            );
            Ok(Purchase {
                character,
                reward,
                item,
            })
        })
        .await
    }
}

#[async_trait]
impl StatusRepository for MemoryStore {
    async fn table_counts(&self) -> DomainResult<TableCounts> {
        let tables = self.tables.lock().await;
        Ok(TableCounts {
            users: tables.users.len() as i64,
            guilds: tables.guilds.len() as i64,
            characters: tables.characters.len() as i64,
            quests: tables.quests.len() as i64,
            effects: tables.effects.len() as i64,
            rewards: tables.rewards.len() as i64,
            inventory_items: tables.inventory.len() as i64,
            achievements: tables.achievements.len() as i64,
            activity_logs: tables.activity.len() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::QuestRewards;

    fn account(email: &str, role: Role) -> NewAccount {
        NewAccount {
            name: "Anna".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role,
        }
    }

    fn new_guild(code: &str) -> NewGuild {
        NewGuild {
            name: "Dragons".to_string(),
            code: code.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn failed_commit_leaves_tables_untouched() {
        let store = MemoryStore::new();
        store.fail_next_commit();
        let err = store
            .create_guildmaster(account("anna@x.com", Role::Guildmaster), new_guild("ABC123"))
            .await
            .expect_err("injected failure");
        assert!(matches!(err, DomainError::Store(_)));

        let counts = store.table_counts().await.expect("counts");
        assert_eq!(counts, TableCounts::default());

        store
            .create_guildmaster(account("anna@x.com", Role::Guildmaster), new_guild("ABC123"))
            .await
            .expect("second attempt commits");
        let counts = store.table_counts().await.expect("counts");
        assert_eq!((counts.users, counts.guilds, counts.characters), (1, 1, 1));
    }

    #[tokio::test]
    async fn quests_list_available_first_then_newest() {
        let store = MemoryStore::new();
        let onboarding = store
            .create_guildmaster(account("anna@x.com", Role::Guildmaster), new_guild("ABC123"))
            .await
            .expect("guild");
        let guild_id = onboarding.guild.id;
        let player = store
            .join_guild(account("leo@x.com", Role::Player), GuildTarget::Id(guild_id))
            .await
            .expect("player");

        let mut ids = Vec::new();
        for title in ["first", "second", "third"] {
            let quest = store
                .create_quest(NewQuest {
                    guild_id,
                    title: title.to_string(),
                    description: "chore".to_string(),
                    quest_type: "daily".to_string(),
                    difficulty: 1,
                    rewards: QuestRewards::default(),
                    created_by: Some(onboarding.user.id),
                })
                .await
                .expect("quest");
            ids.push(quest.id);
        }
        store
            .start_quest(ids[2], player.character.id)
            .await
            .expect("start newest");

        let listed = store.list_quests(guild_id, None).await.expect("list");
        let titles = listed.iter().map(|q| q.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["second", "first", "third"]);
        assert_eq!(
            listed[2].assigned_character.as_ref().map(|c| c.id),
            Some(player.character.id)
        );

        let in_progress = store
            .list_quests(guild_id, Some(QuestStatus::InProgress))
            .await
            .expect("filtered");
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].status, QuestStatus::InProgress);
    }

    #[tokio::test]
    async fn decay_stops_at_zero_and_keeps_rows() {
        let store = MemoryStore::new();
        let onboarding = store
            .create_guildmaster(account("anna@x.com", Role::Guildmaster), new_guild("ABC123"))
            .await
            .expect("guild");
        let effect = store
            .create_effect(NewEffect {
                character_id: onboarding.character.id,
                name: "Sniffles".to_string(),
                effect_type: backend_domain::EffectType::Disease,
                duration: 1,
                multipliers: serde_json::json!({}),
                restrictions: serde_json::json!({}),
                bonuses: serde_json::json!({}),
            })
            .await
            .expect("effect");

        assert_eq!(store.decay_effects().await.expect("decay"), 1);
        assert_eq!(store.decay_effects().await.expect("decay"), 0);
        let stored = store
            .find_effect(effect.id)
            .await
            .expect("find")
            .expect("row kept");
        assert_eq!(stored.duration, 0);
        assert!(!stored.is_active());
    }
}
