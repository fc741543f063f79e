//! PostgreSQL store.
//!
//! Every multi-row mutation runs in one transaction. Rows whose balances, stock or
//! status change are locked with `SELECT ... FOR UPDATE` before the domain rules run,
//! so concurrent approvals and purchases serialize on the row lock. Dropping the
//! transaction on an error path rolls it back.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};
use uuid::Uuid;

use backend_domain::effects::set_duration;
use backend_domain::ports::{
    CharacterRepository, EffectRepository, GuildRepository, QuestRepository, RewardRepository,
    StatusRepository, UserRepository,
};
use backend_domain::progression::{
    credit_grant, credit_quest, milestones_reached, starting_character,
};
use backend_domain::{
    new_id, quest_lifecycle, shop, Achievement, ActivityLog, Approval, AssignedCharacter,
    Character, CharacterId, Credit, DbConfig, DomainError, DomainResult, Effect, EffectId,
    EffectModifiers, Grant, Guild, GuildId, GuildPatch, GuildSummary, GuildTarget, InventoryItem,
    NewAccount, NewActivity, NewEffect, NewGuild, NewQuest, NewReward, NotificationCounts,
    Onboarding, Price, Purchase, PurchaseOrder, Quest, QuestId, QuestRewards, QuestStatus, Reward,
    RewardId, TableCounts, User, UserId, UserPatch,
};

use super::{journal, migrations};

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(String),
    #[error("invalid stored value: {0}")]
    Decode(String),
}

impl From<PostgresError> for DomainError {
    fn from(err: PostgresError) -> Self {
        if let PostgresError::Sqlx(sqlx::Error::Database(db)) = &err {
            if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return DomainError::Conflict(conflict_message(db.constraint()));
            }
        }
        DomainError::Store(anyhow::Error::new(err))
    }
}

fn conflict_message(constraint: Option<&str>) -> String {
    match constraint {
        Some("idx_users_email") => "email is already registered".to_string(),
        Some("idx_guilds_code") => "guild code is already taken".to_string(),
        Some("characters_user_id_key") => "user already has a character".to_string(),
        Some(other) => format!("duplicate value violates {}", other),
        None => "duplicate value".to_string(),
    }
}

trait DbResultExt<T> {
    fn db(self) -> DomainResult<T>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn db(self) -> DomainResult<T> {
        self.map_err(|err| PostgresError::from(err).into())
    }
}

impl PostgresStore {
    /// Connects, then applies pending migrations.
    pub async fn connect(config: &DbConfig) -> Result<Self, PostgresError> {
        let pool = pool_options(config).connect(&config.database_url).await?;
        info!(
            "PostgreSQL connected (max_connections={})",
            config.max_connections
        );
        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Builds the pool without touching the server; connections open on first use.
    pub fn connect_lazy(config: &DbConfig) -> Result<Self, PostgresError> {
        let pool = pool_options(config).connect_lazy(&config.database_url)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), PostgresError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name VARCHAR(100) PRIMARY KEY,
                applied_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
            )",
        )
        .execute(&self.pool)
        .await?;

        for (name, sql) in migrations::get_migrations() {
            let applied: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE name = $1)")
                    .bind(name)
                    .fetch_one(&self.pool)
                    .await?;

            if applied {
                debug!("Migration already applied: {}", name);
                continue;
            }

            info!("Running migration: {}", name);
            let mut tx = self.pool.begin().await?;
            sqlx::raw_sql(sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| PostgresError::Migration(format!("{}: {}", name, e)))?;
            sqlx::query("INSERT INTO _migrations (name) VALUES ($1)")
                .bind(name)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            info!("Migration applied: {}", name);
        }

        Ok(())
    }
}

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds.max(1)))
}

// ============================================================================
// Rows
// ============================================================================

const USER_COLUMNS: &str = "id, name, email, password_hash, role, guild_id, created_at";
const GUILD_COLUMNS: &str = "id, name, code, description, owner_id, member_count, created_at";
const CHARACTER_COLUMNS: &str = "id, user_id, guild_id, name, level, experience, max_experience, \
     bronze_coins, silver_coins, gold_coins, streak, completed_quests, updated_at";
const QUEST_SELECT: &str = "SELECT q.id, q.guild_id, q.title, q.description, q.quest_type, \
     q.difficulty, q.status, q.reward_experience, q.reward_bronze, q.reward_silver, \
     q.reward_gold, q.assigned_character_id, c.name AS assigned_character_name, q.created_by, \
     q.created_at, q.updated_at \
     FROM quests q LEFT JOIN characters c ON c.id = q.assigned_character_id";
const EFFECT_COLUMNS: &str = "id, character_id, name, effect_type, duration, max_duration, \
     multipliers, restrictions, bonuses, created_at";
const REWARD_COLUMNS: &str = "id, guild_id, name, description, category, price_bronze, \
     price_silver, price_gold, stock, is_active, created_at";
const ACTIVITY_COLUMNS: &str =
    "id, guild_id, character_id, activity_type, title, description, created_at";

fn decode<T, E: std::fmt::Display>(value: Result<T, E>) -> Result<T, PostgresError> {
    value.map_err(|err| PostgresError::Decode(err.to_string()))
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    guild_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = PostgresError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: decode(row.role.parse())?,
            guild_id: row.guild_id,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct GuildRow {
    id: Uuid,
    name: String,
    code: String,
    description: Option<String>,
    owner_id: Uuid,
    member_count: i32,
    created_at: DateTime<Utc>,
}

impl From<GuildRow> for Guild {
    fn from(row: GuildRow) -> Self {
        Guild {
            id: row.id,
            name: row.name,
            code: row.code,
            description: row.description,
            owner_id: row.owner_id,
            member_count: row.member_count,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct GuildSummaryRow {
    #[sqlx(flatten)]
    guild: GuildRow,
    active_players: i64,
    quest_count: i64,
}

#[derive(Debug, FromRow)]
struct CharacterRow {
    id: Uuid,
    user_id: Uuid,
    guild_id: Uuid,
    name: String,
    level: i32,
    experience: i64,
    max_experience: i64,
    bronze_coins: i64,
    silver_coins: i64,
    gold_coins: i64,
    streak: i32,
    completed_quests: i32,
    updated_at: DateTime<Utc>,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Character {
            id: row.id,
            user_id: row.user_id,
            guild_id: row.guild_id,
            name: row.name,
            level: row.level,
            experience: row.experience,
            max_experience: row.max_experience,
            bronze_coins: row.bronze_coins,
            silver_coins: row.silver_coins,
            gold_coins: row.gold_coins,
            streak: row.streak,
            completed_quests: row.completed_quests,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct QuestRow {
    id: Uuid,
    guild_id: Uuid,
    title: String,
    description: String,
    quest_type: String,
    difficulty: i32,
    status: String,
    reward_experience: i64,
    reward_bronze: i64,
    reward_silver: i64,
    reward_gold: i64,
    assigned_character_id: Option<Uuid>,
    assigned_character_name: Option<String>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<QuestRow> for Quest {
    type Error = PostgresError;

    fn try_from(row: QuestRow) -> Result<Self, Self::Error> {
        let assigned_character = match (row.assigned_character_id, row.assigned_character_name) {
            (Some(id), Some(name)) => Some(AssignedCharacter { id, name }),
            _ => None,
        };
        Ok(Quest {
            id: row.id,
            guild_id: row.guild_id,
            title: row.title,
            description: row.description,
            quest_type: row.quest_type,
            difficulty: row.difficulty,
            status: decode(row.status.parse::<QuestStatus>())?,
            rewards: QuestRewards {
                experience: row.reward_experience,
                bronze: row.reward_bronze,
                silver: row.reward_silver,
                gold: row.reward_gold,
            },
            assigned_character_id: row.assigned_character_id,
            assigned_character,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct EffectRow {
    id: Uuid,
    character_id: Uuid,
    name: String,
    effect_type: String,
    duration: i32,
    max_duration: i32,
    multipliers: Value,
    restrictions: Value,
    bonuses: Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<EffectRow> for Effect {
    type Error = PostgresError;

    fn try_from(row: EffectRow) -> Result<Self, Self::Error> {
        Ok(Effect {
            id: row.id,
            character_id: row.character_id,
            name: row.name,
            effect_type: decode(row.effect_type.parse())?,
            duration: row.duration,
            max_duration: row.max_duration,
            multipliers: row.multipliers,
            restrictions: row.restrictions,
            bonuses: row.bonuses,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct RewardRow {
    id: Uuid,
    guild_id: Uuid,
    name: String,
    description: Option<String>,
    category: String,
    price_bronze: i64,
    price_silver: i64,
    price_gold: i64,
    stock: Option<i32>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<RewardRow> for Reward {
    fn from(row: RewardRow) -> Self {
        Reward {
            id: row.id,
            guild_id: row.guild_id,
            name: row.name,
            description: row.description,
            category: row.category,
            price: Price {
                bronze: row.price_bronze,
                silver: row.price_silver,
                gold: row.price_gold,
            },
            stock: row.stock,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct AchievementRow {
    id: Uuid,
    character_id: Uuid,
    key: String,
    title: String,
    unlocked_at: DateTime<Utc>,
}

impl From<AchievementRow> for Achievement {
    fn from(row: AchievementRow) -> Self {
        Achievement {
            id: row.id,
            character_id: row.character_id,
            key: row.key,
            title: row.title,
            unlocked_at: row.unlocked_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    id: Uuid,
    guild_id: Uuid,
    character_id: Option<Uuid>,
    activity_type: String,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for ActivityLog {
    type Error = PostgresError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        Ok(ActivityLog {
            id: row.id,
            guild_id: row.guild_id,
            character_id: row.character_id,
            activity_type: decode(row.activity_type.parse())?,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TableCountsRow {
    users: i64,
    guilds: i64,
    characters: i64,
    quests: i64,
    effects: i64,
    rewards: i64,
    inventory_items: i64,
    achievements: i64,
    activity_logs: i64,
}

fn convert<R, T>(rows: Vec<R>) -> DomainResult<Vec<T>>
where
    T: TryFrom<R, Error = PostgresError>,
{
    rows.into_iter()
        .map(|row| T::try_from(row).map_err(DomainError::from))
        .collect()
}

// ============================================================================
// Transaction helpers
// ============================================================================

async fn email_taken(conn: &mut PgConnection, email: &str) -> DomainResult<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(&mut *conn)
        .await
        .db()
}

async fn insert_user(
    conn: &mut PgConnection,
    account: &NewAccount,
    guild_id: Option<GuildId>,
    now: DateTime<Utc>,
) -> DomainResult<User> {
    let user = User {
        id: new_id(),
        name: account.name.clone(),
        email: account.email.clone(),
        password_hash: account.password_hash.clone(),
        role: account.role,
        guild_id,
        created_at: now,
    };
    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, role, guild_id, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(user.guild_id)
    .bind(user.created_at)
    .execute(&mut *conn)
    .await
    .db()?;
    Ok(user)
}

async fn insert_character(conn: &mut PgConnection, character: &Character) -> DomainResult<()> {
    sqlx::query(
        "INSERT INTO characters (id, user_id, guild_id, name, level, experience, max_experience,
             bronze_coins, silver_coins, gold_coins, streak, completed_quests, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(character.id)
    .bind(character.user_id)
    .bind(character.guild_id)
    .bind(&character.name)
    .bind(character.level)
    .bind(character.experience)
    .bind(character.max_experience)
    .bind(character.bronze_coins)
    .bind(character.silver_coins)
    .bind(character.gold_coins)
    .bind(character.streak)
    .bind(character.completed_quests)
    .bind(character.updated_at)
    .execute(&mut *conn)
    .await
    .db()?;
    Ok(())
}

async fn save_character(conn: &mut PgConnection, character: &Character) -> DomainResult<()> {
    sqlx::query(
        "UPDATE characters SET guild_id = $2, level = $3, experience = $4, max_experience = $5,
             bronze_coins = $6, silver_coins = $7, gold_coins = $8, streak = $9,
             completed_quests = $10, updated_at = $11
         WHERE id = $1",
    )
    .bind(character.id)
    .bind(character.guild_id)
    .bind(character.level)
    .bind(character.experience)
    .bind(character.max_experience)
    .bind(character.bronze_coins)
    .bind(character.silver_coins)
    .bind(character.gold_coins)
    .bind(character.streak)
    .bind(character.completed_quests)
    .bind(character.updated_at)
    .execute(&mut *conn)
    .await
    .db()?;
    Ok(())
}

async fn lock_character(conn: &mut PgConnection, id: CharacterId) -> DomainResult<Character> {
    let row = sqlx::query_as::<_, CharacterRow>(&format!(
        "SELECT {} FROM characters WHERE id = $1 FOR UPDATE",
        CHARACTER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .db()?;
    row.map(Character::from)
        .ok_or_else(|| DomainError::not_found("character"))
}

async fn lock_guild(conn: &mut PgConnection, target: &GuildTarget) -> DomainResult<Guild> {
    let row = match target {
        GuildTarget::Code(code) => {
            sqlx::query_as::<_, GuildRow>(&format!(
                "SELECT {} FROM guilds WHERE code = $1 FOR UPDATE",
                GUILD_COLUMNS
            ))
            .bind(code)
            .fetch_optional(&mut *conn)
            .await
        }
        GuildTarget::Id(id) => {
            sqlx::query_as::<_, GuildRow>(&format!(
                "SELECT {} FROM guilds WHERE id = $1 FOR UPDATE",
                GUILD_COLUMNS
            ))
            .bind(*id)
            .fetch_optional(&mut *conn)
            .await
        }
    }
    .db()?;
    row.map(Guild::from)
        .ok_or_else(|| DomainError::not_found("guild"))
}

async fn increment_members(conn: &mut PgConnection, guild_id: GuildId) -> DomainResult<Guild> {
    let row = sqlx::query_as::<_, GuildRow>(&format!(
        "UPDATE guilds SET member_count = member_count + 1 WHERE id = $1 RETURNING {}",
        GUILD_COLUMNS
    ))
    .bind(guild_id)
    .fetch_one(&mut *conn)
    .await
    .db()?;
    Ok(row.into())
}

async fn lock_quest(conn: &mut PgConnection, id: QuestId) -> DomainResult<Quest> {
    let row = sqlx::query_as::<_, QuestRow>(&format!(
        "{} WHERE q.id = $1 FOR UPDATE OF q",
        QUEST_SELECT
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .db()?;
    match row {
        Some(row) => Ok(Quest::try_from(row)?),
        None => Err(DomainError::not_found("quest")),
    }
}

async fn save_quest_state(conn: &mut PgConnection, quest: &Quest) -> DomainResult<()> {
    sqlx::query(
        "UPDATE quests SET status = $2, assigned_character_id = $3, updated_at = $4 WHERE id = $1",
    )
    .bind(quest.id)
    .bind(quest.status.as_str())
    .bind(quest.assigned_character_id)
    .bind(quest.updated_at)
    .execute(&mut *conn)
    .await
    .db()?;
    Ok(())
}

async fn active_effects(
    conn: &mut PgConnection,
    character_id: CharacterId,
) -> DomainResult<Vec<Effect>> {
    let rows = sqlx::query_as::<_, EffectRow>(&format!(
        "SELECT {} FROM effects WHERE character_id = $1 AND duration > 0 ORDER BY created_at DESC",
        EFFECT_COLUMNS
    ))
    .bind(character_id)
    .fetch_all(&mut *conn)
    .await
    .db()?;
    convert(rows)
}

/// Inserts the achievements not yet held; returns only the new ones.
async fn unlock_achievements(
    conn: &mut PgConnection,
    candidates: Vec<Achievement>,
) -> DomainResult<Vec<Achievement>> {
    let mut unlocked = Vec::with_capacity(candidates.len());
    for achievement in candidates {
        let inserted: Option<Uuid> = sqlx::query_scalar(
            "INSERT INTO achievements (id, character_id, key, title, unlocked_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (character_id, key) DO NOTHING
             RETURNING id",
        )
        .bind(achievement.id)
        .bind(achievement.character_id)
        .bind(&achievement.key)
        .bind(&achievement.title)
        .bind(achievement.unlocked_at)
        .fetch_optional(&mut *conn)
        .await
        .db()?;
        if inserted.is_some() {
            unlocked.push(achievement);
        }
    }
    Ok(unlocked)
}

async fn log_activity(
    conn: &mut PgConnection,
    entry: NewActivity,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    sqlx::query(
        "INSERT INTO activity_logs (id, guild_id, character_id, activity_type, title, description, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(new_id())
    .bind(entry.guild_id)
    .bind(entry.character_id)
    .bind(entry.activity_type.as_str())
    .bind(entry.title)
    .bind(entry.description)
    .bind(now)
    .execute(&mut *conn)
    .await
    .db()?;
    Ok(())
}

async fn log_all(
    conn: &mut PgConnection,
    entries: Vec<NewActivity>,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    for entry in entries {
        log_activity(conn, entry, now).await?;
    }
    Ok(())
}

// ============================================================================
// Ports
// ============================================================================

#[async_trait]
impl UserRepository for PostgresStore {
    async fn find_user(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(User::try_from).transpose()?)
    }

    async fn find_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(User::try_from).transpose()?)
    }

    async fn update_user(&self, id: UserId, patch: &UserPatch) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET name = COALESCE($2, name), email = COALESCE($3, email)
             WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .fetch_optional(&self.pool)
        .await
        .db()?;
        match row {
            Some(row) => Ok(User::try_from(row)?),
            None => Err(DomainError::not_found("user")),
        }
    }
}

#[async_trait]
impl GuildRepository for PostgresStore {
    async fn find_guild(&self, id: GuildId) -> DomainResult<Option<Guild>> {
        let row = sqlx::query_as::<_, GuildRow>(&format!(
            "SELECT {} FROM guilds WHERE id = $1",
            GUILD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(Guild::from))
    }

    async fn find_guild_by_code(&self, code: &str) -> DomainResult<Option<Guild>> {
        let row = sqlx::query_as::<_, GuildRow>(&format!(
            "SELECT {} FROM guilds WHERE code = $1",
            GUILD_COLUMNS
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(Guild::from))
    }

    async fn guild_code_exists(&self, code: &str) -> DomainResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM guilds WHERE code = $1)")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .db()
    }

    async fn guild_summary(
        &self,
        id: GuildId,
        active_since: DateTime<Utc>,
    ) -> DomainResult<Option<GuildSummary>> {
        let row = sqlx::query_as::<_, GuildSummaryRow>(
            "SELECT g.id, g.name, g.code, g.description, g.owner_id, g.member_count, g.created_at,
                    (SELECT COUNT(DISTINCT a.character_id) FROM activity_logs a
                      WHERE a.guild_id = g.id AND a.character_id IS NOT NULL
                        AND a.created_at >= $2) AS active_players,
                    (SELECT COUNT(*) FROM quests q WHERE q.guild_id = g.id) AS quest_count
             FROM guilds g WHERE g.id = $1",
        )
        .bind(id)
        .bind(active_since)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(|row| GuildSummary {
            guild: row.guild.into(),
            active_players: row.active_players,
            quest_count: row.quest_count,
        }))
    }

    async fn update_guild(&self, id: GuildId, patch: &GuildPatch) -> DomainResult<Guild> {
        let row = sqlx::query_as::<_, GuildRow>(&format!(
            "UPDATE guilds SET name = COALESCE($2, name), code = COALESCE($3, code),
                 description = COALESCE($4, description)
             WHERE id = $1 RETURNING {}",
            GUILD_COLUMNS
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.code.as_deref())
        .bind(patch.description.as_deref())
        .fetch_optional(&self.pool)
        .await
        .db()?;
        row.map(Guild::from)
            .ok_or_else(|| DomainError::not_found("guild"))
    }

    async fn create_guildmaster(
        &self,
        account: NewAccount,
        guild: NewGuild,
    ) -> DomainResult<Onboarding> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        if email_taken(&mut tx, &account.email).await? {
            return Err(DomainError::Conflict("email is already registered".to_string()));
        }

        let mut user = insert_user(&mut tx, &account, None, now).await?;
        let guild = Guild {
            id: new_id(),
            name: guild.name,
            code: guild.code,
            description: guild.description,
            owner_id: user.id,
            member_count: 1,
            created_at: now,
        };
        sqlx::query(
            "INSERT INTO guilds (id, name, code, description, owner_id, member_count, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(guild.id)
        .bind(&guild.name)
        .bind(&guild.code)
        .bind(guild.description.as_deref())
        .bind(guild.owner_id)
        .bind(guild.member_count)
        .bind(guild.created_at)
        .execute(&mut *tx)
        .await
        .db()?;
        sqlx::query("UPDATE users SET guild_id = $2 WHERE id = $1")
            .bind(user.id)
            .bind(guild.id)
            .execute(&mut *tx)
            .await
            .db()?;
        user.guild_id = Some(guild.id);

        let character = starting_character(user.id, guild.id, &user.name, now);
        insert_character(&mut tx, &character).await?;
        log_activity(&mut tx, journal::guild_created(&guild, &user, &character), now).await?;

        tx.commit().await.db()?;
        Ok(Onboarding {
            user,
            guild,
            character,
        })
    }

    async fn join_guild(
        &self,
        account: NewAccount,
        target: GuildTarget,
    ) -> DomainResult<Onboarding> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        if email_taken(&mut tx, &account.email).await? {
            return Err(DomainError::Conflict("email is already registered".to_string()));
        }
        let guild = lock_guild(&mut tx, &target).await?;

        let user = insert_user(&mut tx, &account, Some(guild.id), now).await?;
        let character = starting_character(user.id, guild.id, &user.name, now);
        insert_character(&mut tx, &character).await?;
        let guild = increment_members(&mut tx, guild.id).await?;
        log_activity(&mut tx, journal::member_joined(&guild, &user, &character), now).await?;

        tx.commit().await.db()?;
        Ok(Onboarding {
            user,
            guild,
            character,
        })
    }

    async fn invite_user(&self, email: &str, guild_id: GuildId) -> DomainResult<Onboarding> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = $1 FOR UPDATE",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&mut *tx)
        .await
        .db()?;
        let mut user = match row {
            Some(row) => User::try_from(row)?,
            None => return Err(DomainError::not_found("user")),
        };
        if user.guild_id.is_some() {
            return Err(DomainError::Validation(
                "user already belongs to a guild".to_string(),
            ));
        }
        let guild = lock_guild(&mut tx, &GuildTarget::Id(guild_id)).await?;

        sqlx::query("UPDATE users SET guild_id = $2 WHERE id = $1")
            .bind(user.id)
            .bind(guild.id)
            .execute(&mut *tx)
            .await
            .db()?;
        user.guild_id = Some(guild.id);

        let existing = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {} FROM characters WHERE user_id = $1 FOR UPDATE",
            CHARACTER_COLUMNS
        ))
        .bind(user.id)
        .fetch_optional(&mut *tx)
        .await
        .db()?;
        let character = match existing {
            Some(row) => {
                let mut character = Character::from(row);
                character.guild_id = guild.id;
                character.updated_at = now;
                save_character(&mut tx, &character).await?;
                character
            }
            None => {
                let character = starting_character(user.id, guild.id, &user.name, now);
                insert_character(&mut tx, &character).await?;
                character
            }
        };
        let guild = increment_members(&mut tx, guild.id).await?;
        log_activity(&mut tx, journal::member_joined(&guild, &user, &character), now).await?;

        tx.commit().await.db()?;
        Ok(Onboarding {
            user,
            guild,
            character,
        })
    }
}

#[async_trait]
impl CharacterRepository for PostgresStore {
    async fn find_character(&self, id: CharacterId) -> DomainResult<Option<Character>> {
        let row = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {} FROM characters WHERE id = $1",
            CHARACTER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(Character::from))
    }

    async fn find_character_by_user(&self, user_id: UserId) -> DomainResult<Option<Character>> {
        let row = sqlx::query_as::<_, CharacterRow>(&format!(
            "SELECT {} FROM characters WHERE user_id = $1",
            CHARACTER_COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(Character::from))
    }

    async fn list_guild_players(&self, guild_id: GuildId) -> DomainResult<Vec<Character>> {
        let rows = sqlx::query_as::<_, CharacterRow>(
            "SELECT c.id, c.user_id, c.guild_id, c.name, c.level, c.experience, c.max_experience,
                    c.bronze_coins, c.silver_coins, c.gold_coins, c.streak, c.completed_quests,
                    c.updated_at
             FROM characters c JOIN users u ON u.id = c.user_id
             WHERE c.guild_id = $1 AND u.role = 'PLAYER'
             ORDER BY c.level DESC, c.experience DESC",
        )
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await
        .db()?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    async fn recent_activity(
        &self,
        character_id: CharacterId,
        limit: usize,
    ) -> DomainResult<Vec<ActivityLog>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, ActivityRow>(&format!(
            "SELECT {} FROM activity_logs WHERE character_id = $1
             ORDER BY created_at DESC LIMIT $2",
            ACTIVITY_COLUMNS
        ))
        .bind(character_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .db()?;
        convert(rows)
    }

    async fn list_achievements(
        &self,
        character_id: CharacterId,
    ) -> DomainResult<Vec<Achievement>> {
        let rows = sqlx::query_as::<_, AchievementRow>(
            "SELECT id, character_id, key, title, unlocked_at FROM achievements
             WHERE character_id = $1 ORDER BY unlocked_at",
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await
        .db()?;
        Ok(rows.into_iter().map(Achievement::from).collect())
    }

    async fn grant(
        &self,
        character_id: CharacterId,
        grant: &Grant,
    ) -> DomainResult<(Character, Credit)> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let mut character = lock_character(&mut tx, character_id).await?;
        let old_level = character.level;
        let credit = credit_grant(&mut character, grant, now)?;
        save_character(&mut tx, &character).await?;

        let candidates = milestones_reached(character.id, old_level, character.level, now);
        let unlocked = unlock_achievements(&mut tx, candidates).await?;
        let entries =
            journal::reward_granted(&character, &credit, grant.reason.as_deref(), &unlocked);
        log_all(&mut tx, entries, now).await?;

        tx.commit().await.db()?;
        Ok((character, credit))
    }

    async fn notification_counts(
        &self,
        guild_id: GuildId,
        character_id: Option<CharacterId>,
    ) -> DomainResult<NotificationCounts> {
        let quests: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM quests WHERE guild_id = $1
               AND (status = 'AVAILABLE'
                    OR (status = 'IN_PROGRESS' AND assigned_character_id = $2))",
        )
        .bind(guild_id)
        .bind(character_id)
        .fetch_one(&self.pool)
        .await
        .db()?;
        let inventory: i64 = match character_id {
            Some(character_id) => sqlx::query_scalar(
                "SELECT COUNT(*) FROM inventory_items WHERE character_id = $1 AND NOT is_used",
            )
            .bind(character_id)
            .fetch_one(&self.pool)
            .await
            .db()?,
            None => 0,
        };
        Ok(NotificationCounts { quests, inventory })
    }
}

#[async_trait]
impl QuestRepository for PostgresStore {
    async fn list_quests(
        &self,
        guild_id: GuildId,
        status: Option<QuestStatus>,
    ) -> DomainResult<Vec<Quest>> {
        let rows = sqlx::query_as::<_, QuestRow>(&format!(
            "{} WHERE q.guild_id = $1 AND ($2::TEXT IS NULL OR q.status = $2)
             ORDER BY CASE q.status
                 WHEN 'AVAILABLE' THEN 0 WHEN 'IN_PROGRESS' THEN 1 WHEN 'COMPLETED' THEN 2
                 WHEN 'APPROVED' THEN 3 ELSE 4 END,
               q.created_at DESC",
            QUEST_SELECT
        ))
        .bind(guild_id)
        .bind(status.map(|status| status.as_str()))
        .fetch_all(&self.pool)
        .await
        .db()?;
        convert(rows)
    }

    async fn find_quest(&self, id: QuestId) -> DomainResult<Option<Quest>> {
        let row = sqlx::query_as::<_, QuestRow>(&format!("{} WHERE q.id = $1", QUEST_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .db()?;
        Ok(row.map(Quest::try_from).transpose()?)
    }

    async fn create_quest(&self, quest: NewQuest) -> DomainResult<Quest> {
        let now = Utc::now();
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
        let mut tx = self.pool.begin().await.db()?;
        sqlx::query(
            "INSERT INTO quests (id, guild_id, title, description, quest_type, difficulty, status,
                 reward_experience, reward_bronze, reward_silver, reward_gold, created_by,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(quest.id)
        .bind(quest.guild_id)
        .bind(&quest.title)
        .bind(&quest.description)
        .bind(&quest.quest_type)
        .bind(quest.difficulty)
        .bind(quest.status.as_str())
        .bind(quest.rewards.experience)
        .bind(quest.rewards.bronze)
        .bind(quest.rewards.silver)
        .bind(quest.rewards.gold)
        .bind(quest.created_by)
        .bind(quest.created_at)
        .bind(quest.updated_at)
        .execute(&mut *tx)
        .await
        .db()?;
        log_activity(&mut tx, journal::quest_created(&quest), now).await?;
        tx.commit().await.db()?;
        Ok(quest)
    }

    async fn start_quest(&self, id: QuestId, character_id: CharacterId) -> DomainResult<Quest> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let mut quest = lock_quest(&mut tx, id).await?;
        let character = lock_character(&mut tx, character_id).await?;
        quest_lifecycle::start(&mut quest, &character, now)?;
        save_quest_state(&mut tx, &quest).await?;
        log_activity(&mut tx, journal::quest_started(&quest, &character), now).await?;
        tx.commit().await.db()?;
        Ok(quest)
    }

    async fn complete_quest(&self, id: QuestId) -> DomainResult<Quest> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let mut quest = lock_quest(&mut tx, id).await?;
        quest_lifecycle::complete(&mut quest, now)?;
        save_quest_state(&mut tx, &quest).await?;
        log_activity(&mut tx, journal::quest_completed(&quest), now).await?;
        tx.commit().await.db()?;
        Ok(quest)
    }

    async fn approve_quest(&self, id: QuestId) -> DomainResult<Approval> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let mut quest = lock_quest(&mut tx, id).await?;
        let character_id = quest_lifecycle::approve(&mut quest, now)?;
        let mut character = lock_character(&mut tx, character_id).await?;

        let effects = active_effects(&mut tx, character_id).await?;
        let modifiers = EffectModifiers::from_effects(&effects);
        let old_level = character.level;
        let credited = credit_quest(&mut character, &quest.rewards, &modifiers, now)?;
        save_character(&mut tx, &character).await?;
        save_quest_state(&mut tx, &quest).await?;

        let candidates = milestones_reached(character.id, old_level, character.level, now);
        let unlocked = unlock_achievements(&mut tx, candidates).await?;
        log_all(
            &mut tx,
            journal::quest_approved(&quest, &character, &credited, &unlocked),
            now,
        )
        .await?;

        tx.commit().await.db()?;
        Ok(Approval {
            quest,
            character,
            credited,
            unlocked,
        })
    }

    async fn expire_quest(&self, id: QuestId) -> DomainResult<Quest> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let mut quest = lock_quest(&mut tx, id).await?;
        if let Some(character_id) = quest_lifecycle::expire(&mut quest, now)? {
            let mut character = lock_character(&mut tx, character_id).await?;
            character.streak = 0;
            character.updated_at = now;
            save_character(&mut tx, &character).await?;
        }
        save_quest_state(&mut tx, &quest).await?;
        log_activity(&mut tx, journal::quest_expired(&quest), now).await?;
        tx.commit().await.db()?;
        Ok(quest)
    }
}

#[async_trait]
impl EffectRepository for PostgresStore {
    async fn find_effect(&self, id: EffectId) -> DomainResult<Option<Effect>> {
        let row = sqlx::query_as::<_, EffectRow>(&format!(
            "SELECT {} FROM effects WHERE id = $1",
            EFFECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(Effect::try_from).transpose()?)
    }

    async fn list_effects(
        &self,
        character_id: CharacterId,
        active_only: bool,
    ) -> DomainResult<Vec<Effect>> {
        let rows = sqlx::query_as::<_, EffectRow>(&format!(
            "SELECT {} FROM effects WHERE character_id = $1 AND (NOT $2 OR duration > 0)
             ORDER BY created_at DESC",
            EFFECT_COLUMNS
        ))
        .bind(character_id)
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .db()?;
        convert(rows)
    }

    async fn create_effect(&self, effect: NewEffect) -> DomainResult<Effect> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let character = lock_character(&mut tx, effect.character_id).await?;
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
        sqlx::query(
            "INSERT INTO effects (id, character_id, name, effect_type, duration, max_duration,
                 multipliers, restrictions, bonuses, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(effect.id)
        .bind(effect.character_id)
        .bind(&effect.name)
        .bind(effect.effect_type.as_str())
        .bind(effect.duration)
        .bind(effect.max_duration)
        .bind(&effect.multipliers)
        .bind(&effect.restrictions)
        .bind(&effect.bonuses)
        .bind(effect.created_at)
        .execute(&mut *tx)
        .await
        .db()?;
        log_activity(&mut tx, journal::effect_applied(&character, &effect), now).await?;
        tx.commit().await.db()?;
        Ok(effect)
    }

    async fn set_effect_duration(&self, id: EffectId, duration: i32) -> DomainResult<Effect> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let row = sqlx::query_as::<_, EffectRow>(&format!(
            "SELECT {} FROM effects WHERE id = $1 FOR UPDATE",
            EFFECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .db()?;
        let mut effect = match row {
            Some(row) => Effect::try_from(row)?,
            None => return Err(DomainError::not_found("effect")),
        };
        set_duration(&mut effect, duration);
        sqlx::query("UPDATE effects SET duration = $2, max_duration = $3 WHERE id = $1")
            .bind(effect.id)
            .bind(effect.duration)
            .bind(effect.max_duration)
            .execute(&mut *tx)
            .await
            .db()?;
        let character = lock_character(&mut tx, effect.character_id).await?;
        log_activity(&mut tx, journal::effect_updated(&character, &effect), now).await?;
        tx.commit().await.db()?;
        Ok(effect)
    }

    async fn decay_effects(&self) -> DomainResult<u64> {
        let result = sqlx::query("UPDATE effects SET duration = duration - 1 WHERE duration > 0")
            .execute(&self.pool)
            .await
            .db()?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RewardRepository for PostgresStore {
    async fn list_rewards(&self, guild_id: GuildId) -> DomainResult<Vec<Reward>> {
        let rows = sqlx::query_as::<_, RewardRow>(&format!(
            "SELECT {} FROM rewards WHERE guild_id = $1 ORDER BY created_at DESC",
            REWARD_COLUMNS
        ))
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await
        .db()?;
        Ok(rows.into_iter().map(Reward::from).collect())
    }

    async fn find_reward(&self, id: RewardId) -> DomainResult<Option<Reward>> {
        let row = sqlx::query_as::<_, RewardRow>(&format!(
            "SELECT {} FROM rewards WHERE id = $1",
            REWARD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .db()?;
        Ok(row.map(Reward::from))
    }

    async fn create_reward(&self, reward: NewReward) -> DomainResult<Reward> {
        let reward = Reward {
            id: new_id(),
            guild_id: reward.guild_id,
            name: reward.name,
            description: reward.description,
            category: reward.category,
            price: reward.price,
            stock: reward.stock,
            is_active: reward.is_active,
            created_at: Utc::now(),
        };
        sqlx::query(
            "INSERT INTO rewards (id, guild_id, name, description, category, price_bronze,
                 price_silver, price_gold, stock, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(reward.id)
        .bind(reward.guild_id)
        .bind(&reward.name)
        .bind(reward.description.as_deref())
        .bind(&reward.category)
        .bind(reward.price.bronze)
        .bind(reward.price.silver)
        .bind(reward.price.gold)
        .bind(reward.stock)
        .bind(reward.is_active)
        .bind(reward.created_at)
        .execute(&self.pool)
        .await
        .db()?;
        Ok(reward)
    }

    async fn purchase_reward(&self, order: PurchaseOrder) -> DomainResult<Purchase> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.db()?;
        let mut character = lock_character(&mut tx, order.character_id).await?;
        let row = sqlx::query_as::<_, RewardRow>(&format!(
            "SELECT {} FROM rewards WHERE id = $1 FOR UPDATE",
            REWARD_COLUMNS
        ))
        .bind(order.reward_id)
        .fetch_optional(&mut *tx)
        .await
        .db()?;
        let mut reward = row
            .map(Reward::from)
            .ok_or_else(|| DomainError::not_found("reward"))?;

        let paid = shop::purchase(&mut character, &mut reward, order.currency, order.cost, now)?;
        save_character(&mut tx, &character).await?;
        sqlx::query("UPDATE rewards SET stock = $2 WHERE id = $1")
            .bind(reward.id)
            .bind(reward.stock)
            .execute(&mut *tx)
            .await
            .db()?;

        let item = InventoryItem {
            id: new_id(),
            character_id: character.id,
            reward_id: Some(reward.id),
            name: reward.name.clone(),
            category: reward.category.clone(),
            is_used: false,
            acquired_at: now,
        };
        sqlx::query(
            "INSERT INTO inventory_items (id, character_id, reward_id, name, category, is_used, acquired_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(item.id)
        .bind(item.character_id)
        .bind(item.reward_id)
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.is_used)
        .bind(item.acquired_at)
        .execute(&mut *tx)
        .await
        .db()?;
        log_activity(
            &mut tx,
            journal::reward_purchased(&character, &reward, paid, order.currency),
            now,
        )
        .await?;

        tx.commit().await.db()?;
        Ok(Purchase {
            character,
            reward,
            item,
        })
    }
}

#[async_trait]
impl StatusRepository for PostgresStore {
    async fn table_counts(&self) -> DomainResult<TableCounts> {
        let row = sqlx::query_as::<_, TableCountsRow>(
            "SELECT (SELECT COUNT(*) FROM users) AS users,
                    (SELECT COUNT(*) FROM guilds) AS guilds,
                    (SELECT COUNT(*) FROM characters) AS characters,
                    (SELECT COUNT(*) FROM quests) AS quests,
                    (SELECT COUNT(*) FROM effects) AS effects,
                    (SELECT COUNT(*) FROM rewards) AS rewards,
                    (SELECT COUNT(*) FROM inventory_items) AS inventory_items,
                    (SELECT COUNT(*) FROM achievements) AS achievements,
                    (SELECT COUNT(*) FROM activity_logs) AS activity_logs",
        )
        .fetch_one(&self.pool)
        .await
        .db()?;
        Ok(TableCounts {
            users: row.users,
            guilds: row.guilds,
            characters: row.characters,
            quests: row.quests,
            effects: row.effects,
            rewards: row.rewards,
            inventory_items: row.inventory_items,
            achievements: row.achievements,
            activity_logs: row.activity_logs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_messages_name_the_duplicated_field() {
        assert_eq!(
            conflict_message(Some("idx_users_email")),
            "email is already registered"
        );
        assert_eq!(
            conflict_message(Some("idx_guilds_code")),
            "guild code is already taken"
        );
        assert_eq!(conflict_message(None), "duplicate value");
    }

    #[test]
    fn non_constraint_errors_become_store_errors() {
        let err: DomainError = PostgresError::Migration("v1: boom".to_string()).into();
        assert!(matches!(err, DomainError::Store(_)));
    }

    #[test]
    fn quest_rows_with_unknown_status_fail_to_decode() {
        let now = Utc::now();
        let row = QuestRow {
            id: Uuid::new_v4(),
            guild_id: Uuid::new_v4(),
            title: "Walk the dog".to_string(),
            description: "Around the block".to_string(),
            quest_type: "daily".to_string(),
            difficulty: 1,
            status: "ARCHIVED".to_string(),
            reward_experience: 10,
            reward_bronze: 0,
            reward_silver: 0,
            reward_gold: 0,
            assigned_character_id: None,
            assigned_character_name: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        };
        assert!(matches!(Quest::try_from(row), Err(PostgresError::Decode(_))));
    }
}
