//! PostgreSQL schema for the guild tracker.
//!
//! Character-owned rows (effects, inventory, achievements, activity) cascade with
//! their character. Statuses, roles and effect types are stored as text and
//! checked against the values the domain knows.

pub const MIGRATION_V1: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              UUID PRIMARY KEY,
    name            TEXT NOT NULL,
    email           TEXT NOT NULL,
    password_hash   TEXT NOT NULL,
    role            TEXT NOT NULL CHECK (role IN ('GUILDMASTER', 'PLAYER')),
    guild_id        UUID,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);

CREATE TABLE IF NOT EXISTS guilds (
    id              UUID PRIMARY KEY,
    name            TEXT NOT NULL,
    code            TEXT NOT NULL CHECK (char_length(code) = 6),
    description     TEXT,
    owner_id        UUID NOT NULL REFERENCES users(id),
    member_count    INTEGER NOT NULL DEFAULT 1 CHECK (member_count >= 0),
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_guilds_code ON guilds(code);

ALTER TABLE users
    ADD CONSTRAINT fk_users_guild FOREIGN KEY (guild_id) REFERENCES guilds(id) ON DELETE SET NULL;

CREATE TABLE IF NOT EXISTS characters (
    id                  UUID PRIMARY KEY,
    user_id             UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
    guild_id            UUID NOT NULL REFERENCES guilds(id) ON DELETE CASCADE,
    name                TEXT NOT NULL,
    level               INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
    experience          BIGINT NOT NULL DEFAULT 0 CHECK (experience >= 0),
    max_experience      BIGINT NOT NULL DEFAULT 100 CHECK (max_experience > 0),
    bronze_coins        BIGINT NOT NULL DEFAULT 10 CHECK (bronze_coins >= 0),
    silver_coins        BIGINT NOT NULL DEFAULT 0 CHECK (silver_coins >= 0),
    gold_coins          BIGINT NOT NULL DEFAULT 0 CHECK (gold_coins >= 0),
    streak              INTEGER NOT NULL DEFAULT 0 CHECK (streak >= 0),
    completed_quests    INTEGER NOT NULL DEFAULT 0 CHECK (completed_quests >= 0),
    updated_at          TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_characters_guild ON characters(guild_id);

CREATE TABLE IF NOT EXISTS quests (
    id                      UUID PRIMARY KEY,
    guild_id                UUID NOT NULL REFERENCES guilds(id) ON DELETE CASCADE,
    title                   TEXT NOT NULL,
    description             TEXT NOT NULL,
    quest_type              TEXT NOT NULL,
    difficulty              INTEGER NOT NULL DEFAULT 1 CHECK (difficulty BETWEEN 1 AND 5),
    status                  TEXT NOT NULL DEFAULT 'AVAILABLE'
        CHECK (status IN ('AVAILABLE', 'IN_PROGRESS', 'COMPLETED', 'APPROVED', 'EXPIRED')),
    reward_experience       BIGINT NOT NULL DEFAULT 0 CHECK (reward_experience >= 0),
    reward_bronze           BIGINT NOT NULL DEFAULT 0 CHECK (reward_bronze >= 0),
    reward_silver           BIGINT NOT NULL DEFAULT 0 CHECK (reward_silver >= 0),
    reward_gold             BIGINT NOT NULL DEFAULT 0 CHECK (reward_gold >= 0),
    assigned_character_id   UUID REFERENCES characters(id) ON DELETE SET NULL,
    created_by              UUID REFERENCES users(id) ON DELETE SET NULL,
    created_at              TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at              TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_quests_guild_status ON quests(guild_id, status);

CREATE TABLE IF NOT EXISTS effects (
    id              UUID PRIMARY KEY,
    character_id    UUID NOT NULL REFERENCES characters(id) ON DELETE CASCADE,
    name            TEXT NOT NULL,
    effect_type     TEXT NOT NULL
        CHECK (effect_type IN ('blessing', 'curse', 'buff', 'debuff', 'disease')),
    duration        INTEGER NOT NULL CHECK (duration >= 0),
    max_duration    INTEGER NOT NULL CHECK (max_duration >= duration),
    multipliers     JSONB NOT NULL DEFAULT '{}'::jsonb,
    restrictions    JSONB NOT NULL DEFAULT '{}'::jsonb,
    bonuses         JSONB NOT NULL DEFAULT '{}'::jsonb,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_effects_character ON effects(character_id);
CREATE INDEX IF NOT EXISTS idx_effects_active ON effects(duration) WHERE duration > 0;

CREATE TABLE IF NOT EXISTS rewards (
    id              UUID PRIMARY KEY,
    guild_id        UUID NOT NULL REFERENCES guilds(id) ON DELETE CASCADE,
    name            TEXT NOT NULL,
    description     TEXT,
    category        TEXT NOT NULL,
    price_bronze    BIGINT NOT NULL DEFAULT 0 CHECK (price_bronze >= 0),
    price_silver    BIGINT NOT NULL DEFAULT 0 CHECK (price_silver >= 0),
    price_gold      BIGINT NOT NULL DEFAULT 0 CHECK (price_gold >= 0),
    stock           INTEGER CHECK (stock IS NULL OR stock >= 0),
    is_active       BOOLEAN NOT NULL DEFAULT TRUE,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_rewards_guild ON rewards(guild_id);

CREATE TABLE IF NOT EXISTS inventory_items (
    id              UUID PRIMARY KEY,
    character_id    UUID NOT NULL REFERENCES characters(id) ON DELETE CASCADE,
    reward_id       UUID REFERENCES rewards(id) ON DELETE SET NULL,
    name            TEXT NOT NULL,
    category        TEXT NOT NULL,
    is_used         BOOLEAN NOT NULL DEFAULT FALSE,
    acquired_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_inventory_character ON inventory_items(character_id);

CREATE TABLE IF NOT EXISTS achievements (
    id              UUID PRIMARY KEY,
    character_id    UUID NOT NULL REFERENCES characters(id) ON DELETE CASCADE,
    key             TEXT NOT NULL,
    title           TEXT NOT NULL,
    unlocked_at     TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (character_id, key)
);

CREATE TABLE IF NOT EXISTS activity_logs (
    id              UUID PRIMARY KEY,
    guild_id        UUID NOT NULL REFERENCES guilds(id) ON DELETE CASCADE,
    character_id    UUID REFERENCES characters(id) ON DELETE CASCADE,
    activity_type   TEXT NOT NULL,
    title           TEXT NOT NULL,
    description     TEXT,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_activity_guild_time ON activity_logs(guild_id, created_at DESC);
CREATE INDEX IF NOT EXISTS idx_activity_character_time ON activity_logs(character_id, created_at DESC);
"#;

pub fn get_migrations() -> Vec<(&'static str, &'static str)> {
    vec![("v1_initial_schema", MIGRATION_V1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_cascades_character_owned_rows() {
        for table in ["effects", "inventory_items", "achievements", "activity_logs"] {
            let start = MIGRATION_V1
                .find(&format!("CREATE TABLE IF NOT EXISTS {} (", table))
                .unwrap_or_else(|| panic!("missing table {table}"));
            let body = &MIGRATION_V1[start..];
            let end = body.find(");").expect("table end");
            assert!(
                body[..end].contains("REFERENCES characters(id) ON DELETE CASCADE"),
                "{table} must cascade with its character"
            );
        }
    }

    #[test]
    fn email_and_code_are_unique() {
        assert!(MIGRATION_V1.contains("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)"));
        assert!(MIGRATION_V1.contains("CREATE UNIQUE INDEX IF NOT EXISTS idx_guilds_code ON guilds(code)"));
        assert_eq!(get_migrations().len(), 1);
    }
}
