// Character progression: starting stats, reward crediting, level-ups and milestones

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Achievement, Character, Credit, Grant, QuestRewards};
use crate::services::effects::EffectModifiers;
use crate::value_objects::{new_id, GuildId, UserId};
use crate::{DomainError, DomainResult};

pub const STARTING_LEVEL: i32 = 1;
pub const STARTING_BRONZE: i64 = 10;
pub const EXPERIENCE_PER_LEVEL: i64 = 100;
/// Upper bound for any single reward, price, grant or bonus amount.
pub const MAX_CREDIT_AMOUNT: i64 = 1_000_000;

const MILESTONES: [(i32, &str, &str); 4] = [
    (5, "level-5", "Apprentice Adventurer"),
    (10, "level-10", "Seasoned Adventurer"),
    (25, "level-25", "Veteran of the Guild"),
    (50, "level-50", "Legend of the Guild"),
];

pub fn max_experience_for_level(level: i32) -> i64 {
    EXPERIENCE_PER_LEVEL * i64::from(level.max(1))
}

pub fn starting_character(
    user_id: UserId,
    guild_id: GuildId,
    name: &str,
    now: DateTime<Utc>,
) -> Character {
    Character {
        id: new_id(),
        user_id,
        guild_id,
        name: name.to_string(),
        level: STARTING_LEVEL,
        experience: 0,
        max_experience: max_experience_for_level(STARTING_LEVEL),
        bronze_coins: STARTING_BRONZE,
        silver_coins: 0,
        gold_coins: 0,
        streak: 0,
        completed_quests: 0,
        updated_at: now,
    }
}

pub fn check_amount(value: i64, field: &str) -> DomainResult<i64> {
    if (0..=MAX_CREDIT_AMOUNT).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::Validation(format!(
            "{} must be between 0 and {}",
            field, MAX_CREDIT_AMOUNT
        )))
    }
}

fn overflow(field: &str) -> DomainError {
    DomainError::Validation(format!("{} would exceed the largest storable amount", field))
}

fn checked_sum(a: i64, b: i64, field: &str) -> DomainResult<i64> {
    a.checked_add(b).ok_or_else(|| overflow(field))
}

/// Adds experience and applies every level-up it triggers. Returns levels gained.
/// On overflow the character is left untouched.
pub fn add_experience(character: &mut Character, amount: i64) -> DomainResult<i32> {
    let mut experience = checked_sum(character.experience, amount.max(0), "experience")?;
    let mut level = character.level;
    let mut max_experience = character.max_experience;
    let mut gained = 0;
    while experience >= max_experience {
        experience -= max_experience;
        level = level.checked_add(1).ok_or_else(|| overflow("level"))?;
        max_experience = max_experience_for_level(level);
        gained += 1;
    }
    character.experience = experience;
    character.level = level;
    character.max_experience = max_experience;
    Ok(gained)
}

/// Credits an approved quest's rewards, scaled by the character's active effects.
pub fn credit_quest(
    character: &mut Character,
    rewards: &QuestRewards,
    modifiers: &EffectModifiers,
    now: DateTime<Utc>,
) -> DomainResult<Credit> {
    let bonuses = modifiers.bonuses;
    let credit = Credit {
        experience: checked_sum(
            modifiers.scale_experience(rewards.experience),
            bonuses.experience,
            "experience",
        )?,
        bronze: checked_sum(modifiers.scale_coins(rewards.bronze), bonuses.bronze, "bronze")?,
        silver: checked_sum(modifiers.scale_coins(rewards.silver), bonuses.silver, "silver")?,
        gold: checked_sum(modifiers.scale_coins(rewards.gold), bonuses.gold, "gold")?,
        levels_gained: 0,
    };
    let levels_gained = apply_credit(character, &credit)?;
    character.completed_quests = character.completed_quests.saturating_add(1);
    character.streak = character.streak.saturating_add(1);
    character.updated_at = now;
    Ok(Credit {
        levels_gained,
        ..credit
    })
}

/// Credits a direct grant; effects do not modify grants.
pub fn credit_grant(
    character: &mut Character,
    grant: &Grant,
    now: DateTime<Utc>,
) -> DomainResult<Credit> {
    let credit = Credit {
        experience: grant.experience.max(0),
        bronze: grant.bronze.max(0),
        silver: grant.silver.max(0),
        gold: grant.gold.max(0),
        levels_gained: 0,
    };
    let levels_gained = apply_credit(character, &credit)?;
    character.updated_at = now;
    Ok(Credit {
        levels_gained,
        ..credit
    })
}

/// All-or-nothing: balances change only when every sum fits.
fn apply_credit(character: &mut Character, credit: &Credit) -> DomainResult<i32> {
    let bronze = checked_sum(character.bronze_coins, credit.bronze, "bronze")?;
    let silver = checked_sum(character.silver_coins, credit.silver, "silver")?;
    let gold = checked_sum(character.gold_coins, credit.gold, "gold")?;
    let levels_gained = add_experience(character, credit.experience)?;
    character.bronze_coins = bronze;
    character.silver_coins = silver;
    character.gold_coins = gold;
    Ok(levels_gained)
}

/// Achievements for milestone levels crossed when moving from `old_level` to `new_level`.
pub fn milestones_reached(
    character_id: Uuid,
    old_level: i32,
    new_level: i32,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    MILESTONES
        .iter()
        .filter(|(level, _, _)| old_level < *level && new_level >= *level)
        .map(|(_, key, title)| Achievement {
            id: new_id(),
            character_id,
            key: key.to_string(),
            title: title.to_string(),
            unlocked_at: now,
        })
        .collect()
}
