// Effect modifiers and duration rules
//
// Effects persist their modifiers as free-form JSON maps. Only the keys below are
// recognized; anything else is dropped when an effect is created and ignored on read.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Effect;
use crate::services::progression::{check_amount, MAX_CREDIT_AMOUNT};
use crate::{DomainError, DomainResult};

pub const MAX_MULTIPLIER: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectMultipliers {
    pub experience: f64,
    pub coins: f64,
}

impl Default for EffectMultipliers {
    fn default() -> Self {
        Self {
            experience: 1.0,
            coins: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectRestrictions {
    /// Blocks shop purchases.
    pub shop: bool,
    /// Blocks picking up new quests.
    pub quests: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectBonuses {
    pub experience: i64,
    pub bronze: i64,
    pub silver: i64,
    pub gold: i64,
}

/// Combined modifiers of every active effect on a character.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EffectModifiers {
    pub multipliers: EffectMultipliers,
    pub restrictions: EffectRestrictions,
    pub bonuses: EffectBonuses,
}

impl EffectModifiers {
    pub fn from_effects<'a>(effects: impl IntoIterator<Item = &'a Effect>) -> Self {
        let mut combined = EffectModifiers::default();
        for effect in effects.into_iter().filter(|effect| effect.is_active()) {
            let multipliers: EffectMultipliers = read_lenient(&effect.multipliers);
            let restrictions: EffectRestrictions = read_lenient(&effect.restrictions);
            let bonuses: EffectBonuses = read_lenient(&effect.bonuses);

            combined.multipliers.experience *= multipliers.experience.max(0.0);
            combined.multipliers.coins *= multipliers.coins.max(0.0);
            combined.restrictions.shop |= restrictions.shop;
            combined.restrictions.quests |= restrictions.quests;
            combined.bonuses.experience = stack(combined.bonuses.experience, bonuses.experience);
            combined.bonuses.bronze = stack(combined.bonuses.bronze, bonuses.bronze);
            combined.bonuses.silver = stack(combined.bonuses.silver, bonuses.silver);
            combined.bonuses.gold = stack(combined.bonuses.gold, bonuses.gold);
        }
        combined
    }

    pub fn scale_experience(&self, amount: i64) -> i64 {
        scale(amount, self.multipliers.experience)
    }

    pub fn scale_coins(&self, amount: i64) -> i64 {
        scale(amount, self.multipliers.coins)
    }
}

/// Stored bonuses are clamped to the amount bound before stacking.
fn stack(total: i64, bonus: i64) -> i64 {
    total.saturating_add(bonus.clamp(0, MAX_CREDIT_AMOUNT))
}

fn scale(amount: i64, factor: f64) -> i64 {
    ((amount as f64) * factor).round().max(0.0) as i64
}

/// Reads the recognized keys, ignoring unknown keys and malformed values.
fn read_lenient<T: Serialize + for<'de> Deserialize<'de> + Default>(value: &Value) -> T {
    let Value::Object(map) = value else {
        return T::default();
    };
    let mut out = serde_json::Map::new();
    let defaults = serde_json::to_value(T::default()).unwrap_or(Value::Null);
    if let Value::Object(known) = defaults {
        for (key, default_value) in known {
            let candidate = map.get(&key).cloned().unwrap_or(default_value);
            let mut single = serde_json::Map::new();
            single.insert(key.clone(), candidate.clone());
            if serde_json::from_value::<T>(Value::Object(single)).is_ok() {
                out.insert(key, candidate);
            }
        }
    }
    serde_json::from_value(Value::Object(out)).unwrap_or_default()
}

/// Validated, normalized modifier maps ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierMaps {
    pub multipliers: Value,
    pub restrictions: Value,
    pub bonuses: Value,
}

pub fn normalize_modifiers(
    multipliers: Option<Value>,
    restrictions: Option<Value>,
    bonuses: Option<Value>,
) -> DomainResult<ModifierMaps> {
    let multipliers: EffectMultipliers = read_strict("multipliers", multipliers)?;
    let in_range = |factor: f64| (0.0..=MAX_MULTIPLIER).contains(&factor);
    if !in_range(multipliers.experience) || !in_range(multipliers.coins) {
        return Err(DomainError::Validation(format!(
            "multipliers must be between 0 and {}",
            MAX_MULTIPLIER
        )));
    }
    let restrictions: EffectRestrictions = read_strict("restrictions", restrictions)?;
    let bonuses: EffectBonuses = read_strict("bonuses", bonuses)?;
    check_amount(bonuses.experience, "bonuses.experience")?;
    check_amount(bonuses.bronze, "bonuses.bronze")?;
    check_amount(bonuses.silver, "bonuses.silver")?;
    check_amount(bonuses.gold, "bonuses.gold")?;
    Ok(ModifierMaps {
        multipliers: to_map(&multipliers)?,
        restrictions: to_map(&restrictions)?,
        bonuses: to_map(&bonuses)?,
    })
}

fn read_strict<T: for<'de> Deserialize<'de> + Default>(
    field: &str,
    value: Option<Value>,
) -> DomainResult<T> {
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value)
            .map_err(|err| DomainError::Validation(format!("invalid {}: {}", field, err))),
    }
}

fn to_map<T: Serialize>(value: &T) -> DomainResult<Value> {
    serde_json::to_value(value).map_err(|err| DomainError::Store(err.into()))
}

/// Accepts a JSON integer or an integer string; anything else is rejected.
pub fn parse_duration(value: &Value) -> DomainResult<i32> {
    let parsed = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    let Some(duration) = parsed else {
        return Err(DomainError::Validation(
            "duration must be a non-negative integer".to_string(),
        ));
    };
    if duration < 0 {
        return Err(DomainError::Validation(
            "duration must not be negative".to_string(),
        ));
    }
    i32::try_from(duration)
        .map_err(|_| DomainError::Validation("duration is too large".to_string()))
}

pub fn set_duration(effect: &mut Effect, duration: i32) {
    effect.duration = duration.max(0);
    if effect.duration > effect.max_duration {
        effect.max_duration = effect.duration;
    }
}

pub fn decayed(duration: i32) -> i32 {
    (duration - 1).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::EffectType;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn effect(duration: i32, multipliers: Value, restrictions: Value, bonuses: Value) -> Effect {
        Effect {
            id: Uuid::new_v4(),
            character_id: Uuid::new_v4(),
            name: "Blessing of Tidiness".to_string(),
            effect_type: EffectType::Blessing,
            duration,
            max_duration: duration.max(1),
            multipliers,
            restrictions,
            bonuses,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn duration_accepts_integers_and_integer_strings() {
        assert_eq!(parse_duration(&json!(3)).expect("int"), 3);
        assert_eq!(parse_duration(&json!("7")).expect("string"), 7);
        assert_eq!(parse_duration(&json!(0)).expect("zero"), 0);
    }

    #[test]
    fn duration_rejects_negative_and_non_numeric() {
        for value in [json!(-1), json!("abc"), json!(2.5), json!(null), json!([1])] {
            let err = parse_duration(&value).expect_err("reject");
            assert!(matches!(err, DomainError::Validation(_)), "value {value}");
        }
    }

    #[test]
    fn modifiers_combine_active_effects_only() {
        let active = effect(
            2,
            json!({"experience": 2.0, "unknown": 9}),
            json!({"shop": true}),
            json!({"bronze": 3}),
        );
        let expired = effect(0, json!({"coins": 0.0}), json!({"quests": true}), json!({}));
        let modifiers = EffectModifiers::from_effects([&active, &expired]);
        assert_eq!(modifiers.multipliers.experience, 2.0);
        assert_eq!(modifiers.multipliers.coins, 1.0);
        assert!(modifiers.restrictions.shop);
        assert!(!modifiers.restrictions.quests);
        assert_eq!(modifiers.bonuses.bronze, 3);
        assert_eq!(modifiers.scale_experience(25), 50);
    }

    #[test]
    fn stored_bonuses_stack_without_overflowing() {
        let huge = effect(3, json!({}), json!({}), json!({"bronze": i64::MAX}));
        let modifiers = EffectModifiers::from_effects([&huge, &huge, &huge]);
        assert_eq!(modifiers.bonuses.bronze, 3 * MAX_CREDIT_AMOUNT);
    }

    #[test]
    fn malformed_stored_keys_fall_back_to_defaults() {
        let odd = effect(1, json!({"experience": "lots", "coins": 0.5}), json!(null), json!(7));
        let modifiers = EffectModifiers::from_effects([&odd]);
        assert_eq!(modifiers.multipliers.experience, 1.0);
        assert_eq!(modifiers.multipliers.coins, 0.5);
        assert_eq!(modifiers.scale_coins(5), 3);
    }

    #[test]
    fn normalize_rejects_unknown_keys_and_negative_values() {
        assert!(normalize_modifiers(Some(json!({"speed": 2})), None, None).is_err());
        assert!(normalize_modifiers(Some(json!({"coins": -1.0})), None, None).is_err());
        assert!(normalize_modifiers(None, None, Some(json!({"gold": -2}))).is_err());
        assert!(normalize_modifiers(None, None, Some(json!({"gold": i64::MAX}))).is_err());
        assert!(normalize_modifiers(Some(json!({"coins": 1e300})), None, None).is_err());
        let maps = normalize_modifiers(None, Some(json!({"shop": true})), None).expect("maps");
        assert_eq!(maps.restrictions, json!({"shop": true, "quests": false}));
        assert_eq!(maps.multipliers, json!({"experience": 1.0, "coins": 1.0}));
    }

    #[test]
    fn decay_stops_at_zero_and_set_duration_raises_max() {
        assert_eq!(decayed(2), 1);
        assert_eq!(decayed(0), 0);
        let mut e = effect(1, json!({}), json!({}), json!({}));
        set_duration(&mut e, 5);
        assert_eq!(e.max_duration, 5);
        set_duration(&mut e, 0);
        assert_eq!(e.duration, 0);
        assert!(!e.is_active());
    }
}
