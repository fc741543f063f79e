// Effect entity
// Temporary buff/debuff; rows with duration 0 are kept for history

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::value_objects::{CharacterId, EffectId, EffectType};

#[derive(Debug, Clone)]
pub struct Effect {
    pub id: EffectId,
    pub character_id: CharacterId,
    pub name: String,
    pub effect_type: EffectType,
    pub duration: i32,
    pub max_duration: i32,
    pub multipliers: Value,
    pub restrictions: Value,
    pub bonuses: Value,
    pub created_at: DateTime<Utc>,
}

impl Effect {
    pub fn is_active(&self) -> bool {
        self.duration > 0
    }
}

impl Serialize for Effect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Effect", 11)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("characterId", &self.character_id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", &self.effect_type)?;
        state.serialize_field("duration", &self.duration)?;
        state.serialize_field("maxDuration", &self.max_duration)?;
        state.serialize_field("isActive", &self.is_active())?;
        state.serialize_field("multipliers", &self.multipliers)?;
        state.serialize_field("restrictions", &self.restrictions)?;
        state.serialize_field("bonuses", &self.bonuses)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.end()
    }
}

#[derive(Debug, Clone)]
pub struct NewEffect {
    pub character_id: CharacterId,
    pub name: String,
    pub effect_type: EffectType,
    pub duration: i32,
    pub multipliers: Value,
    pub restrictions: Value,
    pub bonuses: Value,
}
