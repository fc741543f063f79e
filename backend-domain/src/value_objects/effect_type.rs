// Effect type value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    Blessing,
    Curse,
    Buff,
    Debuff,
    Disease,
}

impl EffectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Blessing => "blessing",
            EffectType::Curse => "curse",
            EffectType::Buff => "buff",
            EffectType::Debuff => "debuff",
            EffectType::Disease => "disease",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blessing" => Ok(EffectType::Blessing),
            "curse" => Ok(EffectType::Curse),
            "buff" => Ok(EffectType::Buff),
            "debuff" => Ok(EffectType::Debuff),
            "disease" => Ok(EffectType::Disease),
            other => Err(DomainError::Validation(format!("unknown effect type '{}'", other))),
        }
    }
}
