// Currency value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Bronze,
    Silver,
    Gold,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Bronze => "bronze",
            Currency::Silver => "silver",
            Currency::Gold => "gold",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bronze" => Ok(Currency::Bronze),
            "silver" => Ok(Currency::Silver),
            "gold" => Ok(Currency::Gold),
            other => Err(DomainError::Validation(format!("unknown currency '{}'", other))),
        }
    }
}
