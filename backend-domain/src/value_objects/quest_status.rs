// Quest status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestStatus {
    Available,
    InProgress,
    Completed,
    Approved,
    Expired,
}

impl QuestStatus {
    pub const ALL: [QuestStatus; 5] = [
        QuestStatus::Available,
        QuestStatus::InProgress,
        QuestStatus::Completed,
        QuestStatus::Approved,
        QuestStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Available => "AVAILABLE",
            QuestStatus::InProgress => "IN_PROGRESS",
            QuestStatus::Completed => "COMPLETED",
            QuestStatus::Approved => "APPROVED",
            QuestStatus::Expired => "EXPIRED",
        }
    }

    /// Position in listing order; AVAILABLE sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            QuestStatus::Available => 0,
            QuestStatus::InProgress => 1,
            QuestStatus::Completed => 2,
            QuestStatus::Approved => 3,
            QuestStatus::Expired => 4,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QuestStatus::Approved | QuestStatus::Expired)
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        QuestStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| DomainError::Validation(format!("unknown quest status '{}'", s.trim())))
    }
}
