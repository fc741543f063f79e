// Domain error taxonomy
// Rule violations and store outcomes shared by every port

use thiserror::Error;

use crate::value_objects::{Currency, QuestStatus};

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("quest cannot move from {from} to {to}")]
    InvalidTransition { from: QuestStatus, to: QuestStatus },
    #[error("insufficient {currency} coins: have {have}, need {need}")]
    InsufficientFunds {
        currency: Currency,
        have: i64,
        need: i64,
    },
    #[error("reward is out of stock")]
    OutOfStock,
    #[error("price changed: expected {expected} {currency}, current price is {actual}")]
    PriceMismatch {
        currency: Currency,
        expected: i64,
        actual: i64,
    },
    #[error("{0}")]
    Restricted(String),
    #[error("could not generate a unique guild code after {0} attempts")]
    CodeSpaceExhausted(u32),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(entity: &str) -> Self {
        DomainError::NotFound(entity.to_string())
    }
}
