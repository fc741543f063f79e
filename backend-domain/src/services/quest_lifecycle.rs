// Quest lifecycle rules
//
// AVAILABLE -> IN_PROGRESS -> COMPLETED -> APPROVED, and AVAILABLE/IN_PROGRESS -> EXPIRED.
// APPROVED and EXPIRED are terminal. Store adapters call these functions while the
// quest row is locked so the check and the write see the same status.

use chrono::{DateTime, Utc};

use crate::entities::{AssignedCharacter, Character, Quest};
use crate::value_objects::{CharacterId, QuestStatus};
use crate::{DomainError, DomainResult};

pub fn can_transition(from: QuestStatus, to: QuestStatus) -> bool {
    matches!(
        (from, to),
        (QuestStatus::Available, QuestStatus::InProgress)
            | (QuestStatus::InProgress, QuestStatus::Completed)
            | (QuestStatus::Completed, QuestStatus::Approved)
            | (QuestStatus::Available, QuestStatus::Expired)
            | (QuestStatus::InProgress, QuestStatus::Expired)
    )
}

pub fn ensure_transition(from: QuestStatus, to: QuestStatus) -> DomainResult<()> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition { from, to })
    }
}

pub fn start(quest: &mut Quest, character: &Character, now: DateTime<Utc>) -> DomainResult<()> {
    if character.guild_id != quest.guild_id {
        return Err(DomainError::Validation(
            "character does not belong to the quest's guild".to_string(),
        ));
    }
    ensure_transition(quest.status, QuestStatus::InProgress)?;
    quest.status = QuestStatus::InProgress;
    quest.assigned_character_id = Some(character.id);
    quest.assigned_character = Some(AssignedCharacter {
        id: character.id,
        name: character.name.clone(),
    });
    quest.updated_at = now;
    Ok(())
}

pub fn complete(quest: &mut Quest, now: DateTime<Utc>) -> DomainResult<()> {
    ensure_transition(quest.status, QuestStatus::Completed)?;
    quest.status = QuestStatus::Completed;
    quest.updated_at = now;
    Ok(())
}

/// Moves a completed quest to APPROVED and returns the character to credit.
pub fn approve(quest: &mut Quest, now: DateTime<Utc>) -> DomainResult<CharacterId> {
    ensure_transition(quest.status, QuestStatus::Approved)?;
    let character_id = quest.assigned_character_id.ok_or_else(|| {
        DomainError::Validation("completed quest has no assigned character".to_string())
    })?;
    quest.status = QuestStatus::Approved;
    quest.updated_at = now;
    Ok(character_id)
}

/// Expires a quest; returns the character whose streak is broken, if any.
pub fn expire(quest: &mut Quest, now: DateTime<Utc>) -> DomainResult<Option<CharacterId>> {
    ensure_transition(quest.status, QuestStatus::Expired)?;
    quest.status = QuestStatus::Expired;
    quest.updated_at = now;
    Ok(quest.assigned_character_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::QuestRewards;
    use crate::services::progression::starting_character;
    use uuid::Uuid;

    fn quest(status: QuestStatus, guild_id: Uuid) -> Quest {
        let now = Utc::now();
        Quest {
            id: Uuid::new_v4(),
            guild_id,
            title: "Feed the cat".to_string(),
            description: "Twice a day".to_string(),
            quest_type: "daily".to_string(),
            difficulty: 1,
            status,
            rewards: QuestRewards::default(),
            assigned_character_id: None,
            assigned_character: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(can_transition(QuestStatus::Available, QuestStatus::InProgress));
        assert!(can_transition(QuestStatus::InProgress, QuestStatus::Completed));
        assert!(can_transition(QuestStatus::Completed, QuestStatus::Approved));
        assert!(can_transition(QuestStatus::Available, QuestStatus::Expired));
        assert!(can_transition(QuestStatus::InProgress, QuestStatus::Expired));
    }

    #[test]
    fn terminal_states_never_move() {
        for next in QuestStatus::ALL {
            assert!(!can_transition(QuestStatus::Approved, next));
            assert!(!can_transition(QuestStatus::Expired, next));
        }
        assert!(!can_transition(QuestStatus::Completed, QuestStatus::Expired));
        assert!(!can_transition(QuestStatus::Completed, QuestStatus::InProgress));
    }

    #[test]
    fn start_assigns_character_from_same_guild() {
        let guild_id = Uuid::new_v4();
        let character = starting_character(Uuid::new_v4(), guild_id, "Mia", Utc::now());
        let mut quest = quest(QuestStatus::Available, guild_id);
        start(&mut quest, &character, Utc::now()).expect("start");
        assert_eq!(quest.status, QuestStatus::InProgress);
        assert_eq!(quest.assigned_character_id, Some(character.id));
        assert_eq!(quest.assigned_character.as_ref().map(|c| c.name.as_str()), Some("Mia"));
    }

    #[test]
    fn start_rejects_character_from_other_guild() {
        let character = starting_character(Uuid::new_v4(), Uuid::new_v4(), "Mia", Utc::now());
        let mut quest = quest(QuestStatus::Available, Uuid::new_v4());
        let err = start(&mut quest, &character, Utc::now()).expect_err("other guild");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(quest.status, QuestStatus::Available);
    }

    #[test]
    fn approve_twice_is_rejected() {
        let mut quest = quest(QuestStatus::Completed, Uuid::new_v4());
        let character_id = Uuid::new_v4();
        quest.assigned_character_id = Some(character_id);
        assert_eq!(approve(&mut quest, Utc::now()).expect("approve"), character_id);
        let err = approve(&mut quest, Utc::now()).expect_err("second approve");
        assert!(matches!(
            err,
            DomainError::InvalidTransition {
                from: QuestStatus::Approved,
                to: QuestStatus::Approved
            }
        ));
    }

    #[test]
    fn expire_reports_assigned_character() {
        let mut quest = quest(QuestStatus::InProgress, Uuid::new_v4());
        let character_id = Uuid::new_v4();
        quest.assigned_character_id = Some(character_id);
        assert_eq!(expire(&mut quest, Utc::now()).expect("expire"), Some(character_id));
        assert_eq!(quest.status, QuestStatus::Expired);
    }
}
