// Activity log type value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    GuildCreated,
    MemberJoined,
    QuestCreated,
    QuestStarted,
    QuestCompleted,
    QuestApproved,
    QuestExpired,
    LevelUp,
    AchievementUnlocked,
    RewardPurchased,
    RewardGranted,
    EffectApplied,
    EffectUpdated,
}

impl ActivityType {
    const ALL: [ActivityType; 13] = [
        ActivityType::GuildCreated,
        ActivityType::MemberJoined,
        ActivityType::QuestCreated,
        ActivityType::QuestStarted,
        ActivityType::QuestCompleted,
        ActivityType::QuestApproved,
        ActivityType::QuestExpired,
        ActivityType::LevelUp,
        ActivityType::AchievementUnlocked,
        ActivityType::RewardPurchased,
        ActivityType::RewardGranted,
        ActivityType::EffectApplied,
        ActivityType::EffectUpdated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::GuildCreated => "GUILD_CREATED",
            ActivityType::MemberJoined => "MEMBER_JOINED",
            ActivityType::QuestCreated => "QUEST_CREATED",
            ActivityType::QuestStarted => "QUEST_STARTED",
            ActivityType::QuestCompleted => "QUEST_COMPLETED",
            ActivityType::QuestApproved => "QUEST_APPROVED",
            ActivityType::QuestExpired => "QUEST_EXPIRED",
            ActivityType::LevelUp => "LEVEL_UP",
            ActivityType::AchievementUnlocked => "ACHIEVEMENT_UNLOCKED",
            ActivityType::RewardPurchased => "REWARD_PURCHASED",
            ActivityType::RewardGranted => "REWARD_GRANTED",
            ActivityType::EffectApplied => "EFFECT_APPLIED",
            ActivityType::EffectUpdated => "EFFECT_UPDATED",
        }
    }
}

impl FromStr for ActivityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| DomainError::Validation(format!("unknown activity type '{}'", s)))
    }
}
