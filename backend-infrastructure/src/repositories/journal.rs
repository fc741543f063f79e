// Activity entries written alongside store mutations

use backend_domain::{
    Achievement, ActivityType, Character, Credit, Currency, Effect, Guild, NewActivity, Quest,
    Reward, User,
};

pub fn guild_created(guild: &Guild, user: &User, character: &Character) -> NewActivity {
    NewActivity::new(
        guild.id,
        ActivityType::GuildCreated,
        format!("{} founded {}", user.name, guild.name),
    )
    .for_character(character.id)
}

pub fn member_joined(guild: &Guild, user: &User, character: &Character) -> NewActivity {
    NewActivity::new(
        guild.id,
        ActivityType::MemberJoined,
        format!("{} joined {}", user.name, guild.name),
    )
    .for_character(character.id)
}

pub fn quest_created(quest: &Quest) -> NewActivity {
    NewActivity::new(
        quest.guild_id,
        ActivityType::QuestCreated,
        format!("New quest: {}", quest.title),
    )
}

pub fn quest_started(quest: &Quest, character: &Character) -> NewActivity {
    NewActivity::new(
        quest.guild_id,
        ActivityType::QuestStarted,
        format!("{} started {}", character.name, quest.title),
    )
    .for_character(character.id)
}

pub fn quest_completed(quest: &Quest) -> NewActivity {
    let entry = NewActivity::new(
        quest.guild_id,
        ActivityType::QuestCompleted,
        format!("Quest completed: {}", quest.title),
    );
    match quest.assigned_character_id {
        Some(character_id) => entry.for_character(character_id),
        None => entry,
    }
}

pub fn quest_expired(quest: &Quest) -> NewActivity {
    let entry = NewActivity::new(
        quest.guild_id,
        ActivityType::QuestExpired,
        format!("Quest expired: {}", quest.title),
    );
    match quest.assigned_character_id {
        Some(character_id) => entry.for_character(character_id),
        None => entry,
    }
}

/// Approval entry plus level-up and achievement entries for the same character.
pub fn quest_approved(
    quest: &Quest,
    character: &Character,
    credit: &Credit,
    unlocked: &[Achievement],
) -> Vec<NewActivity> {
    let mut entries = vec![NewActivity::new(
        quest.guild_id,
        ActivityType::QuestApproved,
        format!("{} earned rewards for {}", character.name, quest.title),
    )
    .for_character(character.id)
    .with_description(describe_credit(credit))];
    entries.extend(progress_entries(character, credit, unlocked));
    entries
}

pub fn reward_granted(
    character: &Character,
    credit: &Credit,
    reason: Option<&str>,
    unlocked: &[Achievement],
) -> Vec<NewActivity> {
    let description = match reason {
        Some(reason) => format!("{} ({})", describe_credit(credit), reason),
        None => describe_credit(credit),
    };
    let mut entries = vec![NewActivity::new(
        character.guild_id,
        ActivityType::RewardGranted,
        format!("{} received a reward", character.name),
    )
    .for_character(character.id)
    .with_description(description)];
    entries.extend(progress_entries(character, credit, unlocked));
    entries
}

pub fn reward_purchased(
    character: &Character,
    reward: &Reward,
    cost: i64,
    currency: Currency,
) -> NewActivity {
    NewActivity::new(
        character.guild_id,
        ActivityType::RewardPurchased,
        format!("{} bought {}", character.name, reward.name),
    )
    .for_character(character.id)
    .with_description(format!("{} {}", cost, currency))
}

pub fn effect_applied(character: &Character, effect: &Effect) -> NewActivity {
    NewActivity::new(
        character.guild_id,
        ActivityType::EffectApplied,
        format!("{} is affected by {}", character.name, effect.name),
    )
    .for_character(character.id)
    .with_description(format!("{} for {}", effect.effect_type, effect.duration))
}

pub fn effect_updated(character: &Character, effect: &Effect) -> NewActivity {
    NewActivity::new(
        character.guild_id,
        ActivityType::EffectUpdated,
        format!("{} now lasts {}", effect.name, effect.duration),
    )
    .for_character(character.id)
}

fn progress_entries(
    character: &Character,
    credit: &Credit,
    unlocked: &[Achievement],
) -> Vec<NewActivity> {
    let mut entries = Vec::new();
    if credit.levels_gained > 0 {
        entries.push(
            NewActivity::new(
                character.guild_id,
                ActivityType::LevelUp,
                format!("{} reached level {}", character.name, character.level),
            )
            .for_character(character.id),
        );
    }
    for achievement in unlocked {
        entries.push(
            NewActivity::new(
                character.guild_id,
                ActivityType::AchievementUnlocked,
                format!("{} unlocked {}", character.name, achievement.title),
            )
            .for_character(character.id),
        );
    }
    entries
}

fn describe_credit(credit: &Credit) -> String {
    format!(
        "+{} exp, +{} bronze, +{} silver, +{} gold",
        credit.experience, credit.bronze, credit.silver, credit.gold
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::progression::starting_character;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn level_up_and_achievements_follow_the_approval_entry() {
        let mut character = starting_character(Uuid::new_v4(), Uuid::new_v4(), "Leo", Utc::now());
        character.level = 5;
        let credit = Credit {
            experience: 400,
            levels_gained: 4,
            ..Credit::default()
        };
        let unlocked = vec![Achievement {
            id: Uuid::new_v4(),
            character_id: character.id,
            key: "level-5".to_string(),
            title: "Apprentice Adventurer".to_string(),
            unlocked_at: Utc::now(),
        }];
        let entries = reward_granted(&character, &credit, Some("birthday"), &unlocked);
        let types = entries.iter().map(|e| e.activity_type).collect::<Vec<_>>();
        assert_eq!(
            types,
            vec![
                ActivityType::RewardGranted,
                ActivityType::LevelUp,
                ActivityType::AchievementUnlocked
            ]
        );
        assert!(entries[0]
            .description
            .as_deref()
            .is_some_and(|text| text.ends_with("(birthday)")));
    }
}
