// Request and response payloads of the JSON API (camelCase on the wire)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use backend_domain::{Character, Onboarding, Price, QuestRewards, User};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildmasterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub guild_name: Option<String>,
    pub guild_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGuildRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub guild_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteRequest {
    pub email: Option<String>,
    pub guild_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    #[serde(flatten)]
    pub onboarding: Onboarding,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestRequest {
    pub guild_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub quest_type: Option<String>,
    pub difficulty: Option<i32>,
    pub rewards: Option<QuestRewards>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuestRequest {
    pub character_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDurationRequest {
    pub duration: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyEffectRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub effect_type: Option<String>,
    pub duration: Option<Value>,
    pub multipliers: Option<Value>,
    pub restrictions: Option<Value>,
    pub bonuses: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardRequest {
    pub guild_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub character_id: Option<Uuid>,
    pub currency: Option<String>,
    pub cost: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantRequest {
    #[serde(default, alias = "exp")]
    pub experience: i64,
    #[serde(default)]
    pub bronze: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub gold: i64,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantResponse {
    pub character: Character,
    pub credited: backend_domain::Credit,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterQuery {
    pub character_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildQuery {
    pub guild_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestListQuery {
    pub guild_id: Option<Uuid>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    pub user_id: Option<Uuid>,
    pub guild_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<backend_domain::TableCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_quest_payload_reads_type_and_partial_rewards() {
        let payload: CreateQuestRequest = serde_json::from_value(json!({
            "guildId": "6f1c2a7e-8f59-4a53-9d1d-2d2f0f8f4b11",
            "title": "Dishes",
            "description": "Wash the dishes",
            "type": "daily",
            "rewards": { "exp": 50, "bronze": 5 }
        }))
        .expect("parse quest payload");
        assert_eq!(payload.quest_type.as_deref(), Some("daily"));
        assert_eq!(payload.difficulty, None);
        let rewards = payload.rewards.expect("rewards");
        assert_eq!(rewards.experience, 50);
        assert_eq!(rewards.bronze, 5);
        assert_eq!(rewards.silver, 0);
        assert_eq!(rewards.gold, 0);
    }

    #[test]
    fn grant_payload_defaults_missing_amounts() {
        let payload: GrantRequest =
            serde_json::from_value(json!({ "bronze": 3 })).expect("parse grant");
        assert_eq!(payload.bronze, 3);
        assert_eq!(payload.experience, 0);
        assert_eq!(payload.reason, None);
    }
}
