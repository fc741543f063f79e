// Activity log entity
// Append-only audit trail, newest first when displayed

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::{ActivityType, CharacterId, GuildId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: Uuid,
    pub guild_id: GuildId,
    pub character_id: Option<CharacterId>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub guild_id: GuildId,
    pub character_id: Option<CharacterId>,
    pub activity_type: ActivityType,
    pub title: String,
    pub description: Option<String>,
}

impl NewActivity {
    pub fn new(guild_id: GuildId, activity_type: ActivityType, title: impl Into<String>) -> Self {
        Self {
            guild_id,
            character_id: None,
            activity_type,
            title: title.into(),
            description: None,
        }
    }

    pub fn for_character(mut self, character_id: CharacterId) -> Self {
        self.character_id = Some(character_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
