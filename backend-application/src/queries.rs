// Application queries: read paths, each scoped to the caller's guild
pub mod character_queries;
pub mod guild_queries;
pub mod notification_queries;
pub mod quest_queries;
pub mod reward_queries;
pub mod status_queries;
