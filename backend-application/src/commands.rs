// Application commands: validate input, authorize the actor, call the store
pub mod effect_commands;
pub mod guild_commands;
pub mod input;
pub mod onboarding_commands;
pub mod quest_commands;
pub mod reward_commands;
pub mod session_commands;
pub mod user_commands;
