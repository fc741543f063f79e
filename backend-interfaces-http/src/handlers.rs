pub mod character_handlers;
pub mod effect_handlers;
pub mod guild_handlers;
pub mod onboarding_handlers;
pub mod quest_handlers;
pub mod reward_handlers;
pub mod status_handlers;
pub mod user_handlers;

pub use character_handlers::*;
pub use effect_handlers::*;
pub use guild_handlers::*;
pub use onboarding_handlers::*;
pub use quest_handlers::*;
pub use reward_handlers::*;
pub use status_handlers::*;
pub use user_handlers::*;
