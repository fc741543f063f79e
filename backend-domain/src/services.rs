// Domain services: pure state-transition rules shared by every store adapter
pub mod effects;
pub mod guild_code;
pub mod progression;
pub mod quest_lifecycle;
pub mod shop;

pub use effects::{EffectModifiers, ModifierMaps};
pub use guild_code::{is_valid_guild_code, normalize_guild_code, GuildCodeGenerator};
