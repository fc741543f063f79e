// Domain value objects
pub mod activity_type;
pub mod currency;
pub mod effect_type;
pub mod identifiers;
pub mod quest_status;
pub mod role;

pub use activity_type::*;
pub use currency::*;
pub use effect_type::*;
pub use identifiers::*;
pub use quest_status::*;
pub use role::*;
