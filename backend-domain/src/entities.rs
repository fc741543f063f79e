// Domain entities
pub mod activity;
pub mod character;
pub mod effect;
pub mod guild;
pub mod inventory;
pub mod model;
pub mod quest;
pub mod reward;
pub mod user;

pub use activity::*;
pub use character::*;
pub use effect::*;
pub use guild::*;
pub use inventory::*;
pub use model::*;
pub use quest::*;
pub use reward::*;
pub use user::*;
