pub mod decay_service;
pub mod password_service;

pub use decay_service::*;
pub use password_service::*;
