// Backend Application Layer

pub mod access;
pub mod commands;
pub mod dtos;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;

pub use access::Actor;
pub use error::AppError;
pub use metrics::Metrics;
pub use state::{AppState, Store};
