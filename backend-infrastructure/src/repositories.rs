pub mod journal;
pub mod memory;
pub mod migrations;
pub mod postgres;

pub use memory::*;
pub use migrations::*;
pub use postgres::*;
