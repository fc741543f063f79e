pub mod context;
pub mod lifecycle;
pub mod logging;

pub use lifecycle::{build_router_with_layers, run_migrations, serve};
pub use logging::{console_subscriber, init_logging};
