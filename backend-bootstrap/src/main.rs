use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use backend_bootstrap::{init_logging, run_migrations, serve};
use backend_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "fguild-backend")]
#[command(about = "The F Guild backend server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config warnings are printed before the file appender exists.
    let config = {
        let _console = tracing::subscriber::set_default(backend_bootstrap::console_subscriber());
        AppConfig::load(args.config.as_deref()).await?
    };
    let _log_guard = init_logging(config.log_dir.as_deref())?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Migrate => run_migrations(config).await,
    }
}
