//! Journal - a small, password-gated personal journal served over HTTP.

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use journal_web::app::{init_schema, serve};
use journal_web::cli::{Cli, Commands};
use journal_web::logging::init_logging;
use journal_web::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let settings = Settings::load(&cli)?;
    init_logging(&settings.log_level)?;

    match cli.command {
        Some(Commands::InitDb) => {
            init_schema(&settings.database_path)?;
            tracing::info!(
                path = %settings.database_path.display(),
                "Database initialized"
            );
            Ok(())
        }
        Some(Commands::Serve) | None => serve(settings).await,
        Some(Commands::Completions { .. }) => Ok(()),
    }
}
