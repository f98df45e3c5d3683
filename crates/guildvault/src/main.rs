//! guildvault binary.

use clap::Parser;
use guildvault::cli::{Cli, Commands, handle_backup_command, handle_check_command, resolve_config};
use guildvault::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    match &cli.command {
        Commands::Backup(args) => {
            let config = resolve_config(cli.config.as_deref(), args)?;
            handle_backup_command(&config).await
        }
        Commands::Check(args) => {
            let config = resolve_config(cli.config.as_deref(), args)?;
            handle_check_command(&config)
        }
    }
}
