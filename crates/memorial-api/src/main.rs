//! Memorial client entry point.
//!
//! Binary name: `memorial`
//!
//! Parses CLI arguments, sets up tracing, loads configuration, then
//! dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use memorial_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.otel, verbosity_filter(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!(e))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "memorial", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;
    tracing::debug!(environment = %state.config.environment, "memorial client starting");

    let result = match cli.command {
        Commands::Submit(args) => cli::submit::submit(&state, args, cli.json, cli.quiet).await,
        Commands::Clock { ticks } => cli::clock::clock(ticks, cli.json).await,
        Commands::Config => cli::config::show(&state, cli.json).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}
