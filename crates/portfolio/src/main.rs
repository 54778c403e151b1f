//! Portfolio CLI entry point.

use clap::Parser;

use portfolio::cli::{Cli, Commands};
use portfolio::commands::{self, ServeOptions};
use portfolio::error::Result;
use portfolio::tui::{self, TuiOptions};
use portfolio_core::{load_env, logs_dir, transport_from_config, PortfolioConfig};

fn main() {
    // .env.local and .env, without overriding the real environment
    load_env();

    let cli = Cli::parse();

    let log_dir = cli.logs_to_file().then(|| logs_dir(&cli.state_dir()));
    if let Err(e) = portfolio::init_tracing(cli.log_level(), log_dir.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            assets,
            cors_origins,
        }) => commands::run_serve(ServeOptions {
            host,
            port,
            assets,
            cors_origins,
        }),
        Some(Commands::Tui { seed, all_projects }) => {
            let config = PortfolioConfig::from_env()?;
            let transport = transport_from_config(&config)?;
            tui::run(transport, TuiOptions { seed, all_projects })
        }
        Some(Commands::Render { out, all_projects }) => {
            commands::run_render(out.as_deref(), all_projects)
        }
        // No command = serve with settings from the environment
        None => commands::run_serve(ServeOptions::default()),
    }
}
