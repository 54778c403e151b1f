//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use portfolio_core::config::{ASSET_DIR_ENV, HOST_ENV, PORT_ENV, STATE_DIR_ENV};

/// Portfolio - serve, export or browse the portfolio site
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to state directory (logs, config)
    #[arg(short, long, env = STATE_DIR_ENV, global = true)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Host to bind to
        #[arg(long, env = HOST_ENV)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long, env = PORT_ENV)]
        port: Option<u16>,

        /// Directory of static assets (resumes, images)
        #[arg(short, long, env = ASSET_DIR_ENV)]
        assets: Option<PathBuf>,

        /// Allowed CORS origin; repeat for several (default: any)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// Browse the portfolio in the terminal
    Tui {
        /// Seed of the background particle field
        #[arg(long, default_value_t = 2025)]
        seed: u64,

        /// Open with every project shown
        #[arg(long)]
        all_projects: bool,
    },

    /// Write the page as a standalone HTML file
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Render the expanded projects list
        #[arg(long)]
        all_projects: bool,
    },
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Returns the state directory, from the flag or the shared default.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(portfolio_core::state_dir)
    }

    /// Whether logs should go to a file instead of the terminal.
    pub fn logs_to_file(&self) -> bool {
        matches!(self.command, Some(Commands::Tui { .. }))
    }
}
