//! vasedb configuration tool.
//!
//! Resolves the effective server settings the same way the server does at
//! startup and lets an operator inspect, persist or watch them.
//!
//! ```text
//! vasedb [--config <file>] [--base <dir>] show [--json]
//! vasedb [--config <file>] [--base <dir>] init
//! vasedb [--config <file>] [--base <dir>] export <file>
//! vasedb [--config <file>] [--base <dir>] watch
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use vasedb::config::{ConfigFile, SettingsWatcher};
use vasedb::lifecycle::{signals, startup};
use vasedb::observability;

#[derive(Parser)]
#[command(name = "vasedb")]
#[command(about = "Inspect and manage vasedb server settings", long_about = None)]
struct Cli {
    /// Config file to use instead of <base>/etc/config.yaml
    #[arg(short, long, default_value = "")]
    config: String,

    /// Base directory holding etc/config.*
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective settings
    Show {
        /// Print as JSON instead of the one-line summary
        #[arg(long)]
        json: bool,
    },
    /// Write the effective settings to <base>/etc/config.yaml
    Init,
    /// Write the effective settings to the given file (.yaml, .yml or .json)
    Export { path: PathBuf },
    /// Reload on file change or SIGHUP until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    observability::init_logging(cli.verbose)?;

    tracing::info!("vasedb v{} starting", env!("CARGO_PKG_VERSION"));

    let settings = startup::bootstrap(&cli.config, cli.base)?;

    match cli.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json } => {
            let current = settings.current();
            if json {
                println!("{}", String::from_utf8(current.marshal()?)?);
            } else {
                println!("{}", current);
            }
        }
        Commands::Init => {
            let path = settings.saved()?;
            println!("{}", path.display());
        }
        Commands::Export { path } => {
            settings.current().saved_as(&path)?;
            println!("{}", path.display());
        }
        Commands::Watch => {
            let _watcher = SettingsWatcher::new(Arc::clone(&settings)).run()?;
            signals::serve_signals(settings).await?;
        }
    }

    Ok(())
}
