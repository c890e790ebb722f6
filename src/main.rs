use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use subsystem_assets::commands;
use subsystem_assets::config::{self, Config};
use subsystem_assets::logging;

#[derive(Parser)]
#[command(name = "subsystem")]
#[command(version, about = "Parse, compare and sort semantic versions")]
struct Cli {
    /// JSON configuration file, defaults to config.json in the data directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of a version
    Parse {
        raw: String,
        /// Accept any dotted list of integers
        #[arg(long)]
        loose: bool,
        /// Show build metadata in parentheses
        #[arg(long)]
        display: bool,
    },
    /// Print <, = or > for the first version relative to the second
    Compare {
        a: String,
        b: String,
        /// Ignore build metadata
        #[arg(long)]
        precedence: bool,
    },
    /// Print versions in ascending order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_file = cli
        .config
        .clone()
        .or_else(|| Some(config::config_path()).filter(|path| path.exists()));
    let config = match &config_file {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    let _guard = logging::init(&config.log)?;

    match cli.command {
        Command::Parse {
            raw,
            loose,
            display,
        } => println!("{}", commands::parse(&raw, loose, display)?),
        Command::Compare { a, b, precedence } => {
            println!("{}", commands::compare(&a, &b, precedence)?)
        }
        Command::Sort { versions } => {
            for version in commands::sort(&versions)? {
                println!("{version}");
            }
        }
    }

    Ok(())
}
