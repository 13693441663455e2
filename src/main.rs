mod cli;
mod config;
mod display;
mod error;
mod journal;
mod models;
mod parser;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "advlog")]
#[command(about = "Keep a timestamped adventure log from chat-style commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Journal document commands
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },
    /// Record a log entry, e.g.: log q "Old Tome" We found it!
    Log {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Actor name to attribute the entry to (defaults to config)
        #[arg(long)]
        actor: Option<String>,

        /// The command text; empty input shows help
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Display the accumulated adventure log
    Show {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize advlog.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum JournalCommands {
    /// Initialize the journal document with an empty log container
    Init {
        /// Path to the config file (defaults to advlog.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Display name for the journal
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Journal { command } => match command {
            JournalCommands::Init { config, name } => cli::journal::init(config, name),
        },
        Commands::Log {
            config,
            actor,
            text,
        } => cli::log::run(config, actor, text),
        Commands::Show { config } => cli::show::run(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
