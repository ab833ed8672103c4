// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{export_command, shell_command, tree_command};
use cmd::common::open_namespace;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "nametree")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML file with namespace settings (default: $NAMETREE_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start from the sample tree instead of an empty root
    #[arg(long, global = true)]
    seed: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Shell,
    /// Print the namespace as a tree and exit
    Tree,
    /// Print the namespace as JSON keyed by directory path and exit
    Export {
        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let ns = open_namespace(cli.config, cli.seed)?;

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell_command(ns, io::stdin().lock(), io::stdout().lock()),
        Commands::Tree => tree_command(ns, io::stdout().lock()),
        Commands::Export { pretty } => export_command(ns, pretty, io::stdout().lock()),
    };

    if let Err(err) = &result {
        let message = format!("{err:#}");
        diagnostics::log_error!("nametree failed: {message}", message: message);
    }
    result
}
