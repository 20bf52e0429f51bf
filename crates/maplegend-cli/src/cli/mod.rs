//! CLI for the maplegend legend builder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use maplegend_core::config;

use commands::{run_config, run_show, run_symbol};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "maplegend")]
#[command(about = "Build and query map service legends", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the legend of a map service and print it.
    Show {
        /// Map service URL, e.g. https://host/arcgis/rest/services/Name/MapServer.
        url: String,

        /// Print the legend as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Look up one legend symbol by layer id and label.
    Symbol {
        /// Map service URL.
        url: String,

        /// Layer identifier.
        #[arg(allow_negative_numbers = true)]
        layer_id: i32,

        /// Exact (case-sensitive) symbol label.
        label: String,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Show { url, json } => run_show(&cfg, &url, json).await?,
            CliCommand::Symbol {
                url,
                layer_id,
                label,
            } => run_symbol(&cfg, &url, layer_id, &label).await?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
