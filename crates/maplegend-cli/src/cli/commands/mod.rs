//! CLI command handlers, one file per command.

mod config;
mod show;
mod symbol;

pub use config::run_config;
pub use show::run_show;
pub use symbol::run_symbol;

use anyhow::{Context, Result};
use maplegend_core::config::LegendConfig;
use maplegend_core::{LegendBuilder, LegendMetadata};

/// Builds a legend on the blocking pool (curl blocks the calling thread).
async fn build_legend(cfg: &LegendConfig, url: &str) -> Result<LegendMetadata> {
    let builder = LegendBuilder::from_config(cfg);
    let url = url.to_string();
    let legend = tokio::task::spawn_blocking(move || builder.build(&url))
        .await
        .context("legend build task join")??;
    Ok(legend)
}
