//! `maplegend config` – show config location and values.

use anyhow::Result;
use maplegend_core::config::{self, LegendConfig};

pub fn run_config(cfg: &LegendConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    println!("connect_timeout_secs = {}", cfg.connect_timeout_secs);
    println!("timeout_secs = {}", cfg.timeout_secs);
    println!(
        "proxy = {}",
        cfg.effective_proxy().unwrap_or("(disabled)")
    );
    if let Some(agent) = &cfg.user_agent {
        println!("user_agent = {}", agent);
    }
    Ok(())
}
