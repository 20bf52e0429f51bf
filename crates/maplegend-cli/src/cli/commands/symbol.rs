//! `maplegend symbol <url> <layer-id> <label>` – look up one symbol.

use anyhow::Result;
use maplegend_core::config::LegendConfig;

use super::build_legend;

pub async fn run_symbol(cfg: &LegendConfig, url: &str, layer_id: i32, label: &str) -> Result<()> {
    let legend = build_legend(cfg, url).await?;
    let Some(symbol) = legend.find_symbol(layer_id, label) else {
        anyhow::bail!("symbol {:?} not found in layer {}", label, layer_id);
    };

    match (symbol.url(), symbol.image_data()) {
        (Some(image_url), _) => println!("{}", image_url),
        (None, Some(data)) => println!(
            "inline {} ({} bytes base64)",
            symbol.content_type().unwrap_or("image"),
            data.len()
        ),
        (None, None) => println!("symbol {:?} has no image", label),
    }
    Ok(())
}
