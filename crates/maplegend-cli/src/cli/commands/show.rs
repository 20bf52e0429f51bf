//! `maplegend show <url>` – build and print a legend.

use anyhow::Result;
use maplegend_core::config::LegendConfig;
use maplegend_core::LegendMetadata;

use super::build_legend;

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_legend(legend: &LegendMetadata) {
    println!("Service: {}", legend.service_url());
    for layer in legend.layers() {
        println!(
            "Layer {}  {}  type={}  scale={}..{}",
            opt(layer.layer_id()),
            layer.layer_name().unwrap_or(""),
            opt(layer.layer_type()),
            opt(layer.min_scale()),
            opt(layer.max_scale()),
        );
        for symbol in layer.symbology() {
            println!(
                "  {:<32}  {}",
                symbol.label().unwrap_or(""),
                symbol
                    .url()
                    .or(symbol.content_type().filter(|_| symbol.image_data().is_some()))
                    .unwrap_or("-")
            );
        }
    }
}

pub async fn run_show(cfg: &LegendConfig, url: &str, json: bool) -> Result<()> {
    let legend = build_legend(cfg, url).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&legend)?);
    } else {
        print_legend(&legend);
    }
    Ok(())
}
