//! Legend JSON → [`LegendMetadata`], built bottom-up.
//!
//! Symbols are constructed before their layer, layers before the root; no
//! partially-populated tree is ever observable.

use serde_json::Value;

use super::fields::{
    as_object, field_path, index_path, optional_array, optional_int, optional_str,
};
use super::{LegendLayerMetadata, LegendLayerSymbolMetadata, LegendMetadata};
use crate::error::ParseError;
use crate::url_model::symbol_image_url;

/// Parses the legend JSON of the service at `service_url` (already sanitized).
///
/// A missing `layers` array yields an empty legend. Malformed JSON, wrongly
/// typed nodes and unparsable integers fail the whole parse.
pub fn parse_legend(service_url: &str, json: &str) -> Result<LegendMetadata, ParseError> {
    let root: Value = serde_json::from_str(json)?;
    let root = as_object(&root, "$")?;

    let layers = match optional_array(root, "layers", "")? {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse_layer(service_url, item, &index_path("layers", i)))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(LegendMetadata::new(service_url.to_string(), layers))
}

fn parse_layer(
    service_url: &str,
    value: &Value,
    path: &str,
) -> Result<LegendLayerMetadata, ParseError> {
    let obj = as_object(value, path)?;
    let layer_id = optional_int::<i32>(obj, "layerId", path)?;

    let symbology = match optional_array(obj, "legend", path)? {
        Some(items) => {
            let legend_path = field_path(path, "legend");
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    parse_symbol(service_url, layer_id, item, &index_path(&legend_path, i))
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        None => Vec::new(),
    };

    Ok(LegendLayerMetadata {
        layer_id,
        layer_name: optional_str(obj, "layerName", path)?,
        layer_type: optional_str(obj, "layerType", path)?,
        min_scale: optional_int(obj, "minScale", path)?,
        max_scale: optional_int(obj, "maxScale", path)?,
        symbology,
    })
}

fn parse_symbol(
    service_url: &str,
    layer_id: Option<i32>,
    value: &Value,
    path: &str,
) -> Result<LegendLayerSymbolMetadata, ParseError> {
    let obj = as_object(value, path)?;

    let url = match optional_str(obj, "url", path)? {
        Some(relative) => {
            let layer_id = layer_id.ok_or_else(|| ParseError::OrphanSymbolUrl {
                path: field_path(path, "url"),
            })?;
            Some(symbol_image_url(service_url, layer_id, &relative))
        }
        None => None,
    };

    Ok(LegendLayerSymbolMetadata {
        label: optional_str(obj, "label", path)?,
        url,
        image_data: optional_str(obj, "imageData", path)?,
        content_type: optional_str(obj, "contentType", path)?,
        height: optional_int(obj, "height", path)?,
        width: optional_int(obj, "width", path)?,
    })
}
