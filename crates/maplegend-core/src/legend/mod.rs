//! Legend model: service → layers → symbols.
//!
//! A [`LegendMetadata`] tree is produced whole by [`parse_legend`] (or the
//! builder) and is read-only afterwards. Optional fields absent from the
//! source JSON stay `None`.

mod fields;
mod parse;

pub use parse::parse_legend;

use serde::Serialize;

/// Legend of one map service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendMetadata {
    service_url: String,
    layers: Vec<LegendLayerMetadata>,
}

/// One layer entry of a legend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLayerMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) layer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) layer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) layer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_scale: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_scale: Option<i64>,
    pub(crate) symbology: Vec<LegendLayerSymbolMetadata>,
}

/// One legend symbol (image + label) of a layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLayerSymbolMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<String>,
    /// Absolute image URL composed from the service URL and parent layer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) width: Option<i32>,
}

impl LegendMetadata {
    pub(crate) fn new(service_url: String, layers: Vec<LegendLayerMetadata>) -> Self {
        Self {
            service_url,
            layers,
        }
    }

    /// Sanitized URL of the service this legend describes.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Layers in source order.
    pub fn layers(&self) -> &[LegendLayerMetadata] {
        &self.layers
    }

    /// First layer with the given id.
    pub fn find_layer(&self, layer_id: i32) -> Option<&LegendLayerMetadata> {
        self.layers
            .iter()
            .find(|layer| layer.layer_id == Some(layer_id))
    }

    /// First symbol labelled `label` (exact, case-sensitive) in the first layer
    /// with id `layer_id`. Later layers sharing the id are not searched.
    pub fn find_symbol(&self, layer_id: i32, label: &str) -> Option<&LegendLayerSymbolMetadata> {
        self.find_layer(layer_id)?
            .symbology
            .iter()
            .find(|symbol| symbol.label.as_deref() == Some(label))
    }

    /// Total number of symbols across all layers.
    pub fn symbol_count(&self) -> usize {
        self.layers.iter().map(|l| l.symbology.len()).sum()
    }
}

impl LegendLayerMetadata {
    pub fn layer_id(&self) -> Option<i32> {
        self.layer_id
    }

    pub fn layer_name(&self) -> Option<&str> {
        self.layer_name.as_deref()
    }

    /// Classification such as "Feature Layer" or "Raster Layer".
    pub fn layer_type(&self) -> Option<&str> {
        self.layer_type.as_deref()
    }

    /// Lower visibility scale bound; `None` means unbounded.
    pub fn min_scale(&self) -> Option<i64> {
        self.min_scale
    }

    /// Upper visibility scale bound; `None` means unbounded.
    pub fn max_scale(&self) -> Option<i64> {
        self.max_scale
    }

    pub fn symbology(&self) -> &[LegendLayerSymbolMetadata] {
        &self.symbology
    }
}

impl LegendLayerSymbolMetadata {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Inline image payload (base64), verbatim from the service.
    pub fn image_data(&self) -> Option<&str> {
        self.image_data.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn height(&self) -> Option<i32> {
        self.height
    }

    pub fn width(&self) -> Option<i32> {
        self.width
    }
}
