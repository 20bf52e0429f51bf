//! Legend metadata for ArcGIS-style map services.
//!
//! [`LegendBuilder::build`] sanitizes a service URL, fetches its JSON legend
//! and turns it into a [`LegendMetadata`] tree that can be queried with
//! [`LegendMetadata::find_symbol`].

pub mod config;
pub mod logging;

pub mod builder;
pub mod error;
pub mod fetch;
pub mod legend;
pub mod url_model;

pub use builder::LegendBuilder;
pub use error::{FetchError, InputError, LegendError, ParseError};
pub use legend::{LegendLayerMetadata, LegendLayerSymbolMetadata, LegendMetadata};
