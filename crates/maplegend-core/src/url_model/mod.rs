//! Service URL modeling.
//!
//! Canonicalizes user-supplied map service URLs and composes the derived
//! URLs (legend query, symbol images) from a sanitized service URL.

mod compose;
mod sanitize;

pub use compose::{legend_query_url, symbol_image_url};
pub use sanitize::sanitize_service_url;

use crate::error::InputError;

/// Normalizes a raw service URL before it is fetched or composed with.
pub trait UrlSanitizer {
    fn sanitize(&self, raw: &str) -> Result<String, InputError>;
}

/// Default sanitizer: see [`sanitize_service_url`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceUrlSanitizer;

impl UrlSanitizer for ServiceUrlSanitizer {
    fn sanitize(&self, raw: &str) -> Result<String, InputError> {
        sanitize_service_url(raw)
    }
}
