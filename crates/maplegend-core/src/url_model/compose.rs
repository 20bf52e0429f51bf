//! URLs derived from a sanitized service URL.

/// URL of the JSON legend resource for a map service.
pub fn legend_query_url(service_url: &str) -> String {
    format!("{}/legend?f=json", service_url)
}

/// Absolute URL of a symbol image: `{service}/{layer_id}/images/{relative}`.
pub fn symbol_image_url(service_url: &str, layer_id: i32, relative: &str) -> String {
    format!("{}/{}/images/{}", service_url, layer_id, relative)
}
