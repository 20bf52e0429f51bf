//! Service URL sanitization.

use crate::error::InputError;

/// Sanitizes a map service URL into its canonical form.
///
/// - Trims surrounding whitespace
/// - Requires an `http` or `https` URL with a host
/// - Drops the query string and fragment
/// - Removes trailing `/` from the path
///
/// The result is safe to append `/{segment}` to and is stable under repeated
/// sanitization.
pub fn sanitize_service_url(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let mut parsed = url::Url::parse(trimmed).map_err(|source| InputError::Malformed {
        url: trimmed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(InputError::UnsupportedScheme(other.to_string())),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(InputError::MissingHost(trimmed.to_string()));
    }

    parsed.set_query(None);
    parsed.set_fragment(None);

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
