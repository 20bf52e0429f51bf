//! Response body decoding.

use crate::error::FetchError;

/// Turns a legend response body into text. Empty or whitespace-only bodies are errors.
pub(crate) fn decode_body(data: Vec<u8>) -> Result<String, FetchError> {
    let text = String::from_utf8(data).map_err(|_| FetchError::InvalidUtf8)?;
    if text.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(text)
}
