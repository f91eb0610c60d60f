//! Query-string serialization for GET calls.

use serde::Serialize;

use crate::error::Result;

/// Serialize a flat map or struct into `key=value&key=value`.
///
/// Values are form-urlencoded. `None` fields are skipped; nested maps and
/// sequences are rejected with a serialization error.
pub fn encode_query<T: Serialize + ?Sized>(query: &T) -> Result<String> {
    Ok(serde_urlencoded::to_string(query)?)
}

/// Append the encoded `query` to `url`.
///
/// Returns `url` unchanged when the query encodes to nothing.
pub fn append_query<T: Serialize + ?Sized>(url: &str, query: &T) -> Result<String> {
    let params = encode_query(query)?;
    if params.is_empty() {
        return Ok(url.to_string());
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{url}{separator}{params}"))
}
