use axum::http::HeaderMap;

/// Read a header as a string. Missing or non-UTF-8 values read as empty —
/// the upstream decides what an empty credential means.
pub(crate) fn header_str(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
