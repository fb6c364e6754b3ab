use serde::de::DeserializeOwned;

use crate::core::FhError;

/// Reads the response body as text, recording it as a fixture in `test-mode`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    key: &str,
    ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    #[cfg(feature = "test-mode")]
    {
        if crate::core::fixtures::recording_enabled() {
            crate::core::fixtures::record_fixture(endpoint, key, ext, &text);
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = (endpoint, key, ext);
    Ok(text)
}

/// Decode a JSON array body, treating any non-array payload as empty.
///
/// Finnhub answers some bad requests with `{"error": ...}` and a 200 status.
pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FhError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
