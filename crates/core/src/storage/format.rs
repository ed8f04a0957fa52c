use crate::errors::CoreError;
use crate::models::scenario::ScenarioEntry;

/// MIME type of the exported scenario file.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Serialize the collection into the compact blob kept in storage.
///
/// Layout: a JSON array of scenario objects with camelCase keys, e.g.
/// ```text
/// [{"name":"Notebook","product":"","priceList":1000.0,"currency":"USD",
///   "marginRate":50.0,"quantity":1,"includeVAT":false,"exchangeRate":1000.0,
///   "discount":0.0,"vatRate":21.0,"savedAt":"19/10/2026, 14:05:09"}]
/// ```
pub fn encode_collection(entries: &[ScenarioEntry]) -> Result<String, CoreError> {
    serde_json::to_string(entries)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize scenarios: {e}")))
}

/// Parse a stored blob back into a collection.
pub fn decode_collection(blob: &str) -> Result<Vec<ScenarioEntry>, CoreError> {
    serde_json::from_str(blob)
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize scenarios: {e}")))
}

/// Pretty-printed JSON for the downloadable export file.
pub fn encode_export(entries: &[ScenarioEntry]) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec_pretty(entries)
        .map_err(|e| CoreError::Serialization(format!("Failed to export scenarios: {e}")))
}
