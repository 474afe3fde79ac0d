use super::{ProjectSnapshot, SNAPSHOT_VERSION};
use crate::error::GlossaError;

/// Serialize a snapshot to pretty-printed JSON
pub fn to_json(snapshot: &ProjectSnapshot) -> Result<String, GlossaError> {
    serde_json::to_string_pretty(snapshot)
        .map_err(|e| GlossaError::Engine(format!("Failed to serialize snapshot: {}", e)))
}

/// Deserialize a snapshot from JSON, rejecting unknown format versions
pub fn from_json(input: &str) -> Result<ProjectSnapshot, GlossaError> {
    let snapshot: ProjectSnapshot = serde_json::from_str(input)
        .map_err(|e| GlossaError::Engine(format!("Failed to parse snapshot: {}", e)))?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(GlossaError::Engine(format!(
            "Unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }

    Ok(snapshot)
}
