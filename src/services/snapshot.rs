use std::fs;
use std::path::Path;
use thiserror::Error;
use validator::{Validate, ValidationErrors};
use crate::models::MatchingSnapshot;

/// Errors that can occur while reading a matching snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot failed validation: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Parse and validate a snapshot from its JSON text
pub fn parse_snapshot(json: &str) -> Result<MatchingSnapshot, SnapshotError> {
    let snapshot: MatchingSnapshot = serde_json::from_str(json)?;

    if let Err(errors) = snapshot.validate() {
        tracing::info!("Snapshot validation failed: field_errors={:?}", errors);
        return Err(errors.into());
    }

    tracing::debug!(
        "Parsed snapshot with {} guests, {} hosts, {} commitments",
        snapshot.guests.len(),
        snapshot.hosts.len(),
        snapshot.commitments.len()
    );

    Ok(snapshot)
}

/// Read a snapshot file from disk
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<MatchingSnapshot, SnapshotError> {
    tracing::debug!("Loading snapshot from: {}", path.as_ref().display());
    let json = fs::read_to_string(path)?;
    parse_snapshot(&json)
}
