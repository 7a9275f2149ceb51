//! Issue descriptor loading

use crate::error::{Error, Result};
use crate::types::IssueDescriptor;
use std::path::Path;
use tracing::debug;

/// Load issue descriptors from a JSON file
///
/// The file must hold an array of `{title, body, labels}` objects. Order is
/// preserved, so submission order matches document order.
///
/// The whole file is decoded up front: an entry missing a field rejects the
/// file before any issue is submitted, rather than failing partway through
/// the batch.
pub fn load_descriptors(path: &Path) -> Result<Vec<IssueDescriptor>> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptors = parse_descriptors(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(count = descriptors.len(), path = %path.display(), "loaded issue descriptors");
    Ok(descriptors)
}

/// Decode descriptors from JSON text
pub fn parse_descriptors(contents: &str) -> serde_json::Result<Vec<IssueDescriptor>> {
    serde_json::from_str(contents)
}
