use serde::Serialize;
use serde_json::Value;

use crate::path::Path;

/// A single structural change between two nested values.
///
/// "Left" is the first value handed to the differ, "right" the second.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DiffOp {
    /// Node exists only in the right value.
    Added { path: Path, new: Value },
    /// Node exists only in the left value.
    Removed { path: Path, old: Value },
    /// Node exists in both values with different content.
    Changed { path: Path, old: Value, new: Value },
}

impl DiffOp {
    pub fn path(&self) -> &Path {
        match self {
            DiffOp::Added { path, .. } => path,
            DiffOp::Removed { path, .. } => path,
            DiffOp::Changed { path, .. } => path,
        }
    }
}
