use crate::diff::result::DiffOp;

/// Format diff operations as JSON.
pub fn format_json(ops: &[DiffOp]) -> String {
    serde_json::to_string_pretty(ops).unwrap_or_else(|_| "[]".to_string())
}
