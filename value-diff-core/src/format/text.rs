use crate::diff::result::DiffOp;

/// Format diff operations as plain text, one op per line.
pub fn format_text(ops: &[DiffOp]) -> String {
    let mut lines = Vec::with_capacity(ops.len());
    for op in ops {
        match op {
            DiffOp::Added { path, new } => lines.push(format!("+ {path} = {new}")),
            DiffOp::Removed { path, old } => lines.push(format!("- {path} = {old}")),
            DiffOp::Changed { path, old, new } => {
                lines.push(format!("~ {path}"));
                lines.push(format!("  old: {old}"));
                lines.push(format!("  new: {new}"));
            }
        }
    }
    lines.join("\n")
}

/// Format a simple summary of diff counts.
pub fn format_summary(ops: &[DiffOp]) -> String {
    let mut added = 0;
    let mut removed = 0;
    let mut changed = 0;

    for op in ops {
        match op {
            DiffOp::Added { .. } => added += 1,
            DiffOp::Removed { .. } => removed += 1,
            DiffOp::Changed { .. } => changed += 1,
        }
    }

    format!("added={added} removed={removed} changed={changed}")
}
