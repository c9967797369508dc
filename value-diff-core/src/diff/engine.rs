use serde_json::Value;

use crate::diff::result::DiffOp;
use crate::path::Path;

/// Configures value diff behavior.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Maximum recursion depth. `-1` means unlimited.
    pub max_depth: i32,
    /// Map keys to skip entirely, at any depth.
    pub ignore_keys: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_depth: -1,
            ignore_keys: Vec::new(),
        }
    }
}

/// Diff two nested values with default options.
///
/// Maps compare by key with no order sensitivity; sequences compare
/// index-aligned and are order-sensitive. An empty result means the two
/// values are deeply equal.
pub fn diff(left: &Value, right: &Value) -> Vec<DiffOp> {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Diff two nested values with custom options.
pub fn diff_with_options(left: &Value, right: &Value, opts: &DiffOptions) -> Vec<DiffOp> {
    let mut out = Vec::new();
    diff_value(left, right, &Path::root(), 0, opts, &mut out);
    out
}

fn diff_value(
    left: &Value,
    right: &Value,
    path: &Path,
    depth: i32,
    opts: &DiffOptions,
    out: &mut Vec<DiffOp>,
) {
    if opts.max_depth >= 0 && depth > opts.max_depth {
        return;
    }

    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            for (key, left_child) in left_map {
                if should_ignore(key, opts) {
                    continue;
                }
                let child_path = path.child_key(key);
                match right_map.get(key) {
                    Some(right_child) => {
                        diff_value(left_child, right_child, &child_path, depth + 1, opts, out);
                    }
                    None => out.push(DiffOp::Removed {
                        path: child_path,
                        old: left_child.clone(),
                    }),
                }
            }
            for (key, right_child) in right_map {
                if should_ignore(key, opts) || left_map.contains_key(key) {
                    continue;
                }
                out.push(DiffOp::Added {
                    path: path.child_key(key),
                    new: right_child.clone(),
                });
            }
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            let max = left_items.len().max(right_items.len());
            for i in 0..max {
                let child_path = path.child_index(i);
                match (left_items.get(i), right_items.get(i)) {
                    (Some(l), Some(r)) => diff_value(l, r, &child_path, depth + 1, opts, out),
                    (Some(l), None) => out.push(DiffOp::Removed {
                        path: child_path,
                        old: l.clone(),
                    }),
                    (None, Some(r)) => out.push(DiffOp::Added {
                        path: child_path,
                        new: r.clone(),
                    }),
                    (None, None) => {}
                }
            }
        }
        _ => {
            if left != right {
                out.push(DiffOp::Changed {
                    path: path.clone(),
                    old: left.clone(),
                    new: right.clone(),
                });
            }
        }
    }
}

fn should_ignore(key: &str, opts: &DiffOptions) -> bool {
    opts.ignore_keys.iter().any(|ignore| ignore == key)
}
