//! Generic structural-diff primitives for nested JSON-like values.

pub mod diff;
pub mod format;
pub mod path;

pub use diff::{diff, diff_with_options, DiffOp, DiffOptions};
pub use format::{format_json, format_summary, format_text};
pub use path::{Path, PathSegment};
