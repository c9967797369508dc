//! Core structural diffing over nested values.

pub mod engine;
pub mod result;

pub use engine::{diff, diff_with_options, DiffOptions};
pub use result::DiffOp;
