//! Source loading and line classification.

mod classify;
mod reader;

pub use classify::LineClassifier;
pub use reader::read_lines;
