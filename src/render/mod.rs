//! Rendering: list normalization and HTML page assembly.

mod html;
mod normalize;
mod options;

pub use html::{to_html, HtmlRenderer};
pub use normalize::insert_list_wrappers;
pub use options::{RenderOptions, StylePreset};
