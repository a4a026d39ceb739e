//! Rendered text and text metrics.

pub mod inner_text;
pub mod metrics;

pub use inner_text::{inner_text, node_inner_text};
pub use metrics::{count_chars_and_words, detect_cjk};
