pub mod logging;
pub mod text;

pub use text::{normalize_response, normalize_whitespace, truncate_text};
