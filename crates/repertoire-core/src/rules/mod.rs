pub mod validation;

pub use validation::{ensure_non_negative, optional_text, require_text};
