//! Small shared helpers: the resize debouncer and label formatting.

mod debounce;
mod format;

pub use debounce::Debouncer;
pub use format::{format_area, format_price};
