//! Utility modules for common patterns.

pub mod formatting;
pub mod signal_ext;

pub use formatting::{capitalize, format_height, format_weight, join_names};
pub use signal_ext::SignalExt;
