pub mod format;

pub use format::{change_arrow, format_change, format_compact};
