// Public library interface for richmap-rs
// The binaries drive the same pipeline: summary -> layout -> render

pub mod layout;
pub mod render;
pub mod summary;
pub mod ui;
