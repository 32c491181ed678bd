pub mod squarify;
pub mod stats;

pub use squarify::{
    layout, layout_with, Item, ItemOrder, LayoutConfig, LayoutError, PlacedItem, Rect, SizePolicy,
    DEFAULT_INSET,
};
pub use stats::LayoutStats;
