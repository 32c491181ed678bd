use compact_str::CompactString;
use thiserror::Error;

/// Gap (px) subtracted from each tile's width and height so neighbours render apart.
pub const DEFAULT_INSET: f64 = 2.0;

/// A weighted entry to place in the treemap.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub label: CompactString,
    /// Relative weight. Must be positive and finite.
    pub size: f64,
    /// Signed change metric, carried through to the output untouched.
    pub percentage: f64,
}

impl Item {
    pub fn new(label: impl Into<CompactString>, size: f64, percentage: f64) -> Self {
        Self {
            label: label.into(),
            size,
            percentage,
        }
    }
}

/// Axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Area shared with `other` (0 when they only touch or are apart).
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }

    /// `max(w/h, h/w)`; 1.0 is a square.
    pub fn aspect_ratio(&self) -> f64 {
        (self.w / self.h).max(self.h / self.w)
    }
}

/// An item with its position in the container.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub label: CompactString,
    pub size: f64,
    pub percentage: f64,
    pub x: f64,
    pub y: f64,
    /// Tile width minus the inset. May be zero or negative for slivers.
    pub width: f64,
    /// Tile height minus the inset. May be zero or negative for slivers.
    pub height: f64,
    /// The tile before the inset was subtracted. The tiles of one layout
    /// cover the container exactly.
    pub outer: Rect,
}

impl PlacedItem {
    /// True when the inset ate the whole tile; renderers skip these.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Order in which items are fed to the packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemOrder {
    /// Keep the caller's order (usually rank order, largest holder first).
    #[default]
    AsGiven,
    /// Stable sort by size, largest first, as the classical squarified
    /// treemap assumes.
    SizeDescending,
}

/// What to do with items whose size is not a positive finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    #[default]
    Reject,
    /// Skip them with a warning and lay out the rest.
    Drop,
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Subtracted from every tile's width and height (px)
    pub inset: f64,
    pub order: ItemOrder,
    pub invalid_sizes: SizePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inset: DEFAULT_INSET,
            order: ItemOrder::AsGiven,
            invalid_sizes: SizePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("no items to lay out")]
    Empty,
    #[error("container must have positive finite dimensions, got {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },
    #[error("item {index} ('{label}') has invalid size {size}")]
    InvalidSize {
        index: usize,
        label: CompactString,
        size: f64,
    },
    #[error("sum of item sizes is not finite")]
    TotalOverflow,
}

/// Lay out `items` in a `width` x `height` container with the default config.
pub fn layout(items: &[Item], width: f64, height: f64) -> Result<Vec<PlacedItem>, LayoutError> {
    layout_with(items, width, height, &LayoutConfig::default())
}

/// Squarified layout that stacks rows top to bottom, each row spanning the
/// full container width.
///
/// Output order follows the (possibly sorted) input order. Every accepted
/// item appears exactly once.
pub fn layout_with(
    items: &[Item],
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> Result<Vec<PlacedItem>, LayoutError> {
    let valid_dim = |d: f64| d > 0.0 && d.is_finite();
    if !valid_dim(width) || !valid_dim(height) || !valid_dim(width * height) {
        return Err(LayoutError::InvalidContainer { width, height });
    }

    let mut accepted: Vec<&Item> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.size > 0.0 && item.size.is_finite() {
            accepted.push(item);
            continue;
        }
        match config.invalid_sizes {
            SizePolicy::Reject => {
                return Err(LayoutError::InvalidSize {
                    index,
                    label: item.label.clone(),
                    size: item.size,
                });
            }
            SizePolicy::Drop => {
                tracing::warn!(
                    "Squarify: dropping item {} '{}' with invalid size {}",
                    index,
                    item.label,
                    item.size
                );
            }
        }
    }

    if accepted.is_empty() {
        return Err(LayoutError::Empty);
    }

    if config.order == ItemOrder::SizeDescending {
        accepted.sort_by(|a, b| b.size.total_cmp(&a.size));
    }

    let total_size: f64 = accepted.iter().map(|item| item.size).sum();
    if !total_size.is_finite() {
        return Err(LayoutError::TotalOverflow);
    }

    // Normalize weights to pixel area
    let container_area = width * height;
    let scaled: Vec<Scaled<'_>> = accepted
        .iter()
        .map(|&item| Scaled {
            item,
            area: item.size / total_size * container_area,
        })
        .collect();

    let placed = squarify(&scaled, width, config.inset);

    tracing::debug!(
        "Laid out {} items in {:.0}x{:.0} ({} dropped)",
        placed.len(),
        width,
        height,
        items.len() - placed.len()
    );

    Ok(placed)
}

struct Scaled<'a> {
    item: &'a Item,
    /// Share of the container area (px²)
    area: f64,
}

/// The open row is always `items[row_start..next]`, the remaining items are
/// `items[next..]`; each step consumes one item.
fn squarify(items: &[Scaled<'_>], width: f64, inset: f64) -> Vec<PlacedItem> {
    let mut placed = Vec::with_capacity(items.len());
    let mut y = 0.0;
    let mut row_start = 0;

    for next in 1..items.len() {
        let current = worst_ratio(&items[row_start..next], width);
        let grown = worst_ratio(&items[row_start..=next], width);

        // Ties keep growing the row
        if grown > current {
            y += layout_row(&items[row_start..next], width, y, inset, &mut placed);
            row_start = next;
        }
    }

    if row_start < items.len() {
        layout_row(&items[row_start..], width, y, inset, &mut placed);
    }

    placed
}

/// Place `row` left to right at height `y`; returns the row height.
fn layout_row(
    row: &[Scaled<'_>],
    width: f64,
    y: f64,
    inset: f64,
    placed: &mut Vec<PlacedItem>,
) -> f64 {
    let row_area: f64 = row.iter().map(|s| s.area).sum();
    let row_height = row_area / width;

    let mut x = 0.0;
    for s in row {
        // Shares that underflowed to 0 get a zero-width tile
        let item_width = if row_area > 0.0 {
            s.area / row_area * width
        } else {
            0.0
        };
        placed.push(PlacedItem {
            label: s.item.label.clone(),
            size: s.item.size,
            percentage: s.item.percentage,
            x,
            y,
            width: item_width - inset,
            height: row_height - inset,
            outer: Rect {
                x,
                y,
                w: item_width,
                h: row_height,
            },
        });
        x += item_width;
    }

    row_height
}

/// Least square aspect ratio among the tiles `row` would produce.
fn worst_ratio(row: &[Scaled<'_>], width: f64) -> f64 {
    if row.is_empty() {
        return f64::INFINITY;
    }
    let row_area: f64 = row.iter().map(|s| s.area).sum();
    if row_area <= 0.0 {
        return f64::INFINITY;
    }
    let row_height = row_area / width;

    row.iter()
        .map(|s| {
            let item_width = s.area / row_area * width;
            (item_width / row_height).max(row_height / item_width)
        })
        .fold(0.0, f64::max)
}
