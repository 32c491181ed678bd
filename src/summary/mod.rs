pub mod aggregate;
pub mod records;

pub use aggregate::{group_items, GroupBy, OTHERS_PREFIX};
pub use records::{parse_records, ParseWindowError, SummaryRecord, TimeWindow};

use crate::layout::Item;
use self::aggregate::Tail;

/// What happens to items below the display share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OthersPolicy {
    /// Leave them out (the OG image does this).
    #[default]
    Drop,
    /// Fold them into one "Others (N labels)" item.
    Aggregate,
}

/// Upstream filtering applied before records reach the layout engine.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Absolute changes below this count as no change
    pub change_threshold: f64,
    /// Percentages below this (in magnitude) count as 0
    pub percentage_threshold: f64,
    /// Rows with smaller holdings are ignored entirely
    pub min_total: f64,
    /// Keep at most this many of the largest rows
    pub max_records: Option<usize>,
    /// Fraction of the total below which a row is not shown on its own
    pub min_share: f64,
    pub others: OthersPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            change_threshold: 1.0,
            percentage_threshold: 0.001,
            min_total: 1000.0,
            max_records: Some(100),
            min_share: 0.00005,
            others: OthersPolicy::Drop,
        }
    }
}

/// Percentage to display once the change dead zones are applied.
pub fn effective_percentage(change: f64, percentage: f64, config: &FilterConfig) -> f64 {
    if !change.is_finite() || change.abs() < config.change_threshold {
        return 0.0;
    }
    if !percentage.is_finite() || percentage.abs() < config.percentage_threshold {
        return 0.0;
    }
    percentage
}

/// Turn summary rows into layout items: largest first, dead zones applied,
/// tail below `min_share` dropped or folded per `config.others`.
pub fn prepare_items(
    records: &[SummaryRecord],
    window: TimeWindow,
    config: &FilterConfig,
) -> Vec<Item> {
    let mut rows: Vec<&SummaryRecord> = records
        .iter()
        .filter(|r| {
            let size = r.size();
            size.is_finite() && size > 0.0 && size >= config.min_total
        })
        .collect();
    rows.sort_by(|a, b| b.size().total_cmp(&a.size()));
    if let Some(max) = config.max_records {
        rows.truncate(max);
    }

    let skipped = records.len() - rows.len();
    let total: f64 = rows.iter().map(|r| r.size()).sum();
    let threshold = total * config.min_share;

    let mut items = Vec::with_capacity(rows.len() + 1);
    let mut tail = Tail::default();
    for record in rows {
        let size = record.size();
        if size >= threshold {
            let percentage = effective_percentage(
                window.change(record),
                window.percentage(record),
                config,
            );
            items.push(Item::new(record.label(), size, percentage));
        } else {
            tail.push(size);
        }
    }

    tracing::debug!(
        "Prepared {} items for {} ({} rows skipped, {} below {:.0})",
        items.len(),
        window,
        skipped,
        tail.count,
        threshold
    );

    if config.others == OthersPolicy::Aggregate {
        if let Some(others) = tail.into_item() {
            items.push(others);
        }
    }

    items
}
