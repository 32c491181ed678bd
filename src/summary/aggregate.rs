use std::collections::BTreeMap;

use compact_str::{format_compact, CompactString};

use super::records::{SummaryRecord, TimeWindow};
use super::FilterConfig;
use crate::layout::Item;

/// Label prefix of the synthetic item holding the long tail.
pub const OTHERS_PREFIX: &str = "Others";

/// Running sum of rows too small to show on their own.
#[derive(Debug, Default)]
pub(crate) struct Tail {
    pub size: f64,
    pub count: usize,
}

impl Tail {
    pub fn push(&mut self, size: f64) {
        self.size += size;
        self.count += 1;
    }

    /// The "Others" item, or `None` when nothing was folded.
    pub fn into_item(self) -> Option<Item> {
        if self.count == 0 || self.size <= 0.0 {
            return None;
        }
        let label = format_compact!("{} ({} labels)", OTHERS_PREFIX, self.count);
        Some(Item::new(label, self.size, 0.0))
    }
}

/// Key used to merge rows into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Country,
}

impl GroupBy {
    fn key(self, record: &SummaryRecord) -> &str {
        match self {
            GroupBy::Category => record.category(),
            GroupBy::Country => record.country(),
        }
    }
}

#[derive(Default)]
struct GroupTotal {
    size: f64,
    change: f64,
}

/// Sum holdings per category or country.
///
/// A group's percentage is its summed change relative to its balance before
/// the change (`size - change`), with the configured dead zones applied.
/// Groups come out largest first; equal sizes are ordered by name.
pub fn group_items(
    records: &[SummaryRecord],
    by: GroupBy,
    window: TimeWindow,
    config: &FilterConfig,
) -> Vec<Item> {
    let mut groups: BTreeMap<CompactString, GroupTotal> = BTreeMap::new();

    for record in records {
        let size = record.size();
        if !size.is_finite() || size <= 0.0 || size < config.min_total {
            continue;
        }
        let change = window.change(record);
        let total = groups.entry(CompactString::from(by.key(record))).or_default();
        total.size += size;
        if change.is_finite() && change.abs() >= config.change_threshold {
            total.change += change;
        }
    }

    let mut items: Vec<Item> = groups
        .into_iter()
        .map(|(name, total)| {
            let previous = total.size - total.change;
            let percentage = if previous > 0.0 {
                total.change / previous * 100.0
            } else {
                0.0
            };
            let percentage = if percentage.abs() < config.percentage_threshold {
                0.0
            } else {
                percentage
            };
            Item::new(name, total.size, percentage)
        })
        .collect();

    // Stable: BTreeMap order breaks ties by name
    items.sort_by(|a, b| b.size.total_cmp(&a.size));

    tracing::debug!("Grouped {} records into {} {:?} groups", records.len(), items.len(), by);

    items
}
