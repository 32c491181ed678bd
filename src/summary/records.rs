use std::fmt;
use std::str::FromStr;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the rich-list summary: the holdings of a labeled wallet group
/// and how they changed over each tracked window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default)]
    pub id: i64,
    /// Display label of the group (exchange, person, category or country)
    #[serde(default)]
    pub grouped_label: Option<CompactString>,
    /// Number of accounts in the group
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_balance: f64,
    #[serde(default)]
    pub total_escrow: f64,
    #[serde(default)]
    pub total_xrp: Option<f64>,
    /// Holdings used for display (total or available, depending on the view)
    #[serde(default)]
    pub show_total_xrp: Option<f64>,
    #[serde(default)]
    pub entity_category: Option<CompactString>,
    #[serde(default)]
    pub entity_country: Option<CompactString>,

    #[serde(default)]
    pub change_1h: Option<f64>,
    #[serde(default)]
    pub percentage_1h: Option<f64>,
    #[serde(default)]
    pub change_3h: Option<f64>,
    #[serde(default)]
    pub percentage_3h: Option<f64>,
    #[serde(default)]
    pub change_24h: Option<f64>,
    #[serde(default)]
    pub percentage_24h: Option<f64>,
    #[serde(default)]
    pub change_168h: Option<f64>,
    #[serde(default)]
    pub percentage_168h: Option<f64>,
    #[serde(default)]
    pub change_720h: Option<f64>,
    #[serde(default)]
    pub percentage_720h: Option<f64>,

    #[serde(default)]
    pub created_at: Option<String>,
}

impl SummaryRecord {
    pub fn label(&self) -> &str {
        self.grouped_label.as_deref().unwrap_or("Unknown")
    }

    /// Displayed holdings; falls back to `total_xrp`, then 0.
    pub fn size(&self) -> f64 {
        self.show_total_xrp.or(self.total_xrp).unwrap_or(0.0)
    }

    pub fn category(&self) -> &str {
        self.entity_category.as_deref().unwrap_or("Other")
    }

    pub fn country(&self) -> &str {
        self.entity_country.as_deref().unwrap_or("Unknown")
    }
}

/// Period over which balance changes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    Hour,
    ThreeHours,
    #[default]
    Day,
    Week,
    Month,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Hour,
        TimeWindow::ThreeHours,
        TimeWindow::Day,
        TimeWindow::Week,
        TimeWindow::Month,
    ];

    pub fn hours(self) -> u32 {
        match self {
            TimeWindow::Hour => 1,
            TimeWindow::ThreeHours => 3,
            TimeWindow::Day => 24,
            TimeWindow::Week => 168,
            TimeWindow::Month => 720,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Hour => "1h",
            TimeWindow::ThreeHours => "3h",
            TimeWindow::Day => "24h",
            TimeWindow::Week => "7d",
            TimeWindow::Month => "30d",
        }
    }

    /// Absolute balance change over this window; missing means no change.
    pub fn change(self, record: &SummaryRecord) -> f64 {
        let value = match self {
            TimeWindow::Hour => record.change_1h,
            TimeWindow::ThreeHours => record.change_3h,
            TimeWindow::Day => record.change_24h,
            TimeWindow::Week => record.change_168h,
            TimeWindow::Month => record.change_720h,
        };
        value.unwrap_or(0.0)
    }

    /// Relative balance change (percent) over this window.
    pub fn percentage(self, record: &SummaryRecord) -> f64 {
        let value = match self {
            TimeWindow::Hour => record.percentage_1h,
            TimeWindow::ThreeHours => record.percentage_3h,
            TimeWindow::Day => record.percentage_24h,
            TimeWindow::Week => record.percentage_168h,
            TimeWindow::Month => record.percentage_720h,
        };
        value.unwrap_or(0.0)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time window '{0}' (expected 1h, 3h, 24h, 7d or 30d)")]
pub struct ParseWindowError(pub String);

impl FromStr for TimeWindow {
    type Err = ParseWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1h" => Ok(TimeWindow::Hour),
            "3h" => Ok(TimeWindow::ThreeHours),
            "24h" | "1d" => Ok(TimeWindow::Day),
            "168h" | "7d" => Ok(TimeWindow::Week),
            "720h" | "30d" => Ok(TimeWindow::Month),
            _ => Err(ParseWindowError(s.to_string())),
        }
    }
}

/// Parse a JSON array of summary rows.
pub fn parse_records(json: &str) -> Result<Vec<SummaryRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
