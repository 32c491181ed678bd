/// Changes smaller than this (in percent) are shown as flat.
pub const FLAT_CHANGE: f64 = 0.001;

/// Short-scale suffixes used by [`format_compact`].
const UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// English compact notation: `999`, `1.2K`, `12K`, `123K`, `1.5M`, `2B`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let abs = value.abs();
    let mut unit = UNITS.iter().rposition(|&(scale, _)| abs >= scale);

    let (rounded, suffix) = loop {
        let scaled = match unit {
            Some(i) => abs / UNITS[i].0,
            None => abs,
        };
        let rounded = round_compact(scaled);

        // 999.96K rounds to 1000K; promote to 1M
        let next = unit.map_or(0, |i| i + 1);
        if rounded >= 1000.0 && next < UNITS.len() {
            unit = Some(next);
            continue;
        }
        break (rounded, unit.map_or("", |i| UNITS[i].1));
    };

    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    if rounded.fract() == 0.0 {
        format!("{sign}{}{suffix}", rounded as u64)
    } else {
        format!("{sign}{rounded:.1}{suffix}")
    }
}

fn round_compact(v: f64) -> f64 {
    if v >= 10.0 {
        v.round()
    } else {
        (v * 10.0).round() / 10.0
    }
}

/// Signed two-decimal percentage, with `<±0.01%` for tiny moves.
pub fn format_change(percentage: f64) -> String {
    // NaN falls through to flat
    if !(percentage.abs() >= FLAT_CHANGE) {
        return "0%".to_string();
    }
    if percentage.abs() < 0.01 {
        let s = if percentage > 0.0 { "<+0.01%" } else { "<-0.01%" };
        return s.to_string();
    }
    let sign = if percentage > 0.0 { "+" } else { "" };
    format!("{sign}{percentage:.2}%")
}

pub fn change_arrow(percentage: f64) -> &'static str {
    if percentage > 0.0 {
        "↑"
    } else if percentage < 0.0 {
        "↓"
    } else {
        "→"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(7.25), "7.3");
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(999.96), "1K");
        assert_eq!(format_compact(1234.0), "1.2K");
        assert_eq!(format_compact(12_345.0), "12K");
        assert_eq!(format_compact(123_456.0), "123K");
        assert_eq!(format_compact(999_950.0), "1M");
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(2_000_000_000.0), "2B");
        assert_eq!(format_compact(45_600_000_000.0), "46B");
        assert_eq!(format_compact(3e12), "3T");
        assert_eq!(format_compact(-2500.0), "-2.5K");
        assert_eq!(format_compact(-0.01), "0");
    }

    #[test]
    fn change_text() {
        assert_eq!(format_change(0.0), "0%");
        assert_eq!(format_change(0.0005), "0%");
        assert_eq!(format_change(f64::NAN), "0%");
        assert_eq!(format_change(0.005), "<+0.01%");
        assert_eq!(format_change(-0.005), "<-0.01%");
        assert_eq!(format_change(1.234), "+1.23%");
        assert_eq!(format_change(-4.0), "-4.00%");
        assert_eq!(format_change(12.5), "+12.50%");
    }

    #[test]
    fn arrows() {
        assert_eq!(change_arrow(0.0), "→");
        assert_eq!(change_arrow(f64::NAN), "→");
        assert_eq!(change_arrow(0.2), "↑");
        assert_eq!(change_arrow(-3.0), "↓");
    }
}
