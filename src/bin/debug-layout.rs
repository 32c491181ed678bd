/// Diagnostic tool to verify records → items → layout for every time window
use std::path::PathBuf;

use anyhow::Context;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use richmap::layout::{layout_with, ItemOrder, LayoutConfig, LayoutStats};
use richmap::summary::{self, FilterConfig, OthersPolicy, SummaryRecord, TimeWindow};
use richmap::ui::format::format_compact;

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 630.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("richmap=debug".parse()?))
        .init();

    let records = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            summary::parse_records(&json)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => sample_records(),
    };

    println!("=== DIAGNOSTIC: Records → Layout Pipeline ===");
    println!("\n[1] {} summary records", records.len());

    let filter = FilterConfig {
        others: OthersPolicy::Aggregate,
        ..FilterConfig::default()
    };

    // Top 10 items for the default window
    let items = summary::prepare_items(&records, TimeWindow::default(), &filter);
    println!("\n[2] Top 10 of {} items ({}):", items.len(), TimeWindow::default());
    for (i, item) in items.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - {} ({:+.3}%)",
            i,
            item.label,
            format_compact(item.size),
            item.percentage
        );
    }

    // Every window is independent; lay them out in parallel
    let reports: Vec<(TimeWindow, anyhow::Result<[LayoutStats; 2]>)> = TimeWindow::ALL
        .par_iter()
        .map(|&window| (window, window_stats(&records, window, &filter)))
        .collect();

    println!("\n[3] Layout per window ({:.0}x{:.0}):", WIDTH, HEIGHT);
    for (window, report) in reports {
        match report {
            Ok([given, sorted]) => {
                println!(
                    "    {:>4} ({:>3}h): {} rects, coverage {:.4}%, overlaps {}, degenerate {}, worst ratio {:.2} (sorted input: {:.2})",
                    window.label(),
                    window.hours(),
                    given.rects,
                    given.coverage * 100.0,
                    given.overlapping_pairs,
                    given.degenerate,
                    given.worst_aspect_ratio,
                    sorted.worst_aspect_ratio
                );
            }
            Err(e) => println!("    {:>4}: FAILED: {:#}", window.label(), e),
        }
    }

    Ok(())
}

/// Stats for the caller's order and for size-sorted input.
fn window_stats(
    records: &[SummaryRecord],
    window: TimeWindow,
    filter: &FilterConfig,
) -> anyhow::Result<[LayoutStats; 2]> {
    let items = summary::prepare_items(records, window, filter);
    let measure = |order: ItemOrder| -> anyhow::Result<LayoutStats> {
        let config = LayoutConfig {
            order,
            ..LayoutConfig::default()
        };
        let rects = layout_with(&items, WIDTH, HEIGHT, &config)?;
        Ok(LayoutStats::measure(&rects, WIDTH, HEIGHT))
    };
    Ok([measure(ItemOrder::AsGiven)?, measure(ItemOrder::SizeDescending)?])
}

/// Deterministic stand-in for a summary export: a few whales and a long tail.
fn sample_records() -> Vec<SummaryRecord> {
    const LABELS: [&str; 12] = [
        "Ripple", "Binance", "Upbit", "Bitbank", "Bitstamp", "Uphold", "Kraken", "Bithumb",
        "Coinbase", "OKX", "Bitso", "Gatehub",
    ];

    let mut records: Vec<SummaryRecord> = LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let size = 4.0e10 / (i as f64 + 1.0).powf(1.4);
            let pct = ((i as f64 * 1.7).sin() * 9.0 * 100.0).round() / 100.0;
            SummaryRecord {
                id: i as i64,
                grouped_label: Some((*label).into()),
                show_total_xrp: Some(size),
                change_1h: Some(size * pct / 2400.0),
                percentage_1h: Some(pct / 24.0),
                change_24h: Some(size * pct / 100.0),
                percentage_24h: Some(pct),
                change_168h: Some(size * pct / 50.0),
                percentage_168h: Some(pct * 2.0),
                ..SummaryRecord::default()
            }
        })
        .collect();

    for i in 0..40 {
        records.push(SummaryRecord {
            id: 100 + i,
            grouped_label: Some(format!("Wallet {i}").into()),
            show_total_xrp: Some(2.0e6 + i as f64 * 1.0e5),
            ..SummaryRecord::default()
        });
    }

    records
}
