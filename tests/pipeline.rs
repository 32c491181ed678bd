use richmap::layout::{LayoutConfig, LayoutStats};
use richmap::render::{preview_scene, render_svg, Color, ColorScale, SceneConfig};
use richmap::summary::{self, FilterConfig, OthersPolicy, TimeWindow};

const RECORDS: &str = r#"[
    {"id": 1, "grouped_label": "Ripple", "show_total_xrp": 40000000000,
     "entity_category": "Issuer", "entity_country": "US",
     "change_24h": -150000000, "percentage_24h": -0.37},
    {"id": 2, "grouped_label": "Binance", "show_total_xrp": 3200000000,
     "entity_category": "Exchange", "entity_country": null,
     "change_24h": 48000000, "percentage_24h": 1.52},
    {"id": 3, "grouped_label": "Upbit", "show_total_xrp": 2100000000,
     "entity_category": "Exchange", "entity_country": "KR",
     "change_24h": 0.4, "percentage_24h": 0.0},
    {"id": 4, "grouped_label": "Dust", "show_total_xrp": 1500000,
     "change_24h": null, "percentage_24h": null},
    {"id": 5, "grouped_label": "Dust 2", "show_total_xrp": 1200000},
    {"id": 6, "grouped_label": "Below min", "show_total_xrp": 500}
]"#;

#[test]
fn records_render_to_a_complete_preview() {
    let records = summary::parse_records(RECORDS).unwrap();
    assert_eq!(records.len(), 6);

    let items = summary::prepare_items(&records, TimeWindow::Day, &FilterConfig::default());
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["Ripple", "Binance", "Upbit"]);
    assert_eq!(items[2].percentage, 0.0);

    let config = SceneConfig::default();
    let scene = preview_scene(&items, &LayoutConfig::default(), &ColorScale::og(), &config).unwrap();
    assert_eq!(scene.boxes.len(), 3);
    assert_eq!(scene.skipped, 0);

    let svg = render_svg(&scene);
    assert!(svg.contains(">Ripple</text>"));
    assert!(svg.contains("40B XRP"));
    assert!(svg.contains("↓ -0.37%"));
    assert!(svg.contains("↑ +1.52%"));
}

#[test]
fn background_from_hex_reaches_the_document() {
    let records = summary::parse_records(RECORDS).unwrap();
    let items = summary::prepare_items(&records, TimeWindow::Day, &FilterConfig::default());

    let config = SceneConfig {
        background: Color::from_hex("#101820").unwrap(),
        ..SceneConfig::default()
    };
    let scene = preview_scene(&items, &LayoutConfig::default(), &ColorScale::og(), &config).unwrap();
    let svg = render_svg(&scene);
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#101820"/>"##));

    assert!(Color::from_hex("navy").is_err());
}

#[test]
fn others_bucket_is_laid_out_like_any_item() {
    let records = summary::parse_records(RECORDS).unwrap();
    let filter = FilterConfig {
        others: OthersPolicy::Aggregate,
        ..FilterConfig::default()
    };
    let items = summary::prepare_items(&records, TimeWindow::Day, &filter);
    assert_eq!(items.len(), 4);
    assert_eq!(items[3].label, "Others (2 labels)");
    assert_eq!(items[3].size, 2_700_000.0);

    let rects = richmap::layout::layout(&items, 1200.0, 630.0).unwrap();
    assert_eq!(rects.len(), 4);
    assert!(LayoutStats::measure(&rects, 1200.0, 630.0).is_tiling());
}

#[test]
fn grouped_view_lays_out() {
    let records = summary::parse_records(RECORDS).unwrap();
    let items = summary::group_items(
        &records,
        summary::GroupBy::Category,
        TimeWindow::Day,
        &FilterConfig::default(),
    );
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["Issuer", "Exchange", "Other"]);

    let rects = richmap::layout::layout(&items, 1200.0, 630.0).unwrap();
    assert!(LayoutStats::measure(&rects, 1200.0, 630.0).is_tiling());
}
