use proptest::prelude::*;
use richmap::layout::{layout, layout_with, Item, ItemOrder, LayoutConfig, LayoutStats, Rect};

fn make_items(sizes: &[f64]) -> Vec<Item> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &s)| Item::new(format!("w{i}"), s, (i as f64 - 3.0) * 0.75))
        .collect()
}

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1e-12)
}

fn sizes_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..1.0e6, 1..60)
}

proptest! {
    #[test]
    fn area_conservation(
        sizes in sizes_strategy(),
        width in 10.0f64..2000.0,
        height in 10.0f64..2000.0,
    ) {
        let rects = layout(&make_items(&sizes), width, height).unwrap();
        let covered: f64 = rects.iter().map(|r| r.outer.area()).sum();
        prop_assert!(
            close(covered, width * height, 1e-6),
            "Area mismatch: {} vs {}", covered, width * height
        );
    }

    #[test]
    fn areas_follow_sizes(
        sizes in sizes_strategy(),
        width in 10.0f64..2000.0,
        height in 10.0f64..2000.0,
    ) {
        let total: f64 = sizes.iter().sum();
        let container = width * height;
        let rects = layout(&make_items(&sizes), width, height).unwrap();
        for (rect, &size) in rects.iter().zip(&sizes) {
            let expected = size / total * container;
            prop_assert!(
                close(rect.outer.area(), expected, 1e-6),
                "{}: area {} expected {}", rect.label, rect.outer.area(), expected
            );
        }
    }

    #[test]
    fn tiles_do_not_overlap_and_stay_inside(
        sizes in sizes_strategy(),
        width in 10.0f64..2000.0,
        height in 10.0f64..2000.0,
    ) {
        let rects = layout(&make_items(&sizes), width, height).unwrap();
        let stats = LayoutStats::measure(&rects, width, height);
        prop_assert_eq!(stats.overlapping_pairs, 0);
        prop_assert!(stats.is_tiling());

        let eps = 1e-6 * width.max(height);
        for r in &rects {
            prop_assert!(r.outer.x >= -eps && r.outer.y >= -eps);
            prop_assert!(r.outer.right() <= width + eps, "right edge {}", r.outer.right());
            prop_assert!(r.outer.bottom() <= height + eps, "bottom edge {}", r.outer.bottom());
        }
    }

    #[test]
    fn every_item_placed_once(sizes in sizes_strategy()) {
        let items = make_items(&sizes);
        let rects = layout(&items, 1200.0, 630.0).unwrap();
        prop_assert_eq!(rects.len(), items.len());

        let mut placed: Vec<&str> = rects.iter().map(|r| r.label.as_str()).collect();
        let mut expected: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        placed.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(placed, expected);
    }

    #[test]
    fn sorted_order_places_every_item_once(sizes in sizes_strategy()) {
        let items = make_items(&sizes);
        let config = LayoutConfig {
            order: ItemOrder::SizeDescending,
            ..LayoutConfig::default()
        };
        let rects = layout_with(&items, 1200.0, 630.0, &config).unwrap();
        prop_assert_eq!(rects.len(), items.len());
        for pair in rects.windows(2) {
            prop_assert!(pair[0].size >= pair[1].size);
        }
        prop_assert!(LayoutStats::measure(&rects, 1200.0, 630.0).is_tiling());
    }

    #[test]
    fn layout_is_deterministic(sizes in sizes_strategy()) {
        let items = make_items(&sizes);
        let first = layout(&items, 1200.0, 630.0).unwrap();
        let second = layout(&items, 1200.0, 630.0).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn power_of_two_scaling_is_exact(sizes in sizes_strategy(), exp in -8i32..8) {
        let k = 2f64.powi(exp);
        let scaled: Vec<f64> = sizes.iter().map(|s| s * k).collect();
        let base = layout(&make_items(&sizes), 1200.0, 630.0).unwrap();
        let other = layout(&make_items(&scaled), 1200.0, 630.0).unwrap();
        for (a, b) in base.iter().zip(&other) {
            prop_assert_eq!(a.outer, b.outer);
        }
    }

    #[test]
    fn arbitrary_scaling_keeps_geometry(sizes in sizes_strategy(), k in 0.001f64..1000.0) {
        let scaled: Vec<f64> = sizes.iter().map(|s| s * k).collect();
        let base = layout(&make_items(&sizes), 1200.0, 630.0).unwrap();
        let other = layout(&make_items(&scaled), 1200.0, 630.0).unwrap();
        for (a, b) in base.iter().zip(&other) {
            prop_assert!(close(a.outer.area(), b.outer.area(), 1e-6));
        }
    }

    #[test]
    fn tiny_item_gets_a_valid_tile(
        sizes in prop::collection::vec(1.0f64..1.0e6, 1..30),
        at in 0usize..30,
    ) {
        let total: f64 = sizes.iter().sum();
        let mut with_tiny = sizes.clone();
        let at = at.min(with_tiny.len());
        with_tiny.insert(at, total * 1e-6);

        let rects = layout(&make_items(&with_tiny), 1200.0, 630.0).unwrap();
        prop_assert_eq!(rects.len(), with_tiny.len());
        for r in &rects {
            prop_assert!(r.outer.w.is_finite() && r.outer.h.is_finite());
            prop_assert!(r.outer.w >= 0.0 && r.outer.h >= 0.0);
            prop_assert!(r.outer.area() > 0.0, "{} lost its area", r.label);
        }
        prop_assert!(LayoutStats::measure(&rects, 1200.0, 630.0).is_tiling());
    }
}

#[test]
fn single_item_takes_the_canvas() {
    let rects = layout(&[Item::new("A", 10.0, 0.0)], 1200.0, 630.0).unwrap();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].outer, Rect { x: 0.0, y: 0.0, w: 1200.0, h: 630.0 });
}

#[test]
fn two_equal_items_split_the_square() {
    let items = [Item::new("A", 1.0, 0.0), Item::new("B", 1.0, 0.0)];
    let rects = layout(&items, 100.0, 100.0).unwrap();
    assert_eq!(rects.len(), 2);
    for r in &rects {
        assert_eq!(r.outer.area(), 5000.0);
    }
    let stats = LayoutStats::measure(&rects, 100.0, 100.0);
    assert!(stats.is_tiling());
}
