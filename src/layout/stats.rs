use super::squarify::PlacedItem;

/// Geometry checks over a finished layout, measured on the pre-inset tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStats {
    pub rects: usize,
    /// Sum of tile areas (px²)
    pub covered_area: f64,
    /// `covered_area` / container area; 1.0 for a complete tiling
    pub coverage: f64,
    /// Largest `max(w/h, h/w)` among tiles with positive area
    pub worst_aspect_ratio: f64,
    /// Tiles left with no visible box once the inset is removed
    pub degenerate: usize,
    /// Pairs of tiles sharing more than a rounding-error of area
    pub overlapping_pairs: usize,
}

impl LayoutStats {
    pub fn measure(rects: &[PlacedItem], width: f64, height: f64) -> Self {
        let container_area = width * height;
        let covered_area: f64 = rects.iter().map(|r| r.outer.area()).sum();

        let worst_aspect_ratio = rects
            .iter()
            .filter(|r| r.outer.area() > 0.0)
            .map(|r| r.outer.aspect_ratio())
            .fold(0.0, f64::max);

        let tolerance = container_area * 1e-9;
        let mut overlapping_pairs = 0;
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                if a.outer.intersection_area(&b.outer) > tolerance {
                    overlapping_pairs += 1;
                }
            }
        }

        Self {
            rects: rects.len(),
            covered_area,
            coverage: if container_area > 0.0 {
                covered_area / container_area
            } else {
                0.0
            },
            worst_aspect_ratio,
            degenerate: rects.iter().filter(|r| r.is_degenerate()).count(),
            overlapping_pairs,
        }
    }

    /// Full coverage without overlaps.
    pub fn is_tiling(&self) -> bool {
        (self.coverage - 1.0).abs() < 1e-6 && self.overlapping_pairs == 0
    }
}
