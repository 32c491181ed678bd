use compact_str::CompactString;

use super::colors::{Color, ColorScale};
use crate::layout::PlacedItem;
use crate::ui::format::{change_arrow, format_change, format_compact};

/// Canvas and text settings for the preview image.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Canvas size (px); Open-Graph cards are 1200x630
    pub width: u32,
    pub height: u32,
    /// Unit appended to holdings ("1.2B XRP")
    pub unit: CompactString,
    pub background: Color,
    /// Fixed text color, or `None` to pick black/white per fill
    pub text_color: Option<Color>,
    /// Lines with a smaller font are hidden
    pub min_font_px: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            unit: "XRP".into(),
            background: Color::WHITE,
            text_color: Some(Color::WHITE),
            min_font_px: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font_px: u32,
}

/// One filled box in pixel space, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBox {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub fill: Color,
    pub text_color: Color,
    /// Label, holdings, change; only lines large enough to read
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub boxes: Vec<TileBox>,
    /// Tiles with no visible area after flooring
    pub skipped: usize,
}

/// Convert placed tiles into renderer boxes: coordinates floored to whole
/// pixels, degenerate boxes skipped, fonts scaled to the box.
pub fn build_scene(rects: &[PlacedItem], scale: &ColorScale, config: &SceneConfig) -> Scene {
    let mut boxes = Vec::with_capacity(rects.len());
    let mut skipped = 0;

    for rect in rects {
        let width = rect.width.floor();
        let height = rect.height.floor();
        if !(width > 0.0 && height > 0.0) {
            skipped += 1;
            continue;
        }

        let fill = scale.color_for(rect.percentage);
        let text_color = config.text_color.unwrap_or_else(|| fill.contrast_text());

        let title_px = font_px(rect.width, 15.0, rect.height, 4.0);
        let detail_px = font_px(rect.width, 20.0, rect.height, 5.0);
        let change = scale.effective(rect.percentage);

        let lines = [
            (rect.label.to_string(), title_px),
            (format!("{} {}", format_compact(rect.size), config.unit), detail_px),
            (format!("{} {}", change_arrow(change), format_change(change)), detail_px),
        ]
        .into_iter()
        .filter(|&(_, px)| px >= config.min_font_px)
        .map(|(text, font_px)| TextLine { text, font_px })
        .collect();

        boxes.push(TileBox {
            left: rect.x.floor() as i32,
            top: rect.y.floor() as i32,
            width: width as u32,
            height: height as u32,
            fill,
            text_color,
            lines,
        });
    }

    if skipped > 0 {
        tracing::debug!("Scene: skipped {} degenerate tiles", skipped);
    }

    Scene {
        width: config.width,
        height: config.height,
        background: config.background,
        boxes,
        skipped,
    }
}

fn font_px(width: f64, width_div: f64, height: f64, height_div: f64) -> u32 {
    (width / width_div).floor().min((height / height_div).floor()).max(0.0) as u32
}
