//! SVG serialization of a preview [`Scene`].
//!
//! The document has the canvas size, a background rect, and per tile a filled
//! rect plus its text lines stacked around the tile center. Rasterizing is
//! left to whatever consumes the SVG.

use super::scene::{Scene, TileBox};

/// Line box height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::with_capacity(256 + scene.boxes.len() * 320);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    ));
    svg.push('\n');
    svg.push_str(
        r#"<style>text { font-family: "Inter", "Helvetica Neue", Arial, sans-serif; font-weight: 500; }</style>"#,
    );
    svg.push('\n');
    svg.push_str(&format!(
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        scene.background
    ));
    svg.push('\n');

    for tile in &scene.boxes {
        write_tile(&mut svg, tile);
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_tile(svg: &mut String, tile: &TileBox) {
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        tile.left, tile.top, tile.width, tile.height, tile.fill
    ));
    svg.push('\n');
    if tile.lines.is_empty() {
        return;
    }

    let center_x = tile.left as f64 + tile.width as f64 / 2.0;
    let block: f64 = tile
        .lines
        .iter()
        .map(|l| l.font_px as f64 * LINE_HEIGHT)
        .sum();
    let mut y = tile.top as f64 + (tile.height as f64 - block) / 2.0;

    for line in &tile.lines {
        let advance = line.font_px as f64 * LINE_HEIGHT;
        // Baseline sits in the middle of the line box
        let baseline = y + advance / 2.0;
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            center_x,
            baseline,
            line.font_px,
            tile.text_color,
            escape_xml(&line.text)
        ));
        svg.push('\n');
        y += advance;
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
