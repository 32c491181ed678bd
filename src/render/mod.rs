pub mod colors;
pub mod scene;
pub mod svg;

pub use colors::{Bound, Color, ColorError, ColorScale, ColorStep, OTHERS_COLOR};
pub use scene::{build_scene, Scene, SceneConfig, TextLine, TileBox};
pub use svg::render_svg;

use crate::layout::{layout_with, Item, LayoutConfig, LayoutError};

/// Lay out `items` on the scene canvas and build the renderer boxes.
pub fn preview_scene(
    items: &[Item],
    layout_config: &LayoutConfig,
    scale: &ColorScale,
    config: &SceneConfig,
) -> Result<Scene, LayoutError> {
    let rects = layout_with(
        items,
        config.width as f64,
        config.height as f64,
        layout_config,
    )?;
    Ok(build_scene(&rects, scale, config))
}
