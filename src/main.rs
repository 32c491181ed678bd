/// Render the Open-Graph preview of a rich-list summary as SVG.
///
/// Usage: richmap <records.json> [window] [out.svg] [#background]
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use richmap::layout::LayoutConfig;
use richmap::render::{preview_scene, render_svg, Color, ColorScale, SceneConfig};
use richmap::summary::{self, FilterConfig, TimeWindow};

const USAGE: &str = "usage: richmap <records.json> [1h|3h|24h|7d|30d] [out.svg] [#RRGGBB]";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("richmap=info".parse()?))
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from).context(USAGE)?;
    let window = match args.next() {
        Some(arg) => arg.parse::<TimeWindow>()?,
        None => TimeWindow::default(),
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("og.svg"));
    let mut scene_config = SceneConfig::default();
    if let Some(hex) = args.next() {
        scene_config.background = Color::from_hex(&hex)?;
    }

    let json = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let records = summary::parse_records(&json)
        .with_context(|| format!("failed to parse summary records in {}", input.display()))?;
    tracing::info!("Loaded {} summary records from {}", records.len(), input.display());

    let items = summary::prepare_items(&records, window, &FilterConfig::default());
    let scene = preview_scene(
        &items,
        &LayoutConfig::default(),
        &ColorScale::og(),
        &scene_config,
    )
    .with_context(|| format!("failed to lay out {} items for {}", items.len(), window))?;

    std::fs::write(&output, render_svg(&scene))
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {}x{} preview for {} to {} ({} tiles, {} too small to draw)",
        scene.width,
        scene.height,
        window,
        output.display(),
        scene.boxes.len(),
        scene.skipped
    );

    Ok(())
}
