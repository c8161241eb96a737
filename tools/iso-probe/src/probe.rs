//! Probe queries - build the configured viewport and format a report

use std::fmt::Write;

use anyhow::Result;
use glam::{DVec2, IVec2};
use nether_iso::{Align, Rectangle, ViewportConfig};
use tracing::debug;

/// A single question asked of the viewport.
#[derive(Debug, Clone, Copy)]
pub enum Query {
    Project { x: f64, y: f64 },
    Unproject { x: i32, y: i32 },
    Visible {
        left: i32,
        top: i32,
        width: i32,
        height: i32,
    },
}

/// Answer `query` against the viewport described by `config` under `align`.
///
/// Returns the human-readable report printed by the CLI.
pub fn run(config: &ViewportConfig, align: Align, query: Query) -> Result<String> {
    // Camera must outlive the viewport calls below
    let mut built = config.build()?;
    debug!(?align, camera = built.camera.is_some(), "viewport built");

    let mut report = String::new();
    built.viewport.with_alignment(align, |viewport| -> std::fmt::Result {
        let rect = viewport.screen_rect();
        writeln!(
            report,
            "screen:   {}x{} at ({}, {}) [{:?}]",
            rect.width, rect.height, rect.left, rect.top, align
        )?;

        match query {
            Query::Project { x, y } => {
                let world = DVec2::new(x, y);
                let ortho = viewport.world_to_ortho(world);
                let pixel = viewport.world_to_screen(world);
                let exact = viewport.world_to_screen_f(world);
                writeln!(report, "world:    ({}, {})", world.x, world.y)?;
                writeln!(report, "ortho:    ({}, {})", ortho.x, ortho.y)?;
                writeln!(report, "screen:   ({}, {})", pixel.x, pixel.y)?;
                writeln!(report, "screen_f: ({}, {})", exact.x, exact.y)?;
                writeln!(report, "visible:  {}", viewport.is_tile_visible(world))?;
            }
            Query::Unproject { x, y } => {
                let pixel = IVec2::new(x, y);
                let ortho = viewport.screen_to_ortho(pixel);
                let world = viewport.screen_to_world(pixel);
                writeln!(report, "screen:   ({}, {})", pixel.x, pixel.y)?;
                writeln!(report, "ortho:    ({}, {})", ortho.x, ortho.y)?;
                writeln!(report, "world:    ({}, {})", world.x, world.y)?;
            }
            Query::Visible {
                left,
                top,
                width,
                height,
            } => {
                let tiles = Rectangle::new(left, top, width, height);
                writeln!(
                    report,
                    "tiles:    {}x{} at ({}, {})",
                    tiles.width, tiles.height, tiles.left, tiles.top
                )?;
                writeln!(report, "visible:  {}", viewport.is_tile_rect_visible(tiles))?;
            }
        }
        Ok(())
    })?;

    Ok(report)
}
