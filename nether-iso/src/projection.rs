//! Fixed isometric projection between world and orthogonal space
//!
//! World space is the game-logic tile grid. Orthogonal (ortho) space is the
//! camera-independent projection plane measured in pixels. One world unit
//! along either axis moves half a tile across and half a tile down.

use glam::DVec2;
use nethercore_shared::constants::{TILE_HALF_HEIGHT, TILE_HALF_WIDTH};

/// Half tile width in ortho pixels, as a float
pub const HALF_WIDTH: f64 = TILE_HALF_WIDTH as f64;

/// Half tile height in ortho pixels, as a float
pub const HALF_HEIGHT: f64 = TILE_HALF_HEIGHT as f64;

/// Project a world-space position onto the ortho plane.
///
/// ```
/// use glam::DVec2;
/// use nether_iso::projection::world_to_ortho;
///
/// assert_eq!(world_to_ortho(DVec2::new(1.0, 1.0)), DVec2::new(0.0, 80.0));
/// ```
#[inline]
pub fn world_to_ortho(world: DVec2) -> DVec2 {
    DVec2::new(
        (world.x - world.y) * HALF_WIDTH,
        (world.x + world.y) * HALF_HEIGHT,
    )
}

/// Exact inverse of [`world_to_ortho`].
#[inline]
pub fn ortho_to_world(ortho: DVec2) -> DVec2 {
    let across = ortho.x / HALF_WIDTH;
    let down = ortho.y / HALF_HEIGHT;
    DVec2::new((across + down) / 2.0, (down - across) / 2.0)
}
