//! Centralized constants for the isometric renderer.
//!
//! Single source of truth for values shared by the engine and its tools.

/// Half the on-screen width of one isometric tile, in pixels.
pub const TILE_HALF_WIDTH: i32 = 80;

/// Half the on-screen height of one isometric tile, in pixels.
pub const TILE_HALF_HEIGHT: i32 = 40;

/// Default screen resolution (width, height) for tools and new viewports.
pub const DEFAULT_RESOLUTION: (i32, i32) = (800, 600);
