//! Nether-ISO: isometric viewport engine for Nethercore
//!
//! Converts positions between the three coordinate spaces of the isometric
//! renderer and decides which tiles are worth drawing.
//!
//! # Coordinate Spaces
//!
//! | Space | Units | Depends on |
//! |-------|-------|------------|
//! | World | tiles (game grid) | nothing |
//! | Ortho | pixels on the projection plane | nothing |
//! | Screen | device pixels | camera, screen rectangle, alignment |
//!
//! World and ortho space are related by a fixed projection (a tile is 160x80
//! pixels). Screen space adds the camera offset and the viewport's screen
//! origin. Every world/screen conversion goes through ortho space.
//!
//! # Render Pass Usage
//!
//! ```
//! use std::rc::Rc;
//!
//! use glam::DVec2;
//! use nether_iso::{Align, FixedCamera, Viewport};
//!
//! let camera = Rc::new(FixedCamera::new(DVec2::new(0.0, 80.0)));
//! let mut viewport = Viewport::new(0, 0, 800, 600);
//! viewport.set_camera(&camera);
//!
//! // Player 1 renders into one half of the screen
//! viewport.with_alignment(Align::Left, |viewport| {
//!     let tile = DVec2::new(1.0, 1.0);
//!     if viewport.is_tile_visible(tile) {
//!         viewport.push_translation_world(tile);
//!         let _pixel = viewport.translation_screen();
//!         viewport.pop_translation();
//!     }
//! });
//! ```

pub mod camera;
pub mod config;
pub mod projection;
pub mod viewport;

pub use camera::{CameraPosition, FixedCamera};
pub use config::{ConfigError, ConfiguredViewport, ViewportConfig};
pub use nethercore_shared::Rectangle;
pub use viewport::{Align, TILE_VISIBILITY_SPAN, Viewport};
