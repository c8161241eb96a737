//! Camera collaborator
//!
//! The viewport only ever asks a camera where it is. Movement, easing and
//! target tracking belong to the game; anything that can answer the
//! position query can drive a viewport.

use std::cell::Cell;

use glam::DVec2;

/// Query-only view of a camera.
pub trait CameraPosition {
    /// Current camera position in ortho space.
    ///
    /// Called on every coordinate conversion, so it should be cheap and must
    /// not call back into the viewport.
    fn position(&self) -> DVec2;
}

/// Camera pinned to a position that can be updated through a shared reference.
///
/// Useful for tools and tests, and for games whose camera logic lives
/// elsewhere and just publishes a position each frame.
#[derive(Debug, Default)]
pub struct FixedCamera {
    position: Cell<DVec2>,
}

impl FixedCamera {
    pub fn new(position: DVec2) -> Self {
        Self {
            position: Cell::new(position),
        }
    }

    /// Move the camera. Bound viewports see the new position on their next call.
    pub fn set_position(&self, position: DVec2) {
        self.position.set(position);
    }
}

impl CameraPosition for FixedCamera {
    fn position(&self) -> DVec2 {
        self.position.get()
    }
}
