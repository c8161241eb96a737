//! Viewport: screen window, camera binding and translation stack
//!
//! Converts between world, ortho and screen space, answers tile visibility
//! queries for culling, and tracks nested draw offsets during a render pass.
//!
//! Screen conversions fold in the camera offset: the bound camera's ortho
//! position is placed at the centre of the active screen rectangle.

use std::rc::{Rc, Weak};

use glam::{DVec2, I64Vec2, IVec2};
use nethercore_shared::Rectangle;
use nethercore_shared::constants::{TILE_HALF_HEIGHT, TILE_HALF_WIDTH};
use tracing::{debug, trace};

use crate::camera::CameraPosition;
use crate::projection;

/// Horizontal reach, in world units, assumed for a tile sprite when culling.
///
/// Matches the widest tile graphics; keep in sync with the sprite set rather
/// than deriving it from the tile size.
pub const TILE_VISIBILITY_SPAN: f64 = 3.0;

/// Split-screen layout of the active screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Full default rectangle
    #[default]
    Center,
    /// Half width, shifted right by half the default width
    Left,
    /// Half width, anchored at the default left edge
    Right,
}

/// Screen window onto the isometric world.
///
/// # Example
/// ```
/// use glam::{DVec2, IVec2};
/// use nether_iso::Viewport;
///
/// let viewport = Viewport::new(0, 0, 800, 600);
/// let ortho = viewport.world_to_ortho(DVec2::new(1.0, 1.0));
/// assert_eq!(ortho, DVec2::new(0.0, 80.0));
/// assert_eq!(viewport.ortho_to_screen(ortho), IVec2::new(400, 380));
/// ```
#[derive(Debug, Clone)]
pub struct Viewport {
    default_screen_rect: Rectangle,
    screen_rect: Rectangle,
    trans_stack: Vec<DVec2>,
    trans_current: DVec2,
    camera: Option<Weak<dyn CameraPosition>>,
    align: Align,
}

impl Viewport {
    /// Create a viewport covering the given screen rectangle (pixels).
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let rect = Rectangle::new(x, y, width, height);
        Self {
            default_screen_rect: rect,
            screen_rect: rect,
            trans_stack: Vec::new(),
            trans_current: DVec2::ZERO,
            camera: None,
            align: Align::Center,
        }
    }

    /// Bind a camera.
    ///
    /// Only a weak reference is kept; once the caller drops its last `Rc` the
    /// viewport behaves as if no camera were bound.
    pub fn set_camera<C: CameraPosition + 'static>(&mut self, camera: &Rc<C>) {
        let weak: Weak<C> = Rc::downgrade(camera);
        self.camera = Some(weak);
        debug!("viewport camera bound");
    }

    /// Unbind the camera, if any.
    pub fn clear_camera(&mut self) {
        if self.camera.take().is_some() {
            debug!("viewport camera cleared");
        }
    }

    /// Whether a camera is bound and still alive.
    pub fn has_camera(&self) -> bool {
        self.camera
            .as_ref()
            .is_some_and(|camera| camera.strong_count() > 0)
    }

    /// Active screen rectangle (halved while split-screen aligned).
    pub fn screen_rect(&self) -> Rectangle {
        self.screen_rect
    }

    /// Screen rectangle the viewport was created with.
    pub fn default_screen_rect(&self) -> Rectangle {
        self.default_screen_rect
    }

    /// Current split-screen alignment.
    pub fn align(&self) -> Align {
        self.align
    }

    // =========================================================================
    // Coordinate conversion
    // =========================================================================

    /// World position to integer screen pixels.
    pub fn world_to_screen(&self, world: DVec2) -> IVec2 {
        self.ortho_to_screen(self.world_to_ortho(world))
    }

    /// World position to sub-pixel screen coordinates.
    pub fn world_to_screen_f(&self, world: DVec2) -> DVec2 {
        self.ortho_to_screen_f(self.world_to_ortho(world))
    }

    /// Screen pixel to world position.
    pub fn screen_to_world(&self, screen: IVec2) -> DVec2 {
        self.ortho_to_world(self.screen_to_ortho(screen))
    }

    /// Sub-pixel screen coordinates to world position.
    pub fn screen_to_world_f(&self, screen: DVec2) -> DVec2 {
        self.ortho_to_world(self.screen_to_ortho_f(screen))
    }

    /// Ortho position to world position.
    pub fn ortho_to_world(&self, ortho: DVec2) -> DVec2 {
        projection::ortho_to_world(ortho)
    }

    /// World position to ortho position.
    pub fn world_to_ortho(&self, world: DVec2) -> DVec2 {
        projection::world_to_ortho(world)
    }

    /// Screen pixel to ortho position.
    pub fn screen_to_ortho(&self, screen: IVec2) -> DVec2 {
        self.screen_to_ortho_f(screen.as_dvec2())
    }

    /// Sub-pixel screen coordinates to ortho position.
    pub fn screen_to_ortho_f(&self, screen: DVec2) -> DVec2 {
        screen + self.camera_offset() - self.screen_origin()
    }

    /// Ortho position to integer screen pixels.
    ///
    /// Components are floored, so `-0.5` lands on pixel `-1`, not `0`.
    pub fn ortho_to_screen(&self, ortho: DVec2) -> IVec2 {
        self.ortho_to_screen_f(ortho).floor().as_ivec2()
    }

    /// Ortho position to sub-pixel screen coordinates.
    pub fn ortho_to_screen_f(&self, ortho: DVec2) -> DVec2 {
        ortho - self.camera_offset() + self.screen_origin()
    }

    /// Ortho position shown at the top-left of the active screen rectangle.
    ///
    /// This is the camera position minus half the active screen size (integer
    /// halves), or just the negated half size when no camera is bound.
    pub fn camera_offset(&self) -> DVec2 {
        let position = self
            .camera
            .as_ref()
            .and_then(Weak::upgrade)
            .map_or(DVec2::ZERO, |camera| camera.position());
        let half = IVec2::new(self.screen_rect.width / 2, self.screen_rect.height / 2);
        position - half.as_dvec2()
    }

    fn screen_origin(&self) -> DVec2 {
        IVec2::new(self.screen_rect.left, self.screen_rect.top).as_dvec2()
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Whether any part of the tile at `world` can reach the screen.
    pub fn is_tile_visible(&self, world: DVec2) -> bool {
        let span = DVec2::new(TILE_VISIBILITY_SPAN, 0.0);
        let top_left = self.world_to_ortho(world - span);
        let bottom_right = self.world_to_ortho(world + span);
        self.is_ortho_rect_visible(top_left, bottom_right)
    }

    /// Whether any tile of a tile-grid rectangle can reach the screen.
    ///
    /// Projects the rectangle's isometric bounding box directly instead of
    /// testing each tile. Extrema are computed in 64-bit so any `i32`
    /// rectangle is accepted.
    pub fn is_tile_rect_visible(&self, rect: Rectangle) -> bool {
        let left = i64::from(rect.left);
        let top = i64::from(rect.top);
        let right = left + i64::from(rect.width);
        let bottom = top + i64::from(rect.height);
        let half_width = i64::from(TILE_HALF_WIDTH);
        let half_height = i64::from(TILE_HALF_HEIGHT);

        let top_left = I64Vec2::new((left - bottom) * half_width, (left + top) * half_height);
        let bottom_right = I64Vec2::new(
            (right - top) * half_width,
            (right + bottom) * half_height,
        );
        self.is_ortho_rect_visible(top_left.as_dvec2(), bottom_right.as_dvec2())
    }

    /// Whether an ortho-space rectangle overlaps the screen.
    ///
    /// Bounds are the half-open `[0, width) x [0, height)` of the default
    /// screen rectangle, independent of split-screen alignment.
    pub fn is_ortho_rect_visible(&self, top_left: DVec2, bottom_right: DVec2) -> bool {
        let min = self.ortho_to_screen(top_left);
        let max = self.ortho_to_screen(bottom_right);
        let bounds = self.default_screen_rect;

        !(min.x >= bounds.width || max.x < 0 || min.y >= bounds.height || max.y < 0)
    }

    // =========================================================================
    // Translation stack
    // =========================================================================

    /// Current accumulated translation in ortho space.
    pub fn translation_ortho(&self) -> DVec2 {
        self.trans_current
    }

    /// Current accumulated translation as a screen pixel.
    pub fn translation_screen(&self) -> IVec2 {
        self.ortho_to_screen(self.trans_current)
    }

    /// Number of translations saved on the stack.
    pub fn translation_depth(&self) -> usize {
        self.trans_stack.len()
    }

    /// Save the current translation and offset it by `offset` (ortho space).
    pub fn push_translation_ortho(&mut self, offset: DVec2) -> &mut Self {
        self.trans_stack.push(self.trans_current);
        self.trans_current += offset;
        trace!(depth = self.trans_stack.len(), "translation pushed");
        self
    }

    /// Push a translation given in world units.
    pub fn push_translation_world(&mut self, offset: DVec2) -> &mut Self {
        let ortho = self.world_to_ortho(offset);
        self.push_translation_ortho(ortho)
    }

    /// Push a translation given as a screen pixel.
    ///
    /// The pixel goes through the camera-aware screen conversion, so the
    /// camera offset is part of the pushed value.
    pub fn push_translation_screen(&mut self, offset: IVec2) -> &mut Self {
        let ortho = self.screen_to_ortho(offset);
        self.push_translation_ortho(ortho)
    }

    /// Restore the translation saved by the matching push.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. An unmatched pop means the caller's
    /// push/pop pairs are out of balance and every later conversion would be
    /// offset incorrectly.
    pub fn pop_translation(&mut self) {
        let Some(previous) = self.trans_stack.pop() else {
            panic!("pop_translation: translation stack is empty (unbalanced push/pop)");
        };
        self.trans_current = previous;
        trace!(depth = self.trans_stack.len(), "translation popped");
    }

    /// Run `f` with an extra ortho translation, popping it afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `f` leaves the stack deeper or shallower than it found it.
    pub fn with_translation_ortho<R>(
        &mut self,
        offset: DVec2,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_translation_ortho(offset);
        let depth = self.trans_stack.len();
        let result = f(self);
        assert_eq!(
            self.trans_stack.len(),
            depth,
            "with_translation_ortho: unbalanced push/pop inside scope"
        );
        self.pop_translation();
        result
    }

    // =========================================================================
    // Split-screen alignment
    // =========================================================================

    /// Run `f` with the given split-screen alignment, restoring the previous
    /// alignment afterwards.
    pub fn with_alignment<R>(&mut self, align: Align, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.align;
        self.set_align(align);
        let result = f(self);
        self.set_align(previous);
        result
    }

    pub(crate) fn set_align(&mut self, align: Align) {
        match align {
            Align::Center => self.reset_align(),
            Align::Left => self.align_left(),
            Align::Right => self.align_right(),
        }
    }

    pub(crate) fn align_left(&mut self) {
        if self.align == Align::Left {
            return;
        }

        let half = self.default_screen_rect.width / 2;
        self.screen_rect.width = half;
        self.screen_rect.left = self.default_screen_rect.left + half;
        self.align = Align::Left;
        debug!(rect = ?self.screen_rect, "viewport aligned left");
    }

    /// Always anchors at the default left edge, whichever mode it leaves.
    pub(crate) fn align_right(&mut self) {
        if self.align == Align::Right {
            return;
        }

        self.screen_rect.width = self.default_screen_rect.width / 2;
        self.screen_rect.left = self.default_screen_rect.left;
        self.align = Align::Right;
        debug!(rect = ?self.screen_rect, "viewport aligned right");
    }

    pub(crate) fn reset_align(&mut self) {
        if self.align == Align::Center {
            return;
        }

        self.screen_rect.width = self.default_screen_rect.width;
        self.screen_rect.left = self.default_screen_rect.left;
        self.align = Align::Center;
        debug!("viewport alignment reset");
    }
}
