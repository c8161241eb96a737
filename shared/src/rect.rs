//! Integer screen rectangles

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RESOLUTION;

/// Axis-aligned integer rectangle.
///
/// Used both for screen regions (pixels) and for tile-grid areas (tiles).
/// `right` and `bottom` are exclusive edges derived from the size.
///
/// # Example
/// ```
/// use nethercore_shared::Rectangle;
///
/// let rect = Rectangle::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// X coordinate of the top-left corner
    pub left: i32,
    /// Y coordinate of the top-left corner
    pub top: i32,
    /// Width (may be zero for degenerate rectangles)
    pub width: i32,
    /// Height (may be zero for degenerate rectangles)
    pub height: i32,
}

impl Rectangle {
    /// Full default-resolution rectangle anchored at the origin
    pub const FULLSCREEN: Rectangle = Rectangle {
        left: 0,
        top: 0,
        width: DEFAULT_RESOLUTION.0,
        height: DEFAULT_RESOLUTION.1,
    };

    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge (`left + width`)
    #[inline]
    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Exclusive bottom edge (`top + height`)
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Check if the rectangle has a non-zero, positive area
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Half-open containment test: `[left, right) x [top, bottom)`
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Calculate aspect ratio (width / height)
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0 // Avoid division by zero
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
