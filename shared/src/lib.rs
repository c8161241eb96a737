//! Shared types for the Nethercore isometric renderer.
//!
//! Kept free of math-library dependencies so that tools and game code can
//! exchange screen rectangles without pulling in the engine.

pub mod constants;
pub mod rect;

pub use rect::Rectangle;
