//! Application icon generation
//!
//! A light-gray microphone glyph is laid out proportionally for each size in
//! [`ICON_SIZES`], rendered from SVG with resvg and packaged as a
//! multi-resolution `icon.ico` next to the executable.

pub mod builder;
pub mod glyph;

pub use builder::IconBuilder;
pub use glyph::{render_glyph, Glyph};

/// Icon sizes embedded in the container, smallest first
pub const ICON_SIZES: [u32; 3] = [16, 32, 48];
