#![no_std]

//! `strokepath` is a library for turning text into toolpaths for laser
//! engravers, pen plotters and other devices that draw with a single tool.
//!
//! A toolpath is a flat list of [Point]s. The device engages the tool and
//! moves to each drawing point in turn; whenever it meets the [LIFT]
//! sentinel `(-1, -1)` it disengages the tool, and the next point starts a
//! new stroke. The sentinel is never offset, so consumers can always test
//! for it with [Point::is_lift].
//!
//! The library supports `no_std` environments but requires an allocator.
//!
//! ```
//! use strokepath::{build_toolpath, lookup, LIFT, Point};
//!
//! let ell = lookup('L', 0);
//! assert_eq!(
//!     ell,
//!     [Point::new(0, 500), Point::new(0, 0), LIFT, Point::new(0, 0), Point::new(500, 0)]
//! );
//!
//! let mut expected = lookup('A', 0);
//! expected.extend(lookup('B', 500));
//! assert_eq!(build_toolpath("ab"), expected);
//! ```
//!
//! Layout can be adjusted with a [Layout]:
//!
//! ```
//! use strokepath::{build_toolpath_with, Advance, Layout, validate};
//!
//! let layout = Layout {
//!     advance: Advance::Proportional,
//!     letter_spacing: 200,
//!     lift_between_glyphs: true,
//!     ..Layout::default()
//! };
//! let points = build_toolpath_with("Hello 2025", &layout);
//! assert!(validate(&points, &layout.glyph_box).is_ok());
//! ```

use alloc::vec::Vec;
pub use strokepath_block::{BlockRenderer, glyph, lookup, lookup_in, supported_chars};
pub use strokepath_core::{
    Advance, GRID, Glyph, GlyphBox, LIFT, Layout, PackedPoint, Point, Strokes, ToolpathError,
    strokes, validate,
};
use strokepath_core::Renderer;

extern crate alloc;

/// Render `text` as a fixed-width toolpath in the reference 500 x 500 box.
///
/// Characters with no glyph contribute no points but still take up one
/// advance, so the overall width of the string stays predictable.
pub fn build_toolpath(text: &str) -> Vec<Point> {
    build_toolpath_with(text, &Layout::default())
}

/// Render `text` as a toolpath using the given layout options.
pub fn build_toolpath_with(text: &str, layout: &Layout) -> Vec<Point> {
    BlockRenderer::render_text(text, layout)
}
