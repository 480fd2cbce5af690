#![no_std]

//! `strokepath-core` provides core primitives for the `strokepath` crate.
//!
//! A toolpath is a flat list of [Point]s. Drawing points are visited with
//! the tool engaged; the [LIFT] sentinel disengages the tool and starts a
//! new stroke.

use alloc::vec::Vec;

extern crate alloc;

mod toolpath;

pub use toolpath::{Strokes, ToolpathError, strokes, validate};

/// Side length of the grid glyph geometry is authored on.
pub const GRID: i32 = 4;

/// A point in device plotting units.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The pen-lift sentinel. It is never offset.
pub const LIFT: Point = Point { x: -1, y: -1 };

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Is this the [LIFT] sentinel rather than a drawing point?
    pub const fn is_lift(&self) -> bool {
        self.x == LIFT.x && self.y == LIFT.y
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The normalized box every glyph is drawn into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GlyphBox {
    pub max_x: i32,
    pub max_y: i32,
}

impl GlyphBox {
    /// The 500 x 500 box the block font was designed against.
    pub const REFERENCE: Self = Self {
        max_x: 500,
        max_y: 500,
    };

    pub const fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// Scale a grid coordinate into this box, shifting x by `offset`.
    /// The shifted x saturates at the ends of the `i32` range.
    pub const fn scale(&self, point: PackedPoint, offset: i32) -> Point {
        Point {
            x: (point.x as i32 * self.max_x / GRID).saturating_add(offset),
            y: point.y as i32 * self.max_y / GRID,
        }
    }

    /// Does `point` lie within `[0, max_x] x [0, max_y]`?
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x <= self.max_x && point.y >= 0 && point.y <= self.max_y
    }
}

impl Default for GlyphBox {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// A point, in compact representation.
/// Used to store the points which make up an individual glyph.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedPoint {
    /// X coordinate on the glyph grid
    pub x: i8,
    /// Y coordinate on the glyph grid
    pub y: i8,
    /// Is the tool engaged while moving to this point?
    /// `false` marks the first point of a stroke.
    pub pen: bool,
}

/// A single glyph (character) contained within a font.
#[derive(Debug, Copy, Clone)]
pub struct Glyph {
    /// Left coordinate boundary of this glyph
    pub left: i8,
    /// Right coordinate boundary of this glyph
    pub right: i8,
    /// Series of points which make up this glyph
    pub strokes: &'static [PackedPoint],
}

impl Glyph {
    /// Expand this glyph into drawing points and [LIFT] sentinels,
    /// scaled into `glyph_box` and shifted right by `offset`.
    pub fn points(&self, glyph_box: &GlyphBox, offset: i32) -> Vec<Point> {
        let mut result = Vec::with_capacity(self.strokes.len() * 2);

        for point in self.strokes {
            if !point.pen && !result.is_empty() {
                result.push(LIFT);
            }
            result.push(glyph_box.scale(*point, offset));
        }

        result
    }

    /// Width of the drawn part of this glyph once scaled into `glyph_box`.
    pub fn width(&self, glyph_box: &GlyphBox) -> i32 {
        (self.right as i32 - self.left as i32) * glyph_box.max_x / GRID
    }
}

/// How far the cursor moves after each character.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Every character is `max_x` wide.
    #[default]
    Fixed,
    /// Each glyph takes its own drawn width. Missing glyphs take `max_x`.
    Proportional,
}

/// Options for laying out a string of glyphs.
///
/// The default reproduces the fixed-width behaviour with no extra lifts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    pub glyph_box: GlyphBox,
    pub advance: Advance,
    /// Extra gap inserted after every advance.
    pub letter_spacing: i32,
    /// Force a [LIFT] between two consecutive drawn glyphs.
    pub lift_between_glyphs: bool,
    /// Should a character with no glyph still move the cursor?
    pub advance_missing: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            glyph_box: GlyphBox::REFERENCE,
            advance: Advance::Fixed,
            letter_spacing: 0,
            lift_between_glyphs: false,
            advance_missing: true,
        }
    }
}

impl Layout {
    /// Cursor advance after placing `glyph` (`None` for a missing glyph).
    pub fn advance_for(&self, glyph: Option<&Glyph>) -> i32 {
        let width = match (self.advance, glyph) {
            (_, None) if !self.advance_missing => return 0,
            (Advance::Proportional, Some(glyph)) => glyph.width(&self.glyph_box),
            _ => self.glyph_box.max_x,
        };

        width.saturating_add(self.letter_spacing)
    }
}

/// Allows rendering text into toolpath points.
///
/// Implementors may define their own font mapping (enum or other data structure).
pub trait Renderer<Mapping> {
    /// Render the given text string to a series of points,
    /// using the given font mapping.
    fn render_text(text: &str, mapping: Mapping) -> Vec<Point>;
}
