//! Consumer-side views over a finished toolpath.

use thiserror::Error;

use crate::{GlyphBox, Point};

/// A toolpath that a device layer must refuse to execute.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToolpathError {
    /// The first point is a lift, so there is no stroke before it.
    #[error("toolpath starts with a lift")]
    LeadingLift,

    /// The last point is a lift with no stroke after it.
    #[error("dangling lift at index {index}")]
    TrailingLift { index: usize },

    /// Two lifts in a row delimit a stroke with no points.
    #[error("empty stroke before lift at index {index}")]
    EmptyStroke { index: usize },

    /// A drawing point the tool cannot reach while engaged.
    #[error("point {index} at ({x}, {y}) lies outside the drawable area")]
    OutOfBounds { index: usize, x: i32, y: i32 },
}

/// Check that `points` is safe to hand to a device.
///
/// Drawing points may sit anywhere right of the origin (the string is wider
/// than one glyph box) but must stay within `[0, max_y]` vertically.
pub fn validate(points: &[Point], glyph_box: &GlyphBox) -> Result<(), ToolpathError> {
    let mut previous_lift = None;

    for (index, point) in points.iter().enumerate() {
        if point.is_lift() {
            if index == 0 {
                return Err(ToolpathError::LeadingLift);
            }
            if previous_lift == Some(index - 1) {
                return Err(ToolpathError::EmptyStroke { index });
            }
            previous_lift = Some(index);
            continue;
        }

        if point.x < 0 || point.y < 0 || point.y > glyph_box.max_y {
            return Err(ToolpathError::OutOfBounds {
                index,
                x: point.x,
                y: point.y,
            });
        }
    }

    match points.len().checked_sub(1) {
        Some(index) if points[index].is_lift() => Err(ToolpathError::TrailingLift { index }),
        _ => Ok(()),
    }
}

/// Iterate over the strokes of a toolpath: maximal runs of drawing points
/// between [LIFT](crate::LIFT) sentinels. Empty runs are skipped.
pub fn strokes(points: &[Point]) -> Strokes<'_> {
    Strokes { rest: points }
}

/// Iterator returned by [strokes].
#[derive(Debug, Clone)]
pub struct Strokes<'a> {
    rest: &'a [Point],
}

impl<'a> Iterator for Strokes<'a> {
    type Item = &'a [Point];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.rest.is_empty() {
                return None;
            }

            let end = self
                .rest
                .iter()
                .position(Point::is_lift)
                .unwrap_or(self.rest.len());
            let (stroke, rest) = self.rest.split_at(end);
            self.rest = rest.get(1..).unwrap_or(&[]);

            if !stroke.is_empty() {
                return Some(stroke);
            }
        }
    }
}
