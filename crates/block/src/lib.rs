#![no_std]

//! `strokepath-block` is a backend for the `strokepath` crate that draws
//! text in a block capital font suited to laser engravers and pen plotters.
//!
//! The font covers `A`-`Z` (lowercase is folded to uppercase), `0`-`9` and
//! the space. Every glyph is a polyline drawn on a 4 x 4 grid and scaled
//! into a [GlyphBox] at lookup time.

extern crate alloc;

use alloc::vec::Vec;
use strokepath_core::{Glyph, GlyphBox, LIFT, Layout, PackedPoint, Point, Renderer};

include!(concat!(env!("OUT_DIR"), "/block_font.rs"));

/// Find the glyph for `character`, ignoring case.
pub fn glyph(character: char) -> Option<&'static Glyph> {
    let character = character.to_ascii_uppercase();
    BLOCK_FONT.get(character as usize)?.as_ref()
}

/// Every character with a glyph, in table order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    BLOCK_FONT
        .iter()
        .enumerate()
        .filter(|(_, glyph)| glyph.is_some())
        .map(|(idx, _)| idx as u8 as char)
}

/// Points for `character` in the reference 500 x 500 box, shifted right by
/// `offset`. Unsupported characters yield no points.
pub fn lookup(character: char, offset: i32) -> Vec<Point> {
    lookup_in(&GlyphBox::REFERENCE, character, offset)
}

/// Points for `character` scaled into `glyph_box`, shifted right by `offset`.
/// Shifted x coordinates saturate at the ends of the `i32` range.
pub fn lookup_in(glyph_box: &GlyphBox, character: char, offset: i32) -> Vec<Point> {
    match glyph(character) {
        Some(glyph) => glyph.points(glyph_box, offset),
        None => Vec::new(),
    }
}

/// A [Renderer] which lays out text using the block font.
pub struct BlockRenderer;

impl Renderer<&Layout> for BlockRenderer {
    fn render_text(text: &str, layout: &Layout) -> Vec<Point> {
        let mut result = Vec::new();
        let mut x_idx: i32 = 0;

        for character in text.chars() {
            let found = glyph(character);

            match found {
                Some(glyph) => {
                    if layout.lift_between_glyphs && !result.is_empty() {
                        result.push(LIFT);
                    }
                    result.extend(glyph.points(&layout.glyph_box, x_idx));
                }
                None => log::debug!("no glyph for {character:?}, skipping"),
            }

            x_idx = x_idx.saturating_add(layout.advance_for(found));
        }

        log::trace!("laid out {text:?} as {} points", result.len());

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use strokepath_core::{Advance, strokes, validate};

    const MAX_X: i32 = GlyphBox::REFERENCE.max_x;
    const MAX_Y: i32 = GlyphBox::REFERENCE.max_y;

    fn render(text: &str) -> Vec<Point> {
        BlockRenderer::render_text(text, &Layout::default())
    }

    fn shifted(points: &[Point], offset: i32) -> Vec<Point> {
        points
            .iter()
            .map(|p| {
                if p.is_lift() {
                    *p
                } else {
                    Point::new(p.x.saturating_add(offset), p.y)
                }
            })
            .collect()
    }

    #[test]
    fn covers_letters_digits_and_space() {
        let supported: Vec<char> = supported_chars().collect();
        assert_eq!(supported.len(), 37);
        for c in ('A'..='Z').chain('0'..='9').chain([' ']) {
            assert!(supported.contains(&c), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn glyphs_stay_in_box_and_are_well_formed() {
        for c in supported_chars() {
            let points = lookup(c, 0);
            assert!(!points.is_empty(), "{c:?} is empty");
            assert_eq!(validate(&points, &GlyphBox::REFERENCE), Ok(()), "{c:?}");
            for p in points.iter().filter(|p| !p.is_lift()) {
                assert!(GlyphBox::REFERENCE.contains(*p), "{c:?} has {p:?}");
            }
        }
    }

    #[test]
    fn offset_shifts_drawing_points_only() {
        for c in supported_chars() {
            let base = lookup(c, 0);
            for offset in [i32::MIN, -750, 1, 500, 12_345, i32::MAX - 100] {
                assert_eq!(lookup(c, offset), shifted(&base, offset), "{c:?} at {offset}");
            }
        }
    }

    #[test]
    fn lowercase_matches_uppercase() {
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            for offset in [0, 500, -3] {
                assert_eq!(lookup(lower, offset), lookup(upper, offset));
            }
        }
    }

    #[test]
    fn unsupported_characters_are_empty() {
        for c in ['!', '-', '\n', 'é', '\u{7f}', '😀'] {
            assert!(lookup(c, 0).is_empty());
            assert!(lookup(c, 1000).is_empty());
        }
    }

    #[test]
    fn space_is_a_single_blank_stroke() {
        assert_eq!(lookup(' ', 0), vec![Point::new(0, 0), Point::new(MAX_X, 0)]);
        assert_eq!(
            lookup(' ', 1000),
            vec![Point::new(1000, 0), Point::new(1000 + MAX_X, 0)]
        );
    }

    #[test]
    fn ell_topology() {
        assert_eq!(
            lookup('L', 0),
            vec![
                Point::new(0, MAX_Y),
                Point::new(0, 0),
                LIFT,
                Point::new(0, 0),
                Point::new(MAX_X, 0),
            ]
        );
    }

    #[test]
    fn authored_shapes() {
        assert_eq!(
            lookup('A', 0),
            vec![
                Point::new(0, 0),
                Point::new(250, 500),
                LIFT,
                Point::new(500, 0),
                Point::new(250, 500),
                LIFT,
                Point::new(125, 250),
                Point::new(375, 250),
            ]
        );
        assert_eq!(
            lookup('4', 0),
            vec![
                Point::new(500, 500),
                Point::new(0, 250),
                Point::new(500, 250),
                LIFT,
                Point::new(500, 250),
                Point::new(500, 0),
            ]
        );
        assert_eq!(
            lookup('1', 0),
            vec![Point::new(250, 0), Point::new(250, 500), Point::new(0, 375)]
        );
        assert_eq!(strokes(&lookup('M', 0)).count(), 4);
        assert_eq!(strokes(&lookup('O', 0)).count(), 1);
    }

    #[test]
    fn other_box_sizes_scale() {
        let small = GlyphBox::new(100, 200);
        assert_eq!(
            lookup_in(&small, 'T', 10),
            vec![
                Point::new(10, 200),
                Point::new(110, 200),
                LIFT,
                Point::new(60, 200),
                Point::new(60, 0),
            ]
        );
    }

    #[test]
    fn toolpath_concatenates_at_fixed_advance() {
        assert!(render("").is_empty());
        assert_eq!(render("A"), lookup('A', 0));

        let mut expected = lookup('A', 0);
        expected.extend(lookup('B', MAX_X));
        assert_eq!(render("AB"), expected);
    }

    #[test]
    fn toolpath_skips_unsupported_but_advances() {
        let mut expected = lookup('H', 0);
        expected.extend(lookup('I', 2 * MAX_X));
        assert_eq!(render("H!I"), expected);
        assert_eq!(render("hi"), render("HI"));
    }

    #[test]
    fn cursor_saturates_on_very_long_text() {
        let mut text = "!".repeat(4_300_000);
        text.push('A');

        let points = render(&text);
        assert_eq!(points.len(), lookup('A', 0).len());
        assert_eq!(points.iter().filter(|p| p.is_lift()).count(), 2);
        for p in points.iter().filter(|p| !p.is_lift()) {
            assert_eq!(p.x, i32::MAX);
        }
        assert_eq!(validate(&points, &GlyphBox::REFERENCE), Ok(()));
    }

    #[test]
    fn toolpath_is_pure() {
        assert_eq!(render("HELLO 42"), render("HELLO 42"));
    }

    #[test]
    fn forced_lifts_sit_between_drawn_glyphs() {
        let layout = Layout {
            lift_between_glyphs: true,
            ..Layout::default()
        };
        let points = BlockRenderer::render_text("!C?C!", &layout);

        let mut expected = lookup('C', MAX_X);
        expected.push(LIFT);
        expected.extend(lookup('C', 3 * MAX_X));
        assert_eq!(points, expected);
        assert_eq!(validate(&points, &layout.glyph_box), Ok(()));
    }

    #[test]
    fn spacing_and_compact_missing() {
        let layout = Layout {
            letter_spacing: 200,
            advance_missing: false,
            ..Layout::default()
        };

        let mut expected = lookup('V', 0);
        expected.extend(lookup('V', 700));
        assert_eq!(BlockRenderer::render_text("V#V", &layout), expected);
    }

    #[test]
    fn proportional_advance_uses_glyph_width() {
        let layout = Layout {
            advance: Advance::Proportional,
            ..Layout::default()
        };

        let mut expected = lookup('1', 0);
        expected.extend(lookup('7', 250));
        assert_eq!(BlockRenderer::render_text("17", &layout), expected);
    }
}
