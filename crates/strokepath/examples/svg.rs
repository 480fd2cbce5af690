use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

use strokepath::{Advance, GlyphBox, Layout, Point, build_toolpath_with, strokes};

/// Convert a toolpath to SVG path data. Device y grows upwards, SVG y grows
/// downwards, so each line is flipped inside its own band.
fn points_to_svg_path(
    points: &[Point],
    scale: f32,
    margin: f32,
    y_offset: f32,
    height: f32,
) -> Data {
    let mut data = Data::new();

    for stroke in strokes(points) {
        for (i, p) in stroke.iter().enumerate() {
            let x = p.x as f32 * scale + margin;
            let y = (height - p.y as f32) * scale + margin + y_offset;

            data = if i == 0 {
                data.move_to((x, y))
            } else {
                data.line_to((x, y))
            };
        }
    }

    data
}

fn draw_line(
    text: &str,
    layout: &Layout,
    y_offset: f32,
    scale: f32,
    margin: f32,
) -> (Path, f32) {
    let points = build_toolpath_with(text, layout);
    let width = points.iter().map(|p| p.x).max().unwrap_or(0) as f32 * scale + 2.0 * margin;

    let data = points_to_svg_path(
        &points,
        scale,
        margin,
        y_offset,
        layout.glyph_box.max_y as f32,
    );

    let path = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1)
        .set("d", data);

    (path, width)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use svg::node::element::Rectangle;

    let scale = 0.05;
    let margin = 10.0;
    let line_height = GlyphBox::REFERENCE.max_y as f32 * scale + margin;

    let lines = [
        ("ABCDEFGHIJKLM", Layout::default()),
        ("NOPQRSTUVWXYZ", Layout::default()),
        ("0123456789", Layout::default()),
        (
            "Laser 2025",
            Layout {
                letter_spacing: 200,
                lift_between_glyphs: true,
                ..Layout::default()
            },
        ),
        (
            "Proportional 1",
            Layout {
                advance: Advance::Proportional,
                letter_spacing: 100,
                ..Layout::default()
            },
        ),
    ];

    let mut y_offset = 0.0;
    let mut width: f32 = 0.0;
    let mut elements: Vec<Path> = Vec::new();

    for (text, layout) in &lines {
        let (p, w) = draw_line(text, layout, y_offset, scale, margin);
        elements.push(p);
        width = width.max(w);
        y_offset += line_height;
    }

    let height = y_offset + margin;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let mut document = Document::new().add(background);

    for el in elements {
        document = document.add(el);
    }

    let document = document
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("output_toolpath.svg", &document)?;
    println!("Wrote output_toolpath.svg");

    Ok(())
}
