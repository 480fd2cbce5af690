use std::{fs, path::PathBuf};

#[derive(Debug, Copy, Clone)]
struct PackedPoint {
    pub x: i8,
    pub y: i8,
    pub pen: bool,
}

const NUM_GLYPHS: usize = 128; // ASCII only
const GRID: i8 = 4;
type FontFile = [Option<Glyph>; NUM_GLYPHS];

/// Generate the glyph table Rust code that will be included in the crate.
fn generate_rust(font: &FontFile) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static BLOCK_FONT: [Option<Glyph>; {}] = [\n",
        NUM_GLYPHS
    ));

    for glyph in font {
        match glyph {
            None => out.push_str("    None,\n"),
            Some(g) => {
                out.push_str("    Some(Glyph {\n");
                out.push_str(&format!("        left: {},\n", g.left));
                out.push_str(&format!("        right: {},\n", g.right));
                out.push_str("        strokes: &[\n");

                for p in &g.strokes {
                    out.push_str(&format!(
                        "            PackedPoint {{ x: {}, y: {}, pen: {} }},\n",
                        p.x, p.y, p.pen
                    ));
                }

                out.push_str("        ],\n    }),\n");
            }
        }
    }

    out.push_str("];\n");

    out
}

#[derive(Debug, Clone)]
struct Glyph {
    pub left: i8,
    pub right: i8,
    pub strokes: Vec<PackedPoint>,
}

impl Glyph {
    /// Parse a single glyph line, e.g. `'L' 0,4 0,0 | 0,0 4,0`.
    fn from_line(line: &str) -> Result<(char, Self), String> {
        let mut chars = line.chars();

        let (Some('\''), Some(character), Some('\'')) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(format!("expected a quoted character: {line:?}"));
        };

        let mut strokes = Vec::new();
        let mut pen = false;

        for token in chars.as_str().split_whitespace() {
            if token == "|" {
                if !pen {
                    return Err(format!("empty stroke in {character:?}"));
                }
                // lift the tool for the next stroke
                pen = false;
                continue;
            }

            let (x, y) = token
                .split_once(',')
                .ok_or_else(|| format!("bad coordinate {token:?} in {character:?}"))?;
            let x: i8 = x.parse().map_err(|_| format!("bad x {x:?} in {character:?}"))?;
            let y: i8 = y.parse().map_err(|_| format!("bad y {y:?} in {character:?}"))?;

            if !(0..=GRID).contains(&x) || !(0..=GRID).contains(&y) {
                return Err(format!("({x}, {y}) is off the grid in {character:?}"));
            }

            strokes.push(PackedPoint { x, y, pen });
            // engage the tool for the rest of this stroke
            pen = true;
        }

        if !pen {
            return Err(format!("glyph {character:?} ends without a stroke"));
        }

        let left = strokes.iter().map(|p| p.x).min().unwrap_or(0);
        let right = strokes.iter().map(|p| p.x).max().unwrap_or(0);

        Ok((
            character,
            Self {
                left,
                right,
                strokes,
            },
        ))
    }
}

/// Load a file of glyph definitions.
fn load_file(file: &str) -> FontFile {
    let mut result = [const { None }; NUM_GLYPHS];

    for line in file.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (character, glyph) = Glyph::from_line(line).unwrap();
        let idx = character as usize;

        if idx >= NUM_GLYPHS {
            panic!("glyph {character:?} is outside ASCII");
        }
        if result[idx].is_some() {
            panic!("glyph {character:?} is defined twice");
        }

        result[idx] = Some(glyph);
    }

    result
}

fn main() {
    let block = fs::read_to_string("data/block.glyphs").unwrap();

    let glyphs = load_file(&block);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("block_font.rs");

    fs::write(out_file, generate_rust(&glyphs)).unwrap();

    println!("cargo:rerun-if-changed=data/block.glyphs");
}
