// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A minimal stroked vector font.
//!
//! Glyphs are polylines on a unit em box: x in 0..=0.6, y in 0..=1
//! top-down. Unknown characters render as a box.

use crate::fonts::TextPath;

/// Horizontal advance, in em.
const ADVANCE: f32 = 0.8;

/// Stroke width, in em.
const STROKE_WIDTH: f32 = 0.12;

type Strokes = &'static [&'static [(f32, f32)]];

pub(crate) fn outline_text(text: &str, font_size: f32) -> Option<TextPath> {
    let mut builder = tiny_skia::PathBuilder::new();
    let mut pen = 0.0;

    for c in text.chars() {
        for polyline in strokes(c.to_ascii_uppercase()) {
            let (x, y) = polyline[0];
            builder.move_to(pen + x * font_size, y * font_size);
            for &(x, y) in &polyline[1..] {
                builder.line_to(pen + x * font_size, y * font_size);
            }
        }

        pen += ADVANCE * font_size;
    }

    let path = builder.finish()?;
    Some(TextPath {
        path,
        stroke_width: Some(STROKE_WIDTH * font_size),
    })
}

fn strokes(c: char) -> Strokes {
    match c {
        ' ' => &[],
        'A' => &[
            &[(0.0, 1.0), (0.3, 0.0), (0.6, 1.0)],
            &[(0.15, 0.65), (0.45, 0.65)],
        ],
        'B' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.6, 0.1), (0.6, 0.4), (0.45, 0.5), (0.0, 0.5)],
            &[(0.45, 0.5), (0.6, 0.6), (0.6, 0.9), (0.45, 1.0), (0.0, 1.0)],
        ],
        'C' => &[
            &[(0.6, 0.15), (0.45, 0.0), (0.15, 0.0), (0.0, 0.15), (0.0, 0.85), (0.15, 1.0), (0.45, 1.0), (0.6, 0.85)],
        ],
        'D' => &[
            &[(0.0, 0.0), (0.0, 1.0), (0.4, 1.0), (0.6, 0.8), (0.6, 0.2), (0.4, 0.0), (0.0, 0.0)],
        ],
        'E' => &[
            &[(0.6, 0.0), (0.0, 0.0), (0.0, 1.0), (0.6, 1.0)],
            &[(0.0, 0.5), (0.45, 0.5)],
        ],
        'F' => &[
            &[(0.6, 0.0), (0.0, 0.0), (0.0, 1.0)],
            &[(0.0, 0.5), (0.45, 0.5)],
        ],
        'G' => &[
            &[(0.6, 0.15), (0.45, 0.0), (0.15, 0.0), (0.0, 0.15), (0.0, 0.85), (0.15, 1.0), (0.45, 1.0), (0.6, 0.85), (0.6, 0.55), (0.35, 0.55)],
        ],
        'H' => &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.6, 0.0), (0.6, 1.0)],
            &[(0.0, 0.5), (0.6, 0.5)],
        ],
        'I' => &[
            &[(0.3, 0.0), (0.3, 1.0)],
            &[(0.1, 0.0), (0.5, 0.0)],
            &[(0.1, 1.0), (0.5, 1.0)],
        ],
        'J' => &[
            &[(0.6, 0.0), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85)],
        ],
        'K' => &[
            &[(0.0, 0.0), (0.0, 1.0)],
            &[(0.6, 0.0), (0.0, 0.5), (0.6, 1.0)],
        ],
        'L' => &[&[(0.0, 0.0), (0.0, 1.0), (0.6, 1.0)]],
        'M' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.3, 0.45), (0.6, 0.0), (0.6, 1.0)],
        ],
        'N' => &[&[(0.0, 1.0), (0.0, 0.0), (0.6, 1.0), (0.6, 0.0)]],
        'O' => &[
            &[(0.15, 0.0), (0.45, 0.0), (0.6, 0.15), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85), (0.0, 0.15), (0.15, 0.0)],
        ],
        'P' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.6, 0.1), (0.6, 0.4), (0.45, 0.5), (0.0, 0.5)],
        ],
        'Q' => &[
            &[(0.15, 0.0), (0.45, 0.0), (0.6, 0.15), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85), (0.0, 0.15), (0.15, 0.0)],
            &[(0.35, 0.7), (0.6, 1.0)],
        ],
        'R' => &[
            &[(0.0, 1.0), (0.0, 0.0), (0.45, 0.0), (0.6, 0.1), (0.6, 0.4), (0.45, 0.5), (0.0, 0.5)],
            &[(0.3, 0.5), (0.6, 1.0)],
        ],
        'S' => &[
            &[(0.6, 0.15), (0.45, 0.0), (0.15, 0.0), (0.0, 0.15), (0.0, 0.35), (0.15, 0.5), (0.45, 0.5), (0.6, 0.65), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85)],
        ],
        'T' => &[
            &[(0.0, 0.0), (0.6, 0.0)],
            &[(0.3, 0.0), (0.3, 1.0)],
        ],
        'U' => &[
            &[(0.0, 0.0), (0.0, 0.85), (0.15, 1.0), (0.45, 1.0), (0.6, 0.85), (0.6, 0.0)],
        ],
        'V' => &[&[(0.0, 0.0), (0.3, 1.0), (0.6, 0.0)]],
        'W' => &[
            &[(0.0, 0.0), (0.15, 1.0), (0.3, 0.55), (0.45, 1.0), (0.6, 0.0)],
        ],
        'X' => &[
            &[(0.0, 0.0), (0.6, 1.0)],
            &[(0.6, 0.0), (0.0, 1.0)],
        ],
        'Y' => &[
            &[(0.0, 0.0), (0.3, 0.45), (0.6, 0.0)],
            &[(0.3, 0.45), (0.3, 1.0)],
        ],
        'Z' => &[&[(0.0, 0.0), (0.6, 0.0), (0.0, 1.0), (0.6, 1.0)]],
        '0' => &[
            &[(0.15, 0.0), (0.45, 0.0), (0.6, 0.15), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85), (0.0, 0.15), (0.15, 0.0)],
            &[(0.45, 0.2), (0.15, 0.8)],
        ],
        '1' => &[
            &[(0.15, 0.2), (0.35, 0.0), (0.35, 1.0)],
            &[(0.1, 1.0), (0.5, 1.0)],
        ],
        '2' => &[
            &[(0.0, 0.15), (0.15, 0.0), (0.45, 0.0), (0.6, 0.15), (0.6, 0.3), (0.0, 1.0), (0.6, 1.0)],
        ],
        '3' => &[
            &[(0.0, 0.0), (0.6, 0.0), (0.3, 0.4), (0.6, 0.55), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85)],
        ],
        '4' => &[&[(0.45, 1.0), (0.45, 0.0), (0.0, 0.65), (0.6, 0.65)]],
        '5' => &[
            &[(0.6, 0.0), (0.0, 0.0), (0.0, 0.45), (0.45, 0.45), (0.6, 0.6), (0.6, 0.85), (0.45, 1.0), (0.15, 1.0), (0.0, 0.85)],
        ],
        '6' => &[
            &[(0.6, 0.15), (0.45, 0.0), (0.15, 0.0), (0.0, 0.15), (0.0, 0.85), (0.15, 1.0), (0.45, 1.0), (0.6, 0.85), (0.6, 0.6), (0.45, 0.45), (0.0, 0.45)],
        ],
        '7' => &[&[(0.0, 0.0), (0.6, 0.0), (0.2, 1.0)]],
        '8' => &[
            &[(0.15, 0.5), (0.45, 0.5), (0.6, 0.35), (0.6, 0.15), (0.45, 0.0), (0.15, 0.0), (0.0, 0.15), (0.0, 0.35), (0.15, 0.5), (0.0, 0.65), (0.0, 0.85), (0.15, 1.0), (0.45, 1.0), (0.6, 0.85), (0.6, 0.65), (0.45, 0.5)],
        ],
        '9' => &[
            &[(0.0, 0.85), (0.15, 1.0), (0.45, 1.0), (0.6, 0.85), (0.6, 0.15), (0.45, 0.0), (0.15, 0.0), (0.0, 0.15), (0.0, 0.4), (0.15, 0.55), (0.6, 0.55)],
        ],
        _ => &[&[(0.0, 0.0), (0.6, 0.0), (0.6, 1.0), (0.0, 1.0), (0.0, 0.0)]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_fit_the_em_box() {
        for c in ('A'..='Z').chain('0'..='9') {
            let glyph = strokes(c);
            assert!(!glyph.is_empty(), "no strokes for {:?}", c);

            for polyline in glyph {
                assert!(polyline.len() >= 2);
                for &(x, y) in *polyline {
                    assert!((0.0..=0.6).contains(&x), "{:?} x out of box", c);
                    assert!((0.0..=1.0).contains(&y), "{:?} y out of box", c);
                }
            }
        }
    }

    #[test]
    fn outlines_are_stroked() {
        let text = outline_text("PC", 30.0).unwrap();
        assert!(text.stroke_width.is_some());

        let bounds = text.path.bounds();
        assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
    }

    #[test]
    fn whitespace_only_has_no_outline() {
        assert!(outline_text(" ", 30.0).is_none());
    }
}
