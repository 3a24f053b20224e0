// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Font resolution and text outlining for the placeholder label.

use log::warn;

mod builtin;

#[cfg(feature = "system-fonts")]
const DEJAVU_SANS_BOLD: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// A font usable for the placeholder label.
pub struct LabelFont(Repr);

enum Repr {
    Face { data: Vec<u8>, index: u32 },
    Builtin,
}

/// A text outline and how it should be painted.
pub struct TextPath {
    /// The outline geometry.
    pub path: tiny_skia::Path,
    /// Stroke width for stroked fonts. `None` means fill.
    pub stroke_width: Option<f32>,
}

impl LabelFont {
    /// Wraps raw font file data, validating that it parses.
    pub fn from_data(data: Vec<u8>, index: u32) -> Option<Self> {
        ttf_parser::Face::parse(&data, index).ok()?;
        Some(LabelFont(Repr::Face { data, index }))
    }

    /// Returns the built-in vector font.
    pub fn builtin() -> Self {
        LabelFont(Repr::Builtin)
    }

    /// Whether this is the built-in vector font.
    pub fn is_builtin(&self) -> bool {
        matches!(self.0, Repr::Builtin)
    }

    /// Builds an outline of `text` at `font_size` pixels.
    ///
    /// The pen starts at x = 0; the caller is expected to position the
    /// result from its measured bounds. Returns `None` when nothing would
    /// be drawn.
    pub fn outline_text(&self, text: &str, font_size: f32) -> Option<TextPath> {
        match &self.0 {
            Repr::Face { data, index } => outline_face_text(data, *index, text, font_size),
            Repr::Builtin => builtin::outline_text(text, font_size),
        }
    }
}

fn outline_face_text(data: &[u8], index: u32, text: &str, font_size: f32) -> Option<TextPath> {
    let face = ttf_parser::Face::parse(data, index).ok()?;
    let units_per_em = face.units_per_em() as f32;
    let scale = font_size / units_per_em;

    let mut builder = GlyphPathBuilder {
        builder: tiny_skia::PathBuilder::new(),
        x_offset: 0.0,
    };

    for c in text.chars() {
        match face.glyph_index(c) {
            Some(glyph_id) => {
                face.outline_glyph(glyph_id, &mut builder);
                let advance = face
                    .glyph_hor_advance(glyph_id)
                    .unwrap_or(face.units_per_em() / 2);
                builder.x_offset += advance as f32;
            }
            // Missing glyph: advance the pen anyway.
            None => builder.x_offset += units_per_em / 2.0,
        }
    }

    let path = builder.builder.finish()?;
    // Font units are y-up; flip while scaling to pixels.
    let path = path.transform(tiny_skia::Transform::from_scale(scale, -scale))?;
    Some(TextPath {
        path,
        stroke_width: None,
    })
}

struct GlyphPathBuilder {
    builder: tiny_skia::PathBuilder,
    x_offset: f32,
}

impl ttf_parser::OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x_offset + x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x_offset + x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x_offset + x1, y1, self.x_offset + x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x_offset + x1,
            y1,
            self.x_offset + x2,
            y2,
            self.x_offset + x,
            y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

type Provider = fn() -> Result<LabelFont, String>;

/// Resolves the font used for placeholder labels.
///
/// Providers are tried in order and the first success wins. A provider
/// failure is logged and recovery continues down the chain; the terminal
/// built-in provider cannot fail.
pub fn resolve() -> LabelFont {
    first_success(&providers())
}

fn providers() -> Vec<(&'static str, Provider)> {
    let mut list: Vec<(&'static str, Provider)> = Vec::new();
    #[cfg(feature = "system-fonts")]
    {
        list.push(("DejaVu Sans Bold", dejavu_provider));
        list.push(("system sans-serif", system_provider));
    }
    list.push(("builtin", builtin_provider));
    list
}

fn first_success(providers: &[(&'static str, Provider)]) -> LabelFont {
    for (name, provider) in providers {
        match provider() {
            Ok(font) => return font,
            Err(e) => warn!("Failed to load the {} font: {}.", name, e),
        }
    }

    // The builtin provider never fails, but keep a terminal default anyway.
    LabelFont::builtin()
}

/// A label font resolved on first use.
///
/// Keeps runs that never draw a placeholder from touching the provider
/// chain at all.
#[derive(Default)]
pub struct LazyFont(Option<LabelFont>);

impl LazyFont {
    /// Resolves the font on the first call and caches it.
    pub fn get(&mut self) -> &LabelFont {
        self.0.get_or_insert_with(resolve)
    }

    /// Whether the font has been resolved yet.
    pub fn is_resolved(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(feature = "system-fonts")]
fn dejavu_provider() -> Result<LabelFont, String> {
    let data = std::fs::read(DEJAVU_SANS_BOLD).map_err(|e| e.to_string())?;
    LabelFont::from_data(data, 0).ok_or_else(|| "not a valid font file".to_string())
}

#[cfg(feature = "system-fonts")]
fn system_provider() -> Result<LabelFont, String> {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::Name("Arial"), fontdb::Family::SansSerif],
        weight: fontdb::Weight::BOLD,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = fontdb
        .query(&query)
        .ok_or_else(|| "no matching font family".to_string())?;

    fontdb
        .with_face_data(id, |data, index| LabelFont::from_data(data.to_vec(), index))
        .flatten()
        .ok_or_else(|| "failed to load the font data".to_string())
}

fn builtin_provider() -> Result<LabelFont, String> {
    Ok(LabelFont::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_a_font() {
        assert!(LabelFont::from_data(b"not a font".to_vec(), 0).is_none());
    }

    #[test]
    fn resolve_always_yields_a_font() {
        let font = resolve();
        assert!(font.outline_text("PC", 24.0).is_some());
    }

    #[test]
    fn lazy_font_resolves_on_first_use_only() {
        let mut font = LazyFont::default();
        assert!(!font.is_resolved());

        assert!(font.get().outline_text("PC", 24.0).is_some());
        assert!(font.is_resolved());
    }

    #[test]
    fn builtin_outline_is_positioned_at_the_pen() {
        let font = LabelFont::builtin();
        let text = font.outline_text("AB", 30.0).unwrap();
        let bounds = text.path.bounds();
        assert!(bounds.x() >= 0.0);
        assert!(bounds.width() > 30.0, "two glyphs should span over one em");
    }
}
