// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SVG rasterization through resvg.

use std::path::Path;

use crate::generate::Rasterizer;

/// The compiled-in SVG rasterization backend.
pub struct SvgBackend;

impl Rasterizer for SvgBackend {
    fn rasterize(&self, svg_path: &Path, size: u32) -> Result<tiny_skia::Pixmap, String> {
        let text = std::fs::read_to_string(svg_path).map_err(|e| e.to_string())?;
        rasterize_str(&text, size)
    }
}

/// Renders SVG text into a square pixmap of exactly `size`x`size` pixels.
///
/// The content is scaled to fill the target from the size the SVG resolves
/// to, so sources sized via `width`/`height` and sources sized only via a
/// `viewBox` both cover the whole icon.
pub fn rasterize_str(text: &str, size: u32) -> Result<tiny_skia::Pixmap, String> {
    let tree = usvg::Tree::from_str(text, &usvg::Options::default()).map_err(|e| e.to_string())?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| format!("invalid icon size: {}", size))?;

    let ts = tiny_skia::Transform::from_scale(
        size as f32 / tree.size().width(),
        size as f32 / tree.size().height(),
    );
    resvg::render(&tree, ts, &mut pixmap.as_mut());

    Ok(pixmap)
}
