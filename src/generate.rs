// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The per-size generation loop.

use std::path::{Path, PathBuf};

use crate::fallback;
use crate::fonts;

/// Icon sizes the web app manifest expects.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Label drawn on placeholder icons.
pub const DEFAULT_LABEL: &str = "PC";

/// File name of the vector source inside the icon directory.
pub const SVG_FILE_NAME: &str = "icon.svg";

/// A vector-to-raster conversion capability.
pub trait Rasterizer {
    /// Renders `svg_path` into a square pixmap of exactly `size`x`size` pixels.
    fn rasterize(&self, svg_path: &Path, size: u32) -> Result<tiny_skia::Pixmap, String>;
}

/// Returns the compiled-in SVG rasterization backend.
#[cfg(feature = "svg")]
pub fn default_backend() -> Option<Box<dyn Rasterizer>> {
    Some(Box::new(crate::backend::SvgBackend))
}

/// Returns the compiled-in SVG rasterization backend, which this build
/// does not have.
#[cfg(not(feature = "svg"))]
pub fn default_backend() -> Option<Box<dyn Rasterizer>> {
    None
}

/// How a single icon was produced.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum IconSource {
    /// Rendered from the SVG source.
    Vector,
    /// Drawn by the placeholder renderer.
    Fallback,
}

/// A single generated icon.
#[derive(Debug)]
pub struct Outcome {
    /// Icon size in pixels.
    pub size: u32,
    /// Path the PNG was written to.
    pub path: PathBuf,
    /// How the icon was produced.
    pub source: IconSource,
}

/// Generates one icon per entry of `sizes` into `icon_dir`.
///
/// The vector path is taken when `icon_dir/icon.svg` exists and a backend
/// is provided; a conversion failure falls back to the placeholder for that
/// size only and the batch continues. Existing files are overwritten. A
/// file write failure aborts the run; files written so far are kept.
pub fn run(
    icon_dir: &Path,
    label: &str,
    sizes: &[u32],
    backend: Option<&dyn Rasterizer>,
) -> Result<Vec<Outcome>, String> {
    let svg_path = icon_dir.join(SVG_FILE_NAME);
    let backend = if svg_path.exists() {
        if backend.is_none() {
            println!("SVG rasterization is not available, creating fallback icons");
        }
        backend
    } else {
        None
    };

    // Resolved on the first placeholder, so vector-only runs skip font
    // loading entirely.
    let mut font = fonts::LazyFont::default();

    println!("Generating icons for sizes: {:?}", sizes);

    let mut outcomes = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let out_png = icon_dir.join(format!("icon-{0}x{0}.png", size));

        let (pixmap, source) = match backend {
            Some(backend) => match backend.rasterize(&svg_path, size) {
                Ok(pixmap) => (pixmap, IconSource::Vector),
                Err(e) => {
                    println!("✗ Failed to generate {} from SVG: {}", out_png.display(), e);
                    (placeholder(size, label, &mut font)?, IconSource::Fallback)
                }
            },
            None => (placeholder(size, label, &mut font)?, IconSource::Fallback),
        };

        pixmap
            .save_png(&out_png)
            .map_err(|e| format!("failed to save {}: {}", out_png.display(), e))?;

        match source {
            IconSource::Vector => println!("✓ Generated {} from SVG", out_png.display()),
            IconSource::Fallback => println!("✓ Generated fallback {}", out_png.display()),
        }

        outcomes.push(Outcome {
            size,
            path: out_png,
            source,
        });
    }

    println!("Icon generation complete!");

    Ok(outcomes)
}

fn placeholder(
    size: u32,
    label: &str,
    font: &mut fonts::LazyFont,
) -> Result<tiny_skia::Pixmap, String> {
    fallback::render_placeholder(size, label, font.get())
        .ok_or_else(|| format!("invalid icon size: {}", size))
}
