// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The placeholder icon renderer.

use crate::fonts::LabelFont;

/// Renders the placeholder icon: an outlined disc with a centered label.
///
/// The disc is inscribed with a margin of `size / 8` per side and stroked at
/// `size / 16`; the label is drawn at `size / 3` and centered from the
/// measured bounds of its outline. Returns `None` only when `size` is zero.
pub fn render_placeholder(size: u32, label: &str, font: &LabelFont) -> Option<tiny_skia::Pixmap> {
    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    let mut canvas = pixmap.as_mut();

    let size = size as f32;
    let margin = size / 8.0;
    let circle = tiny_skia::PathBuilder::from_circle(size / 2.0, size / 2.0, size / 2.0 - margin)?;

    let mut paint = tiny_skia::Paint::default();
    paint.anti_alias = true;

    paint.set_color_rgba8(15, 23, 42, 255);
    canvas.fill_path(
        &circle,
        &paint,
        tiny_skia::FillRule::Winding,
        tiny_skia::Transform::identity(),
        None,
    );

    paint.set_color_rgba8(59, 130, 246, 255);
    let stroke = tiny_skia::Stroke {
        width: size / 16.0,
        ..tiny_skia::Stroke::default()
    };
    canvas.stroke_path(
        &circle,
        &paint,
        &stroke,
        tiny_skia::Transform::identity(),
        None,
    );

    draw_label(&mut canvas, label, font, size);

    Some(pixmap)
}

fn draw_label(canvas: &mut tiny_skia::PixmapMut, label: &str, font: &LabelFont, size: f32) {
    let text = match font.outline_text(label, size / 3.0) {
        Some(text) => text,
        None => return,
    };

    // Center from the measured bounds, so font metrics variance cannot
    // push the label off-center.
    let bounds = text.path.bounds();
    let ts = tiny_skia::Transform::from_translate(
        (size - bounds.width()) / 2.0 - bounds.x(),
        (size - bounds.height()) / 2.0 - bounds.y(),
    );

    let mut paint = tiny_skia::Paint::default();
    paint.anti_alias = true;
    paint.set_color_rgba8(255, 255, 255, 255);

    match text.stroke_width {
        Some(width) => {
            let stroke = tiny_skia::Stroke {
                width,
                line_cap: tiny_skia::LineCap::Round,
                line_join: tiny_skia::LineJoin::Round,
                ..tiny_skia::Stroke::default()
            };
            canvas.stroke_path(&text.path, &paint, &stroke, ts, None);
        }
        None => {
            canvas.fill_path(&text.path, &paint, tiny_skia::FillRule::Winding, ts, None);
        }
    }
}
