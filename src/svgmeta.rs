// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reads the declared dimensions of an SVG file.

use svgtypes::{Length, LengthUnit};

/// Dimension assumed whenever the SVG does not provide a usable one.
pub const DEFAULT_DIMENSION: u32 = 512;

/// Reads the `width` and `height` attributes off the root element of an SVG file.
///
/// Never fails: each dimension independently falls back to
/// [`DEFAULT_DIMENSION`] when its attribute is absent or unusable, and any
/// file-level failure yields the default pair.
pub fn read_dimensions<P: AsRef<std::path::Path>>(path: P) -> (u32, u32) {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_dimensions(&text),
        Err(_) => (DEFAULT_DIMENSION, DEFAULT_DIMENSION),
    }
}

/// Same as [`read_dimensions`], but over in-memory XML text.
pub fn parse_dimensions(text: &str) -> (u32, u32) {
    let doc = match roxmltree::Document::parse(text) {
        Ok(doc) => doc,
        Err(_) => return (DEFAULT_DIMENSION, DEFAULT_DIMENSION),
    };

    let root = doc.root_element();
    (
        parse_dimension(root.attribute("width")),
        parse_dimension(root.attribute("height")),
    )
}

fn parse_dimension(value: Option<&str>) -> u32 {
    let value = match value {
        Some(value) => value,
        None => return DEFAULT_DIMENSION,
    };

    // Only unitless and px lengths describe a pixel grid.
    match value.parse::<Length>() {
        Ok(Length {
            number,
            unit: LengthUnit::None | LengthUnit::Px,
        }) if number >= 1.0 => number.round() as u32,
        _ => DEFAULT_DIMENSION,
    }
}
