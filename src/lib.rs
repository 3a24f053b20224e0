// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
icongen produces the square PNG icon set a web application manifest expects.

Icons are rendered from an optional `icon.svg` source when the `svg` feature
is enabled, and fall back to a procedurally drawn placeholder otherwise or
when a conversion fails.
*/

#![warn(missing_docs)]

#[cfg(feature = "svg")]
pub mod backend;
pub mod fallback;
pub mod fonts;
pub mod generate;
pub mod svgmeta;
