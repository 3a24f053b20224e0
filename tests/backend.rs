#![cfg(feature = "svg")]

use icongen::backend::rasterize_str;

#[test]
fn declared_dimensions_fill_the_output() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                   <rect width="100" height="100" fill="#ff0000"/>
                 </svg>"##;

    let pixmap = rasterize_str(svg, 128).unwrap();
    assert_eq!(pixmap.width(), 128);

    let px = pixmap.pixel(120, 120).unwrap();
    assert_eq!((px.red(), px.alpha()), (255, 255));
}

#[test]
fn viewbox_only_svg_fills_the_output() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                   <rect width="100" height="100" fill="#ff0000"/>
                 </svg>"##;

    let pixmap = rasterize_str(svg, 128).unwrap();

    // The content must be scaled from the viewBox-resolved size, not from
    // a default, so far-corner pixels are covered too.
    for (x, y) in [(4, 4), (64, 64), (120, 120)] {
        let px = pixmap.pixel(x, y).unwrap();
        assert_eq!((px.red(), px.alpha()), (255, 255), "pixel ({}, {})", x, y);
    }
}

#[test]
fn non_square_source_is_stretched_to_the_square() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
                   <rect width="200" height="100" fill="#00ff00"/>
                 </svg>"##;

    let pixmap = rasterize_str(svg, 96).unwrap();
    let px = pixmap.pixel(90, 90).unwrap();
    assert_eq!((px.green(), px.alpha()), (255, 255));
}

#[test]
fn broken_svg_is_an_error() {
    assert!(rasterize_str("not an svg", 96).is_err());
}
