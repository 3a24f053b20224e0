use icongen::fallback::render_placeholder;
use icongen::fonts::LabelFont;

// The builtin font keeps these tests independent from system fonts.
fn placeholder(size: u32, label: &str) -> tiny_skia::Pixmap {
    render_placeholder(size, label, &LabelFont::builtin()).unwrap()
}

#[test]
fn zero_size_is_rejected() {
    assert!(render_placeholder(0, "PC", &LabelFont::builtin()).is_none());
}

#[test]
fn pixmap_matches_the_requested_size() {
    for size in [72, 96, 128, 512] {
        let pixmap = placeholder(size, "PC");
        assert_eq!(pixmap.width(), size);
        assert_eq!(pixmap.height(), size);
    }
}

#[test]
fn corners_are_transparent() {
    let pixmap = placeholder(128, "PC");
    for (x, y) in [(1, 1), (126, 1), (1, 126), (126, 126)] {
        let px = pixmap.pixel(x, y).unwrap();
        assert_eq!(px.alpha(), 0, "corner ({}, {}) is not transparent", x, y);
    }
}

#[test]
fn circle_outline_sits_on_the_rim() {
    // With size 128 the margin is 16, so the stroke band crosses y = 16
    // at the horizontal center.
    let pixmap = placeholder(128, "PC");
    let px = pixmap.pixel(64, 16).unwrap();
    assert_eq!(px.alpha(), 255);
    assert!(px.blue() > px.red(), "rim should be the outline color");
    assert!(px.blue() > 150);
}

#[test]
fn disc_interior_is_filled() {
    let pixmap = placeholder(128, "PC");
    // Deep inside the disc, above the label.
    let px = pixmap.pixel(64, 30).unwrap();
    assert_eq!(px.alpha(), 255);
    assert!(px.red() < 30 && px.green() < 40 && px.blue() < 60);
}

#[test]
fn label_is_drawn_in_the_center() {
    let pixmap = placeholder(192, "PC");

    let mut light = 0;
    for y in 64..128 {
        for x in 64..128 {
            let px = pixmap.pixel(x, y).unwrap();
            if px.red() > 200 && px.green() > 200 && px.blue() > 200 {
                light += 1;
            }
        }
    }

    assert!(light > 50, "expected label pixels in the central region");
}

#[test]
fn empty_label_leaves_the_disc_untouched() {
    let pixmap = placeholder(128, "");
    let px = pixmap.pixel(64, 64).unwrap();
    assert!(px.red() < 30, "center should be the fill color");
}

#[test]
fn rendering_is_deterministic() {
    let a = placeholder(144, "PC");
    let b = placeholder(144, "PC");
    assert_eq!(a.data(), b.data());
}
