//! Glyph regression test
//!
//! Exercises construction, shared/mutable conversion, borders and
//! foreground clipping on hand-drawn bitmaps.

use glyphmatch_core::{BACKGROUND, Error, Glyph, INK, RenderConfig};
use glyphmatch_test::RegParams;

fn cross(size: u32) -> Glyph {
    let mut g = Glyph::new(size, size).expect("new").to_mut();
    let mid = size / 2;
    g.fill_rect(mid, 0, 1, size, INK);
    g.fill_rect(0, mid, size, 1, INK);
    g.into()
}

#[test]
fn glyph_reg() {
    let mut rp = RegParams::new("glyph");

    // --- Construction ---
    let blank = Glyph::new(8, 6).expect("new");
    rp.compare_values(48.0, blank.area() as f64, 0.0);
    rp.check(blank.data().iter().all(|&v| v == BACKGROUND), "blank is background");
    rp.check(
        matches!(Glyph::new(0, 4), Err(Error::InvalidDimension { .. })),
        "zero width rejected",
    );
    rp.check(
        matches!(
            Glyph::from_raw(2, 2, vec![0; 3]),
            Err(Error::DataLength { expected: 4, actual: 3 })
        ),
        "short buffer rejected",
    );

    // --- Sharing and copy-on-write ---
    let g = cross(7);
    let shared = g.clone();
    rp.compare_values(2.0, g.ref_count() as f64, 0.0);
    let mut edited = shared.to_mut();
    edited.set_pixel(0, 0, INK).expect("set_pixel");
    let edited: Glyph = edited.into();
    rp.compare_values(BACKGROUND as f64, g.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(INK as f64, edited.get_pixel(0, 0).unwrap_or(255) as f64, 0.0);
    rp.check(!g.same_pixels(&edited), "edit does not leak into original");
    drop(shared);
    rp.check(g.clone().try_into_mut().is_err(), "shared glyph stays immutable");

    // --- Border ---
    let bordered = g.add_border(3, BACKGROUND).expect("add_border");
    rp.compare_values(13.0, bordered.width() as f64, 0.0);
    rp.compare_values(13.0, bordered.height() as f64, 0.0);
    rp.compare_values(INK as f64, bordered.get_pixel(6, 3).unwrap_or(255) as f64, 0.0);

    // --- Foreground bounds and clipping ---
    let bounds = bordered.foreground_bounds(128);
    rp.check(bounds == Some((3, 3, 7, 7)), "bounds of bordered cross");
    let clipped = bordered.clip_to_foreground(128).expect("clip_to_foreground");
    rp.compare_glyphs(&g, &clipped);

    let empty = Glyph::new(5, 5).expect("new");
    rp.check(empty.foreground_bounds(128).is_none(), "blank has no ink");
    let kept = empty.clip_to_foreground(128).expect("clip blank");
    rp.compare_glyphs(&empty, &kept);

    // --- Source tagging ---
    let tagged = g.with_source('X', RenderConfig::default());
    let source = tagged.source().map(|s| s.symbol);
    rp.check(source == Some('X'), "source symbol recorded");
    rp.check(tagged.same_pixels(&cross(7)), "tagging keeps pixels");

    assert!(rp.cleanup(), "glyph regression test failed");
}
