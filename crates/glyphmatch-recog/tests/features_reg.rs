//! Feature extraction regression test
//!
//! Hand-drawn bitmaps with known moments, plus the bounds property over
//! every built-in glyph.

use glyphmatch_core::{BACKGROUND, Glyph, INK, Rasterizer};
use glyphmatch_recog::{FeatureOptions, FeatureVector, extract, extract_with};
use glyphmatch_test::{
    DIGITS, RegParams, UPPERCASE, bold_config_with_size, builtin_rasterizer, config_with_size,
};

fn glyph_from_rows(rows: &[&str]) -> Glyph {
    let w = rows[0].len() as u32;
    let h = rows.len() as u32;
    let data = rows
        .iter()
        .flat_map(|r| r.bytes().map(|b| if b == b'#' { INK } else { BACKGROUND }))
        .collect();
    Glyph::from_raw(w, h, data).expect("from_raw")
}

#[test]
fn features_reg() {
    let mut rp = RegParams::new("features");

    // --- Single centred dot ---
    eprintln!("=== Known bitmaps ===");
    let dot = glyph_from_rows(&[".....", "..#..", "....."]);
    let fv = extract(&dot);
    rp.compare_values(1.0 / 15.0, fv.mass_norm(), 1e-12);
    rp.compare_values(2.0 / 5.0, fv.center_x(), 1e-12);
    rp.compare_values(1.0 / 3.0, fv.center_y(), 1e-12);
    rp.compare_values(0.0, fv.moment_x(), 1e-12);
    rp.compare_values(0.0, fv.moment_y(), 1e-12);

    // --- Two columns: spread horizontally only ---
    let bars = glyph_from_rows(&["#...#", "#...#"]);
    let fv = extract(&bars);
    rp.compare_values(0.4, fv.mass_norm(), 1e-12);
    rp.compare_values(0.4, fv.center_x(), 1e-12);
    rp.compare_values(0.25, fv.center_y(), 1e-12);
    // x/w in {0, 0.8}, mean 0.4: variance 0.16
    rp.compare_values(0.16, fv.moment_x(), 1e-12);
    rp.compare_values(0.25 * 0.25, fv.moment_y(), 1e-12);

    // --- Blank glyph gives the zero vector ---
    let blank = Glyph::new(6, 6).expect("new");
    rp.check(extract(&blank) == FeatureVector::ZERO, "blank is zero vector");

    // --- Solid glyph ---
    let solid = Glyph::new_filled(4, 4, INK).expect("new_filled");
    let fv = extract(&solid);
    rp.compare_values(1.0, fv.mass_norm(), 0.0);
    rp.compare_values(0.375, fv.center_x(), 1e-12);

    // --- Threshold decides what counts as ink ---
    let gray = Glyph::new_filled(3, 3, 140).expect("new_filled");
    rp.check(extract(&gray).is_zero(), "140 is background at default threshold");
    let opts = FeatureOptions::default().with_threshold(200);
    rp.compare_values(1.0, extract_with(&gray, &opts).mass_norm(), 0.0);

    // --- Bounds over every built-in glyph ---
    eprintln!("=== Bounds ===");
    let rasterizer = builtin_rasterizer();
    for config in [
        config_with_size(12),
        config_with_size(52),
        config_with_size(60),
        bold_config_with_size(52),
    ] {
        for &symbol in UPPERCASE.iter().chain(DIGITS.iter()) {
            let glyph = rasterizer.render(symbol, &config).expect("render");
            let fv = extract(&glyph);
            let ok = fv.is_valid()
                && fv.mass_norm() > 0.0
                && fv.moment_x() <= 0.25
                && fv.moment_y() <= 0.25;
            rp.check(ok, &format!("features of {symbol:?} at {config} in bounds"));
        }
    }

    // --- Purity ---
    let glyph = rasterizer.render('Q', &config_with_size(52)).expect("render Q");
    rp.check(extract(&glyph) == extract(&glyph.clone()), "extract is pure");

    assert!(rp.cleanup(), "features regression test failed");
}
