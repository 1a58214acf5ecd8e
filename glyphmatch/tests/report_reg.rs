//! Markdown report regression test
//!
//! Runs the size-sensitivity experiment end to end and checks the
//! generated report. In display mode the report is written to
//! `tests/regout`.

use glyphmatch::recog::run_experiment_detailed;
use glyphmatch::report::{DEFAULT_TOP_N, render_markdown};
use glyphmatch_test::{RegParams, UPPERCASE, builtin_rasterizer, config_with_size};

#[test]
fn report_reg() {
    let mut rp = RegParams::new("report");
    let rasterizer = builtin_rasterizer();
    let text = "HELLOWORLD";

    let report = run_experiment_detailed(
        &UPPERCASE,
        text,
        &rasterizer,
        &config_with_size(52),
        &config_with_size(60),
    )
    .expect("run_experiment_detailed");
    let md = render_markdown(&report, DEFAULT_TOP_N);

    rp.check(md.contains("## Source: `HELLOWORLD`"), "source line");
    rp.check(md.contains("## Recognized: `HELLOWORLD`"), "baseline recognized");
    rp.check(md.contains("## Accuracy: 100.00%"), "baseline accuracy");
    rp.check(md.contains("Font size: 60"), "alternate size");

    // One candidate line per input position, each with five candidates
    let lines: Vec<&str> = md
        .lines()
        .filter(|l| l.split_once(": [").is_some_and(|(n, _)| n.parse::<usize>().is_ok()))
        .collect();
    rp.compare_values(text.len() as f64, lines.len() as f64, 0.0);
    let five_each = lines.iter().all(|l| l.matches("('").count() == DEFAULT_TOP_N);
    rp.check(five_each, "five candidates per position");
    rp.check(lines[0].starts_with("1: [('H', 1.0000), "), "exact match listed first");

    if let Some(path) = rp.write_text(&md, "md").expect("write_text") {
        eprintln!("Report: {}", path.display());
    }

    assert!(rp.cleanup(), "report regression test failed");
}
