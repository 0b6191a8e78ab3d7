//! End-to-end check of the registry lifecycle, in a fresh process.
//!
//! The registry is process-wide, so the whole lifecycle is exercised from a
//! single test function: parallel test threads would otherwise interleave
//! their writes.

use figrc::palette::{IndexColor, Palette};
use figrc::{RcParams, TextRendering, color, init, rc_params, update_rc_params};

#[test]
fn registry_lifecycle() {
    // Before any init call, the registry holds the library defaults and the
    // LaTeX toggle is off.
    assert_eq!(rc_params(), RcParams::default());
    assert_eq!(rc_params().text_rendering, TextRendering::Native);

    // Plain init turns the house style on and leaves LaTeX off.
    init(false);
    let rc = rc_params();
    assert_eq!(rc.text_rendering, TextRendering::Native);
    assert_eq!(rc.figure_face_color, color::WHITE);
    assert_eq!(rc.axes_line_width, 2.0);
    assert_eq!(rc.font_size, 14.0);

    // The six-color cycle is installed and wraps after the sixth series.
    assert_eq!(rc.color_cycle.len(), 6);
    let colors: Vec<_> = rc.color_cycle.cycle().take(7).collect();
    assert_eq!(colors[6], colors[0]);
    assert_eq!(colors[0], rc.color_cycle.get(IndexColor(0)));

    // Tweaks apply on top of the current snapshot.
    update_rc_params(|rc| rc.figure_dpi = 300.0);
    assert_eq!(rc_params().figure_dpi, 300.0);

    // A later init call fully replaces the registry content: the LaTeX
    // toggle flips on and the dpi tweak is gone, nothing accumulates.
    init(true);
    assert_eq!(rc_params(), RcParams::house_style(true));
    assert_eq!(rc_params().text_rendering, TextRendering::Latex);
    assert_eq!(rc_params().figure_dpi, 150.0);

    // Last write wins.
    init(false);
    assert_eq!(rc_params(), RcParams::house_style(false));
}
