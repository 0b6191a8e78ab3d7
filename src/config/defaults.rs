use crate::color::{self, ColorU8};

pub const FIGURE_DPI: f32 = 100.0;
pub const AXES_LINE_WIDTH: f32 = 1.0;
pub const LINE_WIDTH: f32 = 1.5;

pub const FONT_SIZE: f32 = 12.0;
pub const LEGEND_FONT_SIZE: f32 = 10.0;

pub const FIGURE_FACE_COLOR: ColorU8 = color::WHITE;
pub const SANS_SERIF_FALLBACK: &[&str] = &["Helvetica", "Arial", "DejaVu Sans"];
