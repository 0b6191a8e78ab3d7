/*!
 * The process-wide figure configuration registry.
 *
 * The registry plays the role of matplotlib's `rcParams`: a single
 * process-wide table of rendering defaults that plotting code reads when a
 * figure is created. It is written once at startup, usually through
 * [`init`], and read implicitly afterwards. There is no teardown.
 *
 * Writes replace the whole [`RcParams`] snapshot, so two successive calls
 * to [`init`] leave the registry exactly as the second call wrote it.
 * Concurrent writers race with last-write-wins at snapshot granularity;
 * the intended usage is a single call at the top of a script or notebook
 * cell, before any rendering occurs.
 */
use std::sync::{LazyLock, PoisonError, RwLock};

use log::debug;

use crate::color::ColorU8;
use crate::palette::{self, Palette};

pub(crate) mod defaults;

/// The text rendering backend used for labels and annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRendering {
    /// Text is shaped and rendered by the plotting library itself
    #[default]
    Native,
    /// Text is delegated to an external LaTeX installation
    ///
    /// Rendering fails downstream if no LaTeX installation is found;
    /// this crate does not check for one.
    Latex,
}

/// Font embedding mode for PDF output
///
/// The discriminants are the numeric codes used by PostScript/PDF font
/// dictionaries (and by matplotlib's `pdf.fonttype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PdfFontType {
    /// Glyphs are embedded as Type 3 outlines
    #[default]
    Type3 = 3,
    /// The TrueType font file is embedded, keeping text selectable
    TrueType = 42,
}

impl PdfFontType {
    /// The numeric font type code
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A snapshot of every configuration option of the registry
///
/// `RcParams::default()` holds the library defaults that apply before any
/// call to [`init`].
#[derive(Debug, Clone, PartialEq)]
pub struct RcParams {
    /// Figure resolution, in dots per inch
    pub figure_dpi: f32,
    /// Width of the axis spines, in points
    pub axes_line_width: f32,
    /// Default width of series lines, in points
    pub line_width: f32,
    /// Base font size, in points
    pub font_size: f32,
    /// Legend font size, in points
    pub legend_font_size: f32,
    /// Font embedding mode for PDF output
    pub pdf_font_type: PdfFontType,
    /// Figure background color
    pub figure_face_color: ColorU8,
    /// Preferred sans-serif families, tried in order
    pub sans_serif_fallback: Vec<String>,
    /// Text rendering backend
    pub text_rendering: TextRendering,
    /// Color cycle for sequential data series
    pub color_cycle: palette::Custom,
}

impl Default for RcParams {
    fn default() -> Self {
        RcParams {
            figure_dpi: defaults::FIGURE_DPI,
            axes_line_width: defaults::AXES_LINE_WIDTH,
            line_width: defaults::LINE_WIDTH,
            font_size: defaults::FONT_SIZE,
            legend_font_size: defaults::LEGEND_FONT_SIZE,
            pdf_font_type: PdfFontType::default(),
            figure_face_color: defaults::FIGURE_FACE_COLOR,
            sans_serif_fallback: defaults::SANS_SERIF_FALLBACK
                .iter()
                .map(|s| s.to_string())
                .collect(),
            text_rendering: TextRendering::default(),
            color_cycle: palette::CHAPTER.to_custom(),
        }
    }
}

impl RcParams {
    /// The house style of the book figures
    ///
    /// High resolution, thick spines and lines, a 14pt base font over a
    /// white background, TrueType PDF embedding and the [`palette::CHAPTER`]
    /// color cycle. `use_latex` selects the text rendering backend.
    pub fn house_style(use_latex: bool) -> Self {
        RcParams {
            figure_dpi: 150.0,
            axes_line_width: 2.0,
            line_width: 2.0,
            font_size: 14.0,
            legend_font_size: 10.0,
            pdf_font_type: PdfFontType::TrueType,
            figure_face_color: ColorU8::from_html(b"#FFFFFF"),
            sans_serif_fallback: ["Helvetica Neue", "Helvetica", "Tahoma"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            text_rendering: if use_latex {
                TextRendering::Latex
            } else {
                TextRendering::Native
            },
            color_cycle: palette::CHAPTER.to_custom(),
        }
    }
}

static RC_PARAMS: LazyLock<RwLock<RcParams>> = LazyLock::new(Default::default);

// The registry must stay usable after a panicked writer, so poisoning is
// recovered instead of propagated.
fn read() -> std::sync::RwLockReadGuard<'static, RcParams> {
    RC_PARAMS.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> std::sync::RwLockWriteGuard<'static, RcParams> {
    RC_PARAMS.write().unwrap_or_else(PoisonError::into_inner)
}

/// Get a snapshot of the current registry content
pub fn rc_params() -> RcParams {
    read().clone()
}

/// Replace the whole registry content
pub fn set_rc_params(params: RcParams) {
    *write() = params;
}

/// Adjust individual registry options in place
///
/// ```
/// figrc::init(false);
/// figrc::update_rc_params(|rc| rc.legend_font_size = 8.0);
/// assert_eq!(figrc::rc_params().legend_font_size, 8.0);
/// ```
pub fn update_rc_params<F>(f: F)
where
    F: FnOnce(&mut RcParams),
{
    f(&mut write());
}

/// Apply the house figure style to the registry
///
/// This is the one call the notebooks make before drawing. `use_latex`
/// delegates text rendering to an external LaTeX installation; keep it
/// `false` if none is installed. Calling again is idempotent and the last
/// call wins.
pub fn init(use_latex: bool) {
    let params = RcParams::house_style(use_latex);
    debug!(
        "applying house figure style (dpi {}, text rendering {:?})",
        params.figure_dpi, params.text_rendering,
    );
    set_rc_params(params);
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::color;
    use crate::palette::IndexColor;

    // Tests in this module write to the shared registry and must not
    // interleave with each other.
    static REGISTRY: Mutex<()> = Mutex::new(());

    fn registry_guard() -> std::sync::MutexGuard<'static, ()> {
        REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn house_style_values() {
        let rc = RcParams::house_style(false);
        assert_eq!(rc.figure_dpi, 150.0);
        assert_eq!(rc.axes_line_width, 2.0);
        assert_eq!(rc.line_width, 2.0);
        assert_eq!(rc.font_size, 14.0);
        assert_eq!(rc.legend_font_size, 10.0);
        assert_eq!(rc.pdf_font_type.code(), 42);
        assert_eq!(rc.figure_face_color, color::WHITE);
        assert_eq!(
            rc.sans_serif_fallback,
            ["Helvetica Neue", "Helvetica", "Tahoma"]
        );
        assert_eq!(rc.text_rendering, TextRendering::Native);
    }

    #[test]
    fn latex_flag_is_the_only_difference() {
        let with = RcParams::house_style(true);
        assert_eq!(with.text_rendering, TextRendering::Latex);

        let mut without = RcParams::house_style(false);
        without.text_rendering = TextRendering::Latex;
        assert_eq!(with, without);
    }

    #[test]
    fn house_style_cycles_the_chapter_palette() {
        let rc = RcParams::house_style(false);
        assert_eq!(rc.color_cycle.len(), 6);
        for i in 0..6 {
            assert_eq!(
                rc.color_cycle.get(IndexColor(i + 6)).rgba(),
                rc.color_cycle.get(IndexColor(i)).rgba(),
            );
        }
    }

    #[test]
    fn init_writes_the_registry() {
        let _guard = registry_guard();

        init(false);
        assert_eq!(rc_params(), RcParams::house_style(false));

        init(true);
        assert_eq!(rc_params().text_rendering, TextRendering::Latex);
    }

    #[test]
    fn last_init_call_wins() {
        let _guard = registry_guard();

        init(true);
        init(false);
        assert_eq!(rc_params(), RcParams::house_style(false));
    }

    #[test]
    fn update_does_not_survive_init() {
        let _guard = registry_guard();

        init(false);
        update_rc_params(|rc| rc.font_size = 9.0);
        assert_eq!(rc_params().font_size, 9.0);

        init(false);
        assert_eq!(rc_params().font_size, 14.0);
    }
}
