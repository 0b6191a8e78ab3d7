#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # figrc
 * _one call, one house style_. Process-wide figure style defaults for the
 * figures of the Markov chains book.
 *
 * The notebooks of the book all share the same visual identity: thick axis
 * spines, a 14pt base font, a white figure background and a fixed six-color
 * series palette. This crate owns that identity in a single place, as a
 * process-wide registry of rendering defaults (an "rcParams" in matplotlib
 * parlance) that plotting code reads before drawing anything.
 *
 * ## Get started
 *
 * Call [`init`] once at the top of a script or notebook cell, before any
 * figure is created:
 *
 * ```
 * // `true` delegates text rendering to a LaTeX installation.
 * // Pass `false` if you don't have one.
 * figrc::init(false);
 *
 * let rc = figrc::rc_params();
 * assert_eq!(rc.font_size, 14.0);
 * assert_eq!(rc.figure_face_color, figrc::color::WHITE);
 * ```
 *
 * Calling [`init`] again replaces the whole registry content; the last call
 * wins, nothing accumulates. Individual options can be adjusted afterwards
 * with [`update_rc_params`].
 *
 * Series colors come from the [`palette::CHAPTER`] cycle:
 *
 * ```
 * use figrc::palette::Palette;
 *
 * // the cycle wraps: series 6 reuses the color of series 0
 * let mut colors = figrc::palette::CHAPTER.cycle();
 * let first = colors.next().unwrap();
 * assert_eq!(colors.nth(4).unwrap(), figrc::palette::CHAPTER.cycle().nth(5).unwrap());
 * assert_eq!(colors.next().unwrap(), first);
 * ```
 */

pub mod color;
pub mod config;
pub mod palette;

pub use color::ColorU8;
pub use config::{
    PdfFontType, RcParams, TextRendering, init, rc_params, set_rc_params, update_rc_params,
};
pub use palette::{IndexColor, Palette};
