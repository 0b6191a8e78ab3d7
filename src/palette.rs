/*!
 * Series color cycles.
 *
 * A palette assigns a color to each data series of a plot, by series index.
 * Lookups wrap around, so a plot with more series than the palette has
 * colors starts over from the first entry.
 */
use crate::color::ColorU8;

/// A series color identified by its index in a palette
#[derive(Debug, Clone, Copy)]
pub struct IndexColor(pub usize);

/// A trait for assigning colors to data series
pub trait Palette {
    /// Get the number of colors in the palette before repeating
    fn len(&self) -> usize;

    /// Check whether the palette is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a color from the palette by its index, wrapping past the end
    fn get(&self, color: IndexColor) -> ColorU8;

    /// Iterate endlessly over the palette colors, in cycling order
    fn cycle(&self) -> impl Iterator<Item = ColorU8> {
        (0..).map(move |i| self.get(IndexColor(i)))
    }

    /// Convert the palette into an owned `Custom` palette
    fn to_custom(&self) -> Custom {
        let mut colors = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            colors.push(self.get(IndexColor(i)));
        }
        Custom(colors)
    }
}

/// The six-color palette of the book chapters
///
/// This is the default color cycle applied by [`crate::init`].
pub static CHAPTER: Fixed = Fixed(&[
    ColorU8::from_html(b"#242482"), // indigo
    ColorU8::from_html(b"#F00D2C"), // red
    ColorU8::from_html(b"#0071BE"), // blue
    ColorU8::from_html(b"#4E8F00"), // green
    ColorU8::from_html(b"#553C67"), // plum
    ColorU8::from_html(b"#DA5319"), // orange
]);

/// A palette backed by a fixed color table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed(pub &'static [ColorU8]);

impl Palette for Fixed {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, color: IndexColor) -> ColorU8 {
        self.0[color.0 % self.len()]
    }
}

/// A custom palette
#[derive(Debug, Clone, PartialEq)]
pub struct Custom(pub Vec<ColorU8>);

impl Palette for Custom {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, color: IndexColor) -> ColorU8 {
        self.0[color.0 % self.len()]
    }
}

impl From<Fixed> for Custom {
    fn from(fixed: Fixed) -> Self {
        Custom(fixed.0.to_vec())
    }
}

impl FromIterator<ColorU8> for Custom {
    fn from_iter<I: IntoIterator<Item = ColorU8>>(iter: I) -> Self {
        Custom(iter.into_iter().collect())
    }
}
