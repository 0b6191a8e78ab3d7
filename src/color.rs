/*!
 * Plain RGBA color values.
 *
 * Style options that carry a color ([`crate::RcParams::figure_face_color`],
 * the palette entries) store it as a [`ColorU8`]. Colors are parsed from the
 * usual HTML forms (`#rgb`, `#rrggbb`, `rgb(...)`, `rgba(...)`).
 */
use std::str::FromStr;
use std::{error, fmt};

/// Opaque white, the figure background of the house style
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Opaque black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);

/// An 8-bit per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    /// Build an opaque color from its RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from its RGBA components
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from an HTML hex string such as `b"#0071BE"`
    ///
    /// Accepts the `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` forms.
    /// Panics on any other input. Being `const`, a malformed literal in a
    /// palette table fails at compile time.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex[0] != b'#' {
            panic!("Invalid hex color");
        }
        match hex.len() {
            4 | 5 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                let mut a = 15;
                if hex.len() == 5 {
                    a = hex_to_u8(hex[4]);
                }
                ColorU8::from_rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)
            }
            7 | 9 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                let mut a = 255;
                if hex.len() == 9 {
                    a = hex_to_u8(hex[7]) << 4 | hex_to_u8(hex[8]);
                }
                ColorU8::from_rgba(r, g, b, a)
            }
            _ => panic!("Invalid hex color"),
        }
    }

    /// The red component
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// The green component
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// The blue component
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// The alpha component (255 is opaque)
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// The RGB components as an array
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The RGBA components as an array
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format as an HTML hex string (`#rrggbb`, alpha is ignored)
    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scale the alpha channel by `opacity` (0.0 to 1.0)
    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }

    /// Relative luminance of the color, between 0.0 (black) and 1.0 (white)
    pub fn luminance(&self) -> f32 {
        let [r, g, b] = self.rgb();
        (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

/// Parse error for [`ColorU8`]
#[derive(Debug)]
pub enum ParseError {
    /// The string is not one of the recognized color forms
    InvalidFormat,
    /// A color component is out of range or not a number
    InvalidComponent,
    /// The alpha component is out of range or not a number
    InvalidAlphaComponent,
    /// A hex string has a wrong length or a non-hex digit
    InvalidHex,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_component_0_255(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pc) = s.strip_suffix('%') {
        let val = pc
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(((val / 100.0) * 255.0).round() as u8)
    } else {
        let v: i32 = s.parse().map_err(|_| ParseError::InvalidComponent)?;
        if !(0..=255).contains(&v) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(v as u8)
    }
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    // a percentage, a 0.0-1.0 float, or a 0-255 integer
    if let Some(pc) = s.strip_suffix('%') {
        let val = pc
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        return Ok(((val / 100.0) * 255.0).round() as u8);
    }
    if let Ok(f) = s.parse::<f32>() {
        if !(0.0..=1.0).contains(&f) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        return Ok((f * 255.0).round() as u8);
    }
    let v: i32 = s.parse().map_err(|_| ParseError::InvalidAlphaComponent)?;
    if !(0..=255).contains(&v) {
        return Err(ParseError::InvalidAlphaComponent);
    }
    Ok(v as u8)
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        if raw.starts_with('#') {
            let bytes = raw.as_bytes();
            match bytes.len() {
                4 | 5 | 7 | 9 if bytes[1..].iter().all(u8::is_ascii_hexdigit) => {
                    Ok(ColorU8::from_html(bytes))
                }
                _ => Err(ParseError::InvalidHex),
            }
        } else if let Some(inner) = strip_func(raw, "rgb") {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat);
            }
            let r = parse_component_0_255(parts[0])?;
            let g = parse_component_0_255(parts[1])?;
            let b = parse_component_0_255(parts[2])?;
            Ok(ColorU8::from_rgb(r, g, b))
        } else if let Some(inner) = strip_func(raw, "rgba") {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 4 {
                return Err(ParseError::InvalidFormat);
            }
            let r = parse_component_0_255(parts[0])?;
            let g = parse_component_0_255(parts[1])?;
            let b = parse_component_0_255(parts[2])?;
            let a = parse_alpha(parts[3])?;
            Ok(ColorU8::from_rgba(r, g, b, a))
        } else {
            Err(ParseError::InvalidFormat)
        }
    }
}

/// Strip `name(` and `)` from a CSS-like function call, case-insensitive
fn strip_func<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_suffix(')')?;
    if rest.len() <= name.len() || rest.as_bytes()[name.len()] != b'(' {
        return None;
    }
    if rest[..name.len()].eq_ignore_ascii_case(name) {
        Some(&rest[name.len() + 1..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        let blue = ColorU8::from_rgb(0, 113, 190);
        assert_eq!("#0071BE".parse::<ColorU8>().unwrap(), blue);
        assert_eq!("#fff".parse::<ColorU8>().unwrap(), WHITE);

        let c = "#0071be80".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [0, 113, 190, 128]);
    }

    #[test]
    fn parse_css_rgb_rgba() {
        assert_eq!("rgb(255,255,255)".parse::<ColorU8>().unwrap(), WHITE);
        assert_eq!("rgb(100%,100%,100%)".parse::<ColorU8>().unwrap(), WHITE);

        let c = "rgba(0, 113, 190, 0.5)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [0, 113, 190, 128]);

        let c = "rgba(0,113,190,50%)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [0, 113, 190, 128]);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "".parse::<ColorU8>(),
            Err(ParseError::InvalidFormat)
        ));
        assert!(matches!(
            "#12345".parse::<ColorU8>(),
            Err(ParseError::InvalidHex)
        ));
        assert!(matches!(
            "#b0gus1".parse::<ColorU8>(),
            Err(ParseError::InvalidHex)
        ));
        assert!(matches!(
            "rgb(300,0,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidComponent)
        ));
        assert!(matches!(
            "rgba(255,0,0,2.0)".parse::<ColorU8>(),
            Err(ParseError::InvalidAlphaComponent)
        ));
    }

    #[test]
    fn html_round_trip() {
        assert_eq!(WHITE.html(), "#ffffff");
        assert_eq!("#242482".parse::<ColorU8>().unwrap().html(), "#242482");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(BLACK.luminance(), 0.0);
        assert!((WHITE.luminance() - 1.0).abs() < 1e-6);
        assert!(WHITE.luminance() > ColorU8::from_html(b"#242482").luminance());
    }
}
