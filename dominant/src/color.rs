//! Exact-color histograms and dominant color selection

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use imageproc::image::{Rgb, RgbImage};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque 8-bit RGB color. Equality is exact, there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb<u8>> for Color {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

/// Renders as `#RRGGBB`, uppercase.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Invalid hex color: ")?;
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Occurrence count of every exact color in an image.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    counts: HashMap<Color, u64>,
    // first color to reach the highest count in row-major order
    dominant: Option<(Color, u64)>,
}

impl Histogram {
    pub fn from_image(img: &RgbImage) -> Self {
        let mut histogram = Histogram {
            counts: HashMap::with_capacity(img.width() as usize * 4),
            dominant: None,
        };

        // pixels() walks rows top to bottom, left to right
        for pixel in img.pixels() {
            histogram.add(Color::from(*pixel));
        }

        log::debug!(
            "Counted {} pixels, {} distinct colors",
            histogram.total(),
            histogram.len()
        );
        histogram
    }

    fn add(&mut self, color: Color) {
        let count = self.counts.entry(color).or_insert(0);
        *count += 1;

        // strictly greater, so earlier colors keep ties
        if self.dominant.map_or(true, |(_, max)| *count > max) {
            self.dominant = Some((color, *count));
        }
    }

    pub fn count(&self, color: Color) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent color and its count, `None` for an empty image.
    pub fn dominant(&self) -> Option<(Color, u64)> {
        self.dominant
    }
}

/// The most frequent exact color of `img`.
pub fn dominant_color(img: &RgbImage) -> Option<Color> {
    Histogram::from_image(img).dominant().map(|(color, _)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::new(0, 0, 0);
    const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    const RED: Color = Color::new(0xFF, 0, 0);

    fn image(width: u32, height: u32, colors: &[Color]) -> RgbImage {
        assert_eq!(colors.len() as u32, width * height);
        RgbImage::from_fn(width, height, |x, y| colors[(y * width + x) as usize].into())
    }

    #[test]
    fn formats_as_uppercase_hex() {
        assert_eq!(RED.to_string(), "#FF0000");
        assert_eq!(Color::new(0x0a, 0xb, 0xc0).to_string(), "#0A0BC0");
        assert_eq!(BLACK.to_string(), "#000000");
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#FF0000".parse(), Ok(RED));
        assert_eq!("0a0bc0".parse(), Ok(Color::new(0x0a, 0x0b, 0xc0)));
        assert!("#FF00".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert!("#ÿÿÿ".parse::<Color>().is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(1, 2, 3));
    }

    #[test]
    fn solid_image_is_its_own_dominant_color() {
        let img = RgbImage::from_pixel(2, 2, RED.into());
        assert_eq!(dominant_color(&img), Some(RED));
    }

    #[test]
    fn majority_wins() {
        let img = image(4, 1, &[BLACK, BLACK, BLACK, WHITE]);
        let histogram = Histogram::from_image(&img);
        assert_eq!(histogram.dominant(), Some((BLACK, 3)));
        assert_eq!(histogram.count(WHITE), 1);
        assert_eq!(histogram.count(RED), 0);
    }

    #[test]
    fn single_pixel() {
        let img = image(1, 1, &[WHITE]);
        assert_eq!(Histogram::from_image(&img).dominant(), Some((WHITE, 1)));
    }

    #[test]
    fn ties_go_to_the_first_color_to_reach_the_max() {
        // white reaches 2 at index 2, black only at index 3
        let img = image(4, 1, &[BLACK, WHITE, WHITE, BLACK]);
        assert_eq!(dominant_color(&img), Some(WHITE));

        let img = image(2, 2, &[RED, WHITE, BLACK, RED]);
        assert_eq!(dominant_color(&img), Some(RED));

        let img = image(3, 1, &[BLACK, WHITE, RED]);
        assert_eq!(dominant_color(&img), Some(BLACK));
    }

    #[test]
    fn tie_break_is_stable_across_runs() {
        let img = RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 7]));
        let first = dominant_color(&img);
        for _ in 0..8 {
            assert_eq!(dominant_color(&img), first);
        }
        assert_eq!(first, Some(Color::new(0, 0, 7)));
    }

    #[test]
    fn counts_every_pixel_once() {
        let img = RgbImage::from_fn(37, 23, |x, y| Rgb([(x % 5) as u8, (y % 3) as u8, 0]));
        let histogram = Histogram::from_image(&img);
        assert_eq!(histogram.total(), 37 * 23);
        assert_eq!(histogram.len(), 15);

        let (_, max) = histogram.dominant().unwrap();
        for x in 0..5 {
            for y in 0..3 {
                assert!(histogram.count(Color::new(x, y, 0)) <= max);
            }
        }
    }

    #[test]
    fn empty_image_has_no_dominant_color() {
        let histogram = Histogram::from_image(&RgbImage::new(0, 0));
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.dominant(), None);
    }
}
