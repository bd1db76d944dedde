use palette::{FromColor, Hsl, Srgb};

type Hsl64 = Hsl<palette::encoding::Srgb, f64>;

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components with HSL coordinates computed once at
/// construction and cached; instances are never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    hue: f64,
    saturation: f64,
    luminosity: f64,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
        let hsl = Hsl64::from_color(srgb);
        Self {
            r,
            g,
            b,
            hue: hsl.hue.into_positive_degrees() / 360.0,
            saturation: hsl.saturation,
            luminosity: hsl.lightness,
        }
    }

    /// Synthesize a color from hue/saturation/luminosity, each in [0, 1).
    ///
    /// Channels are truncated to integers, not rounded. The selection
    /// thresholds downstream were tuned against truncation, so this must
    /// stay as-is.
    pub fn from_hsl(hue: f64, saturation: f64, luminosity: f64) -> Self {
        let hsl = Hsl64::new(hue * 360.0, saturation, luminosity);
        let srgb = Srgb::from_color(hsl);
        let r = (srgb.red * 255.0) as u8;
        let g = (srgb.green * 255.0) as u8;
        let b = (srgb.blue * 255.0) as u8;
        Self::new(r, g, b)
    }

    /// Hue position on the color wheel, in [0, 1).
    pub fn hue(self) -> f64 {
        self.hue
    }

    /// HSL saturation in [0, 1].
    pub fn saturation(self) -> f64 {
        self.saturation
    }

    /// HSL lightness in [0, 1].
    pub fn luminosity(self) -> f64 {
        self.luminosity
    }

    /// Channel sum in 0..=765, a cheap stand-in for perceived lightness.
    pub fn whiteness(self) -> i32 {
        i32::from(self.r) + i32::from(self.g) + i32::from(self.b)
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
