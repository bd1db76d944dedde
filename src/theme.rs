use std::path::Path;

use anyhow::{Context, Result};
use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::error::PaletteError;
use crate::pipeline::buckets::Bucket;
use crate::pipeline::finalize::BUCKET_COLORS;
use crate::pipeline::normalize::TARGET_BUCKETS;

/// The finished terminal palette: four tone slots plus seven hue-grouped
/// accent pairs, darker color first in each pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub black: Color,
    pub bright_black: Color,
    pub accents: [[Color; BUCKET_COLORS]; TARGET_BUCKETS],
}

impl Palette {
    /// Assemble a palette from the tone slots and the finalized buckets,
    /// validating the fixed output shape.
    pub fn from_parts(
        background: Color,
        foreground: Color,
        black: Color,
        bright_black: Color,
        buckets: Vec<Bucket>,
    ) -> Result<Self, PaletteError> {
        if buckets.len() != TARGET_BUCKETS {
            return Err(PaletteError::InvariantViolation(format!(
                "expected {TARGET_BUCKETS} accent buckets, got {}",
                buckets.len()
            )));
        }
        let mut accents = Vec::with_capacity(TARGET_BUCKETS);
        for bucket in buckets {
            match bucket.colors.as_slice() {
                &[dark, light] => accents.push([dark, light]),
                other => {
                    return Err(PaletteError::InvariantViolation(format!(
                        "accent bucket holds {} colors, expected {BUCKET_COLORS}",
                        other.len()
                    )))
                }
            }
        }
        let accents: [[Color; BUCKET_COLORS]; TARGET_BUCKETS] = accents
            .try_into()
            .map_err(|_| PaletteError::InvariantViolation("accent bucket count drifted".into()))?;
        Ok(Self {
            background,
            foreground,
            black,
            bright_black,
            accents,
        })
    }

    /// Serialize the palette to a plain-text listing, one slot per line,
    /// lowercase hex. Deterministic for a given palette.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("background   = {}\n", self.background.to_hex()));
        out.push_str(&format!("foreground   = {}\n", self.foreground.to_hex()));
        out.push_str(&format!("black        = {}\n", self.black.to_hex()));
        out.push_str(&format!("bright-black = {}\n", self.bright_black.to_hex()));
        for (i, pair) in self.accents.iter().enumerate() {
            out.push_str(&format!(
                "accent{}      = {} {}\n",
                i + 1,
                pair[0].to_hex(),
                pair[1].to_hex()
            ));
        }
        out
    }

    /// Render the listing with colored swatches for terminal display.
    pub fn render_preview(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "background   {} {}\n",
            swatch(self.background),
            self.background.to_hex()
        ));
        out.push_str(&format!(
            "foreground   {} {}\n",
            swatch(self.foreground),
            self.foreground.to_hex()
        ));
        out.push_str(&format!(
            "black        {} {}\n",
            swatch(self.black),
            self.black.to_hex()
        ));
        out.push_str(&format!(
            "bright-black {} {}\n",
            swatch(self.bright_black),
            self.bright_black.to_hex()
        ));
        for (i, pair) in self.accents.iter().enumerate() {
            out.push_str(&format!(
                "accent{}      {}{} {} {}\n",
                i + 1,
                swatch(pair[0]),
                swatch(pair[1]),
                pair[0].to_hex(),
                pair[1].to_hex()
            ));
        }
        out
    }

    /// Write the plain-text listing to a file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize())
            .with_context(|| format!("failed to write palette to {}", path.display()))?;
        Ok(())
    }
}

fn swatch(color: Color) -> String {
    "    "
        .on(TermColor::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_bucket(hue: f64) -> Bucket {
        Bucket {
            colors: vec![
                Color::from_hsl(hue, 0.6, 0.3),
                Color::from_hsl(hue, 0.6, 0.6),
            ],
        }
    }

    fn tone() -> Color {
        Color::new(20, 20, 20)
    }

    #[test]
    fn from_parts_accepts_the_exact_shape() {
        let buckets: Vec<Bucket> = (0..7).map(|i| pair_bucket(0.1 * f64::from(i))).collect();
        let palette = Palette::from_parts(tone(), tone(), tone(), tone(), buckets).unwrap();
        assert_eq!(palette.accents.len(), 7);
    }

    #[test]
    fn from_parts_rejects_wrong_bucket_count() {
        let buckets: Vec<Bucket> = (0..6).map(|i| pair_bucket(0.1 * f64::from(i))).collect();
        let err = Palette::from_parts(tone(), tone(), tone(), tone(), buckets).unwrap_err();
        assert!(matches!(err, PaletteError::InvariantViolation(_)));
    }

    #[test]
    fn from_parts_rejects_wrong_bucket_size() {
        let mut buckets: Vec<Bucket> = (0..6).map(|i| pair_bucket(0.1 * f64::from(i))).collect();
        buckets.push(Bucket::new(Color::new(200, 50, 50)));
        let err = Palette::from_parts(tone(), tone(), tone(), tone(), buckets).unwrap_err();
        assert!(matches!(err, PaletteError::InvariantViolation(_)));
    }

    #[test]
    fn serialize_lists_every_slot_in_lowercase_hex() {
        let buckets: Vec<Bucket> = (0..7).map(|i| pair_bucket(0.1 * f64::from(i))).collect();
        let palette = Palette::from_parts(
            Color::new(10, 10, 10),
            Color::new(230, 230, 230),
            Color::new(30, 30, 30),
            Color::new(50, 50, 50),
            buckets,
        )
        .unwrap();
        let text = palette.serialize();
        assert!(text.contains("background   = #0a0a0a"));
        assert!(text.contains("foreground   = #e6e6e6"));
        assert!(text.contains("black        = #1e1e1e"));
        assert!(text.contains("bright-black = #323232"));
        assert_eq!(text.lines().count(), 4 + 7);
        for line in text.lines() {
            assert_eq!(line, line.to_lowercase());
        }
    }
}
