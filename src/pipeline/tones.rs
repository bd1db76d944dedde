use crate::color::Color;
use crate::error::PaletteError;

/// Whiteness gap under which a dark color joins the shadow group.
const SHADOW_GAP: i32 = 30;
/// Whiteness gap under which a light color joins the highlight group.
/// Wider than the shadow gap on purpose.
const HIGHLIGHT_GAP: i32 = 40;
/// Whiteness gap under which near-black greys are stripped after the
/// black slots are chosen, so they never pollute the hue buckets.
const GREY_GAP: i32 = 60;

/// The four tone slots plus the colors left over for hue bucketing.
#[derive(Debug, Clone, PartialEq)]
pub struct Tones {
    pub background: Color,
    pub foreground: Color,
    pub black: Color,
    pub bright_black: Color,
    pub remaining: Vec<Color>,
}

/// Partition a whiteness-sorted color list into shadow and highlight
/// groups and derive the tone slots.
///
/// `colors` must be sorted ascending by whiteness and hold at least 4
/// distinct entries.
pub fn select_tones(colors: &[Color]) -> Result<Tones, PaletteError> {
    if colors.len() < 4 {
        return Err(PaletteError::DegenerateInput(
            "need at least 4 distinct colors",
        ));
    }

    let darkest = colors[0];
    let lightest = colors[colors.len() - 1];
    let mut shadows = vec![darkest];
    let mut highlights = vec![lightest];

    // The scan revisits index 0 and the mirrored last index, so each group
    // holds its anchor twice; the trim below counts that duplicate.
    for i in 0..colors.len() / 2 {
        if colors[i].whiteness() - darkest.whiteness() < SHADOW_GAP {
            shadows.push(colors[i]);
        }
        let mirrored = colors.len() - 1 - i;
        if lightest.whiteness() - colors[mirrored].whiteness() < HIGHLIGHT_GAP {
            highlights.push(colors[mirrored]);
        }
    }

    shadows.sort_by(|a, b| a.saturation().total_cmp(&b.saturation()));
    highlights.sort_by(|a, b| a.saturation().total_cmp(&b.saturation()));

    let background = shadows[0];
    let foreground = highlights[highlights.len() - 1];

    if shadows.len() + highlights.len() + 2 > colors.len() {
        return Err(PaletteError::DegenerateInput(
            "tone groups consumed the entire color list",
        ));
    }
    let working = &colors[shadows.len()..colors.len() - highlights.len()];

    let black = working[0];
    let bright_black = working[1];

    let mut index = 0;
    loop {
        if index >= working.len() {
            return Err(PaletteError::DegenerateInput(
                "no colors left after near-black grey removal",
            ));
        }
        if working[index].whiteness() - bright_black.whiteness() >= GREY_GAP {
            break;
        }
        index += 1;
    }

    Ok(Tones {
        background,
        foreground,
        black,
        bright_black,
        remaining: working[index..].to_vec(),
    })
}
