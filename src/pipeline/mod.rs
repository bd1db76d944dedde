pub mod buckets;
pub mod extract;
pub mod finalize;
pub mod normalize;
pub mod tones;

use crate::color::Color;
use crate::error::PaletteError;
use crate::theme::Palette;

/// Run the full palette pipeline over a deduplicated color list sorted
/// ascending by whiteness (the shape [`extract::distinct_colors`]
/// produces).
pub fn generate_palette(colors: &[Color]) -> Result<Palette, PaletteError> {
    let tones = tones::select_tones(colors)?;
    let grouped = buckets::group_by_hue(tones.remaining);
    let grouped = buckets::split_wide_buckets(grouped);
    let grouped = normalize::normalize_bucket_count(grouped)?;
    let grouped = finalize::finalize_buckets(grouped);
    Palette::from_parts(
        tones.background,
        tones.foreground,
        tones.black,
        tones.bright_black,
        grouped,
    )
}
