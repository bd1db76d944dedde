use crate::color::Color;
use crate::pipeline::buckets::Bucket;

/// Every bucket leaves the pipeline with exactly this many colors.
pub const BUCKET_COLORS: usize = 2;

/// Luminosity boost applied when a singleton bucket needs a lighter twin.
const TWIN_LUMINOSITY_STEP: f64 = 0.1;

/// Trim or pad each bucket to exactly two colors: sort by luminosity, keep
/// the two darkest, and give singletons a synthesized lighter twin.
pub fn finalize_buckets(buckets: Vec<Bucket>) -> Vec<Bucket> {
    buckets
        .into_iter()
        .map(|mut bucket| {
            bucket
                .colors
                .sort_by(|a, b| a.luminosity().total_cmp(&b.luminosity()));
            bucket.colors.truncate(BUCKET_COLORS);
            if bucket.len() == 1 {
                let twin = lighter_twin(bucket.colors[0]);
                bucket.colors.push(twin);
            }
            bucket
        })
        .collect()
}

/// Same hue and saturation, luminosity nudged up and clamped to 1.
fn lighter_twin(color: Color) -> Color {
    Color::from_hsl(
        color.hue(),
        color.saturation(),
        (color.luminosity() + TWIN_LUMINOSITY_STEP).min(1.0),
    )
}
