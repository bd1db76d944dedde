use std::cmp::Ordering;

use crate::color::Color;
use crate::error::PaletteError;
use crate::pipeline::buckets::{group_by_hue, Bucket};

/// The palette always carries exactly this many hue buckets.
pub const TARGET_BUCKETS: usize = 7;

/// Below this shortfall new buckets are seeded one complementary color at
/// a time; at or above it, whole triadic spreads are synthesized and the
/// bucket set is rebuilt from scratch.
const COMPLEMENTARY_LIMIT: usize = 4;

/// Hard cap on generation rounds. Each round strictly grows the color
/// pool, so hitting the cap means a logic defect, not bad input.
const MAX_GENERATION_ROUNDS: usize = 16;

/// Force the bucket count to exactly [`TARGET_BUCKETS`]: synthesize
/// buckets when short, merge neighbors when over, pass through when equal.
///
/// Triadic generation rebuilds the bucket set from a pooled color list and
/// can overshoot the target; the merge pass afterwards trims any excess
/// and is a no-op at or below the target.
pub fn normalize_bucket_count(buckets: Vec<Bucket>) -> Result<Vec<Bucket>, PaletteError> {
    let buckets = match buckets.len().cmp(&TARGET_BUCKETS) {
        Ordering::Less => generate_buckets(buckets)?,
        Ordering::Greater | Ordering::Equal => buckets,
    };
    Ok(merge_buckets(buckets))
}

/// Grow the bucket set by synthesizing colors from the largest buckets'
/// representatives, one round at a time, until the target count is hit.
fn generate_buckets(mut buckets: Vec<Bucket>) -> Result<Vec<Bucket>, PaletteError> {
    if buckets.is_empty() {
        return Err(PaletteError::DegenerateInput(
            "no hue buckets to seed generation",
        ));
    }

    let mut rounds = 0;
    while buckets.len() < TARGET_BUCKETS {
        rounds += 1;
        if rounds > MAX_GENERATION_ROUNDS {
            return Err(PaletteError::InvariantViolation(format!(
                "bucket generation did not reach {TARGET_BUCKETS} buckets within {MAX_GENERATION_ROUNDS} rounds"
            )));
        }

        let need = TARGET_BUCKETS - buckets.len();
        buckets.sort_by(|a, b| b.len().cmp(&a.len()));
        let seeds: Vec<Color> = buckets
            .iter()
            .take(need)
            .map(Bucket::representative)
            .collect();

        if need < COMPLEMENTARY_LIMIT {
            // One complementary bucket per seed: hue rotated by half a
            // turn on the 100-unit circle.
            for seed in seeds {
                let color =
                    Color::from_hsl(rotate_hue(seed.hue(), 50.0), seed.saturation(), seed.luminosity());
                buckets.push(Bucket::new(color));
            }
        } else {
            // Triadic spread: evenly spaced hue offsets around each seed.
            // Everything is pooled and the adjacency pass is rerun; the
            // old bucket structure is discarded.
            let per_seed = need.div_ceil(seeds.len());
            let step = 100.0 / (per_seed + 1) as f64;
            let mut pool: Vec<Color> = Vec::new();
            for seed in &seeds {
                for slot in 1..=per_seed {
                    pool.push(Color::from_hsl(
                        rotate_hue(seed.hue(), step * slot as f64),
                        seed.saturation(),
                        seed.luminosity(),
                    ));
                }
            }
            for bucket in buckets.drain(..) {
                pool.extend(bucket.colors);
            }
            buckets = group_by_hue(pool);
        }

        buckets.sort_by(|a, b| a.representative().hue().total_cmp(&b.representative().hue()));
    }
    Ok(buckets)
}

/// Rotate a hue by `offset` hundredths of a turn on the 100-unit
/// fixed-point hue circle.
fn rotate_hue(hue: f64, offset: f64) -> f64 {
    ((hue * 100.0 + offset) % 100.0) / 100.0
}

/// Shrink the bucket set one merge at a time until the target count is
/// hit. The smallest interior bucket is absorbed by its smaller neighbor,
/// pulling from sparser neighborhoods first on ties.
fn merge_buckets(mut buckets: Vec<Bucket>) -> Vec<Bucket> {
    while buckets.len() > TARGET_BUCKETS {
        let mut smallest = 0;
        for i in 1..buckets.len() - 1 {
            if buckets[i].len() < buckets[smallest].len() {
                smallest = i;
            } else if buckets[i].len() == buckets[smallest].len()
                && smallest_neighbor_len(&buckets, i) < smallest_neighbor_len(&buckets, smallest)
            {
                smallest = i;
            }
        }

        let neighbor = if smallest == 0 {
            smallest + 1
        } else if smallest == buckets.len() - 1 {
            smallest - 1
        } else if buckets[smallest + 1].len() < buckets[smallest - 1].len() {
            smallest + 1
        } else {
            smallest - 1
        };

        let removed = buckets.remove(smallest);
        let neighbor = if neighbor > smallest { neighbor - 1 } else { neighbor };
        buckets[neighbor].colors.extend(removed.colors);
    }
    buckets
}

fn smallest_neighbor_len(buckets: &[Bucket], index: usize) -> usize {
    if index == 0 {
        return buckets[index + 1].len();
    }
    if index == buckets.len() - 1 {
        return buckets[index - 1].len();
    }
    buckets[index + 1].len().min(buckets[index - 1].len())
}
