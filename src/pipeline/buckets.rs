use std::mem;

use crate::color::Color;

/// Hue distance at or above which two adjacent colors land in different
/// buckets. Hues near 0 and near 1 are never treated as adjacent; the
/// wheel does not wrap here.
pub const HUE_GAP: f64 = 0.06;

/// Minimum member count at which a bucket is split in two by saturation.
const SPLIT_THRESHOLD: usize = 4;

/// An ordered group of colors sharing an approximate hue range.
///
/// Buckets are value-like: merging and splitting produce new buckets
/// instead of mutating shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub colors: Vec<Color>,
}

impl Bucket {
    pub fn new(color: Color) -> Self {
        Self {
            colors: vec![color],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at position 0 in the bucket's current ordering. Used as
    /// the seed when synthesizing new buckets.
    pub fn representative(&self) -> Color {
        self.colors[0]
    }
}

/// Sort colors by hue and accumulate runs of adjacent hues into buckets.
/// A new bucket starts whenever the hue gap from the last color placed
/// reaches [`HUE_GAP`].
pub fn group_by_hue(mut colors: Vec<Color>) -> Vec<Bucket> {
    colors.sort_by(|a, b| a.hue().total_cmp(&b.hue()));

    let mut iter = colors.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut buckets = Vec::new();
    let mut current = Bucket::new(first);
    for color in iter {
        let last_hue = current.colors[current.len() - 1].hue();
        if (color.hue() - last_hue).abs() < HUE_GAP {
            current.colors.push(color);
        } else {
            buckets.push(mem::replace(&mut current, Bucket::new(color)));
        }
    }
    buckets.push(current);
    buckets
}

/// Sort every bucket by saturation; buckets with 4+ members are cut at the
/// floor-of-half index, discarding the single median element. The thinning
/// is intentional.
pub fn split_wide_buckets(buckets: Vec<Bucket>) -> Vec<Bucket> {
    let mut out = Vec::with_capacity(buckets.len());
    for mut bucket in buckets {
        bucket
            .colors
            .sort_by(|a, b| a.saturation().total_cmp(&b.saturation()));
        if bucket.len() >= SPLIT_THRESHOLD {
            let mid = bucket.len() / 2;
            let right = bucket.colors.split_off(mid + 1);
            bucket.colors.truncate(mid);
            out.push(bucket);
            out.push(Bucket { colors: right });
        } else {
            out.push(bucket);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(hue: f64, saturation: f64, luminosity: f64) -> Color {
        Color::from_hsl(hue, saturation, luminosity)
    }

    #[test]
    fn adjacent_hues_share_a_bucket() {
        let colors = vec![hsl(0.10, 0.8, 0.5), hsl(0.13, 0.8, 0.5), hsl(0.16, 0.8, 0.5)];
        let buckets = group_by_hue(colors);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].len(), 3);
    }

    #[test]
    fn wide_gap_starts_a_new_bucket() {
        let colors = vec![hsl(0.10, 0.8, 0.5), hsl(0.30, 0.8, 0.5)];
        let buckets = group_by_hue(colors);
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn buckets_come_out_in_hue_order() {
        let colors = vec![
            hsl(0.70, 0.8, 0.5),
            hsl(0.10, 0.8, 0.5),
            hsl(0.40, 0.8, 0.5),
        ];
        let buckets = group_by_hue(colors);
        assert_eq!(buckets.len(), 3);
        let hues: Vec<f64> = buckets.iter().map(|b| b.representative().hue()).collect();
        assert!(hues.windows(2).all(|w| w[0] <= w[1]), "buckets not hue-sorted: {hues:?}");
    }

    #[test]
    fn no_adjacent_pair_in_a_bucket_spans_the_gap() {
        let colors: Vec<Color> = (0..40)
            .map(|i| hsl(f64::from(i) * 0.023, 0.7, 0.5))
            .collect();
        for bucket in group_by_hue(colors) {
            for pair in bucket.colors.windows(2) {
                let gap = (pair[1].hue() - pair[0].hue()).abs();
                assert!(gap < HUE_GAP, "gap {gap} inside one bucket");
            }
        }
    }

    #[test]
    fn hue_wheel_does_not_wrap() {
        // 0.99 and 0.01 are 0.02 apart around the wheel but never merge.
        let colors = vec![hsl(0.99, 0.8, 0.5), hsl(0.01, 0.8, 0.5)];
        let buckets = group_by_hue(colors);
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(group_by_hue(Vec::new()).is_empty());
    }

    #[test]
    fn wide_bucket_splits_and_drops_the_median() {
        // Five colors, same hue family, distinct saturations.
        let colors = vec![
            hsl(0.30, 0.50, 0.5),
            hsl(0.31, 0.30, 0.5),
            hsl(0.32, 0.70, 0.5),
            hsl(0.33, 0.40, 0.5),
            hsl(0.34, 0.60, 0.5),
        ];
        let buckets = split_wide_buckets(group_by_hue(colors));
        assert_eq!(buckets.len(), 2);
        // mid = 2: left keeps the two least saturated, right keeps the two
        // most saturated, the median saturation disappears.
        assert_eq!(buckets[0].len(), 2);
        assert_eq!(buckets[1].len(), 2);
        let saturations: Vec<f64> = buckets
            .iter()
            .flat_map(|b| b.colors.iter().map(|c| c.saturation()))
            .collect();
        assert!(
            saturations.iter().all(|s| (s - 0.50).abs() > 0.05),
            "median saturation should have been discarded: {saturations:?}"
        );
    }

    #[test]
    fn four_member_bucket_splits_two_and_one() {
        let colors = vec![
            hsl(0.30, 0.30, 0.5),
            hsl(0.31, 0.50, 0.5),
            hsl(0.32, 0.70, 0.5),
            hsl(0.33, 0.90, 0.5),
        ];
        let buckets = split_wide_buckets(group_by_hue(colors));
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].len(), 2);
        assert_eq!(buckets[1].len(), 1);
    }

    #[test]
    fn narrow_buckets_are_kept_but_saturation_sorted() {
        let colors = vec![
            hsl(0.30, 0.90, 0.5),
            hsl(0.31, 0.30, 0.5),
            hsl(0.32, 0.60, 0.5),
        ];
        let buckets = split_wide_buckets(group_by_hue(colors));
        assert_eq!(buckets.len(), 1);
        let saturations: Vec<f64> = buckets[0].colors.iter().map(|c| c.saturation()).collect();
        assert!(
            saturations.windows(2).all(|w| w[0] <= w[1]),
            "bucket should be saturation-sorted: {saturations:?}"
        );
    }
}
