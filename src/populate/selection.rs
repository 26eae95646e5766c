//! Priority-ordered weighted category selection.
//!
//! The populate policy draws a single uniform value per point and walks a
//! fixed-priority list of [`WeightedCategory`] entries, accumulating
//! thresholds. The leftover probability mass past the last threshold is the
//! fallthrough bucket, resolved by the caller (lake test in the decor layer).
use crate::populate::CategoryId;

/// A category with its selection weight.
///
/// Weights need not sum to 1. A list summing above 1 is valid: categories past
/// the point where the cumulative weight reaches 1 are simply unreachable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedCategory {
    pub category: CategoryId,
    pub weight: f32,
}

impl WeightedCategory {
    pub fn new(category: impl Into<CategoryId>, weight: f32) -> Self {
        Self {
            category: category.into(),
            weight,
        }
    }
}

/// Picks category `k` iff `v` falls within `[sum of weights before k, sum
/// including k)`, or `None` when `v` exceeds the total (fallthrough bucket).
pub fn pick_by_threshold(weights: &[WeightedCategory], v: f32) -> Option<&CategoryId> {
    let mut cumulative = 0.0;
    for entry in weights {
        cumulative += entry.weight;
        if v < cumulative {
            return Some(&entry.category);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::rand01;

    fn weights() -> Vec<WeightedCategory> {
        vec![
            WeightedCategory::new("a", 0.3),
            WeightedCategory::new("b", 0.2),
        ]
    }

    #[test]
    fn picks_by_cumulative_threshold() {
        let weights = weights();

        assert_eq!(pick_by_threshold(&weights, 0.0).unwrap(), "a");
        assert_eq!(pick_by_threshold(&weights, 0.29).unwrap(), "a");
        assert_eq!(pick_by_threshold(&weights, 0.3).unwrap(), "b");
        assert_eq!(pick_by_threshold(&weights, 0.49).unwrap(), "b");
    }

    #[test]
    fn values_past_the_total_fall_through() {
        let weights = weights();

        assert!(pick_by_threshold(&weights, 0.5).is_none());
        assert!(pick_by_threshold(&weights, 0.99).is_none());
    }

    #[test]
    fn empty_list_always_falls_through() {
        assert!(pick_by_threshold(&[], 0.0).is_none());
    }

    #[test]
    fn weights_summing_above_one_leave_trailing_categories_unreachable() {
        let weights = vec![
            WeightedCategory::new("a", 0.8),
            WeightedCategory::new("b", 0.5),
            WeightedCategory::new("c", 0.4),
        ];

        assert_eq!(pick_by_threshold(&weights, 0.79).unwrap(), "a");
        assert_eq!(pick_by_threshold(&weights, 0.9).unwrap(), "b");
        // "c" only starts at a cumulative 1.3, which no draw in [0, 1) reaches.
        assert_eq!(pick_by_threshold(&weights, 0.999).unwrap(), "b");
    }

    #[test]
    fn empirical_frequencies_match_the_weights() {
        let weights = weights();
        let mut rng = StdRng::seed_from_u64(42);

        const TRIALS: usize = 20_000;
        let mut counts = [0usize; 3];
        for _ in 0..TRIALS {
            let v = rand01(&mut rng);
            match pick_by_threshold(&weights, v) {
                Some(c) if c == "a" => counts[0] += 1,
                Some(_) => counts[1] += 1,
                None => counts[2] += 1,
            }
        }

        let freq = |n: usize| n as f32 / TRIALS as f32;
        assert!((freq(counts[0]) - 0.3).abs() < 0.02);
        assert!((freq(counts[1]) - 0.2).abs() < 0.02);
        assert!((freq(counts[2]) - 0.5).abs() < 0.02);
    }
}
