use crate::classifiers::decision_tree::split_criteria::SplitCriterion;
use serde::{Deserialize, Serialize};

/// Merit of a split is the decrease in weighted Gini impurity it achieves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GiniSplitCriterion {}

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq.powi(2);
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn get_range_of_merit(&self, _pre_split_distribution: &[f64]) -> f64 {
        1.0
    }

    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let total: f64 = pre_split_distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let before = self.compute_gini(pre_split_distribution, total);
        let after: f64 = post_split_dists
            .iter()
            .map(|d| {
                let w: f64 = d.iter().sum();
                (w / total) * self.compute_gini(d, w)
            })
            .sum();
        before - after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gini_of_pure_and_balanced() {
        let g = GiniSplitCriterion::new();
        assert_eq!(g.compute_gini(&[4.0, 0.0], 4.0), 0.0);
        assert!((g.compute_gini(&[2.0, 2.0], 4.0) - 0.5).abs() < 1e-12);
        assert_eq!(g.compute_gini(&[0.0, 0.0], 0.0), 0.0);
    }

    #[test]
    fn perfect_split_recovers_all_impurity() {
        let g = GiniSplitCriterion::new();
        let merit = g.get_merit_of_split(&[2.0, 2.0], &[vec![2.0, 0.0], vec![0.0, 2.0]]);
        assert!((merit - 0.5).abs() < 1e-12);
        assert!(merit <= g.get_range_of_merit(&[2.0, 2.0]));
    }

    #[test]
    fn useless_split_has_zero_merit() {
        let g = GiniSplitCriterion::new();
        let merit = g.get_merit_of_split(&[2.0, 2.0], &[vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert!(merit.abs() < 1e-12);
    }
}
