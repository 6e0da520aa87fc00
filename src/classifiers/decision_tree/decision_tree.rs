use crate::classifiers::decision_tree::nodes::Node;
use crate::classifiers::decision_tree::split_criteria::{GiniSplitCriterion, SplitCriterion};
use crate::classifiers::{Classifier, NUM_CLASSES};
use crate::core::instances::DenseInstance;
use serde::{Deserialize, Serialize};

/// Batch CART classifier for binary labels.
///
/// Grows until leaves are pure, hold fewer than `min_samples_split`
/// instances, reach `max_depth` (unbounded by default) or no feature has two
/// distinct values left. Candidate thresholds are midpoints between
/// consecutive distinct values; on equal merit the lower feature index and
/// then the lower threshold win, so growth is deterministic.
///
/// Nodes live in one flat list with the root first. Growing, routing and
/// (de)serialising all work level-free, so an unbounded tree as deep as its
/// training set is long still fits on the stack and reloads from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    min_samples_split: usize,
    max_depth: Option<usize>,
    #[serde(skip)]
    split_criterion: GiniSplitCriterion,
    nodes: Vec<Node>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(2, None)
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    merit: f64,
}

impl DecisionTree {
    pub fn new(min_samples_split: usize, max_depth: Option<usize>) -> Self {
        Self {
            min_samples_split: min_samples_split.max(2),
            max_depth,
            split_criterion: GiniSplitCriterion::new(),
            nodes: Vec::new(),
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn is_trained(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Longest root-to-leaf path in edges; `0` for a single leaf or no tree.
    pub fn depth(&self) -> usize {
        let mut depths = vec![0; self.nodes.len()];
        let mut deepest = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            if let Node::Split { left, right, .. } = node {
                for child in [*left, *right] {
                    if child > index && child < depths.len() {
                        depths[child] = depths[index] + 1;
                        deepest = deepest.max(depths[child]);
                    }
                }
            }
        }
        deepest
    }

    /// Leaf reached by `features`, `None` when the tree is untrained.
    ///
    /// A child index that does not point forward into the list ends the walk
    /// at the current node, so a hand-edited artifact cannot loop.
    pub fn filter_instance_to_leaf(&self, features: &[f64]) -> Option<&Node> {
        let mut index = 0;
        let mut node = self.root()?;
        while let Some(child) = node.child_for(features) {
            match self.nodes.get(child) {
                Some(next) if child > index => {
                    index = child;
                    node = next;
                }
                _ => break,
            }
        }
        Some(node)
    }

    fn class_distribution(rows: &[&DenseInstance]) -> Vec<f64> {
        let mut dist = vec![0.0; NUM_CLASSES];
        for r in rows {
            if let Some(y) = r.class_value() {
                if y < NUM_CLASSES {
                    dist[y] += 1.0;
                }
            }
        }
        dist
    }

    fn grow(&self, rows: Vec<&DenseInstance>) -> Vec<Node> {
        let mut nodes = vec![Node::leaf(Vec::new())];
        let mut pending = vec![(0, rows, 0)];

        while let Some((index, rows, depth)) = pending.pop() {
            let dist = Self::class_distribution(&rows);
            let is_pure = dist.iter().filter(|c| **c > 0.0).count() <= 1;
            let depth_reached = self.max_depth.is_some_and(|m| depth >= m);
            let best = if rows.len() < self.min_samples_split || is_pure || depth_reached {
                None
            } else {
                self.find_best_split(&rows, &dist)
            };
            let Some(best) = best else {
                nodes[index] = Node::leaf(dist);
                continue;
            };

            let (left_rows, right_rows): (Vec<&DenseInstance>, Vec<&DenseInstance>) = rows
                .into_iter()
                .partition(|r| r.values[best.feature] <= best.threshold);

            let left = nodes.len();
            let right = left + 1;
            nodes.push(Node::leaf(Vec::new()));
            nodes.push(Node::leaf(Vec::new()));
            nodes[index] = Node::Split {
                feature: best.feature,
                threshold: best.threshold,
                observed_class_distribution: dist,
                left,
                right,
            };
            pending.push((right, right_rows, depth + 1));
            pending.push((left, left_rows, depth + 1));
        }
        nodes
    }

    fn find_best_split(&self, rows: &[&DenseInstance], dist: &[f64]) -> Option<BestSplit> {
        let d = rows.first()?.number_of_features();
        let mut best: Option<BestSplit> = None;

        for feature in 0..d {
            let mut sorted: Vec<(f64, usize)> = rows
                .iter()
                .map(|r| (r.values[feature], r.class_value().unwrap_or(0)))
                .collect();
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left = vec![0.0; NUM_CLASSES];
            for i in 0..sorted.len() - 1 {
                let (value, y) = sorted[i];
                left[y.min(NUM_CLASSES - 1)] += 1.0;

                let next = sorted[i + 1].0;
                if next <= value {
                    continue;
                }
                let right: Vec<f64> = dist.iter().zip(&left).map(|(t, l)| t - l).collect();
                let merit = self
                    .split_criterion
                    .get_merit_of_split(dist, &[left.clone(), right]);

                if best.as_ref().is_none_or(|b| merit > b.merit + 1e-12) {
                    let mut threshold = value + (next - value) / 2.0;
                    if threshold >= next {
                        threshold = value;
                    }
                    best = Some(BestSplit {
                        feature,
                        threshold,
                        merit,
                    });
                }
            }
        }
        best
    }
}

impl Classifier for DecisionTree {
    fn train_on_instances(&mut self, instances: &[DenseInstance]) {
        let rows: Vec<&DenseInstance> = instances.iter().filter(|i| !i.is_class_missing()).collect();
        self.nodes = if rows.is_empty() {
            Vec::new()
        } else {
            self.grow(rows)
        };
    }

    fn get_votes_for_features(&self, features: &[f64]) -> Vec<f64> {
        match self.filter_instance_to_leaf(features) {
            Some(leaf) => leaf.get_class_votes(NUM_CLASSES),
            None => vec![1.0 / NUM_CLASSES as f64; NUM_CLASSES],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{sample_instances, separable_instances};

    #[test]
    fn untrained_tree_votes_uniformly() {
        let t = DecisionTree::default();
        assert!(!t.is_trained());
        assert_eq!(t.get_votes_for_features(&[1.0, 1.0]), vec![0.5, 0.5]);
    }

    #[test]
    fn fits_training_data_exactly() {
        let mut t = DecisionTree::default();
        let data = sample_instances();
        t.train_on_instances(&data);
        for i in &data {
            assert_eq!(t.predict(&i.values), i.class_value().unwrap());
        }
        assert_eq!(t.get_votes_for_features(&[95.0, 150.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn picks_first_feature_midpoint_on_sample() {
        let mut t = DecisionTree::default();
        t.train_on_instances(&sample_instances());
        match t.root().unwrap() {
            Node::Split {
                feature, threshold, ..
            } => {
                assert_eq!(*feature, 0);
                assert!((threshold - 85.0).abs() < 1e-12);
            }
            Node::Leaf { .. } => panic!("expected a split at the root"),
        }
    }

    #[test]
    fn xor_needs_two_levels() {
        let data = vec![
            DenseInstance::new(vec![0.0, 0.0], Some(0)),
            DenseInstance::new(vec![0.0, 1.0], Some(1)),
            DenseInstance::new(vec![1.0, 0.0], Some(1)),
            DenseInstance::new(vec![1.0, 1.0], Some(0)),
        ];
        let mut t = DecisionTree::default();
        t.train_on_instances(&data);
        for i in &data {
            assert_eq!(t.predict(&i.values), i.class_value().unwrap());
        }
        assert_eq!(t.depth(), 2);
    }

    #[test]
    fn identical_features_with_mixed_labels_become_a_leaf() {
        let data = vec![
            DenseInstance::new(vec![1.0, 1.0], Some(0)),
            DenseInstance::new(vec![1.0, 1.0], Some(1)),
            DenseInstance::new(vec![1.0, 1.0], Some(1)),
        ];
        let mut t = DecisionTree::default();
        t.train_on_instances(&data);
        let votes = t.get_votes_for_features(&[1.0, 1.0]);
        assert!((votes[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!(t.root().unwrap().is_leaf());
    }

    #[test]
    fn max_depth_limits_growth() {
        let mut t = DecisionTree::new(2, Some(1));
        t.train_on_instances(&separable_instances(30));
        assert!(t.depth() <= 1);
    }

    #[test]
    fn round_trips_through_json() {
        let mut t = DecisionTree::default();
        t.train_on_instances(&sample_instances());
        let json = serde_json::to_string(&t).unwrap();
        let back: DecisionTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    /// Alternating labels along one feature: every split peels off a single row.
    fn alternating(n: usize) -> Vec<DenseInstance> {
        (0..n)
            .map(|i| DenseInstance::new(vec![i as f64, 1.0], Some(i % 2)))
            .collect()
    }

    #[test]
    fn chain_shaped_tree_reloads_from_json() {
        let data = alternating(300);
        let mut t = DecisionTree::default();
        t.train_on_instances(&data);
        assert_eq!(t.depth(), 299);

        let json = serde_json::to_string(&t).unwrap();
        let back: DecisionTree = serde_json::from_str(&json).unwrap();
        for i in &data {
            assert_eq!(back.predict(&i.values), i.class_value().unwrap());
        }
    }

    #[test]
    fn very_deep_tree_grows_without_recursion() {
        let data = alternating(3000);
        let mut t = DecisionTree::default();
        t.train_on_instances(&data);
        assert!(t.depth() >= 2000);
        assert_eq!(t.predict(&[2998.0, 1.0]), 0);
        assert_eq!(t.predict(&[2999.0, 1.0]), 1);
    }

    #[test]
    fn backward_child_index_stops_the_walk() {
        let mut t = DecisionTree::default();
        t.nodes = vec![
            Node::Split {
                feature: 0,
                threshold: 0.0,
                observed_class_distribution: vec![1.0, 3.0],
                left: 0,
                right: 7,
            },
        ];
        assert_eq!(t.get_votes_for_features(&[-1.0]), vec![0.25, 0.75]);
        assert_eq!(t.get_votes_for_features(&[1.0]), vec![0.25, 0.75]);
    }
}
