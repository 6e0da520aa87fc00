use serde::{Deserialize, Serialize};

/// Fitted tree node stored in the tree's flat node list.
///
/// Children are referenced by index and always sit after their parent, so
/// walking the list never revisits a node. Instances go left when
/// `value <= threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Leaf {
        observed_class_distribution: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        observed_class_distribution: Vec<f64>,
        left: usize,
        right: usize,
    },
}

impl Node {
    pub fn leaf(observed_class_distribution: Vec<f64>) -> Self {
        Node::Leaf {
            observed_class_distribution,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn observed_class_distribution(&self) -> &[f64] {
        match self {
            Node::Leaf {
                observed_class_distribution,
            }
            | Node::Split {
                observed_class_distribution,
                ..
            } => observed_class_distribution,
        }
    }

    /// Index of the child `features` is routed to, `None` for a leaf.
    ///
    /// Missing or NaN feature values follow the left branch.
    pub fn child_for(&self, features: &[f64]) -> Option<usize> {
        match self {
            Node::Leaf { .. } => None,
            Node::Split {
                feature,
                threshold,
                left,
                right,
                ..
            } => {
                let goes_left = features
                    .get(*feature)
                    .is_none_or(|v| v.is_nan() || *v <= *threshold);
                Some(if goes_left { *left } else { *right })
            }
        }
    }

    /// Normalised class distribution; uniform when the node saw no instances.
    pub fn get_class_votes(&self, num_classes: usize) -> Vec<f64> {
        let dist = self.observed_class_distribution();
        let total: f64 = dist.iter().sum();
        if total <= 0.0 {
            return vec![1.0 / num_classes as f64; num_classes];
        }
        let mut votes: Vec<f64> = dist.iter().map(|c| c / total).collect();
        votes.resize(num_classes, 0.0);
        votes
    }
}
