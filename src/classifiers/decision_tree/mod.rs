mod decision_tree;
pub mod nodes;
pub mod split_criteria;

pub use decision_tree::DecisionTree;
