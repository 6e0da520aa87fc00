use crate::error::LifecycleError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Closed set of classifier families a train request may select.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelType {
    #[default]
    #[strum(
        message = "Logistic Regression",
        detailed_message = "L2-regularised linear model on standardised features."
    )]
    LogisticRegression,
    #[strum(
        message = "Decision Tree",
        detailed_message = "CART tree grown with the Gini criterion, unlimited depth."
    )]
    DecisionTree,
}

impl ModelType {
    /// Parses a request selector; `None` means the default family.
    pub fn from_selector(selector: Option<&str>) -> Result<Self, LifecycleError> {
        match selector.map(str::trim) {
            None | Some("") => Ok(ModelType::default()),
            Some(s) => {
                ModelType::from_str(s).map_err(|_| LifecycleError::InvalidModelType(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_known_selectors() {
        assert_eq!(
            ModelType::from_selector(Some("logistic_regression")).unwrap(),
            ModelType::LogisticRegression
        );
        assert_eq!(
            ModelType::from_selector(Some("decision_tree")).unwrap(),
            ModelType::DecisionTree
        );
    }

    #[test]
    fn missing_selector_defaults_to_logistic_regression() {
        assert_eq!(
            ModelType::from_selector(None).unwrap(),
            ModelType::LogisticRegression
        );
        assert_eq!(
            ModelType::from_selector(Some("  ")).unwrap(),
            ModelType::LogisticRegression
        );
    }

    #[test]
    fn unknown_selector_is_invalid_model_type() {
        let err = ModelType::from_selector(Some("random_forest")).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidModelType(ref s) if s == "random_forest"));
        assert!(ModelType::from_selector(Some("Decision_Tree")).is_err());
    }

    #[test]
    fn display_and_serde_agree() {
        for kind in ModelType::iter() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
