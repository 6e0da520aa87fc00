use crate::core::dataset::Dataset;
use crate::error::SchemaError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_COLUMN: &str = "Machine_ID";
pub const TEMPERATURE_COLUMN: &str = "Temperature";
pub const RUN_TIME_COLUMN: &str = "Run_Time";
pub const LABEL_COLUMN: &str = "Downtime_Flag";

pub const REQUIRED_COLUMNS: [&str; 4] = [
    ID_COLUMN,
    TEMPERATURE_COLUMN,
    RUN_TIME_COLUMN,
    LABEL_COLUMN,
];

/// Ordered feature columns every fitted model is trained and queried with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FeatureColumns(Vec<String>);

impl FeatureColumns {
    /// `[Temperature, Run_Time]`
    pub fn canonical() -> Self {
        Self(vec![
            TEMPERATURE_COLUMN.to_string(),
            RUN_TIME_COLUMN.to_string(),
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for FeatureColumns {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Checks that all [`REQUIRED_COLUMNS`] are present and derives the feature columns.
///
/// Extra columns are allowed. Missing ones are reported in required order.
pub fn validate_schema(dataset: &Dataset) -> Result<FeatureColumns, SchemaError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !dataset.has_column(c))
        .map(|c| c.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }
    Ok(FeatureColumns::canonical())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::SAMPLE_CSV;

    #[test]
    fn valid_dataset_yields_canonical_features() {
        let ds = Dataset::parse(SAMPLE_CSV).unwrap();
        let cols = validate_schema(&ds).unwrap();
        assert_eq!(cols.iter().collect::<Vec<_>>(), vec!["Temperature", "Run_Time"]);
        assert_eq!(cols.to_string(), "[Temperature, Run_Time]");
    }

    #[test]
    fn extra_columns_and_any_order_are_fine() {
        let ds = Dataset::parse("Downtime_Flag,Pressure,Run_Time,Machine_ID,Temperature\n").unwrap();
        assert_eq!(validate_schema(&ds).unwrap(), FeatureColumns::canonical());
    }

    #[test]
    fn each_missing_required_column_is_reported() {
        for dropped in REQUIRED_COLUMNS {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != dropped)
                .collect();
            let ds = Dataset::parse(&format!("{}\n", header.join(","))).unwrap();
            assert_eq!(
                validate_schema(&ds),
                Err(SchemaError::MissingColumns(vec![dropped.to_string()]))
            );
        }
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let ds = Dataset::parse("machine_id,temperature,Run_Time,Downtime_Flag\n").unwrap();
        assert_eq!(
            validate_schema(&ds),
            Err(SchemaError::MissingColumns(vec![
                "Machine_ID".into(),
                "Temperature".into()
            ]))
        );
    }

    #[test]
    fn feature_columns_serialize_as_plain_list() {
        let json = serde_json::to_string(&FeatureColumns::canonical()).unwrap();
        assert_eq!(json, r#"["Temperature","Run_Time"]"#);
    }
}
