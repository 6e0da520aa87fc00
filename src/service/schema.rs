use crate::service::types::{PredictRequest, TrainRequest, UploadRequest};
use schemars::schema_for;
use serde_json::{Value, json};

/// JSON Schemas of the three request bodies, keyed by operation.
pub fn request_schemas() -> Value {
    json!({
        "upload": schema_for!(UploadRequest),
        "train": schema_for!(TrainRequest),
        "predict": schema_for!(PredictRequest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_schema_requires_both_features() {
        let schemas = request_schemas();
        let required = schemas["predict"]["required"].as_array().unwrap();
        let names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert!(names.contains(&"Temperature"));
        assert!(names.contains(&"Run_Time"));
    }

    #[test]
    fn train_schema_only_requires_file_path() {
        let schemas = request_schemas();
        assert_eq!(schemas["train"]["required"], json!(["file_path"]));
        assert!(schemas["train"]["properties"]["model_type"].is_object());
    }

    #[test]
    fn every_operation_has_a_schema() {
        let schemas = request_schemas();
        for op in ["upload", "train", "predict"] {
            assert_eq!(schemas[op]["type"], "object", "{op}");
        }
    }
}
