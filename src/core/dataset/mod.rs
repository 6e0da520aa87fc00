mod dataset;
mod schema;
mod splitter;

pub use dataset::Dataset;
pub use schema::{
    FeatureColumns, ID_COLUMN, LABEL_COLUMN, REQUIRED_COLUMNS, RUN_TIME_COLUMN,
    TEMPERATURE_COLUMN, validate_schema,
};
pub use splitter::{DEFAULT_SPLIT_SEED, DEFAULT_TEST_FRACTION, DatasetSplitter, Split};
