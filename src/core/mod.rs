pub mod dataset;
pub mod instances;
