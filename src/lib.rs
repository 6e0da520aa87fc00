pub mod classifiers;
pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod lifecycle;
pub mod logging;
pub mod predictor;
pub mod service;
pub mod store;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
