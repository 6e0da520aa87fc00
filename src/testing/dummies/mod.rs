mod datasets;

pub use datasets::*;
