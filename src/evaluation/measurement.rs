use serde::{Deserialize, Serialize};

/// Named scalar metric, e.g. `"accuracy"` or `"f1"`.
///
/// Undefined metrics (nothing observed yet, zero denominators) are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.value.is_finite()
    }
}
