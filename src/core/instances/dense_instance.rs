/// One row projected onto the feature columns, with its label when known.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseInstance {
    pub values: Vec<f64>,
    pub class_value: Option<usize>,
}

impl DenseInstance {
    pub fn new(values: Vec<f64>, class_value: Option<usize>) -> DenseInstance {
        DenseInstance {
            values,
            class_value,
        }
    }

    pub fn unlabeled(values: Vec<f64>) -> DenseInstance {
        DenseInstance::new(values, None)
    }

    pub fn value_at_index(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn number_of_features(&self) -> usize {
        self.values.len()
    }

    pub fn class_value(&self) -> Option<usize> {
        self.class_value
    }

    pub fn is_class_missing(&self) -> bool {
        self.class_value.is_none()
    }
}
