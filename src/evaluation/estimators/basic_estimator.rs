use crate::evaluation::estimators::Estimator;

/// Running mean, `sum / len`; used for 0/1 correctness indicators.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BasicEstimator {
    len: f64,
    sum: f64,
}

impl BasicEstimator {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0.0
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}
