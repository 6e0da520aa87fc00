use crate::classifiers::Classifier;
use crate::core::instances::DenseInstance;
use crate::utils::math::{sigmoid, solve_linear_system};
use serde::{Deserialize, Serialize};

/// Binary logistic regression with an L2 penalty on the weights.
///
/// Features are standardised with the training mean and population standard
/// deviation before fitting; the scaling travels with the model so raw values
/// can be passed at prediction time. Fitting uses Newton steps on the
/// penalised log-likelihood (the intercept is not penalised).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Inverse regularisation strength.
    c: f64,
    max_iter: usize,
    tol: f64,
    means: Vec<f64>,
    scales: Vec<f64>,
    weights: Vec<f64>,
    intercept: f64,
    n_iter: usize,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(1.0, 100, 1e-8)
    }
}

impl LogisticRegression {
    pub fn new(c: f64, max_iter: usize, tol: f64) -> Self {
        Self {
            c,
            max_iter,
            tol,
            means: Vec::new(),
            scales: Vec::new(),
            weights: Vec::new(),
            intercept: 0.0,
            n_iter: 0,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn iterations(&self) -> usize {
        self.n_iter
    }

    pub fn is_trained(&self) -> bool {
        !self.weights.is_empty()
    }

    fn standardize(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.means.iter().zip(&self.scales))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }

    pub fn decision_function(&self, features: &[f64]) -> f64 {
        let z = self.standardize(features);
        self.intercept + z.iter().zip(&self.weights).map(|(a, w)| a * w).sum::<f64>()
    }

    fn fit_scaling(&mut self, rows: &[&DenseInstance], d: usize) {
        let n = rows.len() as f64;
        self.means = (0..d)
            .map(|j| rows.iter().map(|r| r.values[j]).sum::<f64>() / n)
            .collect();
        self.scales = (0..d)
            .map(|j| {
                let m = self.means[j];
                let var = rows.iter().map(|r| (r.values[j] - m).powi(2)).sum::<f64>() / n;
                let sd = var.sqrt();
                if sd > f64::EPSILON { sd } else { 1.0 }
            })
            .collect();
    }
}

impl Classifier for LogisticRegression {
    fn train_on_instances(&mut self, instances: &[DenseInstance]) {
        let rows: Vec<&DenseInstance> = instances.iter().filter(|i| !i.is_class_missing()).collect();
        *self = Self::new(self.c, self.max_iter, self.tol);
        let Some(first) = rows.first() else {
            return;
        };
        let d = first.number_of_features();
        self.fit_scaling(&rows, d);

        // Design matrix with a trailing bias column.
        let x: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| {
                let mut z = self.standardize(&r.values);
                z.push(1.0);
                z
            })
            .collect();
        let y: Vec<f64> = rows
            .iter()
            .map(|r| r.class_value().unwrap_or(0) as f64)
            .collect();

        let k = d + 1;
        let lambda = 1.0 / self.c;
        let mut beta = vec![0.0; k];

        for iter in 0..self.max_iter {
            let p: Vec<f64> = x
                .iter()
                .map(|xi| sigmoid(xi.iter().zip(&beta).map(|(a, b)| a * b).sum()))
                .collect();

            let mut grad = vec![0.0; k];
            let mut hess = vec![vec![0.0; k]; k];
            for (i, xi) in x.iter().enumerate() {
                let r = p[i] - y[i];
                let w = p[i] * (1.0 - p[i]);
                for a in 0..k {
                    grad[a] += r * xi[a];
                    for b in 0..k {
                        hess[a][b] += w * xi[a] * xi[b];
                    }
                }
            }
            for a in 0..d {
                grad[a] += lambda * beta[a];
                hess[a][a] += lambda;
            }

            // Singular Hessian: the intercept saturated on single-class data.
            let Some(step) = solve_linear_system(hess, grad) else {
                break;
            };
            for (b, s) in beta.iter_mut().zip(&step) {
                *b -= s;
            }
            self.n_iter = iter + 1;
            if step.iter().all(|s| s.abs() < self.tol) {
                break;
            }
        }

        self.intercept = beta[d];
        beta.truncate(d);
        self.weights = beta;
    }

    fn get_votes_for_features(&self, features: &[f64]) -> Vec<f64> {
        let p1 = sigmoid(self.decision_function(features));
        vec![1.0 - p1, p1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{sample_instances, separable_instances};

    #[test]
    fn untrained_model_is_uninformative() {
        let lr = LogisticRegression::default();
        assert!(!lr.is_trained());
        assert_eq!(lr.get_votes_for_features(&[1.0, 2.0]), vec![0.5, 0.5]);
    }

    #[test]
    fn learns_separable_data() {
        let mut lr = LogisticRegression::default();
        let data = separable_instances(40);
        lr.train_on_instances(&data);
        assert!(lr.is_trained());
        let correct = data
            .iter()
            .filter(|i| lr.predict(&i.values) == i.class_value().unwrap())
            .count();
        assert_eq!(correct, data.len());
        assert!(lr.iterations() <= 100);
    }

    #[test]
    fn votes_are_probabilities() {
        let mut lr = LogisticRegression::default();
        lr.train_on_instances(&sample_instances());
        for x in [[60.0, 80.0], [95.0, 150.0], [85.0, 110.0]] {
            let v = lr.get_votes_for_features(&x);
            assert_eq!(v.len(), 2);
            assert!((v[0] + v[1] - 1.0).abs() < 1e-12);
            assert!(v.iter().all(|p| (0.0..=1.0).contains(p)));
        }
    }

    #[test]
    fn hot_long_running_machine_is_flagged() {
        let mut lr = LogisticRegression::default();
        lr.train_on_instances(&sample_instances());
        assert_eq!(lr.predict(&[95.0, 150.0]), 1);
        assert_eq!(lr.predict(&[60.0, 80.0]), 0);
    }

    #[test]
    fn single_class_training_predicts_that_class() {
        let data: Vec<DenseInstance> = (0..6)
            .map(|i| DenseInstance::new(vec![i as f64, 2.0 * i as f64], Some(1)))
            .collect();
        let mut lr = LogisticRegression::default();
        lr.train_on_instances(&data);
        assert_eq!(lr.predict(&[3.0, 6.0]), 1);
        assert!(lr.weights().iter().all(|w| w.is_finite()));
        assert!(lr.intercept().is_finite());
    }

    #[test]
    fn constant_feature_does_not_break_scaling() {
        let data = vec![
            DenseInstance::new(vec![5.0, 1.0], Some(0)),
            DenseInstance::new(vec![5.0, 2.0], Some(0)),
            DenseInstance::new(vec![5.0, 8.0], Some(1)),
            DenseInstance::new(vec![5.0, 9.0], Some(1)),
        ];
        let mut lr = LogisticRegression::default();
        lr.train_on_instances(&data);
        assert!(lr.weights().iter().all(|w| w.is_finite()));
        assert_eq!(lr.predict(&[5.0, 9.5]), 1);
    }

    #[test]
    fn refit_discards_previous_state() {
        let mut lr = LogisticRegression::default();
        lr.train_on_instances(&sample_instances());
        lr.train_on_instances(&[]);
        assert!(!lr.is_trained());
    }
}
