use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Training and evaluation partitions of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub test: Vec<T>,
}

/// Seeded uniform random train/test partitioner.
///
/// The same seed and input order always give the same partition. The
/// evaluation share is `ceil(n * test_fraction)` rows, reduced if needed so at
/// least one row is left for training; it may therefore be empty on tiny inputs.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSplitter {
    test_fraction: f64,
    seed: u64,
}

impl Default for DatasetSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_FRACTION, DEFAULT_SPLIT_SEED)
    }
}

impl DatasetSplitter {
    pub fn new(test_fraction: f64, seed: u64) -> Self {
        Self {
            test_fraction: test_fraction.clamp(0.0, 1.0),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn test_size(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let wanted = (n as f64 * self.test_fraction).ceil() as usize;
        wanted.min(n - 1)
    }

    pub fn split<T>(&self, items: Vec<T>) -> Split<T> {
        let n = items.len();
        let n_test = self.test_size(n);

        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut take = |idx: &[usize]| -> Vec<T> {
            idx.iter().filter_map(|&i| slots[i].take()).collect()
        };
        let test = take(&order[..n_test]);
        let train = take(&order[n_test..]);
        debug_assert_eq!(train.len() + test.len(), n);

        Split { train, test }
    }
}
