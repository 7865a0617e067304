use crate::compare::{Comparator, ComparisonResult, Config};
use crate::error::Error;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Number of workers used when none is given.
pub const DEFAULT_JOBS: usize = 16;

/// Two strings to compare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub string1: String,
    pub string2: String,
}

impl Pair {
    pub fn new(string1: impl Into<String>, string2: impl Into<String>) -> Self {
        Pair {
            string1: string1.into(),
            string2: string2.into(),
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Pair {
    fn from((a, b): (A, B)) -> Self {
        Pair::new(a, b)
    }
}

/// Compares many pairs on a fixed pool of worker threads.
pub struct Batch {
    config: Config,
    pool: rayon::ThreadPool,
}

impl Batch {
    /// Creates a batch runner with [`DEFAULT_JOBS`] workers.
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::with_jobs(config, DEFAULT_JOBS)
    }

    pub fn with_jobs(config: Config, jobs: usize) -> Result<Self, Error> {
        if jobs == 0 {
            return Err(Error::InvalidJobs);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|i| format!("fzdiff-worker-{}", i))
            .build()?;
        Ok(Batch { config, pool })
    }

    pub fn jobs(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Compares every pair and returns the results in input order.
    ///
    /// Each unit of work keeps its input position, so duplicated pairs get
    /// their own results. A comparison that panics yields a result with
    /// `error` set and leaves the rest of the batch untouched.
    ///
    /// ```
    /// use fzdiff::batch::{Batch, Pair};
    /// use fzdiff::compare::Config;
    ///
    /// let batch = Batch::with_jobs(Config::default(), 4).unwrap();
    /// let out = batch.compare(&[Pair::new("Puma", "Poma"), Pair::new("sitting", "kitten")]);
    /// let dists: Vec<usize> = out.iter().map(|r| r.edit_distance).collect();
    /// assert_eq!(dists, [1, 3]);
    /// ```
    pub fn compare(&self, pairs: &[Pair]) -> Vec<ComparisonResult> {
        debug!(pairs = pairs.len(), jobs = self.jobs(), "comparing batch");
        let config = self.config;
        let mut results = Vec::with_capacity(pairs.len());
        self.pool.install(|| {
            pairs
                .par_iter()
                .enumerate()
                .map_init(
                    || Comparator::new(config),
                    |cmp, (index, pair)| isolated(index, pair, || cmp.compare(&pair.string1, &pair.string2)),
                )
                .collect_into_vec(&mut results);
        });
        results
    }
}

/// Compares pairs with a temporary [`Batch`] of [`DEFAULT_JOBS`] workers.
pub fn compare_batch(pairs: &[Pair], config: &Config) -> Result<Vec<ComparisonResult>, Error> {
    Ok(Batch::new(*config)?.compare(pairs))
}

fn isolated<F>(index: usize, pair: &Pair, f: F) -> ComparisonResult
where
    F: FnOnce() -> ComparisonResult,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(&*payload);
            warn!(index, error = %message, "comparison failed");
            ComparisonResult {
                string1: pair.string1.clone(),
                string2: pair.string2.clone(),
                error: Some(message),
                ..Default::default()
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "comparison panicked".to_string()
    }
}
