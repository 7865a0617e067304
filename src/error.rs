use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("number of jobs must be positive")]
    InvalidJobs,
    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("unknown output format '{0}', expected csv, tsv, compact or pretty")]
    UnknownFormat(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected 2 strings, found {fields}")]
    ShortRow { line: u64, fields: usize },
}
