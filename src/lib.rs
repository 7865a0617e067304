//! Levenshtein edit distance between strings, with optional tags showing
//! where two strings differ, an early-abort limit, and ordered parallel
//! batches.
//!
//! ```
//! use fzdiff::{compare, Config};
//!
//! let out = compare("Poma  tomus", "Pomatomus", &Config::default().with_diff(true));
//! assert_eq!(out.edit_distance, 2);
//! assert_eq!(out.tags1, "Poma<ins>  </ins>tomus");
//! assert_eq!(out.tags2, "Poma<del>  </del>tomus");
//! ```

pub mod batch;
pub mod compare;
pub mod distance;
pub mod error;
pub mod presenter;
pub mod tags;
pub mod trace;

pub use batch::{compare_batch, Batch, Pair, DEFAULT_JOBS};
pub use compare::{compare, Comparator, ComparisonResult, Config};
pub use error::Error;

/// Version of the package.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
