mod types;
pub use types::*;

use crate::distance::{distance, distance_max};
use crate::tags::render;
use crate::trace::trace;

/// Compares pairs of strings according to a [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    config: Config,
}

impl Comparator {
    pub fn new(config: Config) -> Self {
        Comparator { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Computes the edit distance between `a` and `b`, with tagged strings
    /// when the config asks for them.
    ///
    /// # Examples
    ///
    /// ```
    /// use fzdiff::compare::{Comparator, Config};
    ///
    /// let cmp = Comparator::new(Config::default().with_diff(true).max_edit_distance(2));
    /// let out = cmp.compare("Pomatomus", "Bomatomus");
    /// assert_eq!(out.edit_distance, 1);
    /// assert_eq!(out.tags1, "<subst>P</subst>omatomus");
    ///
    /// let out = cmp.compare("Boston", "Chicago");
    /// assert!(out.aborted);
    /// assert_eq!(out.edit_distance, 2);
    /// assert!(out.tags1.is_empty());
    /// ```
    pub fn compare(&self, a: &str, b: &str) -> ComparisonResult {
        let mut result = ComparisonResult {
            string1: a.to_string(),
            string2: b.to_string(),
            ..Default::default()
        };

        if a == b {
            result.tags1 = a.to_string();
            result.tags2 = b.to_string();
            return result;
        }

        let max = self.config.max_edit_distance;
        if max > 0 {
            let (dist, aborted) = distance_max(a, b, max);
            if aborted {
                tracing::trace!(max, "edit distance limit exceeded");
                result.edit_distance = dist;
                result.aborted = true;
                return result;
            }
            if !self.config.with_diff {
                result.edit_distance = dist;
                return result;
            }
        }

        if self.config.with_diff {
            let s1: Vec<char> = a.chars().collect();
            let s2: Vec<char> = b.chars().collect();
            let (dist, script) = trace(&s1, &s2);
            result.edit_distance = dist;
            // a traced script always covers both strings
            if let Some((tags1, tags2)) = render(&s1, &s2, &script) {
                result.tags1 = tags1;
                result.tags2 = tags2;
            }
        } else {
            result.edit_distance = distance(a, b);
        }
        result
    }
}

/// Compares two strings with a one-off [`Comparator`].
pub fn compare(a: &str, b: &str, config: &Config) -> ComparisonResult {
    Comparator::new(*config).compare(a, b)
}
