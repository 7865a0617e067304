use serde::{Deserialize, Serialize};

/// Settings shared by every comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Render `<subst>`, `<ins>`, `<del>` tags into both strings. Roughly
    /// five times slower than computing the distance alone.
    pub with_diff: bool,
    /// Stop once the distance is known to be larger than this value.
    /// `0` means no limit.
    pub max_edit_distance: usize,
}

impl Config {
    pub fn with_diff(mut self, with_diff: bool) -> Self {
        self.with_diff = with_diff;
        self
    }

    pub fn max_edit_distance(mut self, max: usize) -> Self {
        self.max_edit_distance = max;
        self
    }
}

/// Outcome of comparing two strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub string1: String,
    pub string2: String,
    /// First string tagged against the second, empty unless diffs were asked for.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags1: String,
    /// Second string tagged against the first, empty unless diffs were asked for.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags2: String,
    /// Levenshtein distance, or the configured maximum when `aborted` is set.
    pub edit_distance: usize,
    /// The maximum edit distance was exceeded; `edit_distance` is a lower bound.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub aborted: bool,
    /// Set by batch runs when the comparison itself failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
