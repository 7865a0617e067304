pub mod types;
pub use types::*;

/// Full Levenshtein matrix: one row per prefix of the second sequence,
/// one column per prefix of the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<usize>,
    cols: usize,
}

impl DistanceMatrix {
    /// Fills the whole `(b.len() + 1) x (a.len() + 1)` matrix, row-major.
    pub fn build(a: &[char], b: &[char]) -> Self {
        let cols = a.len() + 1;
        let mut data = Vec::with_capacity(cols * (b.len() + 1));
        data.extend(0..cols);
        for (i, cb) in b.iter().enumerate() {
            let row = i * cols;
            data.push(i + 1);
            for (j, ca) in a.iter().enumerate() {
                let diag = data[row + j];
                let current = if ca == cb {
                    diag
                } else {
                    let up = data[row + j + 1];
                    let left = data[row + cols + j];
                    1 + diag.min(left).min(up)
                };
                data.push(current);
            }
        }
        DistanceMatrix { data, cols }
    }

    pub fn rows(&self) -> usize {
        self.data.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> usize {
        self.data[row * self.cols + col]
    }

    /// Distance between the two complete sequences.
    pub fn distance(&self) -> usize {
        self.data[self.data.len() - 1]
    }

    /// Walks from the bottom-right cell back to the origin, always moving to
    /// the cheapest predecessor. Ties go to the diagonal, then to the
    /// horizontal step, then to the vertical one.
    pub fn traceback(&self) -> EditScript {
        let mut row = self.rows() - 1;
        let mut col = self.cols - 1;
        let mut events = Vec::with_capacity(row + col);

        while row > 0 || col > 0 {
            let mut best = self.get(row, col);
            // a diagonal step that keeps the value is a match; the branches
            // below always fire on the border, so the wrapping is never used
            let mut step = (EditEvent::Same, row.wrapping_sub(1), col.wrapping_sub(1));
            if row > 0 && col > 0 && self.get(row - 1, col - 1) < best {
                best = self.get(row - 1, col - 1);
                step = (EditEvent::Substitute, row - 1, col - 1);
            }
            if col > 0 && self.get(row, col - 1) < best {
                best = self.get(row, col - 1);
                step = (EditEvent::Delete, row, col - 1);
            }
            if row > 0 && self.get(row - 1, col) < best {
                step = (EditEvent::Insert, row - 1, col);
            }
            events.push(step.0);
            row = step.1;
            col = step.2;
        }

        events.reverse();
        events
    }
}

/// Computes the distance between two sequences together with the edit script
/// that turns the first one into the second.
///
/// # Examples
///
/// ```
/// use fzdiff::trace::{trace, EditEvent};
///
/// let a: Vec<char> = "Puma".chars().collect();
/// let b: Vec<char> = "Poma".chars().collect();
/// let (dist, script) = trace(&a, &b);
/// assert_eq!(dist, 1);
/// assert_eq!(script, vec![
///     EditEvent::Same,
///     EditEvent::Substitute,
///     EditEvent::Same,
///     EditEvent::Same,
/// ]);
/// ```
pub fn trace(a: &[char], b: &[char]) -> (usize, EditScript) {
    let matrix = DistanceMatrix::build(a, b);
    (matrix.distance(), matrix.traceback())
}

/// Replays `script` over `old`, taking inserted and substituted characters
/// from `new`. Returns `None` when the script does not describe `old -> new`.
pub fn apply(old: &[char], new: &[char], script: &[EditEvent]) -> Option<Vec<char>> {
    let mut result = Vec::with_capacity(new.len());
    let mut old_iter = old.iter();
    let mut new_iter = new.iter();
    for event in script {
        match event {
            EditEvent::Same => {
                let c = old_iter.next()?;
                if new_iter.next()? != c {
                    return None;
                }
                result.push(*c);
            }
            EditEvent::Substitute => {
                let c = old_iter.next()?;
                let n = new_iter.next()?;
                if n == c {
                    return None;
                }
                result.push(*n);
            }
            EditEvent::Insert => result.push(*new_iter.next()?),
            EditEvent::Delete => {
                old_iter.next()?;
            }
        }
    }
    if old_iter.next().is_some() || new_iter.next().is_some() {
        return None;
    }
    Some(result)
}
