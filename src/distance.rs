/// Computes the Levenshtein distance between two strings.
///
/// ```
/// use fzdiff::distance::distance;
///
/// assert_eq!(distance("sitting", "kitten"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    distance_max(a, b, 0).0
}

/// Computes the Levenshtein distance between two strings, giving up as soon as
/// every cell of a DP row exceeds `max`.
///
/// Returns the distance and whether the computation was aborted. An aborted
/// result reports `max`, which is a lower bound of the real distance.
/// `max == 0` disables the cap.
///
/// ```
/// use fzdiff::distance::distance_max;
///
/// assert_eq!(distance_max("Boston", "Chicago", 2), (2, true));
/// assert_eq!(distance_max("Pomatomus", "Pom-tomus", 2), (1, false));
/// ```
pub fn distance_max(a: &str, b: &str, max: usize) -> (usize, bool) {
    if a.is_empty() {
        return capped(b.chars().count(), max);
    }
    if b.is_empty() {
        return capped(a.chars().count(), max);
    }
    if a == b {
        return (0, false);
    }

    let mut s1: Vec<char> = a.chars().collect();
    let mut s2: Vec<char> = b.chars().collect();
    // the rolling row follows the shorter sequence
    if s1.len() > s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }

    let mut row: Vec<usize> = (0..=s1.len()).collect();
    for (i, c2) in s2.iter().enumerate() {
        let mut prev = i + 1;
        let mut row_min = usize::MAX;
        for (j, c1) in s1.iter().enumerate() {
            let current = if c1 == c2 {
                row[j]
            } else {
                1 + row[j].min(prev).min(row[j + 1])
            };
            row_min = row_min.min(current);
            row[j] = prev;
            prev = current;
        }
        row[s1.len()] = prev;

        if max > 0 && row_min > max {
            return (max, true);
        }
    }
    (row[s1.len()], false)
}

fn capped(dist: usize, max: usize) -> (usize, bool) {
    if max > 0 && dist > max {
        (max, true)
    } else {
        (dist, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_identity(s in ".{0,20}") {
            prop_assert_eq!(distance(&s, &s), 0);
        }

        #[test]
        fn test_symmetry(a in ".{0,12}", b in ".{0,12}") {
            prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        }

        #[test]
        fn test_bounds(a in ".{0,12}", b in ".{0,12}") {
            let (la, lb) = (a.chars().count(), b.chars().count());
            let d = distance(&a, &b);
            prop_assert!(d >= la.abs_diff(lb));
            prop_assert!(d <= la.max(lb));
        }

        #[test]
        fn test_bounded_agrees_with_unbounded(a in "[abc]{0,10}", b in "[abc]{0,10}", max in 1usize..6) {
            let d = distance(&a, &b);
            let expected = if d > max { (max, true) } else { (d, false) };
            prop_assert_eq!(distance_max(&a, &b, max), expected);
        }
    }

    #[test]
    fn test_known_distances() {
        let cases = [
            ("Hello", "He1lo", 1),
            ("Pomatomus", "Pom-tomus", 1),
            ("Pomatomus", "Poma  tomus", 2),
            ("Pomatomus", "Pomщtomus", 1),
            ("sitting", "kitten", 3),
            ("Boston", "Chicago", 7),
            ("Chicago", "Boston", 7),
        ];
        for (a, b, d) in cases {
            assert_eq!(distance(a, b), d, "'{}' vs '{}'", a, b);
        }
    }

    #[test]
    fn test_max() {
        let cases = [
            ("Hello", "Hello", 0, false),
            ("Pomatomus", "Pom-tomus", 1, false),
            ("Pomatomus", "Poma  tomus", 2, false),
            ("Pomatomus", "Pomщtomus", 1, false),
            ("pOMatomus", "Pomatomus", 2, true),
            ("Boston", "Chicago", 2, true),
            ("Chicago", "Boston", 2, true),
        ];
        for (a, b, d, aborted) in cases {
            assert_eq!(distance_max(a, b, 2), (d, aborted), "'{}' vs '{}'", a, b);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "test2"), 5);
        assert_eq!(distance("тест", ""), 4);
        assert_eq!(distance_max("", "test2", 3), (3, true));
        assert_eq!(distance_max("abc", "", 3), (3, false));
    }

    #[test]
    fn test_no_narrow_counter() {
        let a = "a".repeat(300);
        let b = "b".repeat(300);
        assert_eq!(distance(&a, &b), 300);
    }
}
