use crate::trace::EditEvent;

/// Name of the marker wrapping a run of `event`, `None` for unchanged text.
pub fn tag_name(event: EditEvent) -> Option<&'static str> {
    match event {
        EditEvent::Same => None,
        EditEvent::Substitute => Some("subst"),
        EditEvent::Insert => Some("ins"),
        EditEvent::Delete => Some("del"),
    }
}

/// One side of the rendering. The second string's view uses the events as
/// they are, the first string's view sees them inverted.
struct View {
    out: String,
    inverted: bool,
}

impl View {
    fn new(capacity: usize, inverted: bool) -> Self {
        View {
            out: String::with_capacity(capacity),
            inverted,
        }
    }

    fn name(&self, event: EditEvent) -> Option<&'static str> {
        if self.inverted {
            tag_name(event.invert())
        } else {
            tag_name(event)
        }
    }

    fn open(&mut self, event: EditEvent) {
        if let Some(name) = self.name(event) {
            self.out.push('<');
            self.out.push_str(name);
            self.out.push('>');
        }
    }

    fn close(&mut self, event: EditEvent) {
        if let Some(name) = self.name(event) {
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
        }
    }
}

/// Renders both strings with `<subst>`, `<ins>` and `<del>` spans around the
/// runs of characters touched by `script`.
///
/// Both views walk the same script: unchanged and substituted positions show
/// each string's own character, a character present in only one string shows
/// up in both views, tagged `ins` on the side that has it and `del` on the
/// other.
///
/// Returns `None` when `script` does not fit the strings, that is when it
/// consumes more characters than a string has or leaves some unconsumed.
///
/// ```
/// use fzdiff::tags::render;
/// use fzdiff::trace::trace;
///
/// let a: Vec<char> = "Hello".chars().collect();
/// let b: Vec<char> = "He1lo".chars().collect();
/// let (_, script) = trace(&a, &b);
/// let (t1, t2) = render(&a, &b, &script).unwrap();
/// assert_eq!(t1, "He<subst>l</subst>lo");
/// assert_eq!(t2, "He<subst>1</subst>lo");
///
/// assert_eq!(render(&a, &b, &script[1..]), None);
/// ```
pub fn render(a: &[char], b: &[char], script: &[EditEvent]) -> Option<(String, String)> {
    let capacity = (a.len() + b.len()) * 2;
    let mut first = View::new(capacity, true);
    let mut second = View::new(capacity, false);
    let mut a_iter = a.iter();
    let mut b_iter = b.iter();
    let mut current = EditEvent::Same;

    for &event in script {
        if event != current {
            first.close(current);
            second.close(current);
            first.open(event);
            second.open(event);
            current = event;
        }
        match event {
            EditEvent::Same | EditEvent::Substitute => {
                first.out.push(*a_iter.next()?);
                second.out.push(*b_iter.next()?);
            }
            EditEvent::Delete => {
                let c = *a_iter.next()?;
                first.out.push(c);
                second.out.push(c);
            }
            EditEvent::Insert => {
                let c = *b_iter.next()?;
                first.out.push(c);
                second.out.push(c);
            }
        }
    }
    if a_iter.next().is_some() || b_iter.next().is_some() {
        return None;
    }
    first.close(current);
    second.close(current);

    Some((first.out, second.out))
}

/// Drops every marker from a tagged string.
pub fn strip(tagged: &str) -> String {
    let mut out = tagged.to_string();
    for name in ["subst", "ins", "del"] {
        out = out
            .replace(&format!("<{}>", name), "")
            .replace(&format!("</{}>", name), "");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::trace;
    use proptest::prelude::*;

    fn tags(a: &str, b: &str) -> (String, String) {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (_, script) = trace(&a, &b);
        render(&a, &b, &script).unwrap()
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    proptest! {
        #[test]
        fn test_identity_has_no_markers(s in "[a-z ]{0,20}") {
            prop_assert_eq!(tags(&s, &s), (s.clone(), s));
        }

        #[test]
        fn test_views_share_markers(a in "[abc]{0,10}", b in "[abc]{0,10}") {
            let (t1, t2) = tags(&a, &b);
            prop_assert_eq!(t1.matches("<subst>").count(), t2.matches("<subst>").count());
            prop_assert_eq!(t1.matches("<ins>").count(), t2.matches("<del>").count());
            prop_assert_eq!(t1.matches("<del>").count(), t2.matches("<ins>").count());
            prop_assert_eq!(strip(&t1).chars().count(), strip(&t2).chars().count());
        }
    }

    #[test]
    fn test_substitution() {
        assert_eq!(
            tags("Hello", "He1lo"),
            pair("He<subst>l</subst>lo", "He<subst>1</subst>lo")
        );
        assert_eq!(
            tags("Pomatomus", "Bomatomus"),
            pair("<subst>P</subst>omatomus", "<subst>B</subst>omatomus")
        );
    }

    #[test]
    fn test_runs_are_merged() {
        assert_eq!(
            tags("Poma  tomus", "Pomatomus"),
            pair("Poma<ins>  </ins>tomus", "Poma<del>  </del>tomus")
        );
        assert_eq!(
            tags("Boston", "Chicago"),
            pair("<del>C</del><subst>Boston</subst>", "<ins>C</ins><subst>hicago</subst>")
        );
    }

    #[test]
    fn test_mixed_events() {
        assert_eq!(
            tags("Poma tomus", "Pomatomos"),
            pair("Poma<ins> </ins>tom<subst>u</subst>s", "Poma<del> </del>tom<subst>o</subst>s")
        );
        assert_eq!(
            tags("sitting", "kitten"),
            pair(
                "<subst>s</subst>itt<subst>i</subst>n<ins>g</ins>",
                "<subst>k</subst>itt<subst>e</subst>n<del>g</del>"
            )
        );
    }

    #[test]
    fn test_leading_gap_then_substitution() {
        assert_eq!(
            tags("ebas", "bac"),
            pair("<ins>e</ins>ba<subst>s</subst>", "<del>e</del>ba<subst>c</subst>")
        );
        assert_eq!(
            tags("rebase", "basic"),
            pair(
                "<ins>re</ins>bas<del>i</del><subst>e</subst>",
                "<del>re</del>bas<ins>i</ins><subst>c</subst>"
            )
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(tags("", ""), pair("", ""));
        assert_eq!(tags("", "test2"), pair("<del>test2</del>", "<ins>test2</ins>"));
        assert_eq!(tags("abc", ""), pair("<ins>abc</ins>", "<del>abc</del>"));
        assert_eq!(tags("test1", ""), pair("<ins>test1</ins>", "<del>test1</del>"));
    }

    #[test]
    fn test_script_must_fit() {
        let a: Vec<char> = "Puma".chars().collect();
        let b: Vec<char> = "Poma".chars().collect();
        let (_, script) = trace(&a, &b);
        assert!(render(&a, &b, &script).is_some());
        // too short leaves characters behind
        assert_eq!(render(&a, &b, &script[..3]), None);
        // too long runs past the end
        let mut long = script.clone();
        long.push(EditEvent::Delete);
        assert_eq!(render(&a, &b, &long), None);
        assert_eq!(render(&a, &b, &[EditEvent::Insert; 4]), None);
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("Poma<ins>  </ins>tom<subst>u</subst>s"), "Poma  tomus");
    }
}
