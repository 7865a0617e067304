/// Alias for a vector of EditEvent
/// Result of the traceback, in forward order
pub type EditScript = Vec<EditEvent>;

/// One step of the optimal path through the distance matrix.
/// Insert and Delete read from the first string towards the second:
/// a character found only in the first string is deleted, a character
/// found only in the second string is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditEvent {
    Same,
    Substitute,
    Insert,
    Delete,
}

impl EditEvent {
    /// The same event seen from the second string.
    pub fn invert(self) -> Self {
        match self {
            EditEvent::Insert => EditEvent::Delete,
            EditEvent::Delete => EditEvent::Insert,
            e => e,
        }
    }

    /// Does the event consume a character of the first string?
    pub fn consumes_first(self) -> bool {
        !matches!(self, EditEvent::Insert)
    }

    /// Does the event consume a character of the second string?
    pub fn consumes_second(self) -> bool {
        !matches!(self, EditEvent::Delete)
    }
}
