use std::collections::{HashMap, HashSet};

/// A window of a string, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// Character offset of the first character in the window.
    pub start: usize,
    /// Number of characters in the window.
    pub len: usize,
}

impl Window {
    /// Character offset one past the last character in the window.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns the part of `text` this window covers, or `None` if the window
    /// does not fit in `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut offsets = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()));
        let from = offsets.nth(self.start)?;
        let to = if self.len == 0 {
            from
        } else {
            offsets.nth(self.len - 1)?
        };
        Some(&text[from..to])
    }
}

/// Finds the first shortest window of `text` that contains every character of
/// `required` at least once.
///
/// Returns `None` when `text` or `required` is empty, or when some required
/// character never occurs in `text`.
pub fn find_covering_window(text: &str, required: &HashSet<char>) -> Option<Window> {
    if text.is_empty() || required.is_empty() {
        return None;
    }

    // Trails `right`; its next char is always the one at `left`.
    let mut trailing = text.chars();
    // Occurrences of each required character inside [left, right).
    let mut counts: HashMap<char, usize> = required.iter().map(|&c| (c, 0)).collect();
    let mut satisfied = 0;
    let mut left = 0;
    let mut best: Option<Window> = None;

    for (right, incoming) in text.chars().enumerate() {
        if let Some(count) = counts.get_mut(&incoming) {
            *count += 1;
            if *count == 1 {
                satisfied += 1;
            }
        }

        if satisfied < required.len() {
            continue;
        }

        // Shrink until the window just lost a required character; the window
        // one step before that, [left - 1, right], is minimal for this right edge.
        while satisfied == required.len() {
            let Some(outgoing) = trailing.next() else {
                break;
            };
            if let Some(count) = counts.get_mut(&outgoing) {
                *count -= 1;
                if *count == 0 {
                    satisfied -= 1;
                }
            }
            left += 1;
        }

        let candidate = Window {
            start: left - 1,
            len: right - left + 2,
        };
        if best.map_or(true, |b| candidate.len < b.len) {
            best = Some(candidate);
        }
    }

    log::trace!("covering window for {required:?} in {text:?}: {best:?}");
    best
}

/// Length in characters of the shortest window of `text` containing every
/// character of `required`.
///
/// Returns 0 when `text` or `required` is empty and also when no such window
/// exists; use [`find_covering_window`] to tell those cases apart.
pub fn shortest_covering_window(text: &str, required: &HashSet<char>) -> usize {
    find_covering_window(text, required).map_or(0, |w| w.len)
}
