//! Candidate list management
//!
//! Holds the filtered emoji candidates together with the highlight cursor.

use mojipop_engine::EmojiRecord;

/// A list of filtered candidates with highlight tracking.
///
/// The highlight cursor clamps at both ends; there is no wraparound.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    /// Filtered candidates, already capped by the matcher
    candidates: Vec<EmojiRecord>,
    /// Currently highlighted candidate index
    cursor: usize,
}

impl CandidateList {
    /// Create a new candidate list with the highlight on the first entry.
    pub fn new(candidates: Vec<EmojiRecord>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Get all candidates.
    pub fn candidates(&self) -> &[EmojiRecord] {
        &self.candidates
    }

    /// Get the number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get the current highlight position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the currently highlighted candidate.
    pub fn selected(&self) -> Option<&EmojiRecord> {
        self.candidates.get(self.cursor)
    }

    /// Move the highlight to the next candidate, clamping at the end.
    /// Returns whether the highlight moved.
    pub fn move_next(&mut self) -> bool {
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the highlight to the previous candidate, clamping at zero.
    /// Returns whether the highlight moved.
    pub fn move_prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Set the highlight directly (hover). Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<&EmojiRecord> {
        if index < self.candidates.len() {
            self.cursor = index;
            self.selected()
        } else {
            None
        }
    }

    /// Replace the candidates after a re-filter. The highlight resets to 0.
    pub fn update(&mut self, candidates: Vec<EmojiRecord>) {
        self.candidates = candidates;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<EmojiRecord> {
        names
            .iter()
            .map(|n| EmojiRecord::new(*n, "x", Vec::<String>::new()))
            .collect()
    }

    #[test]
    fn test_candidate_list_basic() {
        let list = CandidateList::new(records(&["grinning", "joy", "heart"]));
        assert_eq!(list.len(), 3);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.selected().unwrap().name, "grinning");
    }

    #[test]
    fn test_next_clamps_at_end() {
        let mut list = CandidateList::new(records(&["a", "b", "c"]));

        assert!(list.move_next());
        assert!(list.move_next());
        assert_eq!(list.cursor(), 2);

        // Clamp: no wraparound, repeated next is idempotent.
        assert!(!list.move_next());
        assert_eq!(list.cursor(), 2);
        assert!(!list.move_next());
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let mut list = CandidateList::new(records(&["a", "b"]));

        assert!(!list.move_prev());
        assert_eq!(list.cursor(), 0);

        list.move_next();
        assert!(list.move_prev());
        assert_eq!(list.cursor(), 0);
        assert!(!list.move_prev());
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_select_for_hover() {
        let mut list = CandidateList::new(records(&["a", "b", "c"]));
        assert_eq!(list.select(2).unwrap().name, "c");
        assert_eq!(list.cursor(), 2);

        // Out of range: ignored, highlight unchanged.
        assert!(list.select(9).is_none());
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_update_resets_highlight() {
        let mut list = CandidateList::new(records(&["a", "b", "c"]));
        list.move_next();
        list.update(records(&["d", "e"]));
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.selected().unwrap().name, "d");
    }

    #[test]
    fn test_empty_list() {
        let mut list = CandidateList::default();
        assert!(list.is_empty());
        assert!(list.selected().is_none());
        assert!(!list.move_next());
        assert!(!list.move_prev());
        assert!(list.select(0).is_none());
    }
}
