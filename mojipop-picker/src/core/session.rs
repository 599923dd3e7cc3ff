//! Query session
//!
//! The ephemeral state behind an open popup: the element being edited, the
//! trigger position, the query, and the filtered candidates. A session
//! exists exactly as long as the popup is visible.

use std::ops::Range;

use super::candidate::CandidateList;
use super::target::EditTarget;

/// State tracking one open popup tied to one element and one trigger.
pub struct QuerySession {
    /// The element being edited; exclusively owned for the session's life.
    pub(crate) target: Box<dyn EditTarget>,
    /// Character offset of the trigger colon at session start.
    pub(crate) trigger_offset: usize,
    /// Characters typed after the colon.
    pub(crate) query: String,
    /// Filtered candidates with highlight. Non-empty by construction; a
    /// filter pass with no matches dismisses the session instead.
    pub(crate) candidates: CandidateList,
}

impl QuerySession {
    pub fn new(
        target: Box<dyn EditTarget>,
        trigger_offset: usize,
        query: String,
        candidates: CandidateList,
    ) -> Self {
        Self {
            target,
            trigger_offset,
            query,
            candidates,
        }
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Character offset of the trigger colon.
    pub fn trigger_offset(&self) -> usize {
        self.trigger_offset
    }

    /// The filtered candidates.
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// The session's edit target.
    pub fn target(&self) -> &dyn EditTarget {
        self.target.as_ref()
    }

    /// Compute the splice a commit would perform: the character range from
    /// the trigger colon to the current cursor, and the glyph to insert.
    ///
    /// Returns `None` when the commit must be a no-op: no highlighted
    /// candidate, the cursor cannot be determined, or the cursor has moved
    /// before the colon.
    pub fn commit_splice(&self) -> Option<(Range<usize>, String)> {
        let record = self.candidates.selected()?;
        let cursor = self.target.cursor()?;
        if cursor < self.trigger_offset {
            return None;
        }
        Some((self.trigger_offset..cursor, record.glyph.clone()))
    }
}

impl std::fmt::Debug for QuerySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuerySession")
            .field("target", &self.target.id())
            .field("trigger_offset", &self.trigger_offset)
            .field("query", &self.query)
            .field("candidates", &self.candidates.len())
            .finish()
    }
}
