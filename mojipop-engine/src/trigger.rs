//! Trigger pattern detection
//!
//! Recognizes the `:query` pattern ending exactly at the cursor. The query
//! runs from the colon to the cursor and may not contain whitespace or
//! another colon; any such character between the colon and the cursor means
//! no trigger is active.

/// An active trigger: the colon position and the query typed after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Character offset of the colon within the element text.
    pub offset: usize,
    /// Characters typed between the colon and the cursor. May be empty.
    pub query: String,
}

/// Scan the text strictly before `cursor` for an active trigger.
///
/// All offsets are character offsets. `cursor` values past the end of the
/// text are clamped to the end.
pub fn detect(text: &str, cursor: usize) -> Option<Trigger> {
    let before: Vec<char> = text.chars().take(cursor).collect();

    for i in (0..before.len()).rev() {
        let ch = before[i];
        if ch == ':' {
            let query: String = before[i + 1..].iter().collect();
            return Some(Trigger { offset: i, query });
        }
        if ch.is_whitespace() {
            return None;
        }
    }
    None
}
