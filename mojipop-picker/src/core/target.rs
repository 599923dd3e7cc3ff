//! Editable element adapters
//!
//! Normalizes the host page's editable elements into one capability
//! interface: read text and cursor, splice a replacement in, and queue the
//! bubbling change notification other page scripts expect. Two variants
//! exist: form controls (inputs and text areas, whose caret is always
//! known) and directly editable regions (whose cursor comes from the active
//! selection and may be unknown).

use std::ops::Range;

use tracing::trace;

/// Opaque handle identifying a host element across the embedding boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// How the host writes updated text back to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBack {
    /// Form controls: assign the value property.
    Value,
    /// Editable regions: assign the text content.
    TextContent,
}

/// Capability interface over an editable element.
///
/// All offsets are character offsets within the element text.
pub trait EditTarget {
    /// Host element handle, used as the popup anchor and for write-back.
    fn id(&self) -> TargetId;

    /// Current text of the element.
    fn text(&self) -> &str;

    /// Current cursor offset, or `None` when it cannot be determined.
    fn cursor(&self) -> Option<usize>;

    /// Replace `range` with `replacement` and place the cursor right after
    /// the inserted text.
    fn splice(&mut self, range: Range<usize>, replacement: &str);

    /// Queue a bubbling content-changed notification so the host page
    /// observes the splice as if the user had typed it.
    fn notify_changed(&mut self);

    /// Notifications queued by `notify_changed` and not yet delivered.
    fn pending_notifications(&self) -> usize;

    /// The native write-back mechanism for this element kind.
    fn write_back(&self) -> WriteBack;
}

/// Snapshot of the focused element as reported by the host page.
#[derive(Debug, Clone)]
pub enum ElementSnapshot {
    /// A single-line `<input>` with its `type` attribute.
    TextInput {
        input_type: String,
        value: String,
        caret: usize,
    },
    /// A multi-line plain text area.
    TextArea { value: String, caret: usize },
    /// An element flagged directly editable. The cursor is the start offset
    /// of the active selection and may be unknown.
    EditableRegion {
        content: String,
        selection_start: Option<usize>,
    },
}

/// Input types that participate in emoji completion.
const TEXT_INPUT_TYPES: &[&str] = &["text", "search", "url", "email", "password"];

/// Adapt a host element snapshot into an edit target.
///
/// Returns `None` for ineligible elements; events on those are no-ops.
pub fn adapt(id: TargetId, snapshot: ElementSnapshot) -> Option<Box<dyn EditTarget>> {
    match snapshot {
        ElementSnapshot::TextInput {
            input_type,
            value,
            caret,
        } => {
            if !TEXT_INPUT_TYPES.contains(&input_type.as_str()) {
                trace!("ignoring input of type {:?}", input_type);
                return None;
            }
            Some(Box::new(FormControlTarget::new(id, value, caret)))
        }
        ElementSnapshot::TextArea { value, caret } => {
            Some(Box::new(FormControlTarget::new(id, value, caret)))
        }
        ElementSnapshot::EditableRegion {
            content,
            selection_start,
        } => Some(Box::new(EditableRegionTarget::new(id, content, selection_start))),
    }
}

/// Byte offset of the character at `char_pos`, clamping past the end.
fn byte_offset(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Replace the character range with `replacement`, returning the new text.
fn splice_chars(text: &str, range: Range<usize>, replacement: &str) -> String {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end);
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}

/// An input or text area: value plus an always-known caret.
#[derive(Debug, Clone)]
pub struct FormControlTarget {
    id: TargetId,
    value: String,
    caret: usize,
    notifications: usize,
}

impl FormControlTarget {
    pub fn new(id: TargetId, value: impl Into<String>, caret: usize) -> Self {
        Self {
            id,
            value: value.into(),
            caret,
            notifications: 0,
        }
    }

    /// The control's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The caret offset in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }
}

impl EditTarget for FormControlTarget {
    fn id(&self) -> TargetId {
        self.id
    }

    fn text(&self) -> &str {
        &self.value
    }

    fn cursor(&self) -> Option<usize> {
        Some(self.caret)
    }

    fn splice(&mut self, range: Range<usize>, replacement: &str) {
        self.value = splice_chars(&self.value, range.clone(), replacement);
        self.caret = range.start + replacement.chars().count();
    }

    fn notify_changed(&mut self) {
        self.notifications += 1;
    }

    fn pending_notifications(&self) -> usize {
        self.notifications
    }

    fn write_back(&self) -> WriteBack {
        WriteBack::Value
    }
}

/// A directly editable region: rendered text content plus the start offset
/// of the active selection, when one exists.
#[derive(Debug, Clone)]
pub struct EditableRegionTarget {
    id: TargetId,
    content: String,
    selection_start: Option<usize>,
    notifications: usize,
}

impl EditableRegionTarget {
    pub fn new(id: TargetId, content: impl Into<String>, selection_start: Option<usize>) -> Self {
        Self {
            id,
            content: content.into(),
            selection_start,
            notifications: 0,
        }
    }

    /// The region's text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl EditTarget for EditableRegionTarget {
    fn id(&self) -> TargetId {
        self.id
    }

    fn text(&self) -> &str {
        &self.content
    }

    fn cursor(&self) -> Option<usize> {
        self.selection_start
    }

    fn splice(&mut self, range: Range<usize>, replacement: &str) {
        self.content = splice_chars(&self.content, range.clone(), replacement);
        self.selection_start = Some(range.start + replacement.chars().count());
    }

    fn notify_changed(&mut self) {
        self.notifications += 1;
    }

    fn pending_notifications(&self) -> usize {
        self.notifications
    }

    fn write_back(&self) -> WriteBack {
        WriteBack::TextContent
    }
}
