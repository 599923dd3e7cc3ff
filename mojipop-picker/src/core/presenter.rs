//! Presentation layer contract
//!
//! The core drives the popup through this interface and never touches
//! rendering itself. The presenter reports clicks and hovers back through
//! the controller's `item_clicked`/`item_hovered` entry points.

use mojipop_engine::EmojiRecord;

use super::events::Point;
use super::target::TargetId;

/// The rendering side of the picker.
pub trait Presenter {
    /// Lay out `candidates` near the anchor element, visually
    /// distinguishing the highlighted one. Replaces any previous rendering.
    fn render(&mut self, candidates: &[EmojiRecord], highlighted: usize, anchor: TargetId);

    /// Remove all rendered state. Safe to call when nothing is rendered.
    fn teardown(&mut self);

    /// Whether a page point falls within the rendered popup bounds. Used to
    /// distinguish outside-clicks from inside-clicks.
    fn contains_point(&self, point: Point) -> bool;
}
