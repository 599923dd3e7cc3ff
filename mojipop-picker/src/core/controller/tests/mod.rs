//! Tests for the picker controller

use super::*;
use crate::core::target::{
    EditableRegionTarget, ElementSnapshot, FormControlTarget, TargetId, adapt,
};
use mojipop_engine::corpus::{Corpus, EmojiRecord};

mod dismissal;

/// Presenter double that records render/teardown traffic and hit-tests
/// against a settable rectangle.
#[derive(Default)]
struct RecordingPresenter {
    rendered: Option<RenderedPopup>,
    render_calls: usize,
    teardown_calls: usize,
    /// Popup bounds as (x, y, width, height); None = nothing rendered yet
    bounds: Option<(f64, f64, f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
struct RenderedPopup {
    names: Vec<String>,
    highlighted: usize,
    anchor: TargetId,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, candidates: &[EmojiRecord], highlighted: usize, anchor: TargetId) {
        self.rendered = Some(RenderedPopup {
            names: candidates.iter().map(|c| c.name.clone()).collect(),
            highlighted,
            anchor,
        });
        self.render_calls += 1;
    }

    fn teardown(&mut self) {
        self.rendered = None;
        self.bounds = None;
        self.teardown_calls += 1;
    }

    fn contains_point(&self, point: Point) -> bool {
        let Some((x, y, w, h)) = self.bounds else {
            return false;
        };
        point.x >= x && point.x <= x + w && point.y >= y && point.y <= y + h
    }
}

fn sample_corpus() -> Corpus {
    Corpus::new(vec![
        EmojiRecord::new("smile", "😄", ["happy", "joy"]),
        EmojiRecord::new("smirk", "😏", ["sly"]),
        EmojiRecord::new("thumbsup", "👍", ["approve"]),
        EmojiRecord::new("fire", "🔥", ["hot"]),
        EmojiRecord::new("wave", "👋", ["hello"]),
    ])
}

fn controller() -> PickerController<RecordingPresenter> {
    PickerController::new(
        sample_corpus(),
        MatchConfig::default(),
        RecordingPresenter::default(),
    )
}

/// Feed a content change from a form control with the caret at the end.
fn type_into(picker: &mut PickerController<RecordingPresenter>, id: u64, value: &str) {
    let caret = value.chars().count();
    picker.content_changed(Box::new(FormControlTarget::new(TargetId(id), value, caret)));
}

fn rendered_names(picker: &PickerController<RecordingPresenter>) -> Vec<String> {
    picker
        .presenter()
        .rendered
        .as_ref()
        .map(|popup| popup.names.clone())
        .unwrap_or_default()
}

fn highlighted(picker: &PickerController<RecordingPresenter>) -> Option<usize> {
    picker.presenter().rendered.as_ref().map(|p| p.highlighted)
}
