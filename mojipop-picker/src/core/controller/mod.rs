//! Picker controller - the process-wide orchestrator
//!
//! One controller instance is constructed at startup and owns the corpus,
//! the matching configuration, the presenter, and the single optional
//! session. Every page event enters through it and is handled to
//! completion; there is no other mutable state.

#[cfg(test)]
mod tests;

use mojipop_engine::corpus::{Corpus, EmojiRecord};
use mojipop_engine::trigger::Trigger;
use mojipop_engine::{MatchConfig, matcher, trigger};
use tracing::{debug, trace};

use super::candidate::CandidateList;
use super::events::{Key, Point};
use super::presenter::Presenter;
use super::session::QuerySession;
use super::state::PickerState;
use super::target::EditTarget;

/// What the host should do with a key event after the picker saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum KeyDisposition {
    /// The picker handled the key; suppress default handling and further
    /// propagation.
    Consumed,
    /// Not ours; let the page see it untouched.
    PassThrough,
}

impl KeyDisposition {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// The picker's orchestrating controller.
pub struct PickerController<P: Presenter> {
    /// Emoji corpus, loaded once and read-only afterwards
    corpus: Corpus,
    /// Matching configuration
    config: MatchConfig,
    /// Rendering side of the popup
    presenter: P,
    /// Current state: idle, or one open session
    state: PickerState,
    /// Target of the last commit, held for host write-back
    committed: Option<Box<dyn EditTarget>>,
}

impl<P: Presenter> PickerController<P> {
    /// Create a controller. Until a non-empty corpus is supplied every
    /// event is inert: zero candidates means no popup ever shows.
    pub fn new(corpus: Corpus, config: MatchConfig, presenter: P) -> Self {
        Self {
            corpus,
            config,
            presenter,
            state: PickerState::Idle,
            committed: None,
        }
    }

    /// Replace the corpus once the provider fetch completes.
    pub fn set_corpus(&mut self, corpus: Corpus) {
        debug!("corpus ready: {} records", corpus.len());
        self.corpus = corpus;
    }

    /// Update the matching configuration. Takes effect on the next filter.
    pub fn set_config(&mut self, config: MatchConfig) {
        self.config = config;
    }

    /// Get the current state.
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Get the open session, if any.
    pub fn session(&self) -> Option<&QuerySession> {
        self.state.session()
    }

    /// Whether a popup is currently visible.
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Get the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Get mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Handle a content change on an eligible element.
    ///
    /// Re-evaluates the trigger pattern against the element's current text
    /// and cursor: an active trigger opens or refreshes the session, an
    /// inactive one dismisses it.
    pub fn content_changed(&mut self, target: Box<dyn EditTarget>) {
        let Some(cursor) = target.cursor() else {
            // Extraction failure: the trigger is never considered active.
            trace!("cursor unknown; trigger inactive");
            self.dismiss();
            return;
        };

        match trigger::detect(target.text(), cursor) {
            Some(trigger) => self.open_session(target, trigger),
            None => self.dismiss(),
        }
    }

    /// Handle a key press. Only navigation/confirm/cancel keys while a
    /// session is open are consumed; everything else passes through.
    pub fn key_pressed(&mut self, key: Key) -> KeyDisposition {
        if self.state.is_idle() {
            return KeyDisposition::PassThrough;
        }

        match key {
            Key::ArrowDown => {
                if let Some(session) = self.state.session_mut() {
                    session.candidates.move_next();
                }
                self.refresh_popup();
                KeyDisposition::Consumed
            }
            Key::ArrowUp => {
                if let Some(session) = self.state.session_mut() {
                    session.candidates.move_prev();
                }
                self.refresh_popup();
                KeyDisposition::Consumed
            }
            Key::Enter => {
                self.commit_highlighted();
                KeyDisposition::Consumed
            }
            Key::Escape => {
                self.dismiss();
                KeyDisposition::Consumed
            }
            Key::Other => KeyDisposition::PassThrough,
        }
    }

    /// Handle a pointer press anywhere on the page. A press outside the
    /// rendered popup bounds dismisses the session without committing.
    pub fn pointer_pressed(&mut self, point: Point) {
        if self.state.is_idle() {
            return;
        }
        if !self.presenter.contains_point(point) {
            debug!("pointer press outside popup; dismissing");
            self.dismiss();
        }
    }

    /// Presenter callback: an item was clicked. Commits that item.
    pub fn item_clicked(&mut self, index: usize) {
        let Some(session) = self.state.session_mut() else {
            return;
        };
        if session.candidates.select(index).is_none() {
            return;
        }
        self.commit_highlighted();
    }

    /// Presenter callback: the pointer entered an item. Moves the highlight.
    pub fn item_hovered(&mut self, index: usize) {
        let Some(session) = self.state.session_mut() else {
            return;
        };
        if session.candidates.select(index).is_some() {
            self.refresh_popup();
        }
    }

    /// Tear down the popup and drop the session. Safe to call when idle.
    pub fn dismiss(&mut self) {
        if self.state.is_idle() {
            return;
        }
        trace!("session dismissed");
        self.presenter.teardown();
        self.state = PickerState::Idle;
    }

    /// Take the target of the last commit for host write-back.
    pub fn take_committed(&mut self) -> Option<Box<dyn EditTarget>> {
        self.committed.take()
    }

    /// Open a session for an active trigger, replacing any existing one.
    /// Zero matches dismiss instead: an empty popup is never shown.
    fn open_session(&mut self, target: Box<dyn EditTarget>, trigger: Trigger) {
        let matches: Vec<EmojiRecord> = matcher::filter(&self.corpus, &trigger.query, &self.config)
            .into_iter()
            .cloned()
            .collect();
        if matches.is_empty() {
            debug!("no candidates for query {:?}; dismissing", trigger.query);
            self.dismiss();
            return;
        }

        debug!(
            "session open: query={:?} offset={} candidates={}",
            trigger.query,
            trigger.offset,
            matches.len()
        );
        self.state = PickerState::Active(QuerySession::new(
            target,
            trigger.offset,
            trigger.query,
            CandidateList::new(matches),
        ));
        self.refresh_popup();
    }

    /// Commit the highlighted candidate: splice the glyph over the
    /// `:query` span, notify the host page, and end the session. Commits
    /// with no valid splice are no-ops and leave the session open.
    fn commit_highlighted(&mut self) {
        let splice = self.state.session().and_then(QuerySession::commit_splice);
        let Some((range, glyph)) = splice else {
            debug!("commit with no valid splice; session stays open");
            return;
        };

        let PickerState::Active(mut session) = std::mem::take(&mut self.state) else {
            return;
        };
        debug!("committing {:?} over chars {}..{}", glyph, range.start, range.end);
        session.target.splice(range, &glyph);
        session.target.notify_changed();
        self.presenter.teardown();
        self.committed = Some(session.target);
    }

    /// Push the session's candidates and highlight to the presenter.
    fn refresh_popup(&mut self) {
        let PickerState::Active(session) = &self.state else {
            return;
        };
        self.presenter.render(
            session.candidates.candidates(),
            session.candidates.cursor(),
            session.target.id(),
        );
    }
}
