//! mojipop-picker: inline emoji autocomplete for web page text fields
//!
//! This crate provides the interaction core of a content-script emoji picker.
//! It watches content changes for the `:query` trigger pattern, drives a
//! candidate popup through a presentation-layer contract, and splices the
//! chosen glyph back into the host element. mojipop-engine supplies corpus
//! loading, trigger detection, and candidate matching.

pub mod config;
pub mod core;
pub mod ffi;

pub use core::candidate::CandidateList;
pub use core::controller::{KeyDisposition, PickerController};
pub use core::events::{Key, Point};
pub use core::presenter::Presenter;
pub use core::state::PickerState;
pub use core::target::{
    EditTarget, EditableRegionTarget, ElementSnapshot, FormControlTarget, TargetId, WriteBack,
};
