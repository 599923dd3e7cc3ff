//! C FFI interface for the content-script glue
//!
//! This module provides C-compatible functions the embedding glue (the
//! compiled-to-wasm page script) calls to feed page events in and poll
//! popup/splice state back out. Rendering and DOM writes stay on the host
//! side; the picker reports what to draw and what to write back.

use std::ffi::CString;
use std::sync::Once;

mod input;
mod lifecycle;
mod query;


/// Null-check + deref for `*const` FFI pointers. Returns `$default` if null.
macro_rules! ffi_ref {
    ($ptr:expr, $default:expr) => {{
        if $ptr.is_null() {
            return $default;
        }
        unsafe { &*$ptr }
    }};
}

/// Null-check + deref for `*mut` FFI pointers. Returns `$default` if null.
/// Use without default for void functions.
macro_rules! ffi_mut {
    ($ptr:expr) => {{
        if $ptr.is_null() {
            return;
        }
        unsafe { &mut *$ptr }
    }};
    ($ptr:expr, $default:expr) => {{
        if $ptr.is_null() {
            return $default;
        }
        unsafe { &mut *$ptr }
    }};
}

// Make macros available to submodules
pub(crate) use ffi_mut;
pub(crate) use ffi_ref;

use mojipop_engine::EmojiRecord;

use crate::config::Settings;
use crate::core::controller::PickerController;
use crate::core::events::Point;
use crate::core::presenter::Presenter;
use crate::core::target::{TargetId, WriteBack};

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Rendered popup bounds reported back by the host, in page coordinates.
#[derive(Debug, Clone, Copy)]
struct PopupBounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Presenter that caches popup state for FFI consumption instead of
/// rendering. The host polls the cache and draws; it reports the drawn
/// bounds back for hit-testing.
#[derive(Default)]
pub(crate) struct CachedPresenter {
    glyphs: Vec<CString>,
    names: Vec<CString>,
    count: usize,
    cursor: usize,
    anchor: u64,
    dirty: bool,
    hide: bool,
    bounds: Option<PopupBounds>,
}

impl CachedPresenter {
    fn set_bounds(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.bounds = Some(PopupBounds {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_flags(&mut self) {
        self.dirty = false;
        self.hide = false;
    }
}

impl Presenter for CachedPresenter {
    fn render(&mut self, candidates: &[EmojiRecord], highlighted: usize, anchor: TargetId) {
        self.glyphs = candidates
            .iter()
            .filter_map(|c| CString::new(c.glyph.as_str()).ok())
            .collect();
        self.names = candidates
            .iter()
            .map(|c| CString::new(c.name.as_str()).unwrap_or_default())
            .collect();
        self.count = self.glyphs.len();
        self.cursor = highlighted;
        self.anchor = anchor.0;
        self.dirty = true;
        self.hide = false;
    }

    fn teardown(&mut self) {
        self.glyphs.clear();
        self.names.clear();
        self.count = 0;
        self.cursor = 0;
        self.bounds = None;
        self.dirty = true;
        self.hide = true;
    }

    fn contains_point(&self, point: Point) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        point.x >= bounds.x
            && point.x <= bounds.x + bounds.width
            && point.y >= bounds.y
            && point.y <= bounds.y + bounds.height
    }
}

/// Cached splice write-back for FFI consumption.
#[derive(Default)]
struct SpliceCache {
    target: u64,
    text: CString,
    caret: u32,
    /// 0 = value assignment, 1 = text-content assignment
    write_back: u8,
    /// Number of bubbling input notifications to dispatch
    notify: u32,
    dirty: bool,
}

/// Opaque handle to a picker instance
pub struct MojipopPicker {
    controller: PickerController<CachedPresenter>,
    splice: SpliceCache,
}

impl MojipopPicker {
    fn new() -> Self {
        let controller = PickerController::new(
            mojipop_engine::Corpus::empty(),
            Settings::default().match_config(),
            CachedPresenter::default(),
        );
        Self {
            controller,
            splice: SpliceCache::default(),
        }
    }

    fn clear_flags(&mut self) {
        self.controller.presenter_mut().clear_flags();
        self.splice.dirty = false;
    }

    /// Cache the outcome of a commit, if one happened, for host write-back.
    fn sync_commit(&mut self) {
        let Some(target) = self.controller.take_committed() else {
            return;
        };
        self.splice.target = target.id().0;
        self.splice.text = CString::new(target.text()).unwrap_or_default();
        self.splice.caret = target.cursor().unwrap_or(0) as u32;
        self.splice.write_back = match target.write_back() {
            WriteBack::Value => 0,
            WriteBack::TextContent => 1,
        };
        self.splice.notify = target.pending_notifications() as u32;
        self.splice.dirty = true;
    }
}
