#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{CStr, c_char, c_int};

use mojipop_engine::Corpus;

use super::{MojipopPicker, ffi_mut, init_logging};

/// Create a new picker instance with default settings and an empty corpus.
/// Until a corpus is loaded, all events are inert.
/// Returns a pointer to the picker.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_new() -> *mut MojipopPicker {
    init_logging();
    let picker = Box::new(MojipopPicker::new());
    Box::into_raw(picker)
}

/// Load the emoji corpus from provider JSON.
/// Returns 0 on success, -1 on failure. On failure the corpus stays empty
/// and the picker remains inert; the failure is logged for diagnostics.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_load_corpus(
    picker: *mut MojipopPicker,
    json: *const c_char,
) -> c_int {
    let picker = ffi_mut!(picker, -1);
    if json.is_null() {
        tracing::error!("load_corpus: json is null");
        return -1;
    }
    // SAFETY: json pointer is non-null (checked above) and expected to be a
    // valid C string from the host glue
    let json_str = unsafe {
        match CStr::from_ptr(json).to_str() {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("load_corpus: invalid UTF-8: {}", e);
                return -1;
            }
        }
    };

    match Corpus::from_json_str(json_str) {
        Ok(corpus) => {
            tracing::info!("corpus loaded: {} records", corpus.len());
            picker.controller.set_corpus(corpus);
            0
        }
        Err(e) => {
            tracing::error!("failed to load emoji corpus: {}", e);
            -1
        }
    }
}

/// Apply host-supplied TOML settings merged on top of the defaults.
/// Returns 0 on success, -1 on parse failure (settings unchanged).
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_configure(
    picker: *mut MojipopPicker,
    toml: *const c_char,
) -> c_int {
    let picker = ffi_mut!(picker, -1);
    if toml.is_null() {
        return -1;
    }
    // SAFETY: toml pointer is non-null (checked above) and expected to be a
    // valid C string from the host glue
    let toml_str = unsafe {
        match CStr::from_ptr(toml).to_str() {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("configure: invalid UTF-8: {}", e);
                return -1;
            }
        }
    };

    match crate::config::Settings::from_toml_str(toml_str) {
        Ok(settings) => {
            picker.controller.set_config(settings.match_config());
            0
        }
        Err(e) => {
            tracing::error!("invalid settings: {}", e);
            -1
        }
    }
}

/// Destroy a picker instance
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_free(picker: *mut MojipopPicker) {
    if !picker.is_null() {
        // SAFETY: Pointer is non-null (checked above) and was created by
        // Box::into_raw in mojipop_picker_new
        unsafe {
            drop(Box::from_raw(picker));
        }
    }
}
