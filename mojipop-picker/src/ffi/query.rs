#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{c_char, c_int, c_uint};
use std::ptr;

use super::{MojipopPicker, ffi_ref};

/// Check if there's a popup update pending
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_has_popup_update(picker: *const MojipopPicker) -> c_int {
    let picker = ffi_ref!(picker, 0);
    if picker.controller.presenter().dirty { 1 } else { 0 }
}

/// Check if the popup should be hidden
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_should_hide_popup(picker: *const MojipopPicker) -> c_int {
    let picker = ffi_ref!(picker, 0);
    if picker.controller.presenter().hide { 1 } else { 0 }
}

/// Get the number of popup candidates
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_candidate_count(picker: *const MojipopPicker) -> c_uint {
    let picker = ffi_ref!(picker, 0);
    picker.controller.presenter().count as c_uint
}

/// Get a candidate glyph by index
/// Returns a pointer to a null-terminated UTF-8 string, or null if index is
/// out of range
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_candidate_glyph(
    picker: *const MojipopPicker,
    index: c_uint,
) -> *const c_char {
    let picker = ffi_ref!(picker, ptr::null());
    picker
        .controller
        .presenter()
        .glyphs
        .get(index as usize)
        .map(|c| c.as_ptr())
        .unwrap_or(ptr::null())
}

/// Get a candidate display name by index
/// Returns a pointer to a null-terminated UTF-8 string, or null if index is
/// out of range
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_candidate_name(
    picker: *const MojipopPicker,
    index: c_uint,
) -> *const c_char {
    let picker = ffi_ref!(picker, ptr::null());
    picker
        .controller
        .presenter()
        .names
        .get(index as usize)
        .map(|c| c.as_ptr())
        .unwrap_or(ptr::null())
}

/// Get the highlighted candidate index
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_highlighted(picker: *const MojipopPicker) -> c_uint {
    let picker = ffi_ref!(picker, 0);
    picker.controller.presenter().cursor as c_uint
}

/// Get the element handle the popup anchors to
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_popup_anchor(picker: *const MojipopPicker) -> u64 {
    let picker = ffi_ref!(picker, 0);
    picker.controller.presenter().anchor
}

/// Check if a session is open (the popup is visible).
/// Returns 1 if active, 0 if idle.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_is_active(picker: *const MojipopPicker) -> c_int {
    let picker = ffi_ref!(picker, 0);
    if picker.controller.is_active() { 1 } else { 0 }
}

/// Check if there's a splice write-back pending
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_has_splice(picker: *const MojipopPicker) -> c_int {
    let picker = ffi_ref!(picker, 0);
    if picker.splice.dirty { 1 } else { 0 }
}

/// Get the element handle the splice applies to
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_splice_target(picker: *const MojipopPicker) -> u64 {
    let picker = ffi_ref!(picker, 0);
    picker.splice.target
}

/// Get the element's full new text after the splice
/// Returns a pointer to a null-terminated UTF-8 string (valid until the
/// next event call)
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_splice_text(picker: *const MojipopPicker) -> *const c_char {
    let picker = ffi_ref!(picker, ptr::null());
    picker.splice.text.as_ptr()
}

/// Get the splice text length in bytes
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_splice_text_len(picker: *const MojipopPicker) -> c_uint {
    let picker = ffi_ref!(picker, 0);
    picker.splice.text.as_bytes().len() as c_uint
}

/// Get the new cursor offset (in characters) after the splice
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_splice_caret(picker: *const MojipopPicker) -> c_uint {
    let picker = ffi_ref!(picker, 0);
    picker.splice.caret as c_uint
}

/// Get the write-back mechanism for the splice target.
/// Returns 0 for value assignment (form controls), 1 for text-content
/// assignment (editable regions).
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_splice_write_back(picker: *const MojipopPicker) -> c_int {
    let picker = ffi_ref!(picker, 0);
    picker.splice.write_back as c_int
}

/// Get the number of bubbling input notifications the host must dispatch
/// after applying the splice.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_splice_notify(picker: *const MojipopPicker) -> c_uint {
    let picker = ffi_ref!(picker, 0);
    picker.splice.notify as c_uint
}
