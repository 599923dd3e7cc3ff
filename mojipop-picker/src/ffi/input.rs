#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{CStr, c_char, c_int, c_uint};

use crate::core::events::{Key, Point};
use crate::core::target::{ElementSnapshot, TargetId, adapt};

use super::{MojipopPicker, ffi_mut};

/// Element kind codes used by the host glue.
const KIND_TEXT_INPUT: c_uint = 0;
const KIND_TEXT_AREA: c_uint = 1;
const KIND_EDITABLE_REGION: c_uint = 2;

/// Read a nullable C string; `None` when null or not UTF-8.
fn read_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: pointer is non-null (checked above) and expected to be a valid
    // C string from the host glue
    unsafe { CStr::from_ptr(ptr).to_str().ok().map(str::to_string) }
}

/// Report a content change on the focused element.
///
/// `kind` selects the element kind; `input_type` is the `type` attribute
/// for text inputs (ignored otherwise); `cursor` is a character offset and
/// only meaningful when `has_cursor` is non-zero. Ineligible elements and
/// unknown kinds are no-ops.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_content_changed(
    picker: *mut MojipopPicker,
    target_id: u64,
    kind: c_uint,
    input_type: *const c_char,
    text: *const c_char,
    cursor: c_uint,
    has_cursor: c_int,
) {
    let picker = ffi_mut!(picker);
    picker.clear_flags();

    let Some(text) = read_c_str(text) else {
        tracing::debug!("content_changed: missing text, ignoring");
        return;
    };
    let caret = cursor as usize;

    let snapshot = match kind {
        KIND_TEXT_INPUT => {
            if has_cursor == 0 {
                return;
            }
            ElementSnapshot::TextInput {
                input_type: read_c_str(input_type).unwrap_or_default(),
                value: text,
                caret,
            }
        }
        KIND_TEXT_AREA => {
            if has_cursor == 0 {
                return;
            }
            ElementSnapshot::TextArea { value: text, caret }
        }
        KIND_EDITABLE_REGION => ElementSnapshot::EditableRegion {
            content: text,
            selection_start: (has_cursor != 0).then_some(caret),
        },
        _ => {
            tracing::trace!("content_changed: unknown element kind {}", kind);
            return;
        }
    };

    let Some(target) = adapt(TargetId(target_id), snapshot) else {
        return;
    };
    picker.controller.content_changed(target);
}

/// Report a key press by its DOM `KeyboardEvent.key` name.
/// Returns 1 if the key was consumed (the host must suppress default
/// handling and propagation), 0 if not.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_key_pressed(
    picker: *mut MojipopPicker,
    key: *const c_char,
) -> c_int {
    let picker = ffi_mut!(picker, 0);
    picker.clear_flags();

    let Some(name) = read_c_str(key) else {
        return 0;
    };
    let disposition = picker.controller.key_pressed(Key::from_name(&name));
    picker.sync_commit();

    if disposition.is_consumed() { 1 } else { 0 }
}

/// Report a pointer press in page coordinates. Presses outside the popup
/// bounds dismiss an open session.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_pointer_pressed(picker: *mut MojipopPicker, x: f64, y: f64) {
    let picker = ffi_mut!(picker);
    picker.clear_flags();
    picker.controller.pointer_pressed(Point::new(x, y));
}

/// Report a click on popup item `index`. Commits that item.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_item_clicked(picker: *mut MojipopPicker, index: c_uint) {
    let picker = ffi_mut!(picker);
    picker.clear_flags();
    picker.controller.item_clicked(index as usize);
    picker.sync_commit();
}

/// Report the pointer entering popup item `index`. Moves the highlight.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_item_hovered(picker: *mut MojipopPicker, index: c_uint) {
    let picker = ffi_mut!(picker);
    picker.clear_flags();
    picker.controller.item_hovered(index as usize);
}

/// Report the rendered popup bounds for pointer hit-testing.
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_set_popup_bounds(
    picker: *mut MojipopPicker,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) {
    let picker = ffi_mut!(picker);
    picker
        .controller
        .presenter_mut()
        .set_bounds(x, y, width, height);
}

/// Dismiss any open session (e.g., on page navigation).
#[unsafe(no_mangle)]
pub extern "C" fn mojipop_picker_dismiss(picker: *mut MojipopPicker) {
    let picker = ffi_mut!(picker);
    picker.clear_flags();
    picker.controller.dismiss();
}
