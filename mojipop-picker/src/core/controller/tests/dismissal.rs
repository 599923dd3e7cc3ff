use super::*;

#[test]
fn test_escape_dismisses_without_committing() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");

    let disposition = picker.key_pressed(Key::Escape);
    assert!(disposition.is_consumed());
    assert!(!picker.is_active());
    assert!(picker.take_committed().is_none());
    assert_eq!(picker.presenter().teardown_calls, 1);
}

#[test]
fn test_trailing_whitespace_dismisses() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");
    assert!(picker.is_active());

    type_into(&mut picker, 1, ":sm ");
    assert!(!picker.is_active());
}

#[test]
fn test_outside_click_dismisses_without_commit() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");
    picker.presenter_mut().bounds = Some((100.0, 100.0, 200.0, 150.0));

    picker.pointer_pressed(Point::new(10.0, 10.0));
    assert!(!picker.is_active());
    assert!(picker.take_committed().is_none());
}

#[test]
fn test_inside_click_keeps_the_session() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");
    picker.presenter_mut().bounds = Some((100.0, 100.0, 200.0, 150.0));

    picker.pointer_pressed(Point::new(150.0, 120.0));
    assert!(picker.is_active());
}

#[test]
fn test_pointer_press_when_idle_is_a_no_op() {
    let mut picker = controller();
    picker.pointer_pressed(Point::new(5.0, 5.0));
    assert!(!picker.is_active());
    assert_eq!(picker.presenter().teardown_calls, 0);
}

#[test]
fn test_dismiss_is_idempotent() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");

    picker.dismiss();
    assert_eq!(picker.presenter().teardown_calls, 1);

    // Second dismissal of an already-dismissed session is a safe no-op.
    picker.dismiss();
    assert_eq!(picker.presenter().teardown_calls, 1);
}

#[test]
fn test_show_hide_show_round_trip_has_no_residual_state() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");
    let first = rendered_names(&picker);
    let _ = picker.key_pressed(Key::ArrowDown);

    picker.dismiss();
    type_into(&mut picker, 1, ":sm");

    assert_eq!(rendered_names(&picker), first);
    assert_eq!(highlighted(&picker), Some(0));
}

#[test]
fn test_new_trigger_on_another_element_replaces_the_session() {
    let mut picker = controller();
    type_into(&mut picker, 1, ":sm");
    type_into(&mut picker, 2, ":fire");

    let popup = picker.presenter().rendered.as_ref().unwrap();
    assert_eq!(popup.anchor, TargetId(2));
    assert_eq!(popup.names, vec!["fire"]);
}

#[test]
fn test_losing_the_selection_mid_session_dismisses() {
    let mut picker = controller();
    picker.content_changed(Box::new(EditableRegionTarget::new(
        TargetId(3),
        ":sm",
        Some(3),
    )));
    assert!(picker.is_active());

    // Next change reports no selection range: extraction fails, popup goes.
    picker.content_changed(Box::new(EditableRegionTarget::new(
        TargetId(3),
        ":sm",
        None,
    )));
    assert!(!picker.is_active());
}
