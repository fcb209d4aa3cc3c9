use std::collections::HashSet;

use crate::events::{
    generator::{generate, write_declarations, Candidate},
    types::{EventCode, EventModifier, EventState, EventType},
};

#[test]
fn test_candidate_count() {
    assert_eq!(Candidate::all().count(), 3 * 79 * 12 * 7);
}

#[test]
fn test_candidate_order_is_nested() {
    let mut all = Candidate::all();

    let first = all.next().unwrap();
    assert_eq!(first.event_type, EventType::Mouse);
    assert_eq!(first.code, EventCode::None);
    assert_eq!(first.modifier, EventModifier::None);
    assert_eq!(first.state, EventState::Click);

    // State is the innermost loop
    let second = all.next().unwrap();
    assert_eq!(second.modifier, EventModifier::None);
    assert_eq!(second.state, EventState::Up);
}

#[test]
fn test_generated_counts_per_type() {
    let handles = generate();
    let count = |t: EventType| {
        handles
            .iter()
            .filter(|h| h.candidate.event_type == t)
            .count()
    };

    assert_eq!(count(EventType::Mouse), 12 * 5);
    assert_eq!(count(EventType::Keyboard), 79 * 12 * 7);
    assert_eq!(count(EventType::Window), 7);
    assert_eq!(handles.len(), 6703);
}

#[test]
fn test_mouse_names_have_no_code_or_window_state() {
    for handle in generate()
        .iter()
        .filter(|h| h.candidate.event_type == EventType::Mouse)
    {
        assert!(handle.candidate.code.is_none());
        assert!(!handle.name.ends_with("_resize"));
        assert!(!handle.name.ends_with("_focus"));
    }
}

#[test]
fn test_window_names_are_bare_states() {
    let names: Vec<String> = generate()
        .into_iter()
        .filter(|h| h.candidate.event_type == EventType::Window)
        .map(|h| h.name)
        .collect();

    assert_eq!(
        names,
        [
            "window_click",
            "window_up",
            "window_down",
            "window_move",
            "window_drag",
            "window_resize",
            "window_focus"
        ]
    );
}

#[test]
fn test_names_are_unique() {
    let handles = generate();
    let names: HashSet<&str> = handles.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names.len(), handles.len());
}

#[test]
fn test_handle_name_skips_none_components() {
    let c = Candidate {
        event_type: EventType::Keyboard,
        code: EventCode::CapsLock,
        modifier: EventModifier::None,
        state: EventState::Down,
    };
    assert_eq!(c.handle_name(), "keyboard_caps_lock_down");

    let c = Candidate {
        event_type: EventType::Keyboard,
        code: EventCode::A,
        modifier: EventModifier::LeftShift,
        state: EventState::Click,
    };
    assert_eq!(c.handle_name(), "keyboard_a_left_shift_click");
}

#[test]
fn test_declaration_spells_out_none() {
    let handles = generate();
    let handle = handles
        .iter()
        .find(|h| h.name == "mouse_left_mouse_drag")
        .unwrap();

    assert_eq!(
        format!("{}", handle),
        "static const auto mouse_left_mouse_drag = create_event_handle(EventType::mouse, EventCode::none, EventModifier::left_mouse, EventState::drag);"
    );
}

#[test]
fn test_write_declarations_summary() {
    let mut out = Vec::new();
    let total = write_declarations(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(total, 6703);
    assert_eq!(lines.len(), total + 1);
    assert_eq!(lines.last(), Some(&"Total vars = 6703"));
    assert!(lines[0].starts_with("static const auto mouse_click = "));
    assert!(lines[..total]
        .iter()
        .all(|l| l.starts_with("static const auto ") && l.ends_with(");")));
}

#[test]
fn test_write_declarations_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    write_declarations(&mut first).unwrap();
    write_declarations(&mut second).unwrap();
    assert_eq!(first, second);
}
