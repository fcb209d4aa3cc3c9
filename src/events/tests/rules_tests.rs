use crate::events::{
    generator::Candidate,
    rules::{first_exclusion, is_valid, EXCLUSION_RULES},
    types::{EventCode, EventModifier, EventState, EventType},
};

fn candidate(
    event_type: EventType,
    code: EventCode,
    modifier: EventModifier,
    state: EventState,
) -> Candidate {
    Candidate {
        event_type,
        code,
        modifier,
        state,
    }
}

#[test]
fn test_rule_table_order() {
    let names: Vec<&str> = EXCLUSION_RULES.iter().map(|r| r.name).collect();
    assert_eq!(names.len(), 4);
    assert!(names[0].contains("mouse"));
    assert!(names[1].contains("resize"));
    assert!(names[2].contains("window"));
    assert!(names[3].contains("modifier"));
}

#[test]
fn test_mouse_with_code_is_excluded() {
    let c = candidate(
        EventType::Mouse,
        EventCode::A,
        EventModifier::None,
        EventState::Click,
    );
    assert!(!is_valid(&c));
    assert_eq!(first_exclusion(&c), Some(&EXCLUSION_RULES[0]));
}

#[test]
fn test_mouse_resize_and_focus_are_excluded() {
    for state in [EventState::Resize, EventState::Focus] {
        let c = candidate(EventType::Mouse, EventCode::None, EventModifier::None, state);
        assert_eq!(first_exclusion(&c), Some(&EXCLUSION_RULES[1]));
    }
}

#[test]
fn test_first_matching_rule_wins() {
    // Both mouse rules match; the code rule comes first
    let c = candidate(
        EventType::Mouse,
        EventCode::Tab,
        EventModifier::None,
        EventState::Focus,
    );
    assert_eq!(first_exclusion(&c), Some(&EXCLUSION_RULES[0]));

    // Both window rules match; the code rule comes first
    let c = candidate(
        EventType::Window,
        EventCode::Esc,
        EventModifier::LeftShift,
        EventState::Resize,
    );
    assert_eq!(first_exclusion(&c), Some(&EXCLUSION_RULES[2]));
}

#[test]
fn test_window_with_modifier_is_excluded() {
    let c = candidate(
        EventType::Window,
        EventCode::None,
        EventModifier::RightOption,
        EventState::Resize,
    );
    assert_eq!(first_exclusion(&c), Some(&EXCLUSION_RULES[3]));
}

#[test]
fn test_valid_candidates() {
    assert!(is_valid(&candidate(
        EventType::Mouse,
        EventCode::None,
        EventModifier::LeftMouse,
        EventState::Drag,
    )));
    assert!(is_valid(&candidate(
        EventType::Window,
        EventCode::None,
        EventModifier::None,
        EventState::Focus,
    )));
}

#[test]
fn test_keyboard_is_never_excluded() {
    let excluded = Candidate::all()
        .filter(|c| c.event_type == EventType::Keyboard)
        .filter(|c| !is_valid(c))
        .count();
    assert_eq!(excluded, 0);
}
