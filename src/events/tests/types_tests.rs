use crate::events::types::{EventCode, EventModifier, EventState, EventType};

#[test]
fn test_taxonomy_sizes() {
    assert_eq!(EventType::ALL.len(), 3);
    assert_eq!(EventCode::ALL.len(), 79);
    assert_eq!(EventModifier::ALL.len(), 12);
    assert_eq!(EventState::ALL.len(), 7);
}

#[test]
fn test_sentinels_come_first() {
    assert_eq!(EventCode::ALL[0], EventCode::None);
    assert_eq!(EventModifier::ALL[0], EventModifier::None);
    assert!(EventCode::None.is_none());
    assert!(!EventCode::Esc.is_none());
    assert!(EventModifier::None.is_none());
    assert!(!EventModifier::LeftMouse.is_none());
}

#[test]
fn test_generated_identifiers() {
    assert_eq!(EventType::Keyboard.name(), "keyboard");
    assert_eq!(EventCode::BackSpace.name(), "back_space");
    assert_eq!(EventCode::Num7.name(), "num7");
    assert_eq!(EventCode::F19.name(), "f19");
    assert_eq!(EventModifier::RightCommand.name(), "right_command");
    assert_eq!(format!("{}", EventState::Drag), "drag");
}

#[test]
fn test_code_order() {
    let names: Vec<&str> = EventCode::ALL.iter().map(|c| c.name()).collect();

    assert_eq!(&names[..3], &["none", "n0", "n1"]);
    assert_eq!(names[11], "num0");
    assert_eq!(names[21], "a");
    assert_eq!(names[47], "f1");
    assert_eq!(names.last(), Some(&"fn"));
}

#[test]
fn test_state_order() {
    let names: Vec<&str> = EventState::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        ["click", "up", "down", "move", "drag", "resize", "focus"]
    );
}
