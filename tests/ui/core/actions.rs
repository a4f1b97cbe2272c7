use taskcards::ui::core::actions::Action;

#[test]
fn test_default_action_is_none() {
    assert_eq!(Action::default(), Action::None);
    assert!(Action::None.is_none());
    assert!(!Action::Quit.is_none());
}

#[test]
fn test_actions_carry_payloads() {
    assert_ne!(Action::StatusChangeRequested(true), Action::StatusChangeRequested(false));
    assert_eq!(
        Action::ButtonPressed("Go".to_string()),
        Action::ButtonPressed("Go".to_string())
    );
}
