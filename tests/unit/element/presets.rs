use super::*;

#[test]
fn default_presets_follow_interaction_depth() {
    let p = Presets::default();
    assert_eq!(p.base.duration, 500.0);
    assert_eq!(p.base.height, Target::Explicit(10.0));
    assert_eq!(p.base.direction, Target::Explicit(180.0));
    assert_eq!(p.base.pressure, Target::Explicit(-0.1));
    assert_eq!(p.hover.pressure, Target::Explicit(0.0));
    assert_eq!(p.active.pressure, Target::Explicit(0.1));
    assert_eq!(p.active.height, Target::Explicit(10.0));
    assert_eq!(p.hover.color, Target::UseDefault);
}

#[test]
fn for_state_picks_the_matching_request() {
    let p = Presets::default();
    assert_eq!(p.for_state(InteractionState::Base), &p.base);
    assert_eq!(p.for_state(InteractionState::Hover), &p.hover);
    assert_eq!(p.for_state(InteractionState::Active), &p.active);
}

#[test]
fn partial_json_keeps_missing_states() {
    let p =
        Presets::from_json_str(r#"{ "hover": { "pressure": 0.25, "duration": 200 } }"#).unwrap();
    assert_eq!(p.hover.pressure, Target::Explicit(0.25));
    assert_eq!(p.hover.duration, 200.0);
    assert_eq!(p.base, Presets::default().base);
}

#[test]
fn negative_durations_are_rejected() {
    assert!(matches!(
        Presets::from_json_str(r#"{ "base": { "duration": -1 } }"#),
        Err(NeuError::Validation(_))
    ));
}

#[test]
fn states_parse_from_text() {
    assert_eq!("hover".parse::<InteractionState>().unwrap(), InteractionState::Hover);
    assert_eq!(" active ".parse::<InteractionState>().unwrap(), InteractionState::Active);
    assert!("pressed".parse::<InteractionState>().is_err());
}
