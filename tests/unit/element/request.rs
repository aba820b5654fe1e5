use super::*;

fn params(height: f64, color: Color) -> VisualParams {
    VisualParams {
        height,
        color,
        ..VisualParams::default()
    }
}

#[test]
fn target_resolution() {
    assert_eq!(Target::Explicit(3.0).resolve(1.0, 2.0), 3.0);
    assert_eq!(Target::UseDefault.resolve(1.0, 2.0), 1.0);
    assert_eq!(Target::<f64>::Freeze.resolve(1.0, 2.0), 2.0);
    assert_eq!(Target::<f64>::default(), Target::UseDefault);
}

#[test]
fn empty_request_returns_to_defaults() {
    let req = AnimationRequest::new();
    assert_eq!(req.duration_ms(), 0.0);
    assert_eq!(req.ease, Ease::EaseInOut);

    let defaults = params(0.0, Color::WHITE);
    let current = params(7.0, Color::BLACK);
    assert_eq!(req.targets(&defaults, &current), defaults);
}

#[test]
fn frozen_request_holds_current() {
    let defaults = params(0.0, Color::WHITE);
    let current = params(7.0, Color::BLACK);
    assert_eq!(AnimationRequest::frozen().targets(&defaults, &current), current);
}

#[test]
fn mixed_targets() {
    let defaults = params(0.0, Color::WHITE);
    let current = params(7.0, Color::BLACK);
    let req = AnimationRequest::new()
        .height(Target::Freeze)
        .pressure(0.3)
        .direction(180.0);
    let to = req.targets(&defaults, &current);
    assert_eq!(to.height, 7.0);
    assert_eq!(to.pressure, 0.3);
    assert_eq!(to.direction, 180.0);
    assert_eq!(to.intensity, defaults.intensity);
    assert_eq!(to.color, Color::WHITE);
}

#[test]
fn snap_to_targets_exact_values() {
    let p = params(-3.0, Color::rgb(1.0, 2.0, 3.0));
    let req = AnimationRequest::snap_to(&p);
    assert_eq!(req.targets(&VisualParams::default(), &VisualParams::default()), p);
    assert_eq!(req.duration_ms(), 0.0);
}

#[test]
fn duration_is_sanitized() {
    assert_eq!(AnimationRequest::new().duration(250.0).duration_ms(), 250.0);
    assert_eq!(AnimationRequest::new().duration(-5.0).duration_ms(), 0.0);
    assert_eq!(AnimationRequest::new().duration(f64::NAN).duration_ms(), 0.0);
    assert_eq!(AnimationRequest::new().duration(f64::INFINITY).duration_ms(), 0.0);
}

#[test]
fn deserializes_keywords_and_values() {
    let req: AnimationRequest = serde_json::from_str(
        r##"{
            "height": 10,
            "pressure": "freeze",
            "direction": "default",
            "color": "#336699",
            "text_color_dark": "freeze",
            "duration": 300,
            "ease": "linear"
        }"##,
    )
    .unwrap();

    assert_eq!(req.height, Target::Explicit(10.0));
    assert_eq!(req.pressure, Target::Freeze);
    assert_eq!(req.direction, Target::UseDefault);
    assert_eq!(req.intensity, Target::UseDefault);
    assert_eq!(req.color, Target::Explicit(Color::rgb(51.0, 102.0, 153.0)));
    assert_eq!(req.text_color_dark, Target::Freeze);
    assert_eq!(req.duration, 300.0);
    assert_eq!(req.ease, Ease::Linear);
}

#[test]
fn rejects_unknown_fields_and_bad_values() {
    assert!(serde_json::from_str::<AnimationRequest>(r#"{ "hieght": 3 }"#).is_err());
    assert!(serde_json::from_str::<AnimationRequest>(r#"{ "color": "blue" }"#).is_err());
    assert!(serde_json::from_str::<AnimationRequest>(r#"{ "height": "tall" }"#).is_err());
}

#[test]
fn serializes_keywords() {
    assert_eq!(serde_json::to_string(&Target::<f64>::Freeze).unwrap(), "\"freeze\"");
    assert_eq!(serde_json::to_string(&Target::<f64>::UseDefault).unwrap(), "\"default\"");
    assert_eq!(serde_json::to_string(&Target::Explicit(2.5)).unwrap(), "2.5");

    let req = AnimationRequest::new().height(4.0).pressure(Target::Freeze);
    let json = serde_json::to_string(&req).unwrap();
    let back: AnimationRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, req);
}
