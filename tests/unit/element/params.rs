use super::*;
use crate::animation::ease::Ease;
use crate::foundation::error::NeuError;
use crate::style::param::VarScope;
use crate::style::tree::StyleTree;

fn sample() -> (VisualParams, VisualParams) {
    let from = VisualParams::default();
    let to = VisualParams {
        color: Color::rgb(0.0, 0.0, 255.0),
        text_color_light: Color::rgb(20.0, 20.0, 20.0),
        text_color_dark: Color::rgb(240.0, 240.0, 240.0),
        height: 10.0,
        pressure: 0.4,
        intensity: 0.8,
        direction: 180.0,
    };
    (from, to)
}

fn assert_color_close(a: Color, b: Color) {
    assert!(
        (a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6,
        "{a:?} != {b:?}"
    );
}

#[test]
fn default_params_match_fallbacks() {
    let mut tree = StyleTree::new();
    let node = tree.add_node("el", None).unwrap();
    let params = resolve_defaults(&tree, node, &ElementOverrides::default()).unwrap();
    assert_eq!(params, VisualParams::default());
}

#[test]
fn cascade_values_are_coerced() {
    let mut tree = StyleTree::new();
    let node = tree.add_node("el", None).unwrap();
    tree.set_local(node, Param::Background, "#336699");
    tree.set_local(node, Param::Height, "12px");
    tree.set_local_default(node, Param::Direction, "0.25turn");
    tree.set_var(None, Param::Intensity, VarScope::Primary, "0.6");

    let params = resolve_defaults(&tree, node, &ElementOverrides::default()).unwrap();
    assert_eq!(params.color, Color::rgb(51.0, 102.0, 153.0));
    assert_eq!(params.height, 12.0);
    assert_eq!(params.direction, 90.0);
    assert_eq!(params.intensity, 0.6);
    assert_eq!(params.pressure, 0.0);
}

#[test]
fn overrides_beat_the_cascade() {
    let mut tree = StyleTree::new();
    let node = tree.add_node("el", None).unwrap();
    tree.set_local(node, Param::Height, "10");
    tree.set_local(node, Param::Background, "not a color");

    let overrides = ElementOverrides {
        height: Some(5.0),
        color: Some(Color::BLACK),
        ..ElementOverrides::default()
    };
    let params = resolve_defaults(&tree, node, &overrides).unwrap();
    assert_eq!(params.height, 5.0);
    assert_eq!(params.color, Color::BLACK);
}

#[test]
fn malformed_configuration_fails() {
    let mut tree = StyleTree::new();
    let node = tree.add_node("el", None).unwrap();
    tree.set_local(node, Param::TextDark, "#12");
    assert!(matches!(
        resolve_defaults(&tree, node, &ElementOverrides::default()),
        Err(NeuError::InvalidFormat(_))
    ));

    let mut tree = StyleTree::new();
    let node = tree.add_node("el", None).unwrap();
    tree.set_local(node, Param::Pressure, "firm");
    assert!(matches!(
        resolve_defaults(&tree, node, &ElementOverrides::default()),
        Err(NeuError::InvalidNumber(_))
    ));
}

#[test]
fn interpolate_endpoints() {
    let (from, to) = sample();
    let curve = Ease::EaseInOut.curve();

    let start = from.interpolate(&to, 0.0, &curve);
    assert_eq!(start.height, from.height);
    assert_eq!(start.direction, from.direction);
    assert_color_close(start.color, from.color);

    let end = from.interpolate(&to, 1.0, &curve);
    assert!((end.height - to.height).abs() < 1e-9);
    assert!((end.pressure - to.pressure).abs() < 1e-9);
    assert!((end.intensity - to.intensity).abs() < 1e-9);
    assert!((end.direction - to.direction).abs() < 1e-9);
    assert_color_close(end.color, to.color);
    assert_color_close(end.text_color_light, to.text_color_light);
    assert_color_close(end.text_color_dark, to.text_color_dark);
}

#[test]
fn interpolate_clamps_progress() {
    let (from, to) = sample();
    let curve = Ease::Linear.curve();
    assert_eq!(from.interpolate(&to, 2.5, &curve), from.interpolate(&to, 1.0, &curve));
    assert_eq!(from.interpolate(&to, -1.0, &curve), from.interpolate(&to, 0.0, &curve));
}

#[test]
fn interpolate_applies_the_curve() {
    let (from, to) = sample();
    let linear = from.interpolate(&to, 0.5, &Ease::Linear.curve());
    assert!((linear.height - 5.0).abs() < 1e-9);

    let eased = from.interpolate(&to, 0.25, &Ease::EaseIn.curve());
    assert!(eased.height < 2.5, "ease-in should lag linear: {}", eased.height);
}

#[test]
fn overrides_deserialize_from_json() {
    let o: ElementOverrides =
        serde_json::from_str(r##"{ "height": 4, "color": "#000" }"##).unwrap();
    assert_eq!(o.height, Some(4.0));
    assert_eq!(o.color, Some(Color::BLACK));
    assert_eq!(o.pressure, None);
}
