use super::*;

#[test]
fn scalar_lerp_clamps() {
    assert_eq!(<f64 as Lerp>::lerp(&0.0, &10.0, 0.25), 2.5);
    assert_eq!(<f64 as Lerp>::lerp(&0.0, &10.0, 1.5), 10.0);
}

#[test]
fn color_lerp_is_pigment_blend() {
    let a = Color::rgb(0.0, 0.0, 255.0);
    let b = Color::rgb(255.0, 255.0, 0.0);
    assert_eq!(<Color as Lerp>::lerp(&a, &b, 0.5), a.blend(b, 0.5));
}

