use super::*;

#[test]
fn lerp_clamps_factor() {
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(2.0, 4.0, -1.0), 2.0);
    assert_eq!(lerp(2.0, 4.0, 7.0), 4.0);
}

#[test]
fn smoothstep_edges_and_midpoint() {
    assert_eq!(smoothstep(0.2, 0.6, 0.0), 0.0);
    assert_eq!(smoothstep(0.2, 0.6, 1.0), 1.0);
    assert!((smoothstep(0.2, 0.6, 0.4) - 0.5).abs() < 1e-12);
}

#[test]
fn srgb_transfer_round_trips() {
    for i in 0..=20 {
        let c = f64::from(i) / 20.0;
        let back = linear_to_srgb(srgb_to_linear(c));
        assert!((back - c).abs() < 1e-9, "c={c} back={back}");
    }
    assert!(srgb_to_linear(0.5) < 0.5);
}
