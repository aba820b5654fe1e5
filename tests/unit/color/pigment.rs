use super::*;

fn hex(text: &str) -> Color {
    Color::from_hex(text).unwrap()
}

#[test]
fn endpoints_are_preserved() {
    let pairs = [("#0000ff", "#ffff00"), ("#ff0000", "#00ff00"), ("#123456", "#fedcba")];
    for (a, b) in pairs {
        let (a, b) = (hex(a), hex(b));
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }
}

#[test]
fn mixing_a_color_with_itself_is_identity() {
    for text in ["#336699", "#ffffff", "#000000", "#e5c07b"] {
        let c = hex(text);
        for t in [0.0, 0.3, 0.5, 0.9, 1.0] {
            assert_eq!(mix(c, c, t), c);
        }
    }
}

#[test]
fn blue_and_yellow_make_green() {
    let mid = mix(hex("#0000ff"), hex("#ffff00"), 0.5);
    assert!(mid.g > mid.r + 20.0, "{mid:?}");
    assert!(mid.g > mid.b + 20.0, "{mid:?}");
}

#[test]
fn black_and_white_stay_neutral() {
    let mid = mix(Color::WHITE, Color::BLACK, 0.5);
    assert!((mid.r - mid.g).abs() < 1e-6 && (mid.g - mid.b).abs() < 1e-6, "{mid:?}");
    assert!(mid.r > 100.0 && mid.r < 170.0, "{mid:?}");
}

#[test]
fn red_and_yellow_make_orange() {
    let mid = mix(hex("#ff0000"), hex("#ffff00"), 0.5);
    assert!(mid.r > mid.g && mid.g > mid.b, "{mid:?}");
}

#[test]
fn factor_is_clamped() {
    let (a, b) = (hex("#ff0000"), hex("#0000ff"));
    assert_eq!(mix(a, b, -3.0), mix(a, b, 0.0));
    assert_eq!(mix(a, b, 4.0), mix(a, b, 1.0));
}

#[test]
fn results_stay_in_channel_range() {
    let colors = ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#808080"].map(hex);
    for a in colors {
        for b in colors {
            for i in 0..=10 {
                let c = mix(a, b, f64::from(i) / 10.0);
                for ch in c.channels() {
                    assert!((0.0..=255.0).contains(&ch), "{a:?} {b:?} -> {c:?}");
                }
            }
        }
    }
}

#[test]
fn kubelka_munk_inverse_round_trips() {
    for r in [MIN_REFLECTANCE, 0.1, 0.5, 0.9, 1.0] {
        let back = reflectance_from_ks(ks_from_reflectance(r));
        assert!((back - r).abs() < 1e-9, "r={r} back={back}");
    }
}

#[test]
fn color_blend_delegates_to_mix() {
    let (a, b) = (hex("#0000ff"), hex("#ffff00"));
    assert_eq!(a.blend(b, 0.25), mix(a, b, 0.25));
}

fn ramp(v: u8) -> [Color; 3] {
    let v = f64::from(v);
    [
        Color::rgb(v, v, v),
        Color::rgb(v, 255.0 - v, (v * 7.0) % 256.0),
        Color::rgb((v * 13.0) % 256.0, v, 255.0 - v),
    ]
}

#[test]
fn hex_output_is_stable_across_the_byte_range() {
    let others = [Color::BLACK, Color::WHITE, hex("#3c4f65"), hex("#f0f0f3")];
    for v in 0..=u8::MAX {
        for c in ramp(v) {
            let expected = c.to_hex();
            for t in [0.0, 0.25, 0.5, 1.0] {
                assert_eq!(mix(c, c, t).to_hex(), expected, "{c:?} with itself at {t}");
            }
            for other in others {
                assert_eq!(mix(c, other, 0.0).to_hex(), expected);
                assert_eq!(mix(other, c, 1.0).to_hex(), expected);
            }
        }
    }
}

#[test]
fn interior_mixes_are_whole_channel_values() {
    let colors = ["#000005", "#010101", "#3c4f65", "#f0f0f3", "#0000ff", "#ffff00"].map(hex);
    for a in colors {
        for b in colors {
            for i in 1..10 {
                for ch in mix(a, b, f64::from(i) / 10.0).channels() {
                    assert_eq!(ch.fract(), 0.0, "{a:?} {b:?} -> {ch}");
                }
            }
        }
    }
}

#[test]
fn concentrations_follow_squared_share_weighted_by_luminance() {
    for t in [0.1, 0.5, 0.8] {
        let [wa, wb] = concentrations(0.2, 0.7, t);
        assert!((wa + wb - 1.0).abs() < 1e-12);
        let expected = (t * t * (0.7 + TINT_FLOOR))
            / ((1.0 - t) * (1.0 - t) * (0.2 + TINT_FLOOR) + t * t * (0.7 + TINT_FLOOR));
        assert!((wb - expected).abs() < 1e-12, "t={t} wb={wb} expected={expected}");
    }

    let [wa, wb] = concentrations(0.4, 0.4, 0.5);
    assert!((wa - 0.5).abs() < 1e-12 && (wb - 0.5).abs() < 1e-12);

    // The lighter side dominates an even split.
    let [wa, wb] = concentrations(0.0, 1.0, 0.5);
    assert!(wb > wa);
}

#[test]
fn reflectance_is_floored() {
    let black = upsample([0.0, 0.0, 0.0]);
    assert!(black.iter().all(|&r| r == MIN_REFLECTANCE));
    let white = upsample([1.0, 1.0, 1.0]);
    assert!(white.iter().all(|&r| (r - 1.0).abs() < 1e-12));
}
