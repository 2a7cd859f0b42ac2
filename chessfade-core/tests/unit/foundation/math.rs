use super::*;

#[test]
fn intensity_endpoints() {
    assert_eq!(intensity_at(0, 9, 0.3, 1.0), 0.3);
    assert!((intensity_at(8, 9, 0.3, 1.0) - 1.0).abs() < 1e-6);
    assert_eq!(intensity_at(0, 1, 0.3, 1.0), 1.0);
}

#[test]
fn intensity_is_non_decreasing() {
    let mut prev = f32::MIN;
    for i in 0..12 {
        let v = intensity_at(i, 12, 0.2, 0.9);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn intensity_degenerate_range_is_constant() {
    for i in 0..5 {
        assert_eq!(intensity_at(i, 5, 0.5, 0.5), 0.5);
    }
}

#[test]
fn trunc_clips_and_truncates() {
    assert_eq!(f32_to_u8_trunc(-3.0), 0);
    assert_eq!(f32_to_u8_trunc(299.0), 255);
    assert_eq!(f32_to_u8_trunc(127.9), 127);
}
