use super::*;

#[test]
fn uniform_frame_stays_uniform() {
    let src = FrameRgb8::filled(400, 400, [209, 139, 71]).unwrap();
    for target in [200, 133, 100, 7] {
        let out = resize_area(&src, target, target).unwrap();
        assert_eq!((out.width, out.height), (target, target));
        assert!(out.data.chunks_exact(3).all(|px| px == [209, 139, 71]));
    }
}

#[test]
fn two_to_one_averages_the_block() {
    // 2x2 checker of black and white averages to mid grey.
    let src = FrameRgb8::new(
        2,
        2,
        vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0],
    )
    .unwrap();
    let out = resize_area(&src, 1, 1).unwrap();
    assert_eq!(out.data, vec![128, 128, 128]);
}

#[test]
fn halving_keeps_block_structure() {
    // Left half red, right half blue.
    let mut data = Vec::new();
    for _y in 0..4 {
        for x in 0..4 {
            if x < 2 {
                data.extend_from_slice(&[255, 0, 0]);
            } else {
                data.extend_from_slice(&[0, 0, 255]);
            }
        }
    }
    let src = FrameRgb8::new(4, 4, data).unwrap();
    let out = resize_area(&src, 2, 2).unwrap();
    assert_eq!(out.pixel(0, 0), [255, 0, 0]);
    assert_eq!(out.pixel(1, 1), [0, 0, 255]);
}

#[test]
fn fractional_ratio_blends_partial_coverage() {
    // 3 -> 2: output 0 covers src 0 fully and half of src 1.
    let src = FrameRgb8::new(3, 1, vec![0, 0, 0, 90, 90, 90, 180, 180, 180]).unwrap();
    let out = resize_area(&src, 2, 1).unwrap();
    assert_eq!(out.pixel(0, 0), [30, 30, 30]);
    assert_eq!(out.pixel(1, 0), [150, 150, 150]);
}

#[test]
fn same_size_is_identity() {
    let src = FrameRgb8::new(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(resize_area(&src, 1, 2).unwrap(), src);
}

#[test]
fn zero_target_is_rejected() {
    let src = FrameRgb8::filled(4, 4, [0, 0, 0]).unwrap();
    assert!(resize_area(&src, 0, 0).is_err());
}
