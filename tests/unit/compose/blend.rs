use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [255, 255, 255, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_black_on_white_is_mid_grey() {
    let out = over([255, 255, 255, 255], [0, 0, 0, 128]);
    assert_eq!(out, [127, 127, 127, 255]);
}

#[test]
fn region_blend_touches_only_the_region() {
    let mut dst = vec![255u8; 4 * 4 * 4];
    let src = vec![0, 0, 0, 255, 0, 0, 0, 255];
    over_region_in_place(&mut dst, 4, 4, &src, 2, 1, (1, 2)).unwrap();

    let px = |x: usize, y: usize| &dst[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
    assert_eq!(px(1, 2), &[0, 0, 0, 255]);
    assert_eq!(px(2, 2), &[0, 0, 0, 255]);
    assert_eq!(px(0, 2), &[255, 255, 255, 255]);
    assert_eq!(px(3, 2), &[255, 255, 255, 255]);
    assert_eq!(px(1, 1), &[255, 255, 255, 255]);
}

#[test]
fn region_out_of_bounds_is_rejected() {
    let mut dst = vec![255u8; 2 * 2 * 4];
    let src = vec![0u8; 2 * 2 * 4];
    assert!(over_region_in_place(&mut dst, 2, 2, &src, 2, 2, (1, 0)).is_err());
    assert!(dst.iter().all(|&b| b == 255));
}

#[test]
fn region_blend_over_translucent_canvas_stays_straight_alpha() {
    let mut dst = [255u8, 0, 0, 128].repeat(2 * 2);
    // Straight (0, 0, 0, 128) premultiplies to itself.
    let src = [0u8, 0, 0, 128].repeat(1);
    over_region_in_place(&mut dst, 2, 2, &src, 1, 1, (1, 1)).unwrap();
    assert_eq!(&dst[12..16], &[85, 0, 0, 192]);
    assert_eq!(&dst[0..4], &[255, 0, 0, 128]);
}

#[test]
fn transparent_source_pixels_leave_canvas_bytes_alone() {
    let mut dst = [37u8, 91, 12, 77].repeat(1);
    over_region_in_place(&mut dst, 1, 1, &[0, 0, 0, 0], 1, 1, (0, 0)).unwrap();
    assert_eq!(dst, vec![37, 91, 12, 77]);
}
