use crate::foundation::error::{QrStyleError, QrStyleResult};
use crate::foundation::math::{mul_div255_u8, premultiply_rgba8_in_place, unpremultiply_rgba8};

/// One premultiplied RGBA8 pixel.
pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Blend a premultiplied `src_w` x `src_h` image over the straight-alpha `dst` with its top-left
/// at `(x, y)`.
///
/// The source must lie fully inside the destination. Destination pixels are premultiplied for
/// the blend and written back as straight alpha.
pub(crate) fn over_region_in_place(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    (x, y): (u32, u32),
) -> QrStyleResult<()> {
    let fits = x.checked_add(src_w).is_some_and(|r| r <= dst_w)
        && y.checked_add(src_h).is_some_and(|b| b <= dst_h);
    if !fits {
        return Err(QrStyleError::logo_processing(format!(
            "{src_w}x{src_h} overlay at ({x},{y}) does not fit {dst_w}x{dst_h} canvas"
        )));
    }
    if dst.len() != (dst_w as usize) * (dst_h as usize) * 4
        || src.len() != (src_w as usize) * (src_h as usize) * 4
    {
        return Err(QrStyleError::logo_processing(
            "over_region_in_place expects buffers matching width*height*4",
        ));
    }

    let src_stride = src_w as usize * 4;
    for (row, src_row) in src.chunks_exact(src_stride).enumerate() {
        let start = ((y as usize + row) * dst_w as usize + x as usize) * 4;
        let dst_row = &mut dst[start..start + src_stride];
        for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let mut dst_px = [d[0], d[1], d[2], d[3]];
            premultiply_rgba8_in_place(&mut dst_px);
            let out = over(dst_px, [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&unpremultiply_rgba8(out));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
