use crate::foundation::core::FrameRgb8;
use crate::foundation::error::{ChessfadeError, ChessfadeResult};

/// Area-averaging resize of a square or rectangular frame to `width × height`.
///
/// Each output pixel is the coverage-weighted mean of the source pixels its footprint
/// overlaps, which handles non-integer ratios. Intended for shrinking; a target equal
/// to the source returns a copy.
pub fn resize_area(src: &FrameRgb8, width: u32, height: u32) -> ChessfadeResult<FrameRgb8> {
    if width == 0 || height == 0 {
        return Err(ChessfadeError::compression(format!(
            "resize target must be non-empty, got {width}x{height}"
        )));
    }
    if src.width == 0 || src.height == 0 {
        return Err(ChessfadeError::render("cannot resize an empty frame"));
    }
    if (width, height) == (src.width, src.height) {
        return Ok(src.clone());
    }

    let xw = axis_weights(src.width, width);
    let yw = axis_weights(src.height, height);
    let src_w = src.width as usize;
    let dst_w = width as usize;

    // Horizontal pass: src_h rows of dst_w pixels.
    let mut rows = vec![0.0f32; (src.height as usize) * dst_w * 3];
    for sy in 0..src.height as usize {
        let src_row = &src.data[sy * src_w * 3..(sy + 1) * src_w * 3];
        let dst_row = &mut rows[sy * dst_w * 3..(sy + 1) * dst_w * 3];
        for (ox, taps) in xw.iter().enumerate() {
            let mut acc = [0.0f32; 3];
            for &(sx, w) in taps {
                for c in 0..3 {
                    acc[c] += f32::from(src_row[sx * 3 + c]) * w;
                }
            }
            dst_row[ox * 3..ox * 3 + 3].copy_from_slice(&acc);
        }
    }

    // Vertical pass.
    let mut out = vec![0u8; dst_w * (height as usize) * 3];
    for (oy, taps) in yw.iter().enumerate() {
        for ox in 0..dst_w {
            let mut acc = [0.0f32; 3];
            for &(sy, w) in taps {
                let idx = (sy * dst_w + ox) * 3;
                for c in 0..3 {
                    acc[c] += rows[idx + c] * w;
                }
            }
            let idx = (oy * dst_w + ox) * 3;
            for c in 0..3 {
                out[idx + c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    FrameRgb8::new(width, height, out)
}

/// Per output index, the source indices it covers and their normalized weights.
fn axis_weights(src_len: u32, dst_len: u32) -> Vec<Vec<(usize, f32)>> {
    let scale = f64::from(src_len) / f64::from(dst_len);
    let last = src_len as usize - 1;

    (0..dst_len)
        .map(|o| {
            let start = f64::from(o) * scale;
            let end = start + scale;
            let mut taps = Vec::with_capacity(scale.ceil() as usize + 1);
            let mut total = 0.0f64;
            let mut s = start.floor() as usize;
            while (s as f64) < end && s <= last {
                let cover = end.min(s as f64 + 1.0) - start.max(s as f64);
                if cover > 1e-9 {
                    taps.push((s, cover));
                    total += cover;
                }
                s += 1;
            }
            taps.into_iter()
                .map(|(s, cover)| (s, (cover / total) as f32))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
