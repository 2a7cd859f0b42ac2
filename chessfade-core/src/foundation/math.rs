/// Linear recency weight for frame `index` of `count`.
///
/// Oldest (`index == 0`) maps to `min`, newest to `max`. A single frame gets `max`.
pub fn intensity_at(index: usize, count: usize, min: f32, max: f32) -> f32 {
    let progress = if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        1.0
    };
    min + (max - min) * progress
}

/// Clip to `[0, 255]` and truncate toward zero.
pub(crate) fn f32_to_u8_trunc(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
