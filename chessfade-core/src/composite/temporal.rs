use crate::foundation::core::FrameRgb8;
use crate::foundation::error::{ChessfadeError, ChessfadeResult};
use crate::foundation::math::{f32_to_u8_trunc, intensity_at};
use crate::render::raster::{BoardRenderer, MAX_BOARD_SIZE};
use crate::render::resample::resize_area;
use crate::sequence::extract::Position;

/// Compositor settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemporalOptions {
    /// Output edge is `base_size / compression_factor` (floor); 1 disables resampling.
    pub compression_factor: u32,
    /// Edge length boards are rendered at before compression.
    pub base_size: u32,
    /// Weight of the oldest frame.
    pub min_intensity: f32,
    /// Weight of the newest frame.
    pub max_intensity: f32,
}

impl Default for TemporalOptions {
    fn default() -> Self {
        Self {
            compression_factor: 2,
            base_size: 400,
            min_intensity: 0.3,
            max_intensity: 1.0,
        }
    }
}

impl TemporalOptions {
    /// Check compression, size and intensity bounds.
    pub fn validate(&self) -> ChessfadeResult<()> {
        if self.compression_factor < 1 {
            return Err(ChessfadeError::compression(format!(
                "compression_factor must be >= 1, got {}",
                self.compression_factor
            )));
        }
        if self.base_size > MAX_BOARD_SIZE {
            return Err(ChessfadeError::compression(format!(
                "base_size must be <= {MAX_BOARD_SIZE}, got {}",
                self.base_size
            )));
        }
        if self.target_size() == 0 {
            return Err(ChessfadeError::compression(format!(
                "base_size {} / compression_factor {} leaves an empty image",
                self.base_size, self.compression_factor
            )));
        }
        // Written so that NaN fails.
        let (min, max) = (self.min_intensity, self.max_intensity);
        if !(0.0 <= min && min <= max && max <= 1.0) {
            return Err(ChessfadeError::intensity(format!(
                "expected 0 <= min <= max <= 1, got min={min} max={max}"
            )));
        }
        Ok(())
    }

    /// Output edge length.
    pub fn target_size(&self) -> u32 {
        self.base_size.checked_div(self.compression_factor).unwrap_or(0)
    }
}

/// Weights for `count` frames, oldest first.
pub fn intensity_ramp(count: usize, min: f32, max: f32) -> Vec<f32> {
    (0..count).map(|i| intensity_at(i, count, min, max)).collect()
}

/// Per-pixel running maximum of weighted frames.
#[derive(Clone, Debug)]
pub struct Accumulator {
    size: u32,
    values: Vec<f32>,
}

impl Accumulator {
    /// Zeroed `size × size × 3` buffer.
    pub fn new(size: u32) -> ChessfadeResult<Self> {
        let len = (size as usize)
            .checked_mul(size as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| ChessfadeError::render(format!("accumulator size overflow: {size}")))?;
        Ok(Self {
            size,
            values: vec![0.0; len],
        })
    }

    /// Edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw channel values, row-major RGB.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// `acc = max(acc, frame * intensity)` per channel.
    pub fn merge_weighted(&mut self, frame: &FrameRgb8, intensity: f32) -> ChessfadeResult<()> {
        if frame.width != self.size || frame.height != self.size {
            return Err(ChessfadeError::render(format!(
                "frame is {}x{}, accumulator is {}x{}",
                frame.width, frame.height, self.size, self.size
            )));
        }
        for (acc, &px) in self.values.iter_mut().zip(&frame.data) {
            let weighted = f32::from(px) * intensity;
            if weighted > *acc {
                *acc = weighted;
            }
        }
        Ok(())
    }

    /// Clip to `[0, 255]` and truncate to RGB8.
    pub fn finish(self) -> ChessfadeResult<FrameRgb8> {
        let data = self.values.into_iter().map(f32_to_u8_trunc).collect();
        FrameRgb8::new(self.size, self.size, data)
    }
}

/// Render `positions` (oldest first) and merge them into one composite image.
///
/// Frame `i` of `N` is weighted by `min + (max - min) * i / (N - 1)` and merged with a
/// per-pixel maximum, so the newest content dominates wherever frames overlap.
#[tracing::instrument(skip(positions, renderer), fields(frames = positions.len()))]
pub fn overlay_temporal_sequence(
    positions: &[Position],
    opts: &TemporalOptions,
    renderer: &dyn BoardRenderer,
) -> ChessfadeResult<FrameRgb8> {
    if positions.is_empty() {
        return Err(ChessfadeError::EmptySequence);
    }
    opts.validate()?;

    let target = opts.target_size();
    let weights = intensity_ramp(positions.len(), opts.min_intensity, opts.max_intensity);
    let mut acc = Accumulator::new(target)?;

    for (position, &intensity) in positions.iter().zip(&weights) {
        let mut frame = renderer.render(position, opts.base_size)?;
        if opts.compression_factor > 1 {
            frame = resize_area(&frame, target, target)?;
        }
        acc.merge_weighted(&frame, intensity)?;
        tracing::trace!(ply = position.ply(), intensity, "merged frame");
    }

    acc.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/composite/temporal.rs"]
mod tests;
