use crate::foundation::error::{ChessfadeError, ChessfadeResult};

/// Inclusive window of 1-based plies, `start..=end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveRange {
    /// First ply in the window (oldest).
    pub start: u32,
    /// Last ply in the window (newest, inclusive).
    pub end: u32,
}

impl MoveRange {
    /// Validate `1 <= start <= end`.
    pub fn new(start: u32, end: u32) -> ChessfadeResult<Self> {
        if start < 1 || end < start {
            return Err(ChessfadeError::invalid_range(start, end));
        }
        Ok(Self { start, end })
    }

    /// Number of plies in the window.
    pub fn len(self) -> u32 {
        self.end - self.start + 1
    }

    /// Always `false`: a validated range holds at least one ply.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `ply` falls inside the window.
    pub fn contains(self, ply: u32) -> bool {
        self.start <= ply && ply <= self.end
    }
}

/// A rendered frame as RGB8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb8 {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes (`width * height * 3`).
    pub data: Vec<u8>,
}

impl FrameRgb8 {
    /// Wrap an RGB8 buffer, checking that its length matches the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> ChessfadeResult<Self> {
        let expected = rgb_len(width, height)?;
        if data.len() != expected {
            return Err(ChessfadeError::render(format!(
                "rgb8 buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> ChessfadeResult<Self> {
        let len = rgb_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / 3 {
            data.extend_from_slice(&rgb);
        }
        Self::new(width, height, data)
    }

    /// Drop the alpha channel of an RGBA8 buffer.
    ///
    /// Board art is opaque, so premultiplied and straight alpha agree; fully transparent
    /// pixels come out black.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> ChessfadeResult<Self> {
        let expected = rgb_len(width, height)? / 3 * 4;
        if rgba.len() != expected {
            return Err(ChessfadeError::render(format!(
                "rgba8 buffer has {} bytes, expected {expected} for {width}x{height}",
                rgba.len()
            )));
        }
        let mut data = Vec::with_capacity(expected / 4 * 3);
        for px in rgba.chunks_exact(4) {
            data.extend_from_slice(&px[..3]);
        }
        Self::new(width, height, data)
    }

    /// RGB triple at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

fn rgb_len(width: u32, height: u32) -> ChessfadeResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| ChessfadeError::render("frame buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
