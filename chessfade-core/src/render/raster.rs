use crate::foundation::core::FrameRgb8;
use crate::foundation::error::{ChessfadeError, ChessfadeResult};
use crate::render::board_svg::board_svg;
use crate::sequence::extract::Position;

/// Turns one position into a `size × size` RGB8 frame.
///
/// Implementations must be deterministic for a given position and size and must draw plain
/// board art only: the compositor assumes no coordinate labels or other overlays.
pub trait BoardRenderer: Send + Sync {
    /// Render `position` at `size` pixels per side.
    fn render(&self, position: &Position, size: u32) -> ChessfadeResult<FrameRgb8>;
}

/// Upper bound on the rasterized board edge.
pub const MAX_BOARD_SIZE: u32 = 16_384;

/// CPU renderer: SVG board art rasterized with `resvg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgBoardRenderer;

impl SvgBoardRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }
}

impl BoardRenderer for SvgBoardRenderer {
    fn render(&self, position: &Position, size: u32) -> ChessfadeResult<FrameRgb8> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ChessfadeError::render(format!(
                "board size must be in 1..={MAX_BOARD_SIZE}, got {size}"
            )));
        }

        let svg = board_svg(position.board(), size);
        let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
            .map_err(|e| ChessfadeError::render(format!("parse board svg: {e}")))?;
        let rgba = rasterize_svg_to_rgba8(&tree, size, size)?;
        FrameRgb8::from_rgba8(size, size, &rgba)
    }
}

fn rasterize_svg_to_rgba8(tree: &usvg::Tree, width: u32, height: u32) -> ChessfadeResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ChessfadeError::render("failed to allocate board pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
