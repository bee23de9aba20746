//! Renderer trait abstraction.

use choreo_core::{Board, GridSpec};
use kurbo::Point;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// No grid (plain background).
    None,
    /// Full grid lines.
    #[default]
    Lines,
    /// Only intersection dots.
    Dots,
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The board to render.
    pub board: &'a Board,
    /// Grid layout from the surface.
    pub grid: GridSpec,
    /// Background color.
    pub background_color: Color,
    /// Grid line color.
    pub grid_color: Color,
    /// Grid display style.
    pub grid_style: GridStyle,
    /// Dancer fill color.
    pub dancer_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
    /// Transition path color.
    pub path_color: Color,
    /// Placement preview color.
    pub preview_color: Color,
    /// Placement preview position, if one is showing.
    pub hover_preview: Option<Point>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(board: &'a Board, grid: GridSpec) -> Self {
        Self {
            board,
            grid,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            grid_color: Color::from_rgba8(128, 128, 128, 255), // Gray
            grid_style: GridStyle::Lines,
            dancer_color: Color::from_rgba8(30, 41, 59, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
            path_color: Color::from_rgba8(234, 88, 12, 255),
            preview_color: Color::from_rgba8(59, 130, 246, 96),
            hover_preview: board.hover_preview(),
        }
    }

    /// Set the grid style.
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Marker radius for dancers and the preview.
    pub fn marker_radius(&self) -> f64 {
        self.board.marker_radius()
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the drawing commands for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choreo_core::BoardSurface;

    #[test]
    fn test_context_builders() {
        let board = Board::default();
        let grid = BoardSurface::new().grid(&board);
        let ctx = RenderContext::new(&board, grid).with_grid(GridStyle::Dots);
        assert_eq!(ctx.grid_style, GridStyle::Dots);
        assert_eq!(ctx.background_color.to_rgba8().r, 255);
        assert!(ctx.hover_preview.is_none());
        assert!((ctx.marker_radius() - 10.0).abs() < f64::EPSILON);
    }
}
