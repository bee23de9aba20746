//! Choreo Render Library
//!
//! Renderer abstraction for the Choreo board, an SVG implementation and
//! event-driven redraw tracking.

mod invalidation;
mod renderer;
mod svg;

pub use invalidation::{Damage, RedrawTracker};
pub use renderer::{GridStyle, RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
