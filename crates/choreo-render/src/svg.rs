//! SVG renderer.
//!
//! Produces a standalone SVG document: background, grid, transition paths,
//! dancer markers and the placement preview, in that order.

use crate::renderer::{GridStyle, RenderContext, RenderResult, Renderer};
use choreo_core::DancerView;
use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Color;
use std::path::Path;

/// Stroke width for grid lines.
const GRID_STROKE_WIDTH: f64 = 1.0;
/// Stroke width for transition paths.
const PATH_STROKE_WIDTH: f64 = 2.0;
/// Outline width for a selected dancer.
const SELECTION_STROKE_WIDTH: f64 = 3.0;
/// Half-size of a grid dot.
const DOT_SIZE: f64 = 1.5;

/// Format a color as an SVG paint plus opacity attribute.
fn paint(attr: &str, color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut out = format!("{attr}=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b);
    if rgba.a < 255 {
        out.push_str(&format!(" {attr}-opacity=\"{:.3}\"", f64::from(rgba.a) / 255.0));
    }
    out
}

/// Renderer that writes SVG markup.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last [`build_scene`](Renderer::build_scene).
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Take ownership of the last document.
    pub fn into_document(self) -> String {
        self.document
    }

    /// Write the last document to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        std::fs::write(path, &self.document)?;
        Ok(())
    }

    /// Append one element to the document.
    fn push_line(&mut self, line: &str) {
        self.document.push_str(line);
        self.document.push('\n');
    }

    fn render_grid(&mut self, ctx: &RenderContext) {
        let size = ctx.grid.size;
        let step = ctx.grid.square_size;
        if !(step > 0.0) {
            log::warn!("Skipping grid with non-positive cell size {step}");
            return;
        }
        let mut path = BezPath::new();

        match ctx.grid_style {
            GridStyle::None => return,
            GridStyle::Lines => {
                // Vertical lines
                let mut x = 0.0;
                while x <= size.width {
                    path.move_to(Point::new(x, 0.0));
                    path.line_to(Point::new(x, size.height));
                    x += step;
                }
                // Horizontal lines
                let mut y = 0.0;
                while y <= size.height {
                    path.move_to(Point::new(0.0, y));
                    path.line_to(Point::new(size.width, y));
                    y += step;
                }
                self.push_line(&format!(
                    "<path class=\"grid\" d=\"{}\" fill=\"none\" {} stroke-width=\"{}\"/>",
                    path.to_svg(),
                    paint("stroke", ctx.grid_color),
                    GRID_STROKE_WIDTH,
                ));
            }
            GridStyle::Dots => {
                let mut x = 0.0;
                while x <= size.width {
                    let mut y = 0.0;
                    while y <= size.height {
                        let dot = Rect::new(x - DOT_SIZE, y - DOT_SIZE, x + DOT_SIZE, y + DOT_SIZE);
                        path.extend(dot.path_elements(0.1));
                        y += step;
                    }
                    x += step;
                }
                self.push_line(&format!(
                    "<path class=\"grid\" d=\"{}\" {}/>",
                    path.to_svg(),
                    paint("fill", ctx.grid_color),
                ));
            }
        }
    }

    fn render_path(&mut self, ctx: &RenderContext, dancer: &DancerView) {
        let Some(outline) = ctx.board.dancer(dancer.id).and_then(|d| d.path_outline()) else {
            return;
        };
        self.push_line(&format!(
            "<path class=\"transition\" data-dancer=\"{}\" d=\"{}\" fill=\"none\" {} stroke-width=\"{}\"/>",
            dancer.id,
            outline.to_svg(),
            paint("stroke", ctx.path_color),
            PATH_STROKE_WIDTH,
        ));
    }

    fn render_dancer(&mut self, ctx: &RenderContext, dancer: &DancerView) {
        let (class, outline) = if dancer.is_selected {
            (
                "dancer selected",
                format!(
                    " {} stroke-width=\"{}\"",
                    paint("stroke", ctx.selection_color),
                    SELECTION_STROKE_WIDTH
                ),
            )
        } else {
            ("dancer", String::new())
        };
        self.push_line(&format!(
            "<circle class=\"{class}\" data-dancer=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" {}{outline}/>",
            dancer.id,
            dancer.position.x,
            dancer.position.y,
            ctx.marker_radius(),
            paint("fill", ctx.dancer_color),
        ));
        if let Some(label) = dancer.label {
            self.push_line(&format!(
                "<text class=\"label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
                dancer.position.x,
                dancer.position.y - ctx.marker_radius() - 4.0,
                escape(label),
            ));
        }
    }

    fn render_hover(&mut self, ctx: &RenderContext) {
        if let Some(p) = ctx.hover_preview {
            self.push_line(&format!(
                "<circle class=\"hover-circle\" cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
                p.x,
                p.y,
                ctx.marker_radius(),
                paint("fill", ctx.preview_color),
            ));
        }
    }
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.document.clear();
        let size = ctx.grid.size;
        self.push_line(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            size.width, size.height, size.width, size.height,
        ));
        let background = paint("fill", self.background_color(ctx));
        self.push_line(&format!("<rect width=\"100%\" height=\"100%\" {background}/>"));

        self.render_grid(ctx);

        // Paths go underneath every marker
        let views: Vec<DancerView> = ctx.board.dancer_views().collect();
        for view in &views {
            self.render_path(ctx, view);
        }
        for view in &views {
            self.render_dancer(ctx, view);
        }

        self.render_hover(ctx);
        self.document.push_str("</svg>\n");
        log::trace!("Built SVG scene with {} dancers", views.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choreo_core::{Board, BoardConfig, BoardSurface, GridSpec, PointerEvent, ToolKind};

    fn small_board() -> (BoardSurface, Board) {
        let config = BoardConfig {
            scaled_width: 40.0,
            scaled_height: 40.0,
            ..BoardConfig::default()
        };
        let mut board = Board::new(&config).unwrap();
        let mut surface = BoardSurface::new();
        surface.mount(&mut board, Rect::new(0.0, 0.0, 40.0, 40.0));
        (surface, board)
    }

    fn render(surface: &BoardSurface, board: &Board, style: GridStyle) -> String {
        let ctx = RenderContext::new(board, surface.grid(board)).with_grid(style);
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx);
        renderer.into_document()
    }

    #[test]
    fn test_empty_board_document() {
        let (surface, board) = small_board();
        let svg = render(&surface, &board, GridStyle::Lines);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("class=\"grid\""));
        assert!(svg.contains("stroke=\"#808080\""));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_no_grid() {
        let (surface, board) = small_board();
        let svg = render(&surface, &board, GridStyle::None);
        assert!(!svg.contains("class=\"grid\""));
    }

    #[test]
    fn test_dancers_and_paths() {
        let (surface, mut board) = small_board();
        let a = board.add_dancer(Point::new(20.0, 20.0));
        board.add_path(a, Point::new(40.0, 20.0));
        board.set_label(a, Some("A<1>".to_string()));
        let b = board.add_dancer(Point::new(0.0, 0.0));
        board.set_selected(Some(b));

        let svg = render(&surface, &board, GridStyle::Lines);
        assert_eq!(svg.matches("class=\"dancer").count(), 2);
        assert_eq!(svg.matches("class=\"dancer selected\"").count(), 1);
        assert_eq!(svg.matches("class=\"transition\"").count(), 1);
        assert!(svg.contains("A&lt;1&gt;"));
        assert!(svg.contains(&format!("data-dancer=\"{b}\" cx=\"0\" cy=\"0\"")));
        // Paths are drawn before markers
        assert!(svg.find("transition").unwrap() < svg.find("<circle").unwrap());
    }

    #[test]
    fn test_hover_circle_only_for_add() {
        let (mut surface, mut board) = small_board();
        surface.handle_pointer_event(&mut board, PointerEvent::Enter);
        surface.handle_pointer_event(&mut board, PointerEvent::Move { position: Point::new(22.0, 18.0) });

        let svg = render(&surface, &board, GridStyle::Lines);
        assert!(!svg.contains("hover-circle"));

        board.set_tool(ToolKind::Add);
        let svg = render(&surface, &board, GridStyle::Lines);
        assert!(svg.contains("<circle class=\"hover-circle\" cx=\"20\" cy=\"20\" r=\"10\""));
        assert!(svg.contains("fill-opacity"));
    }

    #[test]
    fn test_write_to_file() {
        let (surface, board) = small_board();
        let ctx = RenderContext::new(&board, surface.grid(&board));
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.svg");
        renderer.write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), renderer.document());
    }

    #[test]
    fn test_grid_skipped_for_non_positive_cell() {
        let (_, board) = small_board();
        for square_size in [0.0, -20.0, f64::NAN] {
            let grid = GridSpec {
                square_size,
                size: board.scaled_size(),
            };
            let ctx = RenderContext::new(&board, grid);
            let mut renderer = SvgRenderer::new();
            renderer.build_scene(&ctx);
            assert!(!renderer.document().contains("class=\"grid\""));
            assert!(renderer.document().trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
