//! Application root: builds the board, replays a session, renders it.

use crate::session::{ReplayStats, Session};
use choreo_core::{Board, BoardConfig, BoardSurface, ConfigError, DancerRegistry, RegistryError};
use choreo_render::{GridStyle, RenderContext, Renderer, RendererError, SvgRenderer};
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Session error: {0}")]
    Session(#[from] serde_json::Error),
    #[error("Dancer file error: {0}")]
    Dancers(#[from] RegistryError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application settings resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Board configuration file; defaults apply when absent.
    pub board_config: Option<PathBuf>,
    /// Dancers (JSON) to place on the board before replaying.
    pub dancers: Option<PathBuf>,
    /// Session script to replay.
    pub session: PathBuf,
    /// Where to write the SVG; stdout when absent.
    pub output: Option<PathBuf>,
    /// Where to write the dancers as JSON.
    pub export: Option<PathBuf>,
    pub grid_style: GridStyle,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    board: Board,
    surface: BoardSurface,
}

impl App {
    /// Build the application and its board.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let board_config = match &config.board_config {
            Some(path) => BoardConfig::load(path)?,
            None => BoardConfig::default(),
        };
        log::debug!("Board config: {board_config:?}");
        let board = match &config.dancers {
            Some(path) => {
                let registry = DancerRegistry::from_json(&std::fs::read_to_string(path)?)?;
                log::info!("Loaded {} dancers from {}", registry.len(), path.display());
                Board::with_dancers(&board_config, registry)?
            }
            None => Board::new(&board_config)?,
        };
        Ok(Self {
            config,
            board,
            surface: BoardSurface::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replay the session and produce the rendered SVG document.
    pub fn run(&mut self) -> AppResult<String> {
        let session = Session::load(&self.config.session)?;
        let stats: ReplayStats = session.replay(&mut self.board, &mut self.surface);
        log::debug!("Replay stats: {stats:?}");

        let ctx = RenderContext::new(&self.board, self.surface.grid(&self.board))
            .with_grid(self.config.grid_style);
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx);

        if let Some(path) = &self.config.output {
            renderer.write_to(path)?;
            log::info!("Wrote {}", path.display());
        }
        if let Some(path) = &self.config.export {
            std::fs::write(path, self.board.dancers().to_json()?)?;
            log::info!("Exported {} dancers to {}", self.board.dancers().len(), path.display());
        }
        Ok(renderer.into_document())
    }
}
