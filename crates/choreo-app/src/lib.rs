//! Choreo Application
//!
//! Application shell: loads configuration, replays a recorded pointer
//! session against the board and renders the result.

mod app;
pub mod session;

pub use app::{App, AppConfig, AppError, AppResult};
pub use session::{ReplayStats, Session, Step};
