//! Choreo Core Library
//!
//! Board interaction model for the Choreo formation editor: coordinate
//! mapping, tools, selection, dancers and the pointer-driven surface.

pub mod board;
pub mod config;
pub mod dancer;
pub mod input;
pub mod mapper;
pub mod observer;
pub mod registry;
pub mod selection;
pub mod snap;
pub mod surface;
pub mod tools;

pub use board::{Board, DancerView};
pub use config::{BoardConfig, ConfigError, ConfigResult, MARKER_RADIUS};
pub use dancer::{Dancer, DancerId};
pub use input::{EventResponse, MouseButton, PointerEvent};
pub use mapper::CoordinateMapper;
pub use observer::{BoardEvent, EventBus, Subscription};
pub use registry::{DancerRegistry, RegistryError};
pub use selection::SelectionController;
pub use snap::{GRID_SIZE, snap_to_grid};
pub use surface::{BoardSurface, GridSpec, ReleaseOutcome};
pub use tools::{ClickAction, ReleaseAction, ToolKind};
