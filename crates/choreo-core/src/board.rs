//! Session-wide board state.

use crate::config::{BoardConfig, ConfigResult};
use crate::dancer::{Dancer, DancerId};
use crate::mapper::CoordinateMapper;
use crate::observer::{BoardEvent, EventBus, Subscription};
use crate::registry::DancerRegistry;
use crate::selection::SelectionController;
use crate::tools::ToolKind;
use kurbo::{Point, Size, Vec2};

/// Read-only view of a dancer for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DancerView<'a> {
    pub id: DancerId,
    pub position: Point,
    pub path: &'a [Point],
    pub label: Option<&'a str>,
    pub is_selected: bool,
}

/// The board: coordinate space, interaction state and dancers for one session.
///
/// Create one per session and pass it by reference to the surface and to
/// whatever draws the dancers. Every mutator publishes a [`BoardEvent`].
#[derive(Debug)]
pub struct Board {
    mapper: CoordinateMapper,
    scaled_size: Size,
    marker_radius: f64,
    /// Last pointer position inside the surface, board-local and unsnapped.
    raw_coords: Point,
    pointer_inside: bool,
    tool: ToolKind,
    selection: SelectionController,
    dancers: DancerRegistry,
    bus: EventBus,
    /// Preview last announced to subscribers.
    last_preview: Option<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self::build(CoordinateMapper::default(), &BoardConfig::default())
    }
}

impl Board {
    /// Create a board, rejecting configurations with non-positive sizes.
    pub fn new(config: &BoardConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mapper = CoordinateMapper::new(config.square_size)?;
        Ok(Self::build(mapper, config))
    }

    /// Create a board with existing dancers.
    pub fn with_dancers(config: &BoardConfig, dancers: DancerRegistry) -> ConfigResult<Self> {
        Ok(Self {
            dancers,
            ..Self::new(config)?
        })
    }

    fn build(mapper: CoordinateMapper, config: &BoardConfig) -> Self {
        Self {
            mapper,
            scaled_size: Size::new(config.scaled_width, config.scaled_height),
            marker_radius: config.marker_radius,
            raw_coords: Point::ZERO,
            pointer_inside: false,
            tool: config.default_tool,
            selection: SelectionController::new(),
            dancers: DancerRegistry::new(),
            bus: EventBus::new(),
            last_preview: None,
        }
    }

    // --- Subscriptions ---

    /// Register a view-update callback.
    pub fn subscribe(&mut self, callback: impl Fn(&BoardEvent) + 'static) -> Subscription {
        self.bus.subscribe(callback)
    }

    // --- Dimensions and coordinates ---

    /// Record the surface origin measured at mount time.
    pub fn change_dimensions(&mut self, offset: Vec2) {
        log::debug!("Board offset set to ({}, {})", offset.x, offset.y);
        self.mapper.set_offset(offset);
        self.bus.publish(BoardEvent::DimensionsChanged { offset });
    }

    pub fn offset(&self) -> Vec2 {
        self.mapper.offset()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn square_size(&self) -> f64 {
        self.mapper.square_size()
    }

    /// Rendered surface dimensions.
    pub fn scaled_size(&self) -> Size {
        self.scaled_size
    }

    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    /// Track whether the pointer is over the surface.
    pub fn set_pointer_inside(&mut self, inside: bool) {
        if self.pointer_inside != inside {
            self.pointer_inside = inside;
            self.refresh_hover();
        }
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Update the pointer position from raw client coordinates.
    ///
    /// Ignored while the pointer is outside the surface. Returns whether the
    /// position was taken.
    pub fn change_coords(&mut self, client: Point) -> bool {
        if !self.pointer_inside {
            log::trace!("Ignoring coords ({}, {}) outside surface", client.x, client.y);
            return false;
        }
        let previous = self.rounded_coords();
        self.raw_coords = self.mapper.to_board_local(client);
        let rounded = self.rounded_coords();
        if rounded != previous {
            self.bus.publish(BoardEvent::CoordsChanged { rounded });
            self.refresh_hover();
        }
        true
    }

    /// Last raw pointer position, board-local.
    pub fn raw_coords(&self) -> Point {
        self.raw_coords
    }

    /// Pointer position snapped to the grid.
    pub fn rounded_coords(&self) -> Point {
        self.mapper.snap(self.raw_coords)
    }

    /// Placement preview position, shown while the pointer is inside and
    /// the active tool previews placements.
    pub fn hover_preview(&self) -> Option<Point> {
        (self.pointer_inside && self.tool.shows_preview()).then(|| self.rounded_coords())
    }

    fn refresh_hover(&mut self) {
        let preview = self.hover_preview();
        if preview != self.last_preview {
            self.last_preview = preview;
            self.bus.publish(BoardEvent::HoverChanged { preview });
        }
    }

    // --- Tools ---

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool == tool {
            return;
        }
        log::debug!("Tool changed: {} -> {}", self.tool, tool);
        self.tool = tool;
        self.bus.publish(BoardEvent::ToolChanged { tool });
        self.refresh_hover();
    }

    // --- Selection ---

    pub fn selected(&self) -> Option<DancerId> {
        self.selection.selected()
    }

    pub fn is_selected(&self, id: DancerId) -> bool {
        self.selection.is_selected(id)
    }

    /// Replace the selection. Unknown dancers are ignored.
    pub fn set_selected(&mut self, id: Option<DancerId>) -> bool {
        if let Some(id) = id {
            if !self.dancers.contains(id) {
                log::warn!("Cannot select unknown dancer {id}");
                return false;
            }
        }
        let previous = self.selection.set_selected(id);
        if previous != id {
            self.bus.publish(BoardEvent::SelectionChanged {
                previous,
                current: id,
            });
        }
        true
    }

    /// Select or deselect a specific dancer, as a dancer view would.
    pub fn set_dancer_selected(&mut self, id: DancerId, selected: bool) -> bool {
        if selected {
            self.set_selected(Some(id))
        } else if self.is_selected(id) {
            self.set_selected(None)
        } else {
            self.dancers.contains(id)
        }
    }

    // --- Dancers ---

    pub fn dancers(&self) -> &DancerRegistry {
        &self.dancers
    }

    pub fn dancer(&self, id: DancerId) -> Option<&Dancer> {
        self.dancers.get(id)
    }

    /// Create a dancer at a board position. The selection is left alone.
    pub fn add_dancer(&mut self, position: Point) -> DancerId {
        let id = self.dancers.add(position);
        log::debug!("Added dancer {id} at ({}, {})", position.x, position.y);
        self.bus.publish(BoardEvent::DancerAdded { id });
        id
    }

    /// Move a dancer without touching its path.
    pub fn move_dancer(&mut self, id: DancerId, position: Point) -> bool {
        self.update_dancer(id, |d| d.move_to(position))
    }

    /// Append a waypoint to a dancer's path.
    pub fn add_path(&mut self, id: DancerId, point: Point) -> bool {
        self.update_dancer(id, |d| d.add_path(point))
    }

    pub fn set_label(&mut self, id: DancerId, label: Option<String>) -> bool {
        self.update_dancer(id, |d| d.label = label)
    }

    fn update_dancer(&mut self, id: DancerId, f: impl FnOnce(&mut Dancer)) -> bool {
        let Some(dancer) = self.dancers.get_mut(id) else {
            log::warn!("Ignoring update for unknown dancer {id}");
            return false;
        };
        f(dancer);
        self.bus.publish(BoardEvent::DancerChanged { id });
        true
    }

    /// Remove a dancer, clearing the selection if it pointed at it.
    pub fn remove_dancer(&mut self, id: DancerId) -> Option<Dancer> {
        if self.is_selected(id) {
            self.set_selected(None);
        }
        let removed = self.dancers.remove(id)?;
        self.bus.publish(BoardEvent::DancerRemoved { id });
        Some(removed)
    }

    /// Front-most dancer under a board point.
    pub fn dancer_at(&self, point: Point) -> Option<DancerId> {
        self.dancers.dancer_at(point, self.marker_radius)
    }

    pub fn dancer_view(&self, id: DancerId) -> Option<DancerView<'_>> {
        self.dancers.get(id).map(|d| self.view_of(id, d))
    }

    /// Views of all dancers in draw order.
    pub fn dancer_views(&self) -> impl Iterator<Item = DancerView<'_>> + '_ {
        self.dancers.entries().map(|(id, d)| self.view_of(id, d))
    }

    fn view_of<'a>(&self, id: DancerId, dancer: &'a Dancer) -> DancerView<'a> {
        DancerView {
            id,
            position: dancer.position,
            path: &dancer.path,
            label: dancer.label.as_deref(),
            is_selected: self.selection.is_selected(id),
        }
    }
}
