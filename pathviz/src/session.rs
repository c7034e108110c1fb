//! The interaction session: one grid plus the state of the pointer.

use std::fmt;

use pathviz_core::{Grid, GridError, Point};
use pathviz_maze::{apply_maze, scatter_walls};
use pathviz_paths::{Dijkstra, SearchError, is_reachable, reconstruct_path};
use rand::Rng;

use crate::config::{Config, ConfigError};

/// What a click on the grid does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks and drags toggle walls.
    #[default]
    Paint,
    /// The next click moves the start.
    PlaceStart,
    /// The next click moves the finish.
    PlaceFinish,
    /// The start follows the pointer until the button is released.
    DragStart,
}

/// The two sequences a successful run hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualization {
    /// Cells in the order the search finalized them.
    pub visited: Vec<Point>,
    /// Shortest path, start to finish inclusive.
    pub path: Vec<Point>,
}

/// Why [`Session::visualize`] produced no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizeError {
    FinishNotSet,
    StartNotSet,
    /// The search ran but never reached the finish.
    Unreachable { visited: usize },
    Search(SearchError),
}

impl fmt::Display for VisualizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FinishNotSet => f.write_str("Finish node is not set."),
            Self::StartNotSet => f.write_str("Start node is not set."),
            Self::Unreachable { .. } => f.write_str("Finish node is not reachable."),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for VisualizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for VisualizeError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// A visualization session over a single grid.
pub struct Session {
    config: Config,
    grid: Grid,
    mode: Mode,
    pressed: bool,
    engine: Dijkstra,
}

impl Session {
    /// Create a session with a fresh grid and the configured endpoints.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Grid::new(config.rows, config.cols)?;
        grid.set_start(config.start)?;
        grid.set_finish(config.finish)?;
        log::info!(
            "session: {}x{} grid, start {}, finish {}",
            config.rows,
            config.cols,
            config.start,
            config.finish
        );
        Ok(Self {
            config,
            grid,
            mode: Mode::Paint,
            pressed: false,
            engine: Dijkstra::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The next click places the start.
    pub fn select_start(&mut self) {
        self.mode = Mode::PlaceStart;
    }

    /// The next click places the finish.
    pub fn select_finish(&mut self) {
        self.mode = Mode::PlaceFinish;
    }

    /// Primary button pressed over `p`.
    pub fn mouse_down(&mut self, p: Point) -> Result<(), GridError> {
        match self.mode {
            Mode::PlaceStart | Mode::DragStart => {
                self.grid.set_start(p)?;
                self.mode = Mode::DragStart;
            }
            Mode::PlaceFinish => {
                self.grid.set_finish(p)?;
                self.mode = Mode::Paint;
            }
            Mode::Paint => {
                self.grid.toggle_wall(p)?;
            }
        }
        self.pressed = true;
        Ok(())
    }

    /// Pointer moved onto `p`. Does nothing unless the button is held.
    ///
    /// While dragging the start, cells holding the finish are skipped.
    pub fn mouse_enter(&mut self, p: Point) -> Result<(), GridError> {
        if !self.pressed {
            return Ok(());
        }
        let moved = match self.mode {
            Mode::PlaceStart | Mode::DragStart => self.grid.set_start(p),
            Mode::PlaceFinish => self.grid.set_finish(p),
            Mode::Paint => self.grid.toggle_wall(p).map(|_| ()),
        };
        match moved {
            Err(GridError::Occupied { pos }) => {
                log::debug!("session: {pos} holds the other endpoint, skipped");
                Ok(())
            }
            other => other,
        }
    }

    /// Primary button released.
    pub fn mouse_up(&mut self) {
        self.pressed = false;
        if self.mode == Mode::DragStart {
            self.mode = Mode::Paint;
        }
    }

    /// Clear search state and walls. Endpoints stay where they are.
    pub fn clear(&mut self) {
        self.grid.reset();
        self.mode = Mode::Paint;
        log::info!("session: grid cleared");
    }

    /// Add the fixed maze. Returns the newly walled cells.
    pub fn generate_maze(&mut self) -> Vec<Point> {
        let walled = apply_maze(&mut self.grid);
        log::info!("session: maze added {} walls", walled.len());
        walled
    }

    /// Scatter walls at the configured density.
    pub fn random_maze(&mut self, rng: &mut impl Rng) -> Vec<Point> {
        let walled = scatter_walls(&mut self.grid, rng, self.config.wall_density);
        log::info!("session: random maze added {} walls", walled.len());
        walled
    }

    /// Run the search from the start to the finish and derive the path.
    pub fn visualize(&mut self) -> Result<Visualization, VisualizeError> {
        let finish = self.grid.finish().ok_or(VisualizeError::FinishNotSet)?;
        let start = self.grid.start().ok_or(VisualizeError::StartNotSet)?;

        let visited = self.engine.search(&mut self.grid, start, finish)?;
        if !is_reachable(&visited, finish) {
            log::warn!(
                "session: finish {finish} unreachable, {} cells explored",
                visited.len()
            );
            return Err(VisualizeError::Unreachable {
                visited: visited.len(),
            });
        }

        let path = reconstruct_path(&self.grid, finish)?;
        log::info!(
            "session: {} cells visited, path of {} cells",
            visited.len(),
            path.len()
        );
        Ok(Visualization { visited, path })
    }
}
