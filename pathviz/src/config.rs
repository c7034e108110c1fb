//! Visualizer configuration.

use std::fmt;
use std::time::Duration;

use pathviz_core::{GridError, Point, Range};

/// Configuration for creating a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    /// Initial start cell.
    pub start: Point,
    /// Initial finish cell.
    pub finish: Point,
    /// Delay between two visited cells lighting up, in milliseconds.
    pub visit_delay_ms: u64,
    /// Delay between two path cells lighting up, in milliseconds.
    pub path_delay_ms: u64,
    /// Wall probability used by the random maze.
    pub wall_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 80,
            cols: 30,
            start: Point::at(25, 14),
            finish: Point::at(55, 14),
            visit_delay_ms: 10,
            path_delay_ms: 50,
            wall_density: 0.3,
        }
    }
}

impl Config {
    /// Check dimensions, endpoints and density.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(ConfigError::Dimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let bounds = Range::new(0, 0, self.cols, self.rows);
        for (name, pos) in [("start", self.start), ("finish", self.finish)] {
            if !bounds.contains(pos) {
                return Err(ConfigError::EndpointOutOfBounds { name, pos });
            }
        }
        if self.start == self.finish {
            return Err(ConfigError::SameEndpoints(self.start));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(ConfigError::WallDensity(self.wall_density));
        }
        Ok(())
    }

    #[inline]
    pub fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }

    #[inline]
    pub fn path_delay(&self) -> Duration {
        Duration::from_millis(self.path_delay_ms)
    }
}

/// Errors reported by [`Config::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Dimensions { rows: i32, cols: i32 },
    EndpointOutOfBounds { name: &'static str, pos: Point },
    SameEndpoints(Point),
    WallDensity(f64),
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensions { rows, cols } => {
                write!(f, "config: grid must be at least 1x1, got {rows}x{cols}")
            }
            Self::EndpointOutOfBounds { name, pos } => {
                write!(f, "config: {name} {pos} lies outside the grid")
            }
            Self::SameEndpoints(p) => write!(f, "config: start and finish are both {p}"),
            Self::WallDensity(d) => write!(f, "config: wall density {d} not in 0.0..=1.0"),
            Self::Grid(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
