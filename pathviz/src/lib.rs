//! Terminal visualizer for Dijkstra's shortest-path algorithm.
//!
//! The crate is the presentation side of pathviz: it owns a grid through a
//! [`Session`], turns the engine's output into an animation [`Timeline`],
//! and draws everything with crossterm.
//!
//! - [`Config`]: grid size, default endpoints, animation delays.
//! - [`Session`]: interaction state (placing endpoints, painting walls) and
//!   the visualize operation.
//! - [`Timeline`]: when each visited and path cell lights up.
//! - [`App`]: the model tying the above to terminal input.
//! - [`Terminal`]: the crossterm driver.

pub mod app;
pub mod config;
pub mod session;
pub mod term;
pub mod timeline;

pub use app::{App, Flow, Input};
pub use config::{Config, ConfigError};
pub use session::{Mode, Session, Visualization, VisualizeError};
pub use term::Terminal;
pub use timeline::{Mark, Step, Timeline};
