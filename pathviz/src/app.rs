//! The application model: terminal input in, session updates and animation
//! state out.

use std::time::Instant;

use pathviz_core::Point;

use crate::config::{Config, ConfigError};
use crate::session::Session;
use crate::timeline::{Mark, Timeline};

/// Key bindings shown on the help line.
pub const HELP: &str =
    "s start  f finish  v visualize  m maze  r random  c clear  q quit";

/// Input events, already translated to grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(char),
    Enter,
    Escape,
    MouseDown(Point),
    MouseDrag(Point),
    MouseUp,
    /// The screen must be redrawn (resize, focus).
    Redraw,
}

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

struct Animation {
    timeline: Timeline,
    started: Instant,
    visited: usize,
    path: usize,
}

/// Session plus what is currently highlighted on screen.
pub struct App {
    session: Session,
    marks: Vec<Option<Mark>>,
    animation: Option<Animation>,
    status: String,
    dirty: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let session = Session::new(config)?;
        let marks = vec![None; session.grid().len()];
        Ok(Self {
            session,
            marks,
            animation: None,
            status: String::from("Paint walls with the mouse."),
            dirty: true,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Highlight currently shown at `p`.
    pub fn mark(&self, p: Point) -> Option<Mark> {
        self.session
            .grid()
            .index(p)
            .and_then(|i| self.marks[i])
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Process one input event received at `now`.
    pub fn update(&mut self, input: Input, now: Instant) -> Flow {
        self.dirty = true;
        match input {
            Input::Key('q') | Input::Escape => return Flow::Quit,
            Input::Redraw => return Flow::Continue,
            _ if self.animation.is_some() => {
                self.status = String::from("Animation running, please wait.");
                return Flow::Continue;
            }
            _ => {}
        }

        match input {
            Input::Key('s') => {
                self.session.select_start();
                self.status = String::from("Click a cell to place the start.");
            }
            Input::Key('f') => {
                self.session.select_finish();
                self.status = String::from("Click a cell to place the finish.");
            }
            Input::Key('v') | Input::Enter => self.visualize(now),
            Input::Key('m') => {
                self.clear_marks();
                let walled = self.session.generate_maze();
                self.status = format!("Maze: {} walls added.", walled.len());
            }
            Input::Key('r') => {
                self.clear_marks();
                let walled = self.session.random_maze(&mut rand::rng());
                self.status = format!("Random maze: {} walls added.", walled.len());
            }
            Input::Key('c') => {
                self.clear_marks();
                self.session.clear();
                self.status = String::from("Grid cleared.");
            }
            Input::MouseDown(p) => {
                if let Err(e) = self.session.mouse_down(p) {
                    log::debug!("app: click ignored: {e}");
                }
            }
            Input::MouseDrag(p) => {
                if let Err(e) = self.session.mouse_enter(p) {
                    log::debug!("app: drag ignored: {e}");
                }
            }
            Input::MouseUp => self.session.mouse_up(),
            _ => self.dirty = false,
        }
        Flow::Continue
    }

    fn visualize(&mut self, now: Instant) {
        self.clear_marks();
        match self.session.visualize() {
            Ok(vis) => {
                let config = self.session.config();
                let timeline = Timeline::new(&vis, config.visit_delay(), config.path_delay());
                self.status = String::from("Visualizing...");
                self.animation = Some(Animation {
                    timeline,
                    started: now,
                    visited: vis.visited.len(),
                    path: vis.path.len(),
                });
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Advance the animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        let elapsed = now.saturating_duration_since(anim.started);
        let grid = self.session.grid();
        for step in anim.timeline.due(elapsed) {
            if let Some(i) = grid.index(step.pos) {
                self.marks[i] = Some(step.mark);
                self.dirty = true;
            }
        }
        if anim.timeline.is_done() {
            self.status = format!(
                "{} cells visited, shortest path {} cells.",
                anim.visited, anim.path
            );
            self.animation = None;
            self.dirty = true;
        }
    }

    fn clear_marks(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = None);
    }
}
