//! Animation schedule for a [`Visualization`].
//!
//! Visited cell *i* lights up at `i × visit_delay`. Once every visited cell
//! is shown, the path follows: path cell *j* lights up `j × path_delay`
//! after that.

use std::time::Duration;

use pathviz_core::Point;

use crate::session::Visualization;

/// `delay × n`, saturating instead of wrapping on huge traces.
fn scaled(delay: Duration, n: usize) -> Duration {
    delay.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX))
}

/// How a cell is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Visited,
    Path,
}

/// One scheduled highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Offset from the start of the animation.
    pub at: Duration,
    pub pos: Point,
    pub mark: Mark,
}

/// Ordered animation steps, handed out as their time comes.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    next: usize,
}

impl Timeline {
    pub fn new(vis: &Visualization, visit_delay: Duration, path_delay: Duration) -> Self {
        let mut steps = Vec::with_capacity(vis.visited.len() + vis.path.len());
        for (i, &pos) in vis.visited.iter().enumerate() {
            steps.push(Step {
                at: scaled(visit_delay, i),
                pos,
                mark: Mark::Visited,
            });
        }
        let path_start = scaled(visit_delay, vis.visited.len());
        for (j, &pos) in vis.path.iter().enumerate() {
            steps.push(Step {
                at: path_start.saturating_add(scaled(path_delay, j)),
                pos,
                mark: Mark::Path,
            });
        }
        Self { steps, next: 0 }
    }

    /// Steps due by `elapsed` that were not handed out yet, in order.
    pub fn due(&mut self, elapsed: Duration) -> &[Step] {
        let from = self.next;
        while self.next < self.steps.len() && self.steps[self.next].at <= elapsed {
            self.next += 1;
        }
        &self.steps[from..self.next]
    }

    /// Whether every step has been handed out.
    pub fn is_done(&self) -> bool {
        self.next >= self.steps.len()
    }

    /// Offset of the last step.
    pub fn duration(&self) -> Duration {
        self.steps.last().map(|s| s.at).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
