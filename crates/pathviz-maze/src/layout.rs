//! Grids described as ASCII art.
//!
//! A [`Layout`] is parsed from text where every character is one cell:
//!
//! | char | cell |
//! |---|---|
//! | `.` | open |
//! | `#` | wall |
//! | `S` | start |
//! | `F` | finish |
//!
//! Lines are separated by `'\n'` and must all have the same width. Leading
//! and trailing whitespace of each line is ignored, so layouts can be
//! indented inside string literals.
//!
//! [`render`] and [`render_search`] go the other way, which is handy for
//! logging and test failure output.

use std::fmt;

use pathviz_core::{Grid, GridError, Point};

const OPEN: char = '.';
const WALL: char = '#';
const START: char = 'S';
const FINISH: char = 'F';
const VISITED: char = 'o';
const PATH: char = '*';

/// A parsed ASCII grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    lines: Vec<String>,
    size: Point,
    start: Option<Point>,
    finish: Option<Point>,
}

impl Layout {
    /// Parse a layout. See the module documentation for the format.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<String> = s
            .trim()
            .lines()
            .map(|l| l.trim().to_string())
            .collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = lines[0].chars().count();
        let mut start = None;
        let mut finish = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let slot = match ch {
                    OPEN | WALL => continue,
                    START => &mut start,
                    FINISH => &mut finish,
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                };
                if slot.is_some() {
                    return Err(LayoutError::DuplicateMarker { ch, pos });
                }
                *slot = Some(pos);
            }
        }

        let size = Point::new(width as i32, lines.len() as i32);
        Ok(Self {
            lines,
            size,
            start,
            finish,
        })
    }

    /// Width (x) and height (y) in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn finish(&self) -> Option<Point> {
        self.finish
    }

    /// Call `f` with every position and its character, row-major.
    pub fn iter(&self, mut f: impl FnMut(Point, char)) {
        for (y, line) in self.lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                f(Point::new(x as i32, y as i32), ch);
            }
        }
    }

    /// Build a fresh grid of the layout's size.
    pub fn to_grid(&self) -> Result<Grid, LayoutError> {
        let mut grid = Grid::new(self.size.y, self.size.x)?;
        self.draw(&mut grid)?;
        Ok(grid)
    }

    /// Draw the layout onto `grid`, anchored at its top-left corner.
    ///
    /// Walls are set or cleared to match the layout; the start and finish
    /// markers, when present, move the grid's endpoints.
    pub fn draw(&self, grid: &mut Grid) -> Result<(), LayoutError> {
        let mut result = Ok(());
        self.iter(|p, ch| {
            if result.is_err() {
                return;
            }
            result = grid.set_wall(p, ch == WALL);
        });
        result?;
        if let Some(p) = self.start {
            grid.set_start(p)?;
        }
        if let Some(p) = self.finish {
            grid.set_finish(p)?;
        }
        Ok(())
    }
}

/// Render a grid as a layout string (no trailing newline).
pub fn render(grid: &Grid) -> String {
    render_search(grid, &[], &[])
}

/// Render a grid with the outcome of a search drawn on top: `o` marks
/// visited cells and `*` marks path cells. Start, finish and walls keep
/// their own characters.
pub fn render_search(grid: &Grid, visited: &[Point], path: &[Point]) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for n in grid.iter() {
        if n.col() == 0 && n.row() > 0 {
            out.push('\n');
        }
        let p = n.pos();
        let ch = if n.is_start() {
            START
        } else if n.is_finish() {
            FINISH
        } else if n.is_wall() {
            WALL
        } else if path.contains(&p) {
            PATH
        } else if visited.contains(&p) {
            VISITED
        } else {
            OPEN
        };
        out.push(ch);
    }
    out
}

/// Errors that can occur when parsing or drawing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No cells at all.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#SF`.
    InvalidChar { ch: char, pos: Point },
    /// A second `S` or `F`.
    DuplicateMarker { ch: char, pos: Point },
    /// The layout does not fit the target grid.
    Grid(GridError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("layout: empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::Grid(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LayoutError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        S..#
        .#.#
        ...F
    ";

    #[test]
    fn parse_size_and_markers() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.size(), Point::new(4, 3));
        assert_eq!(l.start(), Some(Point::at(0, 0)));
        assert_eq!(l.finish(), Some(Point::at(2, 3)));
    }

    #[test]
    fn iter_positions() {
        let l = Layout::parse(ROOM).unwrap();
        let mut cells = Vec::new();
        l.iter(|p, ch| cells.push((p, ch)));
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[3], (Point::at(0, 3), '#'));
        assert_eq!(cells[5], (Point::at(1, 1), '#'));
    }

    #[test]
    fn to_grid_sets_walls_and_endpoints() {
        let g = Layout::parse(ROOM).unwrap().to_grid().unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.start(), Some(Point::at(0, 0)));
        assert_eq!(g.finish(), Some(Point::at(2, 3)));
        assert_eq!(
            g.walls(),
            vec![Point::at(0, 3), Point::at(1, 1), Point::at(1, 3)]
        );
    }

    #[test]
    fn render_round_trips_through_parse() {
        let l = Layout::parse(ROOM).unwrap();
        let g = l.to_grid().unwrap();
        let text = render(&g);
        assert_eq!(text, "S..#\n.#.#\n...F");
        assert_eq!(Layout::parse(&text).unwrap(), l);
    }

    #[test]
    fn render_search_overlays() {
        let g = Layout::parse(ROOM).unwrap().to_grid().unwrap();
        let visited = [Point::at(0, 0), Point::at(0, 1), Point::at(1, 0)];
        let path = [Point::at(0, 0), Point::at(0, 1)];
        assert_eq!(render_search(&g, &visited, &path), "S*.#\no#.#\n...F");
    }

    #[test]
    fn draw_clears_walls_outside_layout_walls() {
        let mut g = Grid::new(3, 4).unwrap();
        g.set_wall(Point::at(0, 1), true).unwrap();
        Layout::parse(ROOM).unwrap().draw(&mut g).unwrap();
        assert!(!g.node(Point::at(0, 1)).unwrap().is_wall());
    }

    #[test]
    fn draw_larger_than_grid_fails() {
        let mut g = Grid::new(2, 2).unwrap();
        let err = Layout::parse(ROOM).unwrap().draw(&mut g).unwrap_err();
        assert!(matches!(err, LayoutError::Grid(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn empty_layout_error() {
        assert_eq!(Layout::parse("  \n "), Err(LayoutError::Empty));
    }

    #[test]
    fn inconsistent_width_error() {
        assert_eq!(
            Layout::parse("...\n.."),
            Err(LayoutError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn invalid_char_error() {
        assert_eq!(
            Layout::parse("..\n.x"),
            Err(LayoutError::InvalidChar {
                ch: 'x',
                pos: Point::at(1, 1)
            })
        );
    }

    #[test]
    fn duplicate_marker_error() {
        assert_eq!(
            Layout::parse("S.\n.S"),
            Err(LayoutError::DuplicateMarker {
                ch: 'S',
                pos: Point::at(1, 1)
            })
        );
    }
}
