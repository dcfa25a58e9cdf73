//! Board geometry: dots, edges, boxes.
//!
//! A board of size `N` has `N × N` dots, `2·N·(N-1)` edges and
//! `(N-1)²` boxes. Everything here is pure and immutable; claim state
//! lives in [`GameState`](super::GameState).
//!
//! `N` is capped at [`MAX_BOARD_SIZE`](super::MAX_BOARD_SIZE), so these
//! counts never overflow.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::check_size;
use super::error::ConfigError;

/// A grid vertex identified by `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dot {
    pub row: usize,
    pub col: usize,
}

impl Dot {
    /// Create a new dot.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Dot {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Dot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An unordered pair of dots.
///
/// The pair is stored normalized (lower dot first), so
/// `Edge::new(a, b) == Edge::new(b, a)`. Adjacency is not checked here;
/// use [`BoardTopology::edge`] to build a legal edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    first: Dot,
    second: Dot,
}

impl Edge {
    /// Create an edge between two dots, in either order.
    #[must_use]
    pub fn new(a: impl Into<Dot>, b: impl Into<Dot>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lower of the two dots.
    #[must_use]
    pub const fn first(&self) -> Dot {
        self.first
    }

    /// The higher of the two dots.
    #[must_use]
    pub const fn second(&self) -> Dot {
        self.second
    }

    /// True if both dots share a row.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.first.row == self.second.row
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// A unit square, identified by its top-left dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridBox {
    pub row: usize,
    pub col: usize,
}

impl GridBox {
    /// Create a box from its top-left corner.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four bounding edges: top, right, bottom, left.
    #[must_use]
    pub fn edges(&self) -> [Edge; 4] {
        let (r, c) = (self.row, self.col);
        [
            Edge::new((r, c), (r, c + 1)),
            Edge::new((r, c + 1), (r + 1, c + 1)),
            Edge::new((r + 1, c), (r + 1, c + 1)),
            Edge::new((r, c), (r + 1, c)),
        ]
    }
}

impl std::fmt::Display for GridBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box({}, {})", self.row, self.col)
    }
}

/// Fixed square grid of dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTopology {
    size: usize,
}

impl BoardTopology {
    /// Build an `size × size` grid of dots.
    ///
    /// Fails outside `2..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        check_size(size)?;
        Ok(Self { size })
    }

    /// Dots per side.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of boxes, `(N-1)²`.
    #[must_use]
    pub const fn box_count(&self) -> usize {
        (self.size - 1) * (self.size - 1)
    }

    /// Total number of edges, `2·N·(N-1)`.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        2 * self.size * (self.size - 1)
    }

    /// Check if a dot lies on the grid.
    #[must_use]
    pub const fn contains(&self, dot: Dot) -> bool {
        dot.row < self.size && dot.col < self.size
    }

    /// Check if a box lies on the grid.
    #[must_use]
    pub const fn contains_box(&self, grid_box: GridBox) -> bool {
        grid_box.row + 1 < self.size && grid_box.col + 1 < self.size
    }

    /// True iff the dots differ by exactly 1 in exactly one coordinate.
    #[must_use]
    pub fn is_adjacent(&self, a: Dot, b: Dot) -> bool {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }

    /// Build the edge between two dots if it is a legal edge of this grid.
    #[must_use]
    pub fn edge(&self, a: Dot, b: Dot) -> Option<Edge> {
        (self.contains(a) && self.contains(b) && self.is_adjacent(a, b)).then(|| Edge::new(a, b))
    }

    /// The boxes that have `edge` as one of their bounding edges.
    ///
    /// Border edges touch one box, interior edges touch two. Returns
    /// nothing for an edge that is not a legal edge of this grid.
    #[must_use]
    pub fn boxes_bounded_by(&self, edge: Edge) -> SmallVec<[GridBox; 2]> {
        let mut boxes = SmallVec::new();
        let Some(edge) = self.edge(edge.first(), edge.second()) else {
            return boxes;
        };

        let a = edge.first();
        if edge.is_horizontal() {
            // Box above, then box below.
            if a.row > 0 {
                boxes.push(GridBox::new(a.row - 1, a.col));
            }
            if a.row + 1 < self.size {
                boxes.push(GridBox::new(a.row, a.col));
            }
        } else {
            // Box to the left, then box to the right.
            if a.col > 0 {
                boxes.push(GridBox::new(a.row, a.col - 1));
            }
            if a.col + 1 < self.size {
                boxes.push(GridBox::new(a.row, a.col));
            }
        }
        boxes
    }

    /// All dots in row-major order.
    pub fn dots(&self) -> impl Iterator<Item = Dot> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Dot::new(row, col)))
    }

    /// All boxes in row-major order.
    pub fn boxes(&self) -> impl Iterator<Item = GridBox> {
        let n = self.size - 1;
        (0..n).flat_map(move |row| (0..n).map(move |col| GridBox::new(row, col)))
    }

    /// All edges: horizontal edges row by row, then vertical edges.
    pub fn edges(&self) -> impl Iterator<Item = Edge> {
        let size = self.size;
        let horizontal = (0..size)
            .flat_map(move |r| (0..size - 1).map(move |c| Edge::new((r, c), (r, c + 1))));
        let vertical = (0..size - 1)
            .flat_map(move |r| (0..size).map(move |c| Edge::new((r, c), (r + 1, c))));
        horizontal.chain(vertical)
    }
}
