//! Enumeration of the candidate winning lines through a cell.
//!
//! A line is described by a *freedom mask* (the axes that vary along it, every
//! other axis is pinned to the starting cell) and a *sign pattern* (per axis,
//! whether it counts up or down). Each point steps once along every free axis,
//! wrapping modulo the side length so the walk never leaves the board. Walks
//! that wrapped around an edge instead of running straight are rejected by a
//! continuity test, and the survivors are de-duplicated as sets of cells.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::domain::coordinate::Coordinate;

/// A set of axes, bit `a` standing for axis `a` (axis 0 is the first
/// coordinate component).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisMask(u32);

impl AxisMask {
    pub fn contains(self, axis: usize) -> bool {
        (self.0 >> axis) & 1 == 1
    }

    /// Every non-empty subset of `dimension` axes, in ascending bit order.
    pub fn non_empty(dimension: usize) -> impl Iterator<Item = AxisMask> {
        debug_assert!(dimension < 32, "axis masks hold at most 31 axes");
        (1..1u32 << dimension).map(AxisMask)
    }
}

/// `side` cells in a row, starting at the cell the line was enumerated from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Line(Vec<Coordinate>);

impl Line {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self(points)
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.0.contains(coord)
    }

    /// The cells of the line in sorted order, independent of walk direction.
    pub fn canonical(&self) -> Vec<Coordinate> {
        let mut points = self.0.clone();
        points.sort();
        points
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", coord)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LineEnumerator {
    dimension: usize,
    side: usize,
}

impl LineEnumerator {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            side: dimension + 1,
        }
    }

    /// Every distinct, continuous line of `D + 1` cells passing through `origin`.
    ///
    /// Lines come out ordered by freedom mask, then by sign pattern, each one
    /// starting at `origin`. Cost grows as `4^D`.
    pub fn lines_through(&self, origin: &Coordinate) -> Vec<Line> {
        debug_assert_eq!(origin.dim(), self.dimension);

        let mut seen: FxHashSet<Vec<Coordinate>> = FxHashSet::default();
        let mut lines = Vec::new();

        for free in AxisMask::non_empty(self.dimension) {
            for signs in AxisMask::non_empty(self.dimension) {
                let points = self.walk(origin.values(), free, signs);
                if !is_continuous(&points, free) {
                    continue;
                }
                let line = Line::new(points.into_iter().map(Coordinate::new).collect());
                if seen.insert(line.canonical()) {
                    lines.push(line);
                }
            }
        }

        log::trace!(
            "{} candidate lines through {} on a {}-dimensional board",
            lines.len(),
            origin,
            self.dimension
        );
        lines
    }

    fn walk(&self, origin: &[usize], free: AxisMask, signs: AxisMask) -> Vec<Vec<usize>> {
        (0..self.side)
            .map(|step| {
                origin
                    .iter()
                    .enumerate()
                    .map(|(axis, &start)| {
                        if !free.contains(axis) {
                            start
                        } else if signs.contains(axis) {
                            (start + step) % self.side
                        } else {
                            (start + self.side - step) % self.side
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Every point must have another point of the walk exactly one step away on
/// every free axis. A walk that wrapped past an edge leaves the point after
/// the jump without such a neighbor.
pub fn is_continuous(points: &[Vec<usize>], free: AxisMask) -> bool {
    points.iter().enumerate().all(|(i, point)| {
        points.iter().enumerate().any(|(j, other)| {
            i != j
                && point
                    .iter()
                    .zip(other)
                    .enumerate()
                    .filter(|&(axis, _)| free.contains(axis))
                    .all(|(_, (a, b))| a.abs_diff(*b) == 1)
        })
    })
}
