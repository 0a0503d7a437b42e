use fnv::FnvHasher;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::math::{Point, Real, Vector, DIM};

/// A hasher builder with a fixed seed, so two grids holding the same elements
/// iterate in the same order.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeterministicState;

impl BuildHasher for DeterministicState {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> FnvHasher {
        FnvHasher::with_key(1820)
    }
}

/// A grid based on spatial hashing.
///
/// The grid is transient: it is cleared and refilled from scratch at the start
/// of every simulation step, so no cell ever keeps stale membership. It stores
/// indices into a particle collection it does not own.
#[derive(PartialEq, Debug, Clone)]
pub struct HGrid<T> {
    cells: HashMap<Point<i64>, Vec<T>, DeterministicState>,
    cell_width: Real,
}

impl<T> HGrid<T> {
    /// Initializes a grid where each cell has the width `cell_width`.
    pub fn new(cell_width: Real) -> Self {
        Self {
            cells: HashMap::with_hasher(DeterministicState),
            cell_width,
        }
    }

    /// The width of every cell of this grid.
    pub fn cell_width(&self) -> Real {
        self.cell_width
    }

    fn quantify(value: Real, cell_width: Real) -> i64 {
        (value / cell_width).floor() as i64
    }

    /// The key of the cell containing the given point.
    ///
    /// A point lying exactly on a cell boundary belongs to the cell selected
    /// by floor division; it is never a member of two cells.
    pub fn key(&self, point: &Point<Real>) -> Point<i64> {
        Point::from(point.coords.map(|e| Self::quantify(e, self.cell_width)))
    }

    /// Removes all elements from this grid.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Inserts the given `element` into the cell containing the given `point`.
    pub fn insert(&mut self, point: &Point<Real>, element: T) {
        let key = self.key(point);
        self.cells.entry(key).or_default().push(element)
    }

    /// Returns the elements of the cell containing the given `point`.
    ///
    /// Returns `None` if the cell is empty.
    pub fn cell_containing_point(&self, point: &Point<Real>) -> Option<&Vec<T>> {
        let key = self.key(point);
        self.cells.get(&key)
    }

    /// Returns the elements of the cell with the given key.
    pub fn cell(&self, key: &Point<i64>) -> Option<&Vec<T>> {
        self.cells.get(key)
    }

    /// An iterator through all the non-empty cells of this grid.
    ///
    /// The returned tuple includes the cell identifier, and the elements
    /// attached to this cell.
    pub fn cells(&self) -> impl Iterator<Item = (&Point<i64>, &Vec<T>)> {
        self.cells.iter()
    }

    /// An iterator through the populated cells of the 3×3 block centered at `cell`.
    ///
    /// The center cell itself is yielded too when populated. Cells holding no
    /// element are skipped, never materialized as empty allocations. Any pair
    /// of points closer than one cell width is guaranteed to see each other
    /// through this window.
    pub fn neighbor_cells(&self, cell: &Point<i64>) -> impl Iterator<Item = (Point<i64>, &Vec<T>)> {
        let cells = &self.cells;

        CellRangeIterator::with_center(*cell, 1)
            .filter_map(move |cell| cells.get(&cell).map(|c| (cell, c)))
    }
}

struct CellRangeIterator {
    start: Point<i64>,
    end: Point<i64>,
    curr: Point<i64>,
    done: bool,
}

impl CellRangeIterator {
    fn with_center(center: Point<i64>, radius: i64) -> Self {
        let start = center - Vector::repeat(radius);
        Self {
            start,
            end: center + Vector::repeat(radius),
            curr: start,
            done: false,
        }
    }
}

impl Iterator for CellRangeIterator {
    type Item = Point<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.curr == self.end {
            self.done = true;
            Some(self.curr)
        } else {
            let result = self.curr;

            for i in 0..DIM {
                self.curr[i] += 1;

                if self.curr[i] > self.end[i] {
                    self.curr[i] = self.start[i];
                } else {
                    break;
                }
            }

            Some(result)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CellRangeIterator, HGrid};
    use crate::math::{Point, Real};

    #[test]
    fn cell_range_iterator_covers_the_window() {
        let expected = [
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
            Point::new(0, 3),
            Point::new(1, 3),
            Point::new(2, 3),
        ];

        let iter = CellRangeIterator::with_center(Point::new(1, 2), 1);

        assert!(iter.zip(expected.into_iter()).all(|(a, b)| a == b))
    }

    #[test]
    fn boundary_points_resolve_by_floor_division() {
        let grid: HGrid<usize> = HGrid::new(1.0);
        assert_eq!(grid.key(&Point::new(1.0, -1.0)), Point::new(1, -1));
        assert_eq!(grid.key(&Point::new(0.999, -0.001)), Point::new(0, -1));
        assert_eq!(grid.key(&Point::new(0.0, 0.0)), Point::new(0, 0));
    }

    #[test]
    fn points_closer_than_one_cell_width_see_each_other() {
        let h = 0.5;
        let mut grid = HGrid::new(h);
        // The two middle points straddle a cell boundary but are closer than h.
        let points = [
            Point::new(0.10, 0.10),
            Point::new(0.45, 0.30),
            Point::new(0.55, 0.30),
            Point::new(2.00, 2.00),
        ];

        for (i, point) in points.iter().enumerate() {
            grid.insert(point, i);
        }

        let gather = |point: &Point<Real>| {
            let mut found: Vec<usize> = grid
                .neighbor_cells(&grid.key(point))
                .flat_map(|(_, cell)| cell.iter().copied())
                .collect();
            found.sort_unstable();
            found
        };

        for i in 0..points.len() {
            for j in 0..points.len() {
                let dist = (points[i] - points[j]).norm();
                if dist < h {
                    assert!(gather(&points[i]).contains(&j));
                    assert!(gather(&points[j]).contains(&i));
                }
            }
        }

        // The far point is out of reach of the 3x3 window around the others.
        assert!(!gather(&points[0]).contains(&3));
    }

    #[test]
    fn clear_removes_every_cell() {
        let mut grid = HGrid::new(1.0);
        grid.insert(&Point::new(0.5, 0.5), 0usize);
        grid.insert(&Point::new(5.5, 5.5), 1usize);
        grid.clear();
        assert_eq!(grid.cells().count(), 0);
        assert!(grid.cell_containing_point(&Point::new(0.5, 0.5)).is_none());
    }

    #[test]
    fn queries_include_the_querying_cell() {
        let mut grid = HGrid::new(1.0);
        let point = Point::new(0.25, 0.75);
        grid.insert(&point, 42usize);

        let found: Vec<usize> = grid
            .neighbor_cells(&grid.key(&point))
            .flat_map(|(_, cell)| cell.iter().copied())
            .collect();
        assert_eq!(found, vec![42]);
        assert_eq!(grid.cell(&grid.key(&point)), Some(&vec![42]));
        assert_eq!(grid.cell_width(), 1.0);
    }
}
