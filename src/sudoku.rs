//! [Sudoku](https://en.wikipedia.org/wiki/Sudoku) reduces directly to
//! exact cover: every way of writing a value into a cell is a subset of
//! four conditions (cell occupied, value in row, value in column, value
//! in box), and a completed grid satisfies each condition exactly once.

use crate::{Coverings, Subset};
use std::collections::HashSet;

/// Instance of a Sudoku puzzle with square boxes of side
/// `box_side_length` (classic Sudoku: 3).
#[derive(Debug)]
pub struct Sudoku {
    /// The candidate placements still open after accounting for the
    /// pre-filled cells.
    pub placements: Vec<Placement>,
    /// The values fixed when the puzzle was created.
    pub filled_values: Vec<Placement>,
}

impl Sudoku {
    /// Create a puzzle with boxes of side `box_side_length` (so the grid
    /// side is its square) and the given fixed values.
    ///
    /// A candidate placement survives only if none of the conditions it
    /// would satisfy is already satisfied by a fixed value.
    pub fn new(box_side_length: usize, filled_values: impl IntoIterator<Item = Placement>) -> Self {
        let side_length = box_side_length * box_side_length;
        let filled_values: Vec<_> = filled_values
            .into_iter()
            .inspect(|placement| {
                debug_assert!(
                    0 < placement.value && placement.value <= side_length,
                    "Cell values should be in range (1..=side_length)"
                )
            })
            .collect();

        let satisfied: HashSet<_> = filled_values
            .iter()
            .copied()
            .flat_map(Placement::satisfied_constraints)
            .collect();

        let placements = Placement::all(box_side_length)
            .filter(|placement| {
                placement
                    .satisfied_constraints()
                    .all(|cons| !satisfied.contains(&cons))
            })
            .collect();

        Self {
            placements,
            filled_values,
        }
    }

    /// Enumerate the completions of this puzzle.
    pub fn coverings(&self) -> Coverings<'_, Placement> {
        Coverings::new(&self.placements)
    }
}

/// One way of writing a value into a cell of the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// The row index, ranging from 0 to `side_length - 1`.
    pub row: usize,
    /// The column index, ranging from 0 to `side_length - 1`.
    pub column: usize,
    /// The box index, in row-major box order, ranging from 0 to
    /// `side_length - 1`.
    pub square: usize,
    /// The value, ranging from 1 to `side_length`.
    pub value: usize,
}

impl Placement {
    /// Create a placement, deriving the box index from the position.
    pub fn new(row: usize, column: usize, value: usize, box_side_length: usize) -> Self {
        Placement {
            row,
            column,
            square: (row / box_side_length) * box_side_length + column / box_side_length,
            value,
        }
    }

    /// Return an iterator over every possible `Placement` for boxes of
    /// side `box_side_length`.
    pub fn all(box_side_length: usize) -> impl Iterator<Item = Self> {
        let side_length = box_side_length * box_side_length;

        (0..side_length).flat_map(move |row| {
            (0..side_length).flat_map(move |column| {
                (1..=side_length)
                    .map(move |value| Placement::new(row, column, value, box_side_length))
            })
        })
    }

    /// Return an iterator over all `Constraint`s that are satisfied by
    /// this `Placement`.
    pub fn satisfied_constraints(self) -> impl Iterator<Item = Constraint> {
        [
            Constraint::Cell {
                row: self.row,
                column: self.column,
            },
            Constraint::Row {
                row: self.row,
                value: self.value,
            },
            Constraint::Column {
                column: self.column,
                value: self.value,
            },
            Constraint::Square {
                square: self.square,
                value: self.value,
            },
        ]
        .into_iter()
    }
}

impl Subset for Placement {
    type Element = Constraint;

    fn elements(&self) -> Vec<Constraint> {
        self.satisfied_constraints().collect()
    }
}

/// A condition which must be satisfied in order to solve a Sudoku puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// A condition that a cell holds exactly one value.
    Cell {
        /// The row index
        row: usize,
        /// The column index
        column: usize,
    },
    /// A condition that a row holds each value exactly once.
    Row {
        /// The row index
        row: usize,
        /// The value
        value: usize,
    },
    /// A condition that a column holds each value exactly once.
    Column {
        /// The column index
        column: usize,
        /// The value
        value: usize,
    },
    /// A condition that a box holds each value exactly once.
    Square {
        /// The box index
        square: usize,
        /// The value
        value: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn box_indices_follow_row_major_order() {
        assert_eq!(Placement::new(0, 0, 1, 3).square, 0);
        assert_eq!(Placement::new(0, 8, 1, 3).square, 2);
        assert_eq!(Placement::new(4, 7, 1, 3).square, 5);
        assert_eq!(Placement::new(8, 8, 1, 3).square, 8);

        assert_eq!(Placement::new(1, 2, 1, 2).square, 1);
        assert_eq!(Placement::new(2, 1, 1, 2).square, 2);
    }

    #[test]
    fn generate_all_placements() {
        let all: HashSet<Placement> = Placement::all(3).collect();

        assert_eq!(all.len(), 9 * 9 * 9);
    }

    #[test]
    fn universe_of_an_empty_grid() {
        let puzzle = Sudoku::new(2, std::iter::empty());
        let distinct: HashSet<Constraint> = puzzle
            .placements
            .iter()
            .flat_map(|p| p.satisfied_constraints())
            .collect();

        // 16 cells + (4 rows + 4 columns + 4 boxes) * 4 values.
        assert_eq!(distinct.len(), 16 + 3 * 16);
    }

    #[test]
    fn filled_values_exclude_satisfied_conditions() {
        let puzzle = Sudoku::new(2, vec![Placement::new(0, 0, 1, 2)]);

        assert!(puzzle
            .placements
            .iter()
            .all(|p| (p.row, p.column) != (0, 0)));
        assert!(puzzle
            .placements
            .iter()
            .all(|p| !(p.row == 0 && p.value == 1)));
        assert!(puzzle
            .placements
            .iter()
            .all(|p| !(p.column == 0 && p.value == 1)));
        assert!(puzzle
            .placements
            .iter()
            .all(|p| !(p.square == 0 && p.value == 1)));
    }
}
