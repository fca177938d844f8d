//! A [Latin square](https://en.wikipedia.org/wiki/Latin_square) is a
//! n × n array filled with n different symbols, each occurring exactly once
//! in each row and exactly once in each column.

use crate::{Coverings, Subset};
#[cfg(fuzzing)]
use arbitrary::Arbitrary;
use std::collections::HashSet;

/// Instance of a Latin square puzzle.
#[derive(Debug)]
#[cfg_attr(fuzzing, derive(Arbitrary))]
pub struct LatinSquare {
    /// The candidate placements that could complete the square, one
    /// subset per (position, value) choice still open.
    pub placements: Vec<Placement>,
    /// The values and positions that are given as fixed when the puzzle
    /// is created.
    pub filled_values: Vec<Placement>,
}

impl LatinSquare {
    /// Create a new Latin square puzzle.
    ///
    /// The puzzle has dimensions `side_length` × `side_length` and the
    /// given list of filled values. A candidate placement survives only
    /// if none of the conditions it would satisfy is already satisfied by
    /// a filled value; this also rules out every placement colliding with
    /// a filled position.
    pub fn new(side_length: usize, filled_values: impl IntoIterator<Item = Placement>) -> Self {
        let filled_values: Vec<_> = filled_values
            .into_iter()
            .inspect(|placement| {
                debug_assert!(
                    0 < placement.value && placement.value <= side_length,
                    "Symbol values should be in range (1..=side_length)"
                )
            })
            .collect();

        let satisfied: HashSet<_> = filled_values
            .iter()
            .copied()
            .flat_map(Placement::satisfied_constraints)
            .collect();

        let placements = Placement::all(side_length)
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

    /// Enumerate the completions of this puzzle. Each solution holds one
    /// placement per still-open position.
    pub fn coverings(&self) -> Coverings<'_, Placement> {
        Coverings::new(&self.placements)
    }
}

/// A position and value for a box inside of a Latin square puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(fuzzing, derive(Arbitrary))]
pub struct Placement {
    /// The row position of the box, ranging from 0 to `side_length - 1`.
    pub row: usize,

    /// The column position of the box, ranging from 0 to
    /// `side_length - 1`.
    pub column: usize,

    /// The value present inside of the box, ranging from 1 to
    /// `side_length`.
    pub value: usize,
}

impl Placement {
    /// Return an iterator over every possible `Placement` for the given
    /// `side_length`.
    pub fn all(side_length: usize) -> impl Iterator<Item = Self> {
        (0..side_length).flat_map(move |row| {
            (0..side_length).flat_map(move |column| {
                (1..=side_length).map(move |value| Placement { row, column, value })
            })
        })
    }

    /// Return an iterator over all `Constraint`s that are satisfied by
    /// this `Placement`.
    pub fn satisfied_constraints(self) -> impl Iterator<Item = Constraint> {
        [
            Constraint::RowColumn {
                row: self.row,
                column: self.column,
            },
            Constraint::RowNumber {
                row: self.row,
                value: self.value,
            },
            Constraint::ColumnNumber {
                column: self.column,
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

/// A condition which must be satisfied in order to solve a Latin square
/// puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(fuzzing, derive(Arbitrary))]
pub enum Constraint {
    /// A condition that each row should only have a single instance of a
    /// numeric value.
    RowNumber {
        /// The row index
        row: usize,
        /// The unique numeric value
        value: usize,
    },
    /// A condition that each column should only have a single instance of
    /// a numeric value.
    ColumnNumber {
        /// The column index
        column: usize,
        /// The unique numeric value
        value: usize,
    },
    /// A condition that each row, column pair should exist exactly once.
    RowColumn {
        /// The row index
        row: usize,
        /// The column index
        column: usize,
    },
}
