//! A [pentomino tiling puzzle](https://en.wikipedia.org/wiki/Pentomino)
//! asks for a tiling of a board with the twelve pentominoes, each used
//! exactly once, without overlaps or gaps.
//!
//! The reduction makes the universe heterogeneous: one element per board
//! square plus one element per piece name, so selecting a placement
//! simultaneously claims five squares and consumes the piece.

use crate::{Coverings, Subset};
use std::collections::HashSet;

/// The twelve pentominoes in a fixed reference orientation, named by the
/// customary lowercase letters.
const SHAPES: [(char, [(i32, i32); 5]); 12] = [
    ('f', [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]),
    ('i', [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    ('l', [(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)]),
    ('n', [(1, 0), (1, 1), (0, 2), (1, 2), (0, 3)]),
    ('p', [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
    ('t', [(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
    ('u', [(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)]),
    ('v', [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
    ('w', [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]),
    ('x', [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
    ('y', [(1, 0), (0, 1), (1, 1), (1, 2), (1, 3)]),
    ('z', [(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]),
];

/// A universe element of the tiling problem: either a piece that must be
/// used exactly once, or a board square that must be covered exactly
/// once.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// A pentomino, by name.
    Piece(char),
    /// A board square at `(x, y)`.
    Square(u8, u8),
}

/// One way of laying a particular pentomino on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The name of the piece being placed.
    pub piece: char,
    /// The five board squares the piece occupies.
    pub squares: Vec<(u8, u8)>,
}

impl Subset for Placement {
    type Element = Item;

    fn elements(&self) -> Vec<Item> {
        std::iter::once(Item::Piece(self.piece))
            .chain(self.squares.iter().map(|&(x, y)| Item::Square(x, y)))
            .collect()
    }
}

/// Instance of a pentomino tiling puzzle.
#[derive(Debug)]
pub struct Pentominoes {
    /// Every placement of every piece orientation that fits the board.
    pub placements: Vec<Placement>,
    board: Vec<(u8, u8)>,
}

impl Pentominoes {
    /// Create a puzzle on a `width` × `height` board with the given
    /// squares removed.
    ///
    /// # Panics
    ///  - If some piece has no valid placement on the board. The cover
    ///    universe is the union of the placements' items, so a piece
    ///    without placements would drop out of it entirely and tilings
    ///    omitting that piece would be reported as solutions.
    pub fn new(width: u8, height: u8, holes: &[(u8, u8)]) -> Self {
        let board: Vec<(u8, u8)> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|square| !holes.contains(square))
            .collect();
        let board_set: HashSet<(u8, u8)> = board.iter().copied().collect();

        let mut placements = Vec::new();
        for (piece, shape) in SHAPES {
            for orientation in orientations(&shape) {
                for y in 0..i32::from(height) {
                    for x in 0..i32::from(width) {
                        let mut squares = Vec::with_capacity(orientation.len());
                        for &(sx, sy) in &orientation {
                            let (tx, ty) = (sx + x, sy + y);
                            if tx >= i32::from(width) || ty >= i32::from(height) {
                                break;
                            }
                            let square = (tx as u8, ty as u8);
                            if !board_set.contains(&square) {
                                break;
                            }
                            squares.push(square);
                        }
                        if squares.len() == orientation.len() {
                            placements.push(Placement { piece, squares });
                        }
                    }
                }
            }
        }

        for (piece, _) in SHAPES {
            assert!(
                placements.iter().any(|placement| placement.piece == piece),
                "piece '{}' has no placement on this board",
                piece
            );
        }

        Self { placements, board }
    }

    /// The 8 × 8 board with the central 2 × 2 square removed, leaving
    /// exactly 60 squares for the 12 pieces.
    pub fn classic() -> Self {
        Self::new(8, 8, &[(3, 3), (4, 3), (3, 4), (4, 4)])
    }

    /// The playable squares, in row-major order.
    pub fn board(&self) -> &[(u8, u8)] {
        &self.board
    }

    /// Enumerate the tilings of this board.
    pub fn coverings(&self) -> Coverings<'_, Placement> {
        Coverings::new(&self.placements)
    }
}

/// All distinct orientations of a shape under rotation and reflection,
/// each normalized against the origin and sorted.
fn orientations(shape: &[(i32, i32); 5]) -> Vec<Vec<(i32, i32)>> {
    let mut out: Vec<Vec<(i32, i32)>> = Vec::new();
    let mut current: Vec<(i32, i32)> = shape.to_vec();

    for _ in 0..2 {
        for _ in 0..4 {
            let normalized = normalize(&current);
            if !out.contains(&normalized) {
                out.push(normalized);
            }
            // Quarter turn.
            current = current.iter().map(|&(x, y)| (y, -x)).collect();
        }
        // Mirror across the y axis.
        current = current.iter().map(|&(x, y)| (-x, y)).collect();
    }

    out
}

fn normalize(cells: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap();
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap();

    let mut normalized: Vec<(i32, i32)> = cells
        .iter()
        .map(|&(x, y)| (x - min_x, y - min_y))
        .collect();
    normalized.sort_unstable();
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_counts() {
        let counts: Vec<(char, usize)> = SHAPES
            .iter()
            .map(|(piece, shape)| (*piece, orientations(shape).len()))
            .collect();

        assert_eq!(
            counts,
            vec![
                ('f', 8),
                ('i', 2),
                ('l', 8),
                ('n', 8),
                ('p', 8),
                ('t', 4),
                ('u', 4),
                ('v', 4),
                ('w', 4),
                ('x', 1),
                ('y', 8),
                ('z', 4),
            ]
        );

        // The 63 fixed pentominoes.
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 63);
    }

    #[test]
    fn classic_board_has_sixty_squares() {
        let puzzle = Pentominoes::classic();

        assert_eq!(puzzle.board().len(), 60);
        assert!(!puzzle.board().contains(&(3, 3)));
        assert!(!puzzle.board().contains(&(4, 4)));
    }

    #[test]
    fn placements_stay_on_the_board() {
        let puzzle = Pentominoes::classic();
        assert!(!puzzle.placements.is_empty());

        for placement in &puzzle.placements {
            assert_eq!(placement.squares.len(), 5);

            let distinct: HashSet<_> = placement.squares.iter().collect();
            assert_eq!(distinct.len(), 5);
            for square in &placement.squares {
                assert!(puzzle.board().contains(square));
            }
        }
    }

    #[test]
    fn every_piece_has_placements() {
        let puzzle = Pentominoes::classic();

        for (piece, _) in SHAPES {
            assert!(puzzle
                .placements
                .iter()
                .any(|placement| placement.piece == piece));
        }
    }

    #[test]
    #[should_panic(expected = "has no placement")]
    fn boards_that_cannot_hold_every_piece_are_rejected() {
        // Only 'i' fits a 1x5 strip; accepting the board would let the
        // other eleven piece items vanish from the universe and a lone
        // 'i' placement masquerade as a tiling.
        let _ = Pentominoes::new(1, 5, &[]);
    }
}
