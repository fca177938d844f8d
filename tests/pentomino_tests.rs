use exactcover::pentomino::Pentominoes;
use std::collections::HashSet;

#[test]
#[cfg_attr(miri, ignore)]
fn tilings_partition_the_classic_board() {
    let puzzle = Pentominoes::classic();
    let board: HashSet<(u8, u8)> = puzzle.board().iter().copied().collect();

    // Full enumeration takes a while; the first few tilings are enough to
    // exercise the partition law.
    let mut seen = 0;
    for solution in puzzle.coverings().take(3) {
        assert_eq!(solution.len(), 12);

        let pieces: HashSet<char> = solution.iter().map(|placement| placement.piece).collect();
        assert_eq!(pieces.len(), 12, "every piece is used exactly once");

        let covered: Vec<(u8, u8)> = solution
            .iter()
            .flat_map(|placement| placement.squares.iter().copied())
            .collect();
        let distinct: HashSet<(u8, u8)> = covered.iter().copied().collect();
        assert_eq!(distinct.len(), covered.len(), "no square is covered twice");
        assert_eq!(distinct, board, "every board square is covered");

        seen += 1;
    }

    assert_eq!(seen, 3);
}

#[test]
#[cfg_attr(miri, ignore)]
fn boards_too_small_for_twelve_pieces_have_no_tiling() {
    // 5x5 board: 25 squares cannot hold 12 five-square pieces, and the
    // piece items can never all be covered.
    let puzzle = Pentominoes::new(5, 5, &[]);

    assert_eq!(puzzle.coverings().next_solution(), None);
}
