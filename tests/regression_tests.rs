mod common;

use common::parse_sudoku_placements;

#[test]
#[ignore = "test takes upwards of 300 seconds when running not in release mode"]
fn sparse_puzzle_first_solution() {
    env_logger::init();

    // A sparsely clued grid whose first completion only falls out after
    // deep backtracking; finding it must terminate rather than wedge the
    // search.
    let sudoku_input =
        "300080900000340000008005600500104070002009010003000040005001200000000000070008090";

    let puzzle = parse_sudoku_placements(sudoku_input, 3);
    log::debug!("Open placements:\n{:?}", puzzle.placements);
    let mut coverings = puzzle.coverings();

    let solution = coverings.next_solution();

    assert!(solution.is_some());
}
