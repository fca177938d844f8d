//! Tile the 8x8 board with the central 2x2 square removed using the
//! twelve pentominoes, then count every distinct tiling.
//!
//! ```bash
//! cargo run --release --example pentominoes
//! ```

use exactcover::pentomino::{Pentominoes, Placement};

fn show(puzzle: &Pentominoes, solution: &[&Placement]) {
    let mut grid = [[' '; 8]; 8];
    for &(x, y) in puzzle.board() {
        grid[y as usize][x as usize] = '.';
    }
    for placement in solution {
        for &(x, y) in &placement.squares {
            grid[y as usize][x as usize] = placement.piece;
        }
    }

    for row in grid {
        println!("{}", row.iter().collect::<String>());
    }
}

fn main() {
    let puzzle = Pentominoes::classic();
    let mut coverings = puzzle.coverings();

    match coverings.next_solution() {
        Some(solution) => {
            println!("Example covering:");
            show(&puzzle, &solution);
        }
        None => {
            println!("No covering exists.");
            return;
        }
    }

    println!(
        "There are {} unique coverings.",
        1 + coverings.count()
    );
}
