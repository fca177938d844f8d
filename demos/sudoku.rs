//! Run Sudoku solver
//! Usage:
//!
//! ```bash
//! cargo run --release --example sudoku 300080900000340000008005600500104070002009010003000040005001200000000000070008090
//! ```

use exactcover::sudoku::{Placement, Sudoku};

fn print_solution(problem: &str, solution: &[&Placement]) {
    let mut s: Vec<char> = problem.chars().collect();
    for placement in solution {
        s[placement.row * 9 + placement.column] =
            ('0' as usize + placement.value) as u8 as char;
    }
    for i in 0..9 {
        println!("{}", s[i * 9..(i + 1) * 9].iter().collect::<String>());
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("problem needed");
        std::process::exit(1);
    }

    let problem = &args[1];
    if problem.len() != 9 * 9 {
        eprintln!("invalid problem format");
        std::process::exit(1);
    }

    let mut filled = Vec::new();
    for row in 0..9 {
        for column in 0..9 {
            let c = problem.chars().nth(row * 9 + column).unwrap();
            if c != '0' {
                let value = c as usize - '0' as usize;
                filled.push(Placement::new(row, column, value, 3));
            }
        }
    }

    let sudoku = Sudoku::new(3, filled);
    for solution in sudoku.coverings() {
        print_solution(problem, &solution);
        println!();
    }
}
