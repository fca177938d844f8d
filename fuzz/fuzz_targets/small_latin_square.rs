#![no_main]

use exactcover::latin_square::LatinSquare;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|puzzle: LatinSquare| {
    // Arbitrary placement lists can describe wildly over-constrained or
    // under-constrained squares; enumeration must stay memory safe and
    // every cover must be disjoint. Cap the walk so degenerate instances
    // with huge solution counts terminate.
    for solution in puzzle.coverings().take(256) {
        let mut covered: Vec<_> = solution
            .iter()
            .flat_map(|placement| placement.satisfied_constraints())
            .collect();
        let total = covered.len();
        covered.sort();
        covered.dedup();
        assert_eq!(covered.len(), total);
    }
});
