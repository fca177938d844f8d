#![no_main]

use exactcover::Coverings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Vec<Vec<u8>>| {
    // Keep the instance small enough that full enumeration terminates:
    // a handful of rows over a 16-element universe. Elements within a row
    // are deduplicated to honor the distinctness contract.
    let rows: Vec<Vec<u8>> = input
        .into_iter()
        .take(8)
        .map(|row| {
            let mut row: Vec<u8> = row.into_iter().take(16).map(|e| e % 16).collect();
            row.sort_unstable();
            row.dedup();
            row
        })
        .collect();

    let coverings = Coverings::new(&rows);
    let universe_len = coverings.universe().len();

    for solution in coverings {
        let mut covered: Vec<u8> = solution
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();
        let total = covered.len();
        covered.sort_unstable();
        covered.dedup();

        assert_eq!(covered.len(), total, "rows of a cover must be disjoint");
        assert_eq!(covered.len(), universe_len, "a cover must span the universe");
    }
});
