use exactcover::sudoku::{Placement, Sudoku};

/// Generate a Sudoku puzzle from an input string.
///
/// # Expected Format
///  - 0 denotes an empty value
///  - The numbers are presented in row-major order. So the first
///    `side_length` numbers are the first row, the second `side_length`
///    numbers are the second row, etc.
///
/// # Panics
///  - If the string is not exactly `side_length` * `side_length` characters
///  - If any character in the string is not [0-9]
#[allow(dead_code)]
pub fn parse_sudoku_placements(sudoku_input: &str, box_side_length: usize) -> Sudoku {
    let side_length = box_side_length * box_side_length;

    log::debug!(
        "Parsing sudoku puzzle input [{}] for side length [{}].",
        sudoku_input,
        side_length
    );

    assert_eq!(
        sudoku_input.len(),
        side_length * side_length,
        "Input needs to be `side_length` * `side_length` characters long."
    );

    let filled_values: Vec<_> = sudoku_input
        .char_indices()
        .filter_map(|(index, c)| {
            let value = c.to_digit(10).expect("Input must be digits only.");
            if value == 0 {
                None
            } else {
                let row = index / side_length;
                let column = index % side_length;

                Some(Placement::new(
                    row,
                    column,
                    usize::try_from(value).unwrap(),
                    box_side_length,
                ))
            }
        })
        .collect();

    log::debug!("Generated filled_values [{:?}].", filled_values);

    Sudoku::new(box_side_length, filled_values)
}

/// Format a list of sudoku placements into a string format matching the
/// input of `parse_sudoku_placements`.
///
/// See `parse_sudoku_placements` documentation for details.
///
/// # Panics
///  - Panics if there is more than one `Placement` with the same (row,
///    column) values.
///  - Panics if any of the `Placement.value` has more than a single digit.
#[allow(dead_code)]
pub fn format_sudoku_placements<'a>(
    placements: impl IntoIterator<Item = &'a Placement>,
    box_side_length: usize,
) -> String {
    let side_length = box_side_length * box_side_length;
    let mut output = vec![b'0'; side_length * side_length];

    for placement in placements {
        let index = placement.row * side_length + placement.column;
        if output[index] == b'0' {
            let formatted_value = placement.value.to_string();
            assert_eq!(formatted_value.len(), 1);
            output[index] = formatted_value.as_bytes()[0];
        } else {
            panic!(
                "Overwriting an existing value [{}] with [{}] at position [{},{}]",
                output[index], placement.value, placement.row, placement.column
            );
        }
    }

    String::from_utf8(output).unwrap()
}
