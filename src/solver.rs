use crate::{
    matrix::{Cell, Header, Matrix},
    Subset,
};

/// A resumable enumerator over the exact covers of a collection of
/// subsets.
///
/// The universe is implicit: it is the union of the elements of every
/// row, with membership decided by `PartialEq` on the element type. Each
/// call to [`Iterator::next`] resumes the depth-first search where the
/// previous solution left it and runs until the next solution or
/// exhaustion, so enumeration costs are paid per solution, not up front.
///
/// Solutions are yielded in a deterministic order fixed by the input:
/// the branching column is the one with the fewest live rows (leftmost
/// wins ties), rows within a column are tried top to bottom, and columns
/// and cells are laid out in input order. Rows and elements are captured
/// by reference and should be treated as frozen until enumeration ends.
#[derive(Debug)]
pub struct Coverings<'r, R: Subset> {
    rows: &'r [R],
    universe: Vec<R::Element>,
    matrix: Matrix,

    // The row chosen at each depth of the current search branch. Capacity
    // is fixed at the column count; the search allocates nothing else.
    solution: Vec<*mut Cell>,
    first: bool,
}

/// Outcome of one solving step.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    // Some of the universe is still uncovered; a row was chosen and
    // covered, step again.
    Continue,
    // A universe element can no longer be covered; backtrack.
    Backup,
    // Every column is covered; the solution stack is a covering.
    Solution,
}

impl<'r, R> Coverings<'r, R>
where
    R: Subset,
{
    /// Build the sparse matrix for `rows` and return an iterator over its
    /// exact covers.
    ///
    /// Universe elements are interned in first-seen order by a linear
    /// equality scan, and each row's cells are linked in the order its
    /// elements appear. Rows with no elements are dropped; they cannot
    /// contribute to any cover. The elements of a single row must be
    /// pairwise distinct.
    pub fn new(rows: &'r [R]) -> Self {
        let mut universe: Vec<R::Element> = Vec::new();
        let mut matrix = Matrix::new();
        let mut columns: Vec<usize> = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let elements = row.elements();
            if elements.is_empty() {
                continue;
            }

            columns.clear();
            for element in elements {
                let label = match universe.iter().position(|known| *known == element) {
                    Some(label) => label,
                    None => {
                        universe.push(element);
                        matrix.add_column()
                    }
                };
                columns.push(label);
            }
            matrix.add_row(index, &columns);
        }

        debug_assert_eq!(universe.len(), matrix.column_count());
        log::debug!(
            "built cover matrix: {} rows, {} columns",
            rows.len(),
            matrix.column_count()
        );

        let depth_limit = matrix.column_count();
        Coverings {
            rows,
            universe,
            matrix,
            solution: Vec::with_capacity(depth_limit),
            first: true,
        }
    }

    /// The distinct universe elements, in first-seen order.
    pub fn universe(&self) -> &[R::Element] {
        &self.universe
    }

    /// Resume the search and produce the next exact cover, or `None` once
    /// every cover has been yielded. After exhaustion every further call
    /// returns `None`; the iterator is not resettable.
    pub fn next_solution(&mut self) -> Option<Vec<&'r R>> {
        // Every solution is yielded with the matrix left in its covered
        // state, so each new call first backs out of the previous one.
        if self.first {
            self.first = false;
        } else if !self.backtrack() {
            return None;
        }

        loop {
            match self.step() {
                Step::Continue => {}
                Step::Backup => {
                    if !self.backtrack() {
                        return None;
                    }
                }
                Step::Solution => {
                    log::trace!("covering found at depth {}", self.solution.len());
                    return Some(
                        self.solution
                            .iter()
                            .map(|&cell| &self.rows[Cell::row_index(cell)])
                            .collect(),
                    );
                }
            }
        }
    }

    /// Run the enumeration to exhaustion and collect every cover.
    pub fn all_solutions(&mut self) -> Vec<Vec<&'r R>> {
        self.collect()
    }

    fn step(&mut self) -> Step {
        let column = match self.matrix.smallest_column() {
            Some(column) => column,
            None => return Step::Solution,
        };
        if Header::count(column) == 0 {
            return Step::Backup;
        }

        let row = Header::first_cell(column);
        Matrix::cover_row(row);
        self.solution.push(row);

        Step::Continue
    }

    /// Undo the most recent choice and advance to the next candidate row
    /// in the same column, unwinding further levels as columns exhaust.
    /// Returns `false` when the whole tree has been explored.
    ///
    /// A sibling row is only covered after the previous sibling's cover
    /// has been fully undone, so the matrix state at a given depth is
    /// identical no matter which sibling is about to be tried.
    fn backtrack(&mut self) -> bool {
        while let Some(&row) = self.solution.last() {
            Matrix::uncover_row(row);

            match Cell::next_in_column(row) {
                // The column is exhausted at this depth; unwind a level.
                None => {
                    self.solution.pop();
                }
                Some(next) => {
                    Matrix::cover_row(next);
                    *self.solution.last_mut().unwrap() = next;
                    return true;
                }
            }
        }

        false
    }
}

impl<'r, R> Iterator for Coverings<'r, R>
where
    R: Subset,
{
    type Item = Vec<&'r R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
