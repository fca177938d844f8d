mod links;

use self::links::Links;

/// The sparse 0/1 incidence matrix as a toroidal doubly-linked structure.
///
/// Every node lives in the bump arena; the circular lists only ever
/// reference arena memory, so the structure can be moved freely and is
/// freed wholesale when the matrix is dropped. During search nodes are
/// unlinked and relinked in place, never allocated or freed.
#[derive(Debug)]
pub(crate) struct Matrix {
    // Sentinel heading the horizontal list of column headers. Its own
    // vertical list stays empty and it is never covered.
    root: *mut Header,

    arena: bumpalo::Bump,
    // Every header ever created, indexed by label. Covered columns stay
    // in this table; only the lists reachable from `root` reflect the
    // live matrix.
    columns: Vec<*mut Header>,
}

impl Matrix {
    pub(crate) fn new() -> Self {
        let arena = bumpalo::Bump::new();
        let root = Header::new(&arena, usize::MAX);

        Matrix {
            root,
            arena,
            columns: Vec::new(),
        }
    }

    /// Append a fresh column at the right end of the header list and
    /// return its label index.
    pub(crate) fn add_column(&mut self) -> usize {
        let label = self.columns.len();
        let header = Header::new(&self.arena, label);

        Links::insert_left_of(header.cast(), self.root.cast());
        self.columns.push(header);

        label
    }

    /// Insert one row of cells, one per column label in `columns`.
    ///
    /// Each cell is appended at the bottom of its column, and the row's
    /// cells are chained so that a rightward traversal visits them in the
    /// order given here.
    pub(crate) fn add_row(&mut self, row: usize, columns: &[usize]) {
        debug_assert!(!columns.is_empty(), "empty rows never enter the matrix");

        let mut first: Option<*mut Cell> = None;
        for &label in columns {
            let header = self.columns[label];
            let cell = Cell::new(&self.arena, row, header);

            Links::insert_above(cell.cast(), header.cast());
            match first {
                None => first = Some(cell),
                Some(anchor) => Links::insert_left_of(cell.cast(), anchor.cast()),
            }
        }
    }

    /// Number of columns ever created; also the maximum search depth.
    pub(crate) fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The uncovered column with the fewest cells, or `None` when no
    /// columns remain (the solved state). Ties go to the leftmost, i.e.
    /// earliest-inserted, column.
    pub(crate) fn smallest_column(&self) -> Option<*mut Header> {
        let mut smallest: Option<*mut Header> = None;

        for header in links::rightward(self.root.cast()) {
            let header = header.cast::<Header>();
            match smallest {
                Some(best) if unsafe { (*best).count <= (*header).count } => {}
                _ => smallest = Some(header),
            }
        }

        smallest
    }

    /// Cover the column of every cell in `cell`'s row, starting with
    /// `cell`'s own column and proceeding rightward.
    pub(crate) fn cover_row(cell: *mut Cell) {
        Header::cover(Cell::header_of(cell));
        for other in links::rightward(cell.cast()) {
            Header::cover(Cell::header_of(other.cast()));
        }
    }

    /// Exact inverse of [`Matrix::cover_row`]: uncover leftward from
    /// `cell.left`, finishing with `cell`'s own column.
    pub(crate) fn uncover_row(cell: *mut Cell) {
        for other in links::leftward(cell.cast()) {
            Header::uncover(Cell::header_of(other.cast()));
        }
        Header::uncover(Cell::header_of(cell));
    }

    /// Snapshot of the live matrix as `(row, column label)` pairs, in
    /// column-then-top-to-bottom order. Two matrices in the same state
    /// produce identical snapshots.
    pub(crate) fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();

        for header in links::rightward(self.root.cast()) {
            let label = unsafe { (*header.cast::<Header>()).label };
            for cell in links::downward(header) {
                cells.push((unsafe { (*cell.cast::<Cell>()).row }, label));
            }
        }

        cells
    }

    /// Verify every circular-list identity and column count of the live
    /// structure. Panics on the first violation.
    pub(crate) fn assert_links_consistent(&self) {
        unsafe {
            let root = self.root.cast::<Links>();
            assert_eq!((*root).up, root, "root vertical list must stay empty");
            assert_eq!((*root).down, root, "root vertical list must stay empty");

            for header in links::rightward(root) {
                assert_eq!((*(*header).left).right, header);
                assert_eq!((*(*header).right).left, header);

                let mut cells = 0;
                for cell in links::downward(header) {
                    assert_eq!((*(*cell).up).down, cell);
                    assert_eq!((*(*cell).down).up, cell);
                    assert_eq!((*(*cell).left).right, cell);
                    assert_eq!((*(*cell).right).left, cell);
                    assert_eq!(
                        Cell::header_of(cell.cast()).cast::<Links>(),
                        header,
                        "cell must point back at the header it is linked under",
                    );
                    cells += 1;
                }
                assert_eq!(
                    (*header.cast::<Header>()).count,
                    cells,
                    "header count must match its vertical list length",
                );
            }
        }
    }
}

/// An ordinary matrix cell: one `1` entry of the incidence matrix.
#[derive(Debug)]
#[repr(C)]
pub(crate) struct Cell {
    links: Links,

    // Index of the input row this cell belongs to. Every cell of one row
    // carries the same index; it is the row identifier surfaced in
    // solutions.
    row: usize,
    header: *mut Header,
}

impl Cell {
    fn new(arena: &bumpalo::Bump, row: usize, header: *mut Header) -> *mut Self {
        unsafe { (*header).count += 1 };

        let cell = arena.alloc(Cell {
            links: Links::new(),
            row,
            header,
        });

        cell.links.link_to_self();

        cell
    }

    pub(crate) fn row_index(cell: *mut Cell) -> usize {
        unsafe { (*cell).row }
    }

    pub(crate) fn header_of(cell: *mut Cell) -> *mut Header {
        unsafe { (*cell).header }
    }

    /// The next cell down in this cell's column, or `None` once the walk
    /// reaches the column's header sentinel.
    pub(crate) fn next_in_column(cell: *mut Cell) -> Option<*mut Cell> {
        let below = unsafe { (*cell).links.down };
        if below == Cell::header_of(cell).cast() {
            None
        } else {
            Some(below.cast())
        }
    }

    /// Unlink every *other* cell of this cell's row from its column,
    /// decrementing the counts. The cell itself stays linked so the
    /// column that discovered it can still reach it.
    fn hide(cell: *mut Cell) {
        for other in links::rightward(cell.cast()) {
            let other = other.cast::<Cell>();

            unsafe { (*(*other).header).count -= 1 };
            Links::remove_vertical(other.cast());
        }
    }

    /// Exact inverse of [`Cell::hide`], walking leftward.
    fn unhide(cell: *mut Cell) {
        for other in links::leftward(cell.cast()) {
            let other = other.cast::<Cell>();

            unsafe { (*(*other).header).count += 1 };
            Links::restore_vertical(other.cast());
        }
    }
}

/// A column header: a specialized node whose vertical list is the column
/// it heads.
#[derive(Debug)]
#[repr(C)]
pub(crate) struct Header {
    links: Links,

    // Number of ordinary cells currently linked into this column.
    count: usize,
    // Index of the universe element this column covers.
    label: usize,
    covered: bool,
}

impl Header {
    fn new(arena: &bumpalo::Bump, label: usize) -> *mut Self {
        let header = arena.alloc(Header {
            links: Links::new(),
            count: 0,
            label,
            covered: false,
        });

        header.links.link_to_self();

        header
    }

    pub(crate) fn count(header: *mut Header) -> usize {
        unsafe { (*header).count }
    }

    /// The topmost cell of this column. Only meaningful when the count is
    /// at least one.
    pub(crate) fn first_cell(header: *mut Header) -> *mut Cell {
        unsafe { (*header).links.down.cast() }
    }

    /// Remove this column and every row with a cell in it from the
    /// matrix, preserving each unlinked node's own pointers so
    /// [`Header::uncover`] can restore the exact previous state.
    pub(crate) fn cover(header: *mut Header) {
        unsafe {
            debug_assert!(!(*header).covered, "cover/uncover must pair LIFO");
            (*header).covered = true;
        }

        Links::remove_horizontal(header.cast());
        for cell in links::downward(header.cast()) {
            Cell::hide(cell.cast());
        }
    }

    /// Exact inverse of [`Header::cover`]: walk `up` then `left` so every
    /// relink happens in the reverse of the order its unlink happened.
    pub(crate) fn uncover(header: *mut Header) {
        unsafe {
            debug_assert!((*header).covered, "cover/uncover must pair LIFO");
            (*header).covered = false;
        }

        for cell in links::upward(header.cast()) {
            Cell::unhide(cell.cast());
        }
        Links::restore_horizontal(header.cast());
    }
}
