/// Single coordinate axis, used for rows, columns, width and height.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Grid position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row and column offsets of the eight surrounding cells, in row-major order.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn offset((row, col): Coord2, (d_row, d_col): (i8, i8), (rows, cols): Coord2) -> Option<Coord2> {
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    (row < rows && col < cols).then_some((row, col))
}

/// Iterator over the in-bounds neighbors of a cell.
///
/// Owns its bounds, so it can be held while the grid it was created from is mutated.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    shape: Coord2,
    next: usize,
}

impl Neighbors {
    /// `shape` is `(rows, cols)`.
    pub const fn new(center: Coord2, shape: Coord2) -> Self {
        Self {
            center,
            shape,
            next: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(pos) = offset(self.center, delta, self.shape) {
                return Some(pos);
            }
        }
        None
    }
}
