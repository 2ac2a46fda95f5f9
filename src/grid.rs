use crate::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// State of a single cell.
///
/// Rendered as `' '` (dead) and `'#'` (alive) by the text formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Maps the two display characters back to a cell state.
    /// Returns `None` for any other character.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' => Some(Cell::Dead),
            '#' => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        match cell {
            Cell::Dead => ' ',
            Cell::Alive => '#',
        }
    }
}

/// A dense rectangular grid of cells.
///
/// Cells are stored in a single flat buffer in row-major order, addressed
/// by `y * width + x` with `x` the column in `[0, width)` and `y` the row
/// in `[0, height)`. The buffer length always equals `width * height`;
/// every operation that changes the dimensions rebuilds the buffer in the
/// same step, so a partially resized grid is never observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty 0x0 grid.
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    /// Creates a square grid with every cell dead.
    pub fn square(size: usize) -> Self {
        Self::with_size(size, size)
    }

    /// Creates a `width x height` grid with every cell dead.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of alive cells.
    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of dead cells.
    pub fn dead_cells(&self) -> usize {
        self.total_cells() - self.alive_cells()
    }

    /// Flat offset of `(x, y)`. Callers must have bounds-checked already.
    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn out_of_range(&self, x: usize, y: usize) -> Error {
        Error::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        if !self.contains(x, y) {
            return Err(self.out_of_range(x, y));
        }
        Ok(self.cells[self.index_of(x, y)])
    }

    /// Overwrites the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<()> {
        if !self.contains(x, y) {
            return Err(self.out_of_range(x, y));
        }
        let idx = self.index_of(x, y);
        self.cells[idx] = value;
        Ok(())
    }

    /// Resizes the grid in place to `new_width x new_height`.
    ///
    /// Content of the overlapping top-left region is preserved; cells in
    /// any newly introduced area start dead, and cells outside the new
    /// bounds are discarded.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let mut cells = vec![Cell::Dead; new_width * new_height];
        for y in 0..self.height.min(new_height) {
            for x in 0..self.width.min(new_width) {
                cells[y * new_width + x] = self.cells[self.index_of(x, y)];
            }
        }
        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
    }

    /// Extracts the half-open window `[x0, x1) x [y0, y1)` as a new grid.
    ///
    /// Cell `(i, j)` of the result equals cell `(x0 + i, y0 + j)` of the
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the exclusive corner `(x1, y1)`
    /// exceeds the grid bounds, and [`Error::InvalidRange`] if the corners
    /// are ordered back to front (`x1 < x0` or `y1 < y0`).
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<Grid> {
        if x1 > self.width || y1 > self.height {
            return Err(self.out_of_range(x1, y1));
        }
        if x1 < x0 || y1 < y0 {
            return Err(Error::InvalidRange { x0, y0, x1, y1 });
        }
        let mut cropped = Grid::with_size(x1 - x0, y1 - y0);
        for j in 0..cropped.height {
            for i in 0..cropped.width {
                cropped.cells[j * cropped.width + i] =
                    self.cells[self.index_of(x0 + i, y0 + j)];
            }
        }
        Ok(cropped)
    }

    /// Overlays `other` onto this grid with its top-left corner at
    /// `(x0, y0)`.
    ///
    /// An alive source cell always makes the destination alive. A dead
    /// source cell makes the destination dead only when `alive_only` is
    /// false; with `alive_only` set, the destination keeps its previous
    /// value, so an alive cell can never be killed by the merge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `other` does not fit entirely
    /// inside this grid from that origin. Nothing is written on failure.
    pub fn merge(&mut self, other: &Grid, x0: usize, y0: usize, alive_only: bool) -> Result<()> {
        if x0 + other.width > self.width || y0 + other.height > self.height {
            return Err(self.out_of_range(x0 + other.width, y0 + other.height));
        }
        for j in 0..other.height {
            for i in 0..other.width {
                let src = other.cells[j * other.width + i];
                if src.is_alive() || !alive_only {
                    let idx = self.index_of(x0 + i, y0 + j);
                    self.cells[idx] = src;
                }
            }
        }
        Ok(())
    }

    /// Returns a copy of the grid rotated by `rotation * 90` degrees
    /// clockwise.
    ///
    /// Any integer is accepted; only `rotation.rem_euclid(4)` matters, so
    /// `rotate(-1)`, `rotate(3)` and `rotate(7)` all produce the same grid
    /// through the same code path. Odd rotations swap the dimensions.
    pub fn rotate(&self, rotation: i32) -> Grid {
        let turns = rotation.rem_euclid(4);
        let (width, height) = match turns {
            1 | 3 => (self.height, self.width),
            _ => (self.width, self.height),
        };
        let mut rotated = Grid::with_size(width, height);
        for y in 0..self.height {
            for x in 0..self.width {
                let (nx, ny) = match turns {
                    0 => (x, y),
                    1 => (self.height - 1 - y, x),
                    2 => (self.width - 1 - x, self.height - 1 - y),
                    _ => (y, self.width - 1 - x),
                };
                rotated.cells[ny * width + nx] = self.cells[self.index_of(x, y)];
            }
        }
        rotated
    }

    /// Overwrites every cell independently, alive with probability
    /// `fill_rate`.
    ///
    /// `seed` makes the fill reproducible; `None` seeds from the OS.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        let mut rng = match seed {
            Some(x) => rand_chacha::ChaCha8Rng::seed_from_u64(x),
            None => rand_chacha::ChaCha8Rng::from_entropy(),
        };
        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(fill_rate) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }
}

/// Unchecked reference access, `grid[(x, y)]`.
///
/// Panics if the coordinate lies outside the grid, like slice indexing;
/// use [`Grid::get`] for the fallible form.
impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(
            self.contains(x, y),
            "position ({}, {}) is out of range for a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        &self.cells[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Cell {
        assert!(
            self.contains(x, y),
            "position ({}, {}) is out of range for a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.index_of(x, y);
        &mut self.cells[idx]
    }
}

/// Renders the grid wrapped in a `+`/`-`/`|` border, one character per
/// cell, `height + 2` newline-terminated lines in total.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border: String = "-".repeat(self.width);
        writeln!(f, "+{}+", border)?;
        for y in 0..self.height {
            let row: String = self.cells[y * self.width..(y + 1) * self.width]
                .iter()
                .map(|&c| char::from(c))
                .collect();
            writeln!(f, "|{}|", row)?;
        }
        writeln!(f, "+{}+", border)
    }
}
