use crate::{Cell, Grid, Topology};

/// A double-buffered Game of Life automaton over a finite grid.
///
/// Holds two equally sized grids for the current and next generation.
/// Every [`step`](World::step) derives `next` entirely from the pre-step
/// `current`, then exchanges the buffers by ownership in O(1). The grid
/// dimensions of both buffers match at all times.
#[derive(Clone, Debug)]
pub struct World {
    current: Grid,
    next: Grid,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty 0x0 world.
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    /// Creates a square world with every cell dead.
    pub fn square(size: usize) -> Self {
        Self::with_size(size, size)
    }

    /// Creates a `width x height` world with every cell dead.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            current: Grid::with_size(width, height),
            next: Grid::with_size(width, height),
        }
    }

    /// Creates a world whose first generation is `initial_state`.
    ///
    /// The grid is taken by value and becomes the current buffer; the
    /// next buffer starts dead at the same size.
    pub fn from_grid(initial_state: Grid) -> Self {
        let next = Grid::with_size(initial_state.width(), initial_state.height());
        Self {
            current: initial_state,
            next,
        }
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Total number of cells in the current generation.
    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    /// Number of alive cells in the current generation.
    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }

    /// Number of dead cells in the current generation.
    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// Borrows the current generation without copying.
    pub fn get_state(&self) -> &Grid {
        &self.current
    }

    /// Resizes the world, preserving current content per [`Grid::resize`].
    ///
    /// The next buffer is replaced by a fresh dead grid; its content is
    /// overwritten wholesale on the following step anyway.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        self.current.resize(new_width, new_height);
        self.next = Grid::with_size(new_width, new_height);
    }

    /// Counts alive cells among the 8 neighbours of `(x, y)` in the
    /// current generation. The centre cell is not its own neighbour.
    ///
    /// `Closed` treats out-of-bounds coordinates as dead. `Torus` wraps
    /// them; a wrapped neighbour is counted once per offset that reaches
    /// it, so tiny grids can see the same cell several times.
    fn count_neighbours(&self, x: usize, y: usize, topology: Topology) -> u8 {
        let (width, height) = (self.width() as i64, self.height() as i64);
        let mut alive = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (mut nx, mut ny) = (x as i64 + dx, y as i64 + dy);
                match topology {
                    Topology::Torus => {
                        nx = nx.rem_euclid(width);
                        ny = ny.rem_euclid(height);
                    }
                    Topology::Closed => {
                        if nx < 0 || ny < 0 || nx >= width || ny >= height {
                            continue;
                        }
                    }
                }
                if self.current[(nx as usize, ny as usize)].is_alive() {
                    alive += 1;
                }
            }
        }
        alive
    }

    /// Advances one generation under the standard B3/S23 rule.
    ///
    /// An alive cell survives with 2 or 3 alive neighbours; a dead cell
    /// is born with exactly 3; everything else is dead. After the whole
    /// next generation is computed the buffers are swapped by ownership,
    /// so the old current grid becomes scratch space for the following
    /// step without being re-zeroed.
    pub fn step(&mut self, topology: Topology) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let alive = self.count_neighbours(x, y, topology);
                self.next[(x, y)] = match (self.current[(x, y)], alive) {
                    (Cell::Alive, 2) | (_, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Applies [`step`](World::step) exactly `steps` times.
    pub fn advance(&mut self, steps: usize, topology: Topology) {
        for _ in 0..steps {
            self.step(topology);
        }
    }
}
