//! Lifeform fixtures and the `.gol`/`.bgol` file codecs.
//!
//! Every fixture returns a freshly constructed grid sized exactly to the
//! pattern's bounding box; callers typically [`merge`](crate::Grid::merge)
//! it into a larger world.

mod ascii;
mod binary;

pub use ascii::{load_ascii, save_ascii};
pub use binary::{load_binary, save_binary};

use crate::{Cell, Grid};

fn from_points(width: usize, height: usize, points: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::with_size(width, height);
    for &(x, y) in points {
        grid[(x, y)] = Cell::Alive;
    }
    grid
}

/// A 3x3 grid containing a [glider](https://www.conwaylife.com/wiki/Glider).
///
/// ```text
/// +---+
/// | # |
/// |  #|
/// |###|
/// +---+
/// ```
pub fn glider() -> Grid {
    from_points(3, 3, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// A 3x3 grid containing an
/// [r-pentomino](https://www.conwaylife.com/wiki/R-pentomino).
///
/// ```text
/// +---+
/// | ##|
/// |## |
/// | # |
/// +---+
/// ```
pub fn r_pentomino() -> Grid {
    from_points(3, 3, &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
}

/// A 5x4 grid containing a
/// [lightweight spaceship](https://www.conwaylife.com/wiki/Lightweight_spaceship).
///
/// ```text
/// +-----+
/// | #  #|
/// |#    |
/// |#   #|
/// |#### |
/// +-----+
/// ```
pub fn light_weight_spaceship() -> Grid {
    from_points(
        5,
        4,
        &[
            (1, 0),
            (4, 0),
            (0, 1),
            (0, 2),
            (4, 2),
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
        ],
    )
}
