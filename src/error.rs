use thiserror::Error;

/// Errors reported by grid, world and codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate, window corner or overlay does not fit inside the grid.
    #[error("position ({x}, {y}) is out of range for a {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A crop window whose corners are ordered back to front.
    #[error("window ({x0}, {y0})..({x1}, {y1}) has a negative extent")]
    InvalidRange {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },

    /// The file opened fine but its content does not match the format.
    #[error("malformed file: {0}")]
    MalformedFile(String),

    /// The file could not be opened, read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
