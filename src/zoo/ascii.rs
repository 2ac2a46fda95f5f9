//! Ascii `.gol` codec.
//!
//! Files are composed of a header line with the width and height as
//! positive integers separated by a space, followed by `height` lines of
//! `width` cell characters each, every line terminated by `\n`.
//! `' '` is a dead cell, `'#'` an alive one.

use crate::{Cell, Error, Grid, Result};
use log::debug;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Loads a grid from an ascii file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, and
/// [`Error::MalformedFile`] if the header is not two positive integers,
/// a row is shorter than the width, a newline terminator is missing, or
/// a cell character is neither `' '` nor `'#'`. A failed load never
/// yields a partially populated grid.
pub fn load_ascii<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let grid = parse_ascii(&data)?;
    debug!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Saves a grid to an ascii file, creating or truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn save_ascii<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(fs::File::create(path)?);
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| char::from(grid[(x, y)]))
            .collect();
        writeln!(writer, "{}", row)?;
    }
    writer.flush()?;
    debug!(
        "saved {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

fn malformed(message: impl Into<String>) -> Error {
    Error::MalformedFile(message.into())
}

fn parse_header(data: &[u8]) -> Result<(usize, usize, usize)> {
    let header_end = data
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| malformed("missing header line"))?;
    let header = std::str::from_utf8(&data[..header_end])
        .map_err(|_| malformed("header is not valid ascii"))?;
    let (width, height) = header
        .split_once(' ')
        .ok_or_else(|| malformed("header must be \"<width> <height>\""))?;
    let width: usize = width
        .parse()
        .map_err(|_| malformed(format!("width {:?} is not a positive integer", width)))?;
    let height: usize = height
        .parse()
        .map_err(|_| malformed(format!("height {:?} is not a positive integer", height)))?;
    if width == 0 || height == 0 {
        return Err(malformed("width and height must be positive"));
    }
    Ok((width, height, header_end + 1))
}

fn parse_ascii(data: &[u8]) -> Result<Grid> {
    let (width, height, mut pos) = parse_header(data)?;
    let mut grid = Grid::with_size(width, height);
    for y in 0..height {
        let row = data
            .get(pos..pos + width)
            .ok_or_else(|| malformed(format!("row {} is shorter than {} cells", y, width)))?;
        for (x, &b) in row.iter().enumerate() {
            match Cell::from_char(b as char) {
                Some(cell) => grid[(x, y)] = cell,
                None => {
                    return Err(malformed(format!(
                        "unexpected cell character {:?} at ({}, {})",
                        b as char, x, y
                    )))
                }
            }
        }
        match data.get(pos + width) {
            Some(b'\n') => {}
            _ => return Err(malformed(format!("row {} is missing its newline", y))),
        }
        pos += width + 1;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn parses_golden_file() {
        let grid = parse_ascii(b"3 2\n# #\n # \n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[(0, 0)], Cell::Alive);
        assert_eq!(grid[(1, 0)], Cell::Dead);
        assert_eq!(grid[(2, 0)], Cell::Alive);
        assert_eq!(grid[(1, 1)], Cell::Alive);
        assert_eq!(grid.alive_cells(), 3);
    }

    #[test]
    fn rejects_bad_headers() {
        for data in [
            &b""[..],
            b"3 2",
            b"32\n",
            b"x 2\n",
            b"3 x\n",
            b"-3 2\n",
            b"0 2\n",
            b"3 0\n",
            b"3 2 1\n",
        ] {
            assert!(
                matches!(parse_ascii(data), Err(Error::MalformedFile(_))),
                "accepted {:?}",
                String::from_utf8_lossy(data)
            );
        }
    }

    #[test]
    fn rejects_bad_bodies() {
        // short row, missing terminator, foreign cell character, missing row
        for data in [&b"3 2\n# \n # \n"[..], b"3 2\n# #\n # ", b"3 2\n#x#\n # \n", b"3 2\n# #\n"] {
            assert!(
                matches!(parse_ascii(data), Err(Error::MalformedFile(_))),
                "accepted {:?}",
                String::from_utf8_lossy(data)
            );
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let grid = parse_ascii(b"2 1\n##\nleftover").unwrap();
        assert_eq!(grid.alive_cells(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_ascii(temp_path("gol_world_no_such_file.gol"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn round_trips_through_disk() {
        let path = temp_path("gol_world_ascii_roundtrip.gol");
        let ship = zoo::light_weight_spaceship();
        save_ascii(&path, &ship).unwrap();
        let loaded = load_ascii(&path).unwrap();
        assert_eq!(loaded, ship);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn saved_bytes_match_layout() {
        let path = temp_path("gol_world_ascii_layout.gol");
        let mut grid = Grid::with_size(3, 2);
        grid[(0, 0)] = Cell::Alive;
        grid[(2, 0)] = Cell::Alive;
        grid[(1, 1)] = Cell::Alive;
        save_ascii(&path, &grid).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"3 2\n# #\n # \n");
        std::fs::remove_file(&path).unwrap();
    }
}
