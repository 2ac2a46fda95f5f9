//! Binary `.bgol` codec.
//!
//! Files start with the width and height as little-endian `u32`, followed
//! by `ceil(width * height / 8)` bytes of cell bits. Cells are packed
//! row-major in increasing flat index; within each byte the first packed
//! cell occupies the most significant bit, and a partially filled final
//! byte is zero-padded in its low-order bits.

use crate::{Cell, Error, Grid, Result};
use log::debug;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER_LEN: usize = 8;

/// Loads a grid from a binary file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, and
/// [`Error::MalformedFile`] if the stream holds fewer bytes than the
/// header plus the packed cell payload. Trailing extra bytes are ignored.
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let grid = parse_binary(&data)?;
    debug!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Saves a grid to a binary file, creating or truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn save_binary<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(fs::File::create(path)?);
    writer.write_all(&(grid.width() as u32).to_le_bytes())?;
    writer.write_all(&(grid.height() as u32).to_le_bytes())?;
    writer.write_all(&pack_cells(grid))?;
    writer.flush()?;
    debug!(
        "saved {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

fn pack_cells(grid: &Grid) -> Vec<u8> {
    let total = grid.total_cells();
    let mut packed = vec![0u8; total.div_ceil(8)];
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid[(x, y)].is_alive() {
                let i = y * grid.width() + x;
                packed[i / 8] |= 1 << (7 - i % 8);
            }
        }
    }
    packed
}

fn parse_binary(data: &[u8]) -> Result<Grid> {
    if data.len() < HEADER_LEN {
        return Err(Error::MalformedFile(format!(
            "header needs {} bytes, found {}",
            HEADER_LEN,
            data.len()
        )));
    }
    let width = u32::from_le_bytes(data[0..4].try_into().unwrap()) as usize;
    let height = u32::from_le_bytes(data[4..8].try_into().unwrap()) as usize;
    let payload = (width * height).div_ceil(8);
    if data.len() < HEADER_LEN + payload {
        return Err(Error::MalformedFile(format!(
            "a {}x{} grid needs {} bytes, found {}",
            width,
            height,
            HEADER_LEN + payload,
            data.len()
        )));
    }
    let mut grid = Grid::with_size(width, height);
    for i in 0..width * height {
        let byte = data[HEADER_LEN + i / 8];
        if (byte >> (7 - i % 8)) & 1 == 1 {
            grid[(i % width, i / width)] = Cell::Alive;
        }
    }
    Ok(grid)
}
