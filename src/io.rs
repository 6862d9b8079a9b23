//! File adapters around the solver core.
//!
//! Reading accepts any text file and scans it for digit characters;
//! writing appends the rendered grid to the output path, preserving
//! whatever the file already contains.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use crate::{
    error::{PuzzleError, Result},
    grid::Grid,
};

/// Reads a puzzle from `path`.
///
/// The file's digit characters are taken in sequence and fill the grid
/// row-major (see [`Grid::from_text`]). Fails only if the file itself
/// cannot be read.
pub fn read_puzzle(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Grid::from_text(&text))
}

/// Appends the rendered grid to `path`, creating the file if absent.
///
/// Pre-existing content is preserved; each call adds nine more lines.
pub fn append_grid(path: &Path, grid: &Grid) -> Result<()> {
    let write = |path: &Path| -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write!(file, "{grid}")
    };
    write(path).map_err(|source| PuzzleError::UnwritableOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
