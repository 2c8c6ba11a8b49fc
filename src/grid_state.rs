use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// The on/off state of every pixel in the grid, stored row-major.
///
/// Serializes as a bare 2D array of booleans so a saved drawing is just
/// `[[false, true, ...], ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridState {
    cells: Vec<Vec<bool>>,
}

impl GridState {
    /// Create a grid of the given dimensions with every pixel off.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![false; columns]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = on;
        }
    }

    /// Flip a pixel. Out-of-bounds coordinates are ignored. Returns the new
    /// state of the pixel, or false if the coordinates were out of bounds.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = !*cell;
                *cell
            }
            None => false,
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    /// Resize the grid, keeping the state of every pixel that is inside both
    /// the old and the new dimensions.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        self.cells.resize(rows, vec![false; columns]);
        for row in &mut self.cells {
            row.resize(columns, false);
        }
    }

    /// Read a saved drawing from a JSON file. The array must be rectangular.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridStateError> {
        let text = fs::read_to_string(path)?;
        let state: GridState = serde_json::from_str(&text)?;
        let columns = state.columns();
        if state.cells.iter().any(|row| row.len() != columns) {
            return Err(GridStateError::Ragged);
        }
        Ok(state)
    }

    /// Write the current drawing to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GridStateError> {
        let text = serde_json::to_string(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum GridStateError {
    #[error("Unable to read or write the pixel state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid pixel state file: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Pixel state rows do not all have the same length")]
    Ragged,
}
