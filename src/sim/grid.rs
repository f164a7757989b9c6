//! Fixed placement grid and cursor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Pulse;
use crate::consts::GRID_SIZE;

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Integer cell coordinate, always inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

impl CellCoord {
    /// Build a coordinate, returning `None` outside the grid
    pub fn new(col: usize, row: usize) -> Option<Self> {
        (col < GRID_SIZE && row < GRID_SIZE).then_some(Self { col, row })
    }

    /// Move one cell in `dir`, staying put at the grid edge
    pub fn step(self, dir: Direction) -> Self {
        let last = GRID_SIZE - 1;
        let mut next = self;
        match dir {
            Direction::Up => next.row = self.row.saturating_sub(1),
            Direction::Down => next.row = (self.row + 1).min(last),
            Direction::Left => next.col = self.col.saturating_sub(1),
            Direction::Right => next.col = (self.col + 1).min(last),
        }
        next
    }

    /// World position of this cell's origin
    pub fn world_origin(self) -> Vec2 {
        crate::cell_origin(self.col, self.row)
    }
}

/// 5x5 grid of optional pulse slots, indexed `[row][col]`.
///
/// A slot keeps its pulse after expiry; only [`Grid::clear`] frees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<Pulse>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, at: CellCoord) -> Option<&Pulse> {
        self.cells[at.row][at.col].as_ref()
    }

    pub fn is_occupied(&self, at: CellCoord) -> bool {
        self.get(at).is_some()
    }

    /// Store `pulse` in an empty cell. Returns false (and drops the pulse)
    /// if the cell is already occupied, expired or not.
    pub fn place(&mut self, at: CellCoord, pulse: Pulse) -> bool {
        let slot = &mut self.cells[at.row][at.col];
        if slot.is_some() {
            return false;
        }
        *slot = Some(pulse);
        true
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = Default::default();
    }

    /// Occupied cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &Pulse)> {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter_map(move |(col, slot)| slot.as_ref().map(|p| (CellCoord { col, row }, p)))
        })
    }

    pub fn pulses_mut(&mut self) -> impl Iterator<Item = &mut Pulse> {
        self.cells.iter_mut().flatten().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().count()
    }
}
