use super::Slot;
use crate::block_puzzle::prelude::*;

impl Board {
    /// Gets the slot at a given coordinate.
    pub fn get(&self, coord: &Coord) -> Result<&Slot> {
        if coord.in_bounds(self.columns(), self.rows()) {
            Ok(&self.slots[self.index(coord)])
        } else {
            Err(anyhow!("invalid coordinate {coord}"))
        }
    }

    /// Whether the cell at a given coordinate is occupied.
    pub fn occupied(&self, coord: &Coord) -> Result<bool> {
        if coord.in_bounds(self.columns(), self.rows()) {
            Ok(self.occupied_unchecked(coord))
        } else {
            Err(anyhow!("invalid coordinate {coord}"))
        }
    }
}

impl Board {
    /// Linear index of a coordinate; bounds are the caller's problem.
    pub(super) fn index(&self, coord: &Coord) -> usize {
        coord.y * self.columns() + coord.x
    }

    /// Unchecked occupancy read; engine use only.
    pub(super) fn occupied_unchecked(&self, coord: &Coord) -> bool {
        self.occupied[self.index(coord)]
    }

    /// Unchecked occupancy write; engine use only.
    pub(super) fn set_occupied_unchecked(&mut self, coord: &Coord, value: bool) {
        let index = self.index(coord);
        self.occupied[index] = value;
    }
}
