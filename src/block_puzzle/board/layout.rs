use super::Slot;
use crate::block_puzzle::prelude::*;

impl Board {
    /// Maps a continuous world-space point to the slot under it, nearest-cell:
    /// `floor((x + width/2) / slot)` and the y equivalent. A point outside the
    /// board returns None, never a clamped edge cell.
    pub fn world_to_slot(&self, world: WorldPos) -> Option<&Slot> {
        let width = self.columns() as f32 * self.slot_size();
        let height = self.rows() as f32 * self.slot_size();

        let raw_x = (world.x + width / 2.0) / self.slot_size();
        let raw_y = (world.y + height / 2.0) / self.slot_size();
        if raw_x < 0.0 || raw_y < 0.0 {
            return None;
        }

        let coord = Coord::new(raw_x.floor() as usize, raw_y.floor() as usize);
        if !coord.in_bounds(self.columns(), self.rows()) {
            return None;
        }
        Some(&self.slots[self.index(&coord)])
    }

    /// Builds the slot grid, centred on the world origin: the bottom-left slot
    /// centre sits at `-(extent)/2 + slot/2` on each axis.
    pub(super) fn layout(rows: usize, columns: usize, slot_size: f32) -> Vec<Slot> {
        let start_x = -(columns as f32 * slot_size) / 2.0 + slot_size / 2.0;
        let start_y = -(rows as f32 * slot_size) / 2.0 + slot_size / 2.0;

        let mut slots = Vec::with_capacity(rows * columns);
        for y in 0..rows {
            for x in 0..columns {
                slots.push(Slot {
                    coord: Coord::new(x, y),
                    world_pos: WorldPos::new(
                        start_x + x as f32 * slot_size,
                        start_y + y as f32 * slot_size,
                    ),
                });
            }
        }
        slots
    }
}
