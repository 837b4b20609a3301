pub(crate) mod indexing;
pub(crate) mod layout;
pub(crate) mod placement;
pub(crate) mod pretty;

use crate::block_puzzle::prelude::*;

/// A single addressable cell on the board: its discrete grid index plus the
/// world-space centre point used to resolve continuous drop positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub coord: Coord,
    pub world_pos: WorldPos,
}

/// The board: a rows-by-columns grid of slots with logical occupancy,
/// independent of anything visual.
///
/// Occupancy obeys a caller contract rather than a runtime guard: a cell is
/// occupied iff exactly one committed piece covers it, which holds as long as
/// every `commit` follows a passing `check_fit` and every `release` undoes a
/// prior commit. Violations are debug-asserted.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    slot_size: f32,
    slots: Vec<Slot>,
    occupied: Vec<bool>,
}

impl Board {
    /// Returns a new, all-free board centred on the world origin.
    pub fn new(rows: usize, columns: usize, slot_size: f32) -> Result<Board> {
        if rows == 0 || columns == 0 {
            return Err(anyhow!("board must have at least one row and one column, got {rows}x{columns}"));
        }
        if !(slot_size > 0.0) {
            return Err(anyhow!("slot size must be positive, got {slot_size}"));
        }
        let slots = Board::layout(rows, columns, slot_size);
        Ok(Board {
            rows,
            columns,
            slot_size,
            slots,
            occupied: vec![false; rows * columns],
        })
    }

    /// Discards all cell state and slot identities and allocates a fresh
    /// all-free grid. Any piece still anchored to the old grid is orphaned;
    /// collaborators must clear anchors before calling this.
    pub fn regenerate(&mut self, rows: usize, columns: usize) -> Result<()> {
        *self = Board::new(rows, columns, self.slot_size)?;
        Ok(())
    }

    /// Frees every cell while keeping the slot identities; used between the
    /// generation pass and play.
    pub fn reset_occupancy(&mut self) {
        self.occupied.fill(false);
    }

    /// True iff every cell is occupied. Callers latch the transition; the board
    /// itself only reports the current state.
    pub fn is_complete(&self) -> bool {
        self.occupied.iter().all(|&occupied| occupied)
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Edge length of one slot in world units.
    pub fn slot_size(&self) -> f32 {
        self.slot_size
    }

    /// Total cell count.
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// All slots, row-major from the bottom-left.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_is_free() {
        let board = Board::new(3, 4, 40.0).unwrap();
        assert_eq!(board.area(), 12);
        assert!(!board.is_complete());
        assert!(board.slots().iter().all(|slot| !board.occupied(&slot.coord).unwrap()));
    }

    #[test]
    fn zero_area_is_a_configuration_error() {
        assert!(Board::new(0, 4, 40.0).is_err());
        assert!(Board::new(4, 0, 40.0).is_err());
        assert!(Board::new(4, 4, 0.0).is_err());
    }

    #[test]
    fn regenerate_discards_occupancy_and_resizes() {
        let mut board = Board::new(2, 2, 40.0).unwrap();
        board.commit(&Coord::new(0, 0), &[Offset::new(0, 0)]);
        board.regenerate(3, 5).unwrap();
        assert_eq!((board.rows(), board.columns()), (3, 5));
        assert!(!board.is_complete());
        assert!(!board.occupied(&Coord::new(0, 0)).unwrap());
    }

    #[test]
    fn reset_keeps_slot_identities() {
        let mut board = Board::new(2, 2, 40.0).unwrap();
        let before = board.slots().to_vec();
        board.commit(&Coord::new(0, 0), &[Offset::new(0, 0), Offset::new(1, 0)]);
        board.reset_occupancy();
        assert!(!board.occupied(&Coord::new(0, 0)).unwrap());
        assert_eq!(board.slots(), &before[..]);
    }
}
