use crate::block_puzzle::prelude::*;

impl Board {
    /// All-or-nothing fit check: every `anchor + offset` must land in bounds on
    /// a free cell. There is no partial placement.
    pub fn check_fit(&self, anchor: &Coord, offsets: &[Offset]) -> bool {
        offsets.iter().all(|offset| {
            let target = anchor + offset;
            target.in_bounds_signed(self.columns(), self.rows())
                && !self.occupied_unchecked(&target.coerce())
        })
    }

    /// Marks every target cell occupied. Contract: the caller has a passing
    /// `check_fit` for exactly these arguments; the board does not re-validate,
    /// and double-committing overlapping shapes corrupts occupancy.
    pub fn commit(&mut self, anchor: &Coord, offsets: &[Offset]) {
        debug_assert!(
            self.check_fit(anchor, offsets),
            "commit without a passing fit check at {anchor}"
        );
        for offset in offsets {
            self.set_occupied_unchecked(&(anchor + offset).coerce(), true);
        }
    }

    /// Marks every target cell free; the inverse of `commit`, used when a
    /// placed piece is picked back up. Contract: the targets were committed.
    pub fn release(&mut self, anchor: &Coord, offsets: &[Offset]) {
        for offset in offsets {
            let target = anchor + offset;
            debug_assert!(
                target.in_bounds_signed(self.columns(), self.rows())
                    && self.occupied_unchecked(&target.coerce()),
                "release of a cell that was never committed at {anchor}"
            );
            self.set_occupied_unchecked(&target.coerce(), false);
        }
    }

    /// The concrete cells `anchor + offsets` covers, for occupancy-change
    /// reporting. Only meaningful when the placement is in bounds.
    pub fn cells(&self, anchor: &Coord, offsets: &[Offset]) -> Vec<Coord> {
        offsets.iter().map(|offset| (anchor + offset).coerce()).collect()
    }
}
