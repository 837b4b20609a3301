use crate::prelude::*;

/// Observer interface for game-wide signals. The core never sees this: it
/// hands back reports, and whoever drives it forwards them here. Every hook
/// defaults to a no-op so presentation layers implement only what they show.
pub trait GameEvents {
    fn block_picked(&mut self, _piece: usize) {}
    fn block_returned(&mut self, _piece: usize) {}
    fn block_locked(&mut self, _piece: usize) {}
    fn cell_changed(&mut self, _cell: Coord, _occupied: bool) {}
    fn level_complete(&mut self) {}
}

/// Logs every signal; the binary's stand-in for a presentation layer.
pub struct LogEvents;

impl GameEvents for LogEvents {
    fn block_picked(&mut self, piece: usize) {
        log::debug!("block {piece} picked up");
    }

    fn block_returned(&mut self, piece: usize) {
        log::debug!("block {piece} returned home");
    }

    fn block_locked(&mut self, piece: usize) {
        log::info!("block {piece} locked onto its solution cell");
    }

    fn cell_changed(&mut self, cell: Coord, occupied: bool) {
        log::trace!("cell {cell} is now {}", match occupied {
            true => "occupied",
            false => "free",
        });
    }

    fn level_complete(&mut self) {
        log::info!("level complete!");
    }
}
