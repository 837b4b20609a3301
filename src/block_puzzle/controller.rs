use crate::block_puzzle::prelude::*;

/// How a release resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Rejected: the piece went back to its home. When the piece had been
    /// picked up off the board, home is its previous anchor and the report's
    /// cells are re-occupied; otherwise home is the shelf and no cell changes.
    Returned,
    /// Accepted onto the board.
    Snapped,
    /// Accepted onto the solution cell in canonical orientation; terminal.
    Locked,
}

/// What one release did: the resolution, the cells whose occupancy changed to
/// occupied, and the board's completion state after the drop. The session
/// latches `completed` so the level-complete signal fires exactly once per
/// transition into the fully-occupied state.
#[derive(Clone, Debug)]
pub struct DropReport {
    pub outcome: DropOutcome,
    pub cells: Vec<Coord>,
    pub completed: bool,
}

/// What one pick-up freed (empty when the piece came off the shelf).
#[derive(Clone, Debug, Default)]
pub struct PickUpReport {
    pub freed: Vec<Coord>,
}

/// Orchestrates a single piece's pick-up, drag and release lifecycle against
/// the board. Stateless: per-piece state lives on the piece, the board owns
/// occupancy, and each call reports what changed instead of signalling a bus.
pub struct PlacementController;

impl PlacementController {
    /// Lifts a piece off the board (freeing its cells) or off the shelf and
    /// starts a drag. A locked piece refuses pick-up.
    pub fn pick_up(board: &mut Board, piece: &mut Piece) -> Result<PickUpReport> {
        if piece.is_locked() {
            return Err(anyhow!("piece is locked in place and cannot be picked up"));
        }

        let mut freed = vec![];
        if let Some(anchor) = piece.anchor.take() {
            let offsets = piece.effective_shape();
            board.release(&anchor, &offsets);
            freed = board.cells(&anchor, &offsets);
            piece.prev_anchor = Some(anchor);
        }
        piece.state = PieceState::Dragging;
        Ok(PickUpReport { freed })
    }

    /// Translates the piece's visual position. Purely additive; no board
    /// interaction. Ignored unless the piece is mid-drag.
    pub fn drag(piece: &mut Piece, delta: WorldPos) {
        if piece.state != PieceState::Dragging {
            return;
        }
        piece.world_pos = piece.world_pos + delta;
    }

    /// Resolves a release at the given world position: snap onto the nearest
    /// slot if the whole effective shape fits there, otherwise send the piece
    /// back where it came from.
    pub fn drop_at(board: &mut Board, piece: &mut Piece, world: WorldPos) -> DropReport {
        let offsets = piece.effective_shape();

        let Some(slot) = board.world_to_slot(world).copied() else {
            return Self::send_back(board, piece, &offsets);
        };
        if !board.check_fit(&slot.coord, &offsets) {
            return Self::send_back(board, piece, &offsets);
        }

        board.commit(&slot.coord, &offsets);
        piece.anchor = Some(slot.coord);
        piece.prev_anchor = None;
        piece.world_pos = slot.world_pos;

        let locked = piece.is_solved_at(&slot.coord);
        piece.state = match locked {
            true => PieceState::Locked,
            false => PieceState::Snapped,
        };

        DropReport {
            outcome: match locked {
                true => DropOutcome::Locked,
                false => DropOutcome::Snapped,
            },
            cells: board.cells(&slot.coord, &offsets),
            completed: board.is_complete(),
        }
    }

    /// Rejection path: revert to the placement the piece was picked up from
    /// when one survives (re-orienting mid-drag clears it), else return to the
    /// shelf home.
    fn send_back(board: &mut Board, piece: &mut Piece, offsets: &[Offset]) -> DropReport {
        if let Some(anchor) = piece.prev_anchor.take() {
            board.commit(&anchor, offsets);
            piece.anchor = Some(anchor);
            if let Ok(slot) = board.get(&anchor) {
                piece.world_pos = slot.world_pos;
            }
            piece.state = PieceState::Returned;
            return DropReport {
                outcome: DropOutcome::Returned,
                cells: board.cells(&anchor, offsets),
                completed: board.is_complete(),
            };
        }

        if let Some(home) = piece.home {
            piece.world_pos = home;
        }
        piece.state = PieceState::Returned;
        DropReport {
            outcome: DropOutcome::Returned,
            cells: vec![],
            completed: board.is_complete(),
        }
    }
}
