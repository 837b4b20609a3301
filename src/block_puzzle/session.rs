use crate::block_puzzle::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Everything needed to build a level session. A fixed seed reproduces the
/// same level; None seeds from the OS.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub rows: usize,
    pub columns: usize,
    pub slot_size: f32,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            slot_size: DEFAULT_SLOT_SIZE,
            seed: None,
        }
    }
}

/// One level of play: owns the board, the piece set, the rng, the score and
/// the completion latch, and is passed down explicitly to whoever needs it.
pub struct LevelSession {
    board: Board,
    library: ShapeLibrary,
    pieces: Vec<Piece>,
    gaps: Vec<Coord>,
    rng: StdRng,
    score: u32,
    was_complete: bool,
}

impl LevelSession {
    /// Constructs a session over a fresh board.
    pub fn new(config: SessionConfig, library: ShapeLibrary) -> Result<LevelSession> {
        let board = Board::new(config.rows, config.columns, config.slot_size)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(LevelSession {
            board,
            library,
            pieces: vec![],
            gaps: vec![],
            rng,
            score: 0,
            was_complete: false,
        })
    }

    /// Generates a level: fills the board to prove a solution exists and to
    /// assign solution cells, then clears it so the player starts from empty
    /// and shelves the pieces in a randomized orientation.
    pub fn generate(&mut self) -> Result<&[Piece]> {
        self.board.reset_occupancy();
        self.pieces.clear();
        self.score = 0;
        self.was_complete = false;

        let generator = LevelGenerator::new(&self.library);
        let level = generator.fill(&mut self.board, &mut self.rng)?;
        debug_assert!(level.is_perfect() == self.board.is_complete());
        self.gaps = level.gaps;

        // The fill pass marked everything occupied; clear it for play.
        self.board.reset_occupancy();

        let mut shelved = Vec::with_capacity(level.pieces.len());
        for (index, piece) in level.pieces.into_iter().enumerate() {
            shelved.push(self.shelve(index, piece));
        }
        self.pieces = shelved;
        Ok(&self.pieces)
    }

    /// Gives a generated piece its shelf display orientation and home spot.
    /// The base shape and solution cell stay canonical ground truth.
    fn shelve(&mut self, index: usize, piece: Piece) -> Piece {
        let steps = self.rng.random_range(0..4u8);
        let flipped = self.rng.random_bool(0.5);
        let mut piece = piece.with_transform(Transform::new(steps, flipped));

        let slot = self.board.slot_size();
        let home = WorldPos::new(
            -(self.board.columns() as f32 * slot) / 2.0 + slot / 2.0
                + index as f32 * slot * SHELF_SPACING,
            -(self.board.rows() as f32 * slot) / 2.0 - slot * SHELF_DROP,
        );
        piece.home = Some(home);
        piece.world_pos = home;
        piece
    }

    /// Lifts a piece off the board or shelf; see `PlacementController::pick_up`.
    pub fn pick_up(&mut self, index: usize) -> Result<PickUpReport> {
        let piece = self
            .pieces
            .get_mut(index)
            .ok_or_else(|| anyhow!("no piece at index {index}"))?;
        let report = PlacementController::pick_up(&mut self.board, piece)?;
        self.was_complete = self.board.is_complete();
        Ok(report)
    }

    /// Applies a drag delta to a held piece.
    pub fn drag(&mut self, index: usize, delta: WorldPos) -> Result<()> {
        let piece = self
            .pieces
            .get_mut(index)
            .ok_or_else(|| anyhow!("no piece at index {index}"))?;
        PlacementController::drag(piece, delta);
        Ok(())
    }

    /// Releases a held piece at a world position. The returned report's
    /// `completed` flag is latched: true only when this drop transitioned the
    /// board into the fully-occupied state.
    pub fn drop_at(&mut self, index: usize, world: WorldPos) -> Result<DropReport> {
        let piece = self
            .pieces
            .get_mut(index)
            .ok_or_else(|| anyhow!("no piece at index {index}"))?;
        let mut report = PlacementController::drop_at(&mut self.board, piece, world);

        if report.outcome == DropOutcome::Locked {
            self.score += SCORE_PER_BLOCK;
        }
        let complete_now = report.completed;
        report.completed = complete_now && !self.was_complete;
        self.was_complete = complete_now;
        Ok(report)
    }

    /// Rotates a piece a quarter turn. A placed piece is lifted off the board
    /// first; the freed cells are reported. Locked pieces refuse.
    pub fn rotate_piece(&mut self, index: usize) -> Result<PickUpReport> {
        self.reorient(index, Transform::rotate)
    }

    /// Mirrors a piece as currently seen; same lifting rules as rotation.
    pub fn flip_piece(&mut self, index: usize) -> Result<PickUpReport> {
        self.reorient(index, Transform::flip)
    }

    fn reorient(&mut self, index: usize, update: fn(&Transform) -> Transform) -> Result<PickUpReport> {
        let piece = self
            .pieces
            .get_mut(index)
            .ok_or_else(|| anyhow!("no piece at index {index}"))?;
        if piece.is_locked() {
            return Err(anyhow!("piece {index} is locked and cannot be re-oriented"));
        }

        let mut freed = vec![];
        if let Some(anchor) = piece.anchor {
            let offsets = piece.effective_shape();
            self.board.release(&anchor, &offsets);
            freed = self.board.cells(&anchor, &offsets);
        }
        *piece = piece.clone().with_transform(update(&piece.transform));
        self.was_complete = self.board.is_complete();
        Ok(PickUpReport { freed })
    }

    /// The board under play.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The generated pieces, in generation order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// One piece by index.
    pub fn piece(&self, index: usize) -> Result<&Piece> {
        self.pieces
            .get(index)
            .ok_or_else(|| anyhow!("no piece at index {index}"))
    }

    /// Cells the generator could not cover; a non-empty set means this level
    /// can never complete.
    pub fn gaps(&self) -> &[Coord] {
        &self.gaps
    }

    /// Points earned this level.
    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monomino_session(rows: usize, columns: usize) -> LevelSession {
        let library = ShapeLibrary::new(vec![Shape::from_cells(&[(0, 0)]).unwrap()]);
        let config = SessionConfig {
            rows,
            columns,
            slot_size: 40.0,
            seed: Some(11),
        };
        let mut session = LevelSession::new(config, library).unwrap();
        session.generate().unwrap();
        session
    }

    /// Solve piece `index` by dropping it on its solution cell in canonical
    /// orientation.
    fn solve(session: &mut LevelSession, index: usize) -> DropReport {
        if session.piece(index).unwrap().transform().is_flipped() {
            session.flip_piece(index).unwrap();
        }
        while session.piece(index).unwrap().transform().steps() != 0 {
            session.rotate_piece(index).unwrap();
        }
        let solution = session.piece(index).unwrap().solution().unwrap();
        let target = session.board().get(&solution).unwrap().world_pos;
        session.pick_up(index).unwrap();
        session.drop_at(index, target).unwrap()
    }

    #[test]
    fn generation_resets_the_board_for_play() {
        let session = monomino_session(4, 4);
        assert_eq!(session.pieces().len(), 16);
        assert!(session.gaps().is_empty());
        assert!(!session.board().is_complete());
        assert!(session.pieces().iter().all(|piece| piece.anchor().is_none()));
    }

    #[test]
    fn shelved_pieces_sit_on_their_homes() {
        let session = monomino_session(2, 2);
        for piece in session.pieces() {
            assert_eq!(Some(piece.world_pos), piece.home);
        }
    }

    #[test]
    fn locking_scores_and_completion_fires_once() {
        let mut session = monomino_session(1, 2);
        assert_eq!(session.pieces().len(), 2);

        let first = solve(&mut session, 0);
        assert_eq!(first.outcome, DropOutcome::Locked);
        assert!(!first.completed);
        assert_eq!(session.score(), SCORE_PER_BLOCK);

        let second = solve(&mut session, 1);
        assert_eq!(second.outcome, DropOutcome::Locked);
        assert!(second.completed);
        assert_eq!(session.score(), 2 * SCORE_PER_BLOCK);
    }

    #[test]
    fn completion_can_fire_again_after_a_new_transition() {
        let mut session = monomino_session(1, 2);
        let solutions: Vec<Coord> = session
            .pieces()
            .iter()
            .map(|piece| piece.solution().unwrap())
            .collect();

        // Place each monomino on the other's cell: the board completes without
        // any piece locking.
        let crossed = [solutions[1], solutions[0]];
        let mut last = None;
        for (index, coord) in crossed.iter().enumerate() {
            session.pick_up(index).unwrap();
            let target = session.board().get(coord).unwrap().world_pos;
            last = Some(session.drop_at(index, target).unwrap());
        }
        let report = last.unwrap();
        assert_eq!(report.outcome, DropOutcome::Snapped);
        assert!(report.completed);
        assert_eq!(session.score(), 0);

        // Lift one piece and put it back: a fresh transition fires again.
        session.pick_up(0).unwrap();
        let target = session.board().get(&crossed[0]).unwrap().world_pos;
        let again = session.drop_at(0, target).unwrap();
        assert!(again.completed);
    }

    #[test]
    fn locked_pieces_refuse_interaction() {
        let mut session = monomino_session(1, 2);
        solve(&mut session, 0);
        assert!(session.pick_up(0).is_err());
        assert!(session.rotate_piece(0).is_err());
        assert!(session.flip_piece(0).is_err());
    }

    #[test]
    fn reorienting_a_placed_piece_lifts_it() {
        let mut session = monomino_session(2, 2);
        // Drop piece 0 somewhere that is not its solution so it stays pickable.
        let solutions: Vec<Coord> = session
            .pieces()
            .iter()
            .map(|piece| piece.solution().unwrap())
            .collect();
        let elsewhere = solutions
            .iter()
            .find(|&&coord| coord != solutions[0])
            .copied()
            .unwrap();

        session.pick_up(0).unwrap();
        let target = session.board().get(&elsewhere).unwrap().world_pos;
        let report = session.drop_at(0, target).unwrap();
        assert_eq!(report.outcome, DropOutcome::Snapped);
        assert!(session.board().occupied(&elsewhere).unwrap());

        let freed = session.rotate_piece(0).unwrap();
        assert_eq!(freed.freed, vec![elsewhere]);
        assert!(!session.board().occupied(&elsewhere).unwrap());
        assert_eq!(session.piece(0).unwrap().anchor(), None);
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        let mut session = monomino_session(2, 2);
        assert!(session.pick_up(99).is_err());
        assert!(session.drag(99, WorldPos::new(0.0, 0.0)).is_err());
        assert!(session.drop_at(99, WorldPos::new(0.0, 0.0)).is_err());
        assert!(session.piece(99).is_err());
    }

    #[test]
    fn same_seed_reproduces_the_shelf() {
        let build = || {
            let config = SessionConfig {
                rows: 5,
                columns: 5,
                slot_size: 40.0,
                seed: Some(21),
            };
            let mut session = LevelSession::new(config, ShapeLibrary::standard()).unwrap();
            session.generate().unwrap();
            session
        };
        let [first, second] = [build(), build()];
        assert_eq!(first.pieces().len(), second.pieces().len());
        for (lhs, rhs) in first.pieces().iter().zip(second.pieces().iter()) {
            assert_eq!(lhs.solution(), rhs.solution());
            assert_eq!(lhs.transform(), rhs.transform());
        }
    }
}
