use crate::block_puzzle::prelude::*;

use rand::Rng;
use rand::seq::SliceRandom;

/// The outcome of one board-fill pass: the pieces whose solution placements
/// tile the board, plus any cells no candidate shape could cover.
#[derive(Clone, Debug)]
pub struct GeneratedLevel {
    pub pieces: Vec<Piece>,
    pub gaps: Vec<Coord>,
}

impl GeneratedLevel {
    /// Whether the fill tiled every cell.
    pub fn is_perfect(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Fills a board with non-overlapping shapes drawn from a prefab library.
///
/// The scan is deterministic (row-major), the choice randomized (a fresh
/// shuffle of the library at every free cell), and there is no backtracking:
/// a board with no valid tiling under this greedy scan will contain gaps.
/// That limitation is part of the observed behaviour and is preserved; gaps
/// are a soft failure, reported rather than retried.
pub struct LevelGenerator<'a> {
    library: &'a ShapeLibrary,
}

impl<'a> LevelGenerator<'a> {
    /// Constructs a generator over the given library.
    pub fn new(library: &'a ShapeLibrary) -> LevelGenerator<'a> {
        LevelGenerator { library }
    }

    /// Fills every free cell it can, committing each placed shape onto the
    /// board, and returns the produced pieces with their solution cells set.
    ///
    /// The board is left in its fully-committed state so the caller can verify
    /// it (a gap-free fill satisfies `is_complete`) before resetting occupancy
    /// for play. Fails without touching the board if the library is empty.
    pub fn fill<R: Rng>(&self, board: &mut Board, rng: &mut R) -> Result<GeneratedLevel> {
        if self.library.is_empty() {
            return Err(anyhow!("cannot generate a level from an empty shape library"));
        }

        let mut pieces = vec![];
        let mut gaps = vec![];
        for y in 0..board.rows() {
            for x in 0..board.columns() {
                let anchor = Coord::new(x, y);
                if board.occupied(&anchor)? {
                    continue;
                }
                match self.try_place(board, &anchor, rng) {
                    Some(piece) => pieces.push(piece),
                    None => {
                        log::warn!("no candidate shape fits at {anchor}; leaving a gap");
                        gaps.push(anchor);
                    }
                }
            }
        }

        log::debug!(
            "fill pass placed {} pieces on {} cells, {} gaps",
            pieces.len(),
            board.area(),
            gaps.len()
        );
        Ok(GeneratedLevel { pieces, gaps })
    }

    /// Tries the library's shapes in a freshly shuffled order and commits the
    /// first one that fits at the anchor, in canonical orientation.
    fn try_place<R: Rng>(&self, board: &mut Board, anchor: &Coord, rng: &mut R) -> Option<Piece> {
        let mut order: Vec<usize> = (0..self.library.len()).collect();
        order.shuffle(rng);

        for candidate in order {
            let shape = &self.library.shapes()[candidate];
            if board.check_fit(anchor, shape.offsets()) {
                board.commit(anchor, shape.offsets());
                return Some(Piece::new(shape.clone()).with_solution(*anchor));
            }
        }
        None
    }
}
