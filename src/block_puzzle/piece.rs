use crate::block_puzzle::prelude::*;

/// Lifecycle of a piece during play. `Returned` is the transient rejection
/// state; `Locked` is terminal and refuses further pick-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PieceState {
    #[default]
    Idle,
    Dragging,
    Snapped,
    Returned,
    Locked,
}

/// One draggable block: an immutable base shape plus its current orientation,
/// board anchor (if placed) and shelf home.
///
/// The base shape and the solution cell are fixed at generation time and are
/// the ground truth the player must reconstruct; orientation changes go through
/// [`Piece::rotated`] / [`Piece::flipped`], which hand back a new value with
/// the anchor cleared (a transformed piece no longer legally sits where it was).
#[derive(Clone, Debug)]
pub struct Piece {
    shape: Shape,
    pub(crate) transform: Transform,
    pub(crate) anchor: Option<Coord>,
    pub(crate) prev_anchor: Option<Coord>,
    solution: Option<Coord>,
    pub(crate) state: PieceState,

    /// Off-board holding position a rejected drop returns the piece to.
    pub home: Option<WorldPos>,

    /// Current visual position; only the drag lifecycle moves it.
    pub world_pos: WorldPos,
}

impl Piece {
    /// Constructs an unplaced piece in canonical orientation.
    pub fn new(shape: Shape) -> Piece {
        Piece {
            shape,
            transform: Transform::identity(),
            anchor: None,
            prev_anchor: None,
            solution: None,
            state: PieceState::Idle,
            home: None,
            world_pos: WorldPos::default(),
        }
    }

    /// Pins the cell this piece must occupy, in canonical orientation, to count
    /// as correctly solved.
    pub fn with_solution(mut self, anchor: Coord) -> Piece {
        self.solution = Some(anchor);
        self
    }

    /// Produces the piece obtained by re-orienting this one. Any board anchor is
    /// invalidated: the effective shape changed under it.
    pub fn with_transform(mut self, transform: Transform) -> Piece {
        self.transform = transform;
        self.anchor = None;
        self.prev_anchor = None;
        if self.state != PieceState::Dragging {
            self.state = PieceState::Idle;
        }
        self
    }

    /// The base shape, as computed at spawn.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The current orientation.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The grid cell the shape origin is pinned to, when placed.
    pub fn anchor(&self) -> Option<Coord> {
        self.anchor
    }

    /// The anchor this piece must occupy to be correctly solved.
    pub fn solution(&self) -> Option<Coord> {
        self.solution
    }

    /// Where the piece is in its lifecycle.
    pub fn state(&self) -> PieceState {
        self.state
    }

    /// The base shape under the current orientation. Computed on demand; there
    /// is no cache to go stale.
    pub fn effective_shape(&self) -> Vec<Offset> {
        self.transform.apply(self.shape.offsets())
    }

    /// The piece, rotated one quarter turn further.
    pub fn rotated(&self) -> Piece {
        self.clone().with_transform(self.transform.rotate())
    }

    /// The piece, mirrored as currently seen.
    pub fn flipped(&self) -> Piece {
        self.clone().with_transform(self.transform.flip())
    }

    /// Whether the piece is locked onto its solution cell.
    pub fn is_locked(&self) -> bool {
        self.state == PieceState::Locked
    }

    /// The win sub-check: correctly solved iff anchored on the solution cell in
    /// canonical orientation. A mirrored placement never solves.
    pub fn is_solved_at(&self, anchor: &Coord) -> bool {
        self.solution == Some(*anchor) && self.transform.is_identity()
    }
}
