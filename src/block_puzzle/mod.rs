/*
 *  The puzzle-logic core of a block-jigsaw game in Rust.
 */

pub(crate) mod board;
pub mod consts;
pub mod controller;
pub mod coords;
pub mod generator;
pub mod piece;
pub mod scores;
pub mod session;
pub mod shape;
pub(crate) mod transform;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Slot},
        consts::*,
        controller::{DropOutcome, DropReport, PickUpReport, PlacementController},
        coords::{self, *},
        generator::{GeneratedLevel, LevelGenerator},
        piece::{Piece, PieceState},
        scores::{MemoryScores, ScoreStore},
        session::{LevelSession, SessionConfig},
        shape::{Shape, ShapeLibrary},
        transform::Transform
    };
}
