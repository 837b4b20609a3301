mod events;
mod options;

pub use events::{GameEvents, LogEvents};
pub use options::AppOptions;

use crate::prelude::*;

/// The playable surface around the core: wires a level session to an event
/// observer and a score store, then demonstrates the whole pipeline by
/// generating a level and replaying every piece to its solution.
pub struct App {
    options: AppOptions,
}

impl App {
    /// Constructs the app from parsed options.
    pub fn new(options: AppOptions) -> App {
        App { options }
    }

    /// Generates a level and solves it through the drag lifecycle, reporting
    /// signals and the final score along the way.
    pub fn run(&self) -> Result<()> {
        let mut events = LogEvents;
        let mut store = MemoryScores::default();

        let mut session = LevelSession::new(self.options.session_config(), ShapeLibrary::standard())?;
        session.generate()?;
        log::info!(
            "generated {} pieces on a {}x{} board ({} gaps)",
            session.pieces().len(),
            session.board().rows(),
            session.board().columns(),
            session.gaps().len()
        );

        for index in 0..session.pieces().len() {
            self.solve_piece(&mut session, index, &mut events)?;
        }
        log::info!("final board:\n{}", session.board().pretty());

        let level = self.options.level_index;
        let score = session.score();
        if store.record_score(level, score) {
            log::info!("new high score {score} for level {level}");
        }
        match session.board().is_complete() {
            true => {
                store.unlock_level(level + 1);
                log::info!("level {level} solved; level {} unlocked", level + 1);
            }
            false => log::warn!(
                "board left incomplete; {} generation gaps cannot be covered",
                session.gaps().len()
            ),
        }
        Ok(())
    }

    /// Replays one piece: undo its shelf orientation, pick it up, drag it over
    /// its solution slot and release it there.
    fn solve_piece(
        &self,
        session: &mut LevelSession,
        index: usize,
        events: &mut impl GameEvents,
    ) -> Result<()> {
        if session.piece(index)?.transform().is_flipped() {
            session.flip_piece(index)?;
        }
        while session.piece(index)?.transform().steps() != 0 {
            session.rotate_piece(index)?;
        }

        let Some(solution) = session.piece(index)?.solution() else {
            return Err(anyhow!("generated piece {index} has no solution cell"));
        };
        let target = session.board().get(&solution)?.world_pos;

        let picked = session.pick_up(index)?;
        events.block_picked(index);
        for cell in &picked.freed {
            events.cell_changed(*cell, false);
        }

        let delta = target - session.piece(index)?.world_pos;
        session.drag(index, delta)?;

        let report = session.drop_at(index, target)?;
        for cell in &report.cells {
            events.cell_changed(*cell, true);
        }
        match report.outcome {
            DropOutcome::Returned => events.block_returned(index),
            DropOutcome::Snapped => {}
            DropOutcome::Locked => events.block_locked(index),
        }
        if report.completed {
            events.level_complete();
        }
        Ok(())
    }
}
