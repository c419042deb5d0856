//! End-to-end pipeline.
//!
//! Composes the interaction session, the markup parser, the solver, and the
//! diagnostic renderer into one run-once flow. Every extraction or parse
//! failure propagates unrecovered; this is a batch script, not a service.

use thiserror::Error;

use crate::puzzle::{self, Grid, ParseError, Solver};
use crate::scrape::{BrowserEngine, Difficulty, InteractionError, InteractionSession};

/// Wrapper around the per-stage error types.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Interaction(#[from] InteractionError),
    #[error("puzzle markup rejected: {0}")]
    Parse(#[from] ParseError),
}

/// Outcome of one completed run.
#[derive(Debug)]
pub struct PipelineReport {
    /// The puzzle as extracted from the page.
    pub puzzle: Grid,
    /// The solver's output; identical to `puzzle` when unsolvable.
    pub solution: Grid,
    /// Whether the solver filled every cell.
    pub fully_solved: bool,
}

/// Extract today's puzzle at the given difficulty, parse it, and solve it.
/// The engine is consumed; its session is released before this returns.
pub async fn run<E: BrowserEngine>(
    engine: E,
    difficulty: Difficulty,
) -> Result<PipelineReport, PipelineError> {
    let session = InteractionSession::new(engine);
    let markup = session.extract_puzzle_markup(difficulty).await?;

    let puzzle = puzzle::parse_grid(&markup)?;
    log::info!("Found sudoku:\n{}", puzzle::ascii(&puzzle));

    let solution = Solver::new().solve(&puzzle);
    let fully_solved = solution.is_complete();
    let verdict = if fully_solved {
        "Solved"
    } else {
        "Could not completely solve"
    };
    log::info!("{verdict} sudoku:\n{}", puzzle::ascii(&solution));

    Ok(PipelineReport {
        puzzle,
        solution,
        fully_solved,
    })
}
