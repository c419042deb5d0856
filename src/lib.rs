//! # zeitoku
//!
//! Fetches the daily ZEIT Online sudoku with a real browser session and
//! solves it.
//!
//! The page renders the puzzle with client-side JavaScript behind a consent
//! dialog, so a plain HTTP fetch sees nothing. This crate drives Firefox
//! through a WebDriver server instead: navigate, dismiss consent (retrying
//! the flaky pointer move), pick a difficulty, snapshot the grid markup,
//! then parse it into a strict 9×9 grid and hand it to the solver.
//!
//! ## Example
//!
//! ```no_run
//! use zeitoku::{Difficulty, EngineConfig, WebDriverEngine, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = WebDriverEngine::connect(&EngineConfig::default()).await?;
//!     let report = pipeline::run(engine, Difficulty::Hard).await?;
//!     println!("fully solved: {}", report.fully_solved);
//!     Ok(())
//! }
//! ```

pub mod pipeline;
pub mod puzzle;
pub mod scrape;

pub use crate::pipeline::{PipelineError, PipelineReport};

pub use crate::puzzle::{Grid, GridError, ParseError, Solver, ascii, parse_grid};

pub use crate::scrape::{
    BrowserEngine,
    Difficulty,
    EngineConfig,
    EngineError,
    InteractionError,
    InteractionSession,
    Locator,
    Recoverable,
    RetryPolicy,
    WebDriverEngine,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
