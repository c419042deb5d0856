//! No-argument entry point: fetch today's hard puzzle and solve it.
//!
//! Requires a running WebDriver server (geckodriver) on the default
//! endpoint. Exits 0 on any completed run, solved or not; exits non-zero
//! when extraction or parsing fails.

use std::process::ExitCode;

use zeitoku::{Difficulty, EngineConfig, WebDriverEngine, pipeline};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = match WebDriverEngine::connect(&EngineConfig::default()).await {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("could not open browser session: {err}");
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(engine, Difficulty::Hard).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
