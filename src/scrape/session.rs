//! Interaction sequencing for one scraping run.
//!
//! Owns a disposable browser engine and walks it through the fixed sequence
//! the puzzle site requires: navigation, consent dismissal inside its frame,
//! difficulty selection, and finally the innerHTML snapshot of the grid
//! container. The engine is torn down on every exit path.

use std::time::Duration;

use thiserror::Error;

use super::engine::{BrowserEngine, EngineError, Locator};
use super::retry::RetryPolicy;

const PUZZLE_URL: &str = "https://sudoku.zeit.de";
const CONSENT_FRAME_XPATH: &str = "//*[@title='SP Consent Message']";
const ACCEPT_BUTTON_XPATH: &str = "//*[@title='EINVERSTANDEN']";
const GRID_CONTAINER_CLASS: &str = "sodokoGrid";

const DEFAULT_RETRY_ATTEMPTS: u32 = 10;
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Puzzle variant to request. The site labels its buttons with the
/// uppercase German words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Visible label of the matching difficulty button.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "LEICHT",
            Difficulty::Medium => "MITTEL",
            Difficulty::Hard => "SCHWER",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure states of the extraction sequence.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// A momentarily unstable element kept failing for the whole retry
    /// budget; escalated to fatal.
    #[error("element still unstable after retries: {0}")]
    RetriesExhausted(#[source] EngineError),
}

/// One disposable scraping session.
pub struct InteractionSession<E> {
    engine: E,
    retry: RetryPolicy,
}

impl<E: BrowserEngine> InteractionSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            retry: RetryPolicy::new(DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_BACKOFF),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Drive the session through the full sequence and return the raw grid
    /// markup. Consumes the session; the engine is quit on success and
    /// failure paths alike.
    pub async fn extract_puzzle_markup(
        self,
        difficulty: Difficulty,
    ) -> Result<String, InteractionError> {
        let outcome = self.run_steps(difficulty).await;
        if let Err(err) = self.engine.quit().await {
            log::warn!("browser teardown failed: {err}");
        }
        outcome
    }

    async fn run_steps(&self, difficulty: Difficulty) -> Result<String, InteractionError> {
        let engine = &self.engine;

        engine.navigate(PUZZLE_URL).await?;

        let consent_frame = Locator::xpath(CONSENT_FRAME_XPATH);
        engine.enter_frame(&consent_frame).await?;

        // Pointer movement onto the freshly rendered consent button is
        // unreliable; only that sub-step gets the retry envelope.
        let accept = Locator::xpath(ACCEPT_BUTTON_XPATH);
        self.retry
            .run(|| {
                let locator = accept.clone();
                async move { engine.hover(&locator).await }
            })
            .await
            .map_err(|err| {
                if err.is_recoverable() {
                    InteractionError::RetriesExhausted(err)
                } else {
                    InteractionError::Engine(err)
                }
            })?;
        engine.click(&accept).await?;
        engine.leave_frame().await?;

        log::info!("Using sudoku of level {difficulty} ...");
        let level_button = Locator::xpath(format!("//button[text()='{}']", difficulty.label()));
        engine.hover(&level_button).await?;
        engine.click(&level_button).await?;

        let grid = Locator::class(GRID_CONTAINER_CLASS);
        Ok(engine.inner_html(&grid).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct FakeEngine {
        calls: Mutex<Vec<String>>,
        hover_failures: AtomicU32,
        frame_missing: bool,
        markup: String,
    }

    impl FakeEngine {
        fn with_markup(markup: &str) -> Self {
            Self {
                markup: markup.to_string(),
                ..Self::default()
            }
        }

        fn failing_hover(mut self, failures: u32) -> Self {
            self.hover_failures = AtomicU32::new(failures);
            self
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BrowserEngine for &FakeEngine {
        async fn navigate(&self, url: &str) -> Result<(), EngineError> {
            self.record(format!("navigate {url}"));
            Ok(())
        }

        async fn enter_frame(&self, locator: &Locator) -> Result<(), EngineError> {
            self.record(format!("enter_frame {locator}"));
            if self.frame_missing {
                return Err(EngineError::LocatorTimeout {
                    locator: locator.clone(),
                });
            }
            Ok(())
        }

        async fn leave_frame(&self) -> Result<(), EngineError> {
            self.record("leave_frame".to_string());
            Ok(())
        }

        async fn hover(&self, locator: &Locator) -> Result<(), EngineError> {
            self.record(format!("hover {locator}"));
            let remaining = self.hover_failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.hover_failures.store(remaining - 1, Ordering::SeqCst);
                return Err(EngineError::Transient("not interactable yet".into()));
            }
            Ok(())
        }

        async fn click(&self, locator: &Locator) -> Result<(), EngineError> {
            self.record(format!("click {locator}"));
            Ok(())
        }

        async fn inner_html(&self, locator: &Locator) -> Result<String, EngineError> {
            self.record(format!("inner_html {locator}"));
            Ok(self.markup.clone())
        }

        async fn quit(&self) -> Result<(), EngineError> {
            self.record("quit".to_string());
            Ok(())
        }
    }

    fn quick_retry(attempts: u32) -> RetryPolicy {
        RetryPolicy::new(attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn happy_path_returns_markup_in_step_order() {
        let engine = FakeEngine::with_markup("<div class=\"sodokoRow\"></div>");
        let session = InteractionSession::new(&engine).with_retry_policy(quick_retry(3));

        let markup = session.extract_puzzle_markup(Difficulty::Hard).await.unwrap();

        assert_eq!(markup, "<div class=\"sodokoRow\"></div>");
        assert_eq!(
            engine.calls(),
            vec![
                "navigate https://sudoku.zeit.de",
                "enter_frame xpath //*[@title='SP Consent Message']",
                "hover xpath //*[@title='EINVERSTANDEN']",
                "click xpath //*[@title='EINVERSTANDEN']",
                "leave_frame",
                "hover xpath //button[text()='SCHWER']",
                "click xpath //button[text()='SCHWER']",
                "inner_html class sodokoGrid",
                "quit",
            ]
        );
    }

    #[tokio::test]
    async fn difficulty_selects_matching_button_label() {
        let engine = FakeEngine::with_markup("markup");
        let session = InteractionSession::new(&engine).with_retry_policy(quick_retry(3));

        session.extract_puzzle_markup(Difficulty::Easy).await.unwrap();

        assert!(
            engine
                .calls()
                .contains(&"click xpath //button[text()='LEICHT']".to_string())
        );
    }

    #[tokio::test]
    async fn unstable_consent_button_is_retried_then_clicked() {
        let engine = FakeEngine::with_markup("markup").failing_hover(2);
        let session = InteractionSession::new(&engine).with_retry_policy(quick_retry(5));

        session.extract_puzzle_markup(Difficulty::Hard).await.unwrap();

        let hovers = engine
            .calls()
            .iter()
            .filter(|c| c.contains("hover xpath //*[@title='EINVERSTANDEN']"))
            .count();
        assert_eq!(hovers, 3);
    }

    #[tokio::test]
    async fn exhausted_retries_escalate_and_still_quit() {
        let engine = FakeEngine::with_markup("markup").failing_hover(10);
        let session = InteractionSession::new(&engine).with_retry_policy(quick_retry(2));

        let result = session.extract_puzzle_markup(Difficulty::Hard).await;

        assert!(matches!(result, Err(InteractionError::RetriesExhausted(_))));
        assert_eq!(engine.calls().last().unwrap(), "quit");
    }

    #[tokio::test]
    async fn missing_consent_frame_is_fatal_and_still_quits() {
        let engine = FakeEngine {
            frame_missing: true,
            ..FakeEngine::default()
        };
        let session = InteractionSession::new(&engine).with_retry_policy(quick_retry(2));

        let result = session.extract_puzzle_markup(Difficulty::Hard).await;

        assert!(matches!(
            result,
            Err(InteractionError::Engine(EngineError::LocatorTimeout { .. }))
        ));
        assert_eq!(engine.calls().last().unwrap(), "quit");
    }
}
