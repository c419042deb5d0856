//! Browser-driven extraction of the raw puzzle markup.

pub mod engine;
pub mod retry;
pub mod session;
pub mod webdriver;

pub use engine::{BrowserEngine, EngineError, Locator};
pub use retry::{Recoverable, RetryPolicy};
pub use session::{Difficulty, InteractionError, InteractionSession};
pub use webdriver::{EngineConfig, WebDriverEngine};
