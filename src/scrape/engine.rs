//! Browser engine seam.
//!
//! Abstracts the automation engine behind a small async trait so the
//! interaction sequencing can be exercised against scripted fakes without a
//! running browser. Every element-addressed operation locates its target
//! first, bounded by the engine's configured wait budget.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Description of how to find one UI element within the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    XPath(String),
    ClassName(String),
}

impl Locator {
    pub fn xpath(expr: impl Into<String>) -> Self {
        Locator::XPath(expr.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Locator::ClassName(name.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::XPath(expr) => write!(f, "xpath {expr}"),
            Locator::ClassName(name) => write!(f, "class {name}"),
        }
    }
}

/// Failure states surfaced by a browser engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The element did not appear within the engine's wait budget.
    #[error("element for {locator} did not appear in time")]
    LocatorTimeout { locator: Locator },
    /// The element exists but was momentarily not interactable
    /// (mid-animation, obscured, stale). Safe to retry.
    #[error("transient interaction failure: {0}")]
    Transient(String),
    /// Any other engine failure. Never retried.
    #[error("browser session failure: {0}")]
    Session(String),
}

impl EngineError {
    /// Whether retrying the same operation can reasonably succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::Transient(_))
    }
}

/// Contract for the browser-automation engine driving one page session.
///
/// Implementations own exactly one live session; `quit` releases it and is
/// expected to be called exactly once.
#[async_trait]
pub trait BrowserEngine: Send + Sync {
    /// Load the given URL in the session's window.
    async fn navigate(&self, url: &str) -> Result<(), EngineError>;

    /// Locate a frame element and switch the interaction context into it.
    async fn enter_frame(&self, locator: &Locator) -> Result<(), EngineError>;

    /// Switch the interaction context back to the top-level document.
    async fn leave_frame(&self) -> Result<(), EngineError>;

    /// Locate an element and move the pointer onto it.
    async fn hover(&self, locator: &Locator) -> Result<(), EngineError>;

    /// Locate an element and click it.
    async fn click(&self, locator: &Locator) -> Result<(), EngineError>;

    /// Locate an element and capture its inner markup.
    async fn inner_html(&self, locator: &Locator) -> Result<String, EngineError>;

    /// Tear down the browser session.
    async fn quit(&self) -> Result<(), EngineError>;
}
