//! WebDriver-backed browser engine.
//!
//! Drives a real Firefox through a WebDriver server (geckodriver). Element
//! lookups rely on the session's implicit wait, so every locate-then-act
//! operation is bounded by the configured wait budget.

use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::error::WebDriverError;
use thirtyfour::{By, DesiredCapabilities, WebDriver, WebElement};
use url::Url;

use super::engine::{BrowserEngine, EngineError, Locator};

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
const DEFAULT_ELEMENT_WAIT: Duration = Duration::from_secs(3);

/// Connection settings for the WebDriver server.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    webdriver_url: Url,
    element_wait: Duration,
}

impl EngineConfig {
    pub fn with_webdriver_url(mut self, url: Url) -> Self {
        self.webdriver_url = url;
        self
    }

    pub fn with_element_wait(mut self, wait: Duration) -> Self {
        self.element_wait = wait;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            webdriver_url: Url::parse(DEFAULT_WEBDRIVER_URL).expect("static default endpoint"),
            element_wait: DEFAULT_ELEMENT_WAIT,
        }
    }
}

/// Browser engine over one live WebDriver session.
pub struct WebDriverEngine {
    driver: WebDriver,
}

impl WebDriverEngine {
    /// Open a fresh Firefox session against the configured server.
    pub async fn connect(config: &EngineConfig) -> Result<Self, EngineError> {
        let caps = DesiredCapabilities::firefox();
        let driver = WebDriver::new(config.webdriver_url.as_str(), caps)
            .await
            .map_err(|err| EngineError::Session(err.to_string()))?;
        driver
            .set_implicit_wait_timeout(config.element_wait)
            .await
            .map_err(|err| EngineError::Session(err.to_string()))?;
        Ok(Self { driver })
    }

    async fn find(&self, locator: &Locator) -> Result<WebElement, EngineError> {
        let by = match locator {
            Locator::XPath(expr) => By::XPath(expr.clone()),
            Locator::ClassName(name) => By::ClassName(name.clone()),
        };
        self.driver
            .find(by)
            .await
            .map_err(|err| classify(locator, err))
    }
}

#[async_trait]
impl BrowserEngine for WebDriverEngine {
    async fn navigate(&self, url: &str) -> Result<(), EngineError> {
        self.driver
            .goto(url)
            .await
            .map_err(|err| EngineError::Session(err.to_string()))
    }

    async fn enter_frame(&self, locator: &Locator) -> Result<(), EngineError> {
        let frame = self.find(locator).await?;
        frame.enter_frame().await.map_err(|err| classify(locator, err))
    }

    async fn leave_frame(&self) -> Result<(), EngineError> {
        self.driver
            .enter_default_frame()
            .await
            .map_err(|err| EngineError::Session(err.to_string()))
    }

    async fn hover(&self, locator: &Locator) -> Result<(), EngineError> {
        let element = self.find(locator).await?;
        self.driver
            .action_chain()
            .move_to_element_center(&element)
            .perform()
            .await
            .map_err(|err| classify(locator, err))
    }

    async fn click(&self, locator: &Locator) -> Result<(), EngineError> {
        let element = self.find(locator).await?;
        element.click().await.map_err(|err| classify(locator, err))
    }

    async fn inner_html(&self, locator: &Locator) -> Result<String, EngineError> {
        let element = self.find(locator).await?;
        let markup = element
            .attr("innerHTML")
            .await
            .map_err(|err| classify(locator, err))?;
        markup.ok_or_else(|| {
            EngineError::Session(format!("element for {locator} has no innerHTML"))
        })
    }

    async fn quit(&self) -> Result<(), EngineError> {
        // WebDriver is a cheap session handle; quitting any clone ends the
        // underlying session.
        self.driver
            .clone()
            .quit()
            .await
            .map_err(|err| EngineError::Session(err.to_string()))
    }
}

/// Map W3C error codes onto the engine taxonomy. Interaction failures that
/// stem from momentarily unstable elements are the only recoverable kind.
fn classify(locator: &Locator, err: WebDriverError) -> EngineError {
    match err {
        WebDriverError::NoSuchElement(_) => EngineError::LocatorTimeout {
            locator: locator.clone(),
        },
        WebDriverError::ElementNotInteractable(_)
        | WebDriverError::ElementClickIntercepted(_)
        | WebDriverError::StaleElementReference(_)
        | WebDriverError::MoveTargetOutOfBounds(_) => EngineError::Transient(err.to_string()),
        other => EngineError::Session(other.to_string()),
    }
}
