//! W3C WebDriver HTTP client.
//!
//! Thin wrapper over the session endpoints used by the page objects. One client
//! owns one browser session; it is created by [`WebDriverClient::connect`] and
//! ended by [`WebDriverClient::quit`].
//!
//! Every DOM condition is awaited with [`WebDriverClient::wait_for`], bounded by
//! the configured timeout and polled at the configured interval.

use std::future::Future;
use std::time::{Duration, Instant};

use boprobe_core::config::WebDriverConfig;
use boprobe_core::metrics as m;
use metrics::counter;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::WebDriverError;
use crate::protocol::{self, Browser, ElementRef};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// CLIENT
// =============================================================================

pub struct WebDriverClient {
    http: reqwest::Client,
    endpoint: String,
    session_id: String,
    timeout: Duration,
    poll_interval: Duration,
}

impl WebDriverClient {
    /// Opens a new browser session on the configured endpoint.
    pub async fn connect(config: &WebDriverConfig) -> Result<Self, WebDriverError> {
        let browser: Browser = config.browser.parse()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| WebDriverError::HttpClientBuild(e.to_string()))?;
        let endpoint = config.endpoint.trim_end_matches('/').to_owned();

        let body = protocol::new_session_body(browser, config.headless);
        let value = send(&http, Method::POST, &format!("{endpoint}/session"), Some(body)).await?;
        let session_id = protocol::session_id(&value)?;

        info!(
            endpoint = %endpoint,
            %browser,
            headless = config.headless,
            session = %session_id,
            "webdriver session created"
        );

        Ok(Self {
            http,
            endpoint,
            session_id,
            timeout: Duration::from_secs(config.timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Condition wait bound.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, WebDriverError> {
        let url = format!("{}/session/{}{}", self.endpoint, self.session_id, path);
        send(&self.http, method, &url, body).await
    }

    // -------------------------------------------------------------------------
    // navigation
    // -------------------------------------------------------------------------

    pub async fn navigate(&self, url: &str) -> Result<(), WebDriverError> {
        debug!(url, "navigate");
        self.command(Method::POST, "/url", Some(json!({ "url": url })))
            .await?;
        Ok(())
    }

    pub async fn title(&self) -> Result<String, WebDriverError> {
        protocol::string_value(&self.command(Method::GET, "/title", None).await?)
    }

    pub async fn current_url(&self) -> Result<String, WebDriverError> {
        protocol::string_value(&self.command(Method::GET, "/url", None).await?)
    }

    // -------------------------------------------------------------------------
    // elements
    // -------------------------------------------------------------------------

    /// All elements matching a CSS selector, in document order.
    pub async fn find_elements(&self, css: &str) -> Result<Vec<ElementRef>, WebDriverError> {
        let body = json!({ "using": "css selector", "value": css });
        let value = self.command(Method::POST, "/elements", Some(body)).await?;
        protocol::element_refs(&value)
    }

    /// First element matching a CSS selector.
    pub async fn find_element(&self, css: &str) -> Result<ElementRef, WebDriverError> {
        let body = json!({ "using": "css selector", "value": css });
        match self.command(Method::POST, "/element", Some(body)).await {
            Ok(value) => protocol::element_ref(&value),
            Err(WebDriverError::NoSuchElement { .. }) => Err(WebDriverError::NoSuchElement {
                selector: css.to_owned(),
            }),
            Err(e) => Err(e),
        }
    }

    pub async fn click(&self, element: &ElementRef) -> Result<(), WebDriverError> {
        let path = format!("/element/{}/click", element.id());
        self.command(Method::POST, &path, Some(json!({}))).await?;
        Ok(())
    }

    pub async fn clear(&self, element: &ElementRef) -> Result<(), WebDriverError> {
        let path = format!("/element/{}/clear", element.id());
        self.command(Method::POST, &path, Some(json!({}))).await?;
        Ok(())
    }

    pub async fn send_keys(&self, element: &ElementRef, text: &str) -> Result<(), WebDriverError> {
        let path = format!("/element/{}/value", element.id());
        self.command(Method::POST, &path, Some(json!({ "text": text })))
            .await?;
        Ok(())
    }

    pub async fn text(&self, element: &ElementRef) -> Result<String, WebDriverError> {
        let path = format!("/element/{}/text", element.id());
        protocol::string_value(&self.command(Method::GET, &path, None).await?)
    }

    /// DOM attribute, `None` when absent.
    pub async fn attribute(
        &self,
        element: &ElementRef,
        name: &str,
    ) -> Result<Option<String>, WebDriverError> {
        let path = format!("/element/{}/attribute/{}", element.id(), name);
        match self.command(Method::GET, &path, None).await? {
            Value::Null => Ok(None),
            value => protocol::string_value(&value).map(Some),
        }
    }

    pub async fn is_displayed(&self, element: &ElementRef) -> Result<bool, WebDriverError> {
        let path = format!("/element/{}/displayed", element.id());
        let value = self.command(Method::GET, &path, None).await?;
        value
            .as_bool()
            .ok_or_else(|| WebDriverError::Parse(format!("expected bool: {value}")))
    }

    /// Runs a synchronous script; `arguments[i]` are the given JSON values.
    pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value, WebDriverError> {
        let body = json!({ "script": script, "args": args });
        self.command(Method::POST, "/execute/sync", Some(body)).await
    }

    // -------------------------------------------------------------------------
    // waits
    // -------------------------------------------------------------------------

    /// Polls `probe` until it yields `Some`, or fails with `Timeout`.
    ///
    /// Errors from the probe end the wait immediately.
    pub async fn wait_for<T, F, Fut>(&self, what: &str, mut probe: F) -> Result<T, WebDriverError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>, WebDriverError>>,
    {
        let started = Instant::now();
        loop {
            if let Some(found) = probe().await? {
                return Ok(found);
            }
            if started.elapsed() >= self.timeout {
                counter!(m::WEBDRIVER_WAIT_TIMEOUTS_TOTAL).increment(1);
                warn!(what, timeout_ms = self.timeout.as_millis() as u64, "wait timed out");
                return Err(WebDriverError::Timeout {
                    what: what.to_owned(),
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Waits until an element matching `css` is displayed and returns it.
    pub async fn wait_for_visible(&self, css: &str) -> Result<ElementRef, WebDriverError> {
        self.wait_for(css, move || self.first_visible(css)).await
    }

    /// Waits until no displayed element matches `css`.
    pub async fn wait_for_hidden(&self, css: &str) -> Result<(), WebDriverError> {
        let what = format!("{css} to disappear");
        self.wait_for(&what, move || async move {
            Ok(self.first_visible(css).await?.is_none().then_some(()))
        })
        .await
    }

    /// First displayed element matching `css`, if any.
    pub async fn first_visible(&self, css: &str) -> Result<Option<ElementRef>, WebDriverError> {
        for element in self.find_elements(css).await? {
            match self.is_displayed(&element).await {
                Ok(true) => return Ok(Some(element)),
                Ok(false) | Err(WebDriverError::NoSuchElement { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    /// Clicks the first displayed element matching `css`, waiting for it.
    pub async fn click_visible(&self, css: &str) -> Result<(), WebDriverError> {
        let element = self.wait_for_visible(css).await?;
        self.click(&element).await
    }

    /// Replaces the value of an input.
    pub async fn fill(&self, css: &str, text: &str) -> Result<(), WebDriverError> {
        let element = self.wait_for_visible(css).await?;
        self.clear(&element).await?;
        self.send_keys(&element, text).await
    }

    /// Ends the browser session.
    pub async fn quit(self) -> Result<(), WebDriverError> {
        self.command(Method::DELETE, "", None).await?;
        info!(session = %self.session_id, "webdriver session deleted");
        Ok(())
    }
}

async fn send(
    http: &reqwest::Client,
    method: Method,
    url: &str,
    body: Option<Value>,
) -> Result<Value, WebDriverError> {
    let mut request = http.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request.send().await.map_err(|e| {
        counter!(m::WEBDRIVER_REQUESTS_TOTAL, m::LABEL_RESULT => "fail").increment(1);
        WebDriverError::Request(e.to_string())
    })?;

    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| WebDriverError::Request(e.to_string()))?;

    let result = protocol::parse_response(status, &text);
    let label = if result.is_ok() { "pass" } else { "fail" };
    counter!(m::WEBDRIVER_REQUESTS_TOTAL, m::LABEL_RESULT => label).increment(1);
    result
}
