//! W3C WebDriver wire types.
//!
//! Pure request builders and response parsing, kept apart from the HTTP client
//! for testability.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::WebDriverError;

/// Web element identifier key defined by the W3C spec.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Browser to request in the new-session capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
}

impl Browser {
    /// W3C `browserName`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Browser {
    type Err = WebDriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chrome" | "chromium" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            other => Err(WebDriverError::UnknownBrowser(other.to_owned())),
        }
    }
}

/// Opaque reference to a DOM element in the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef(String);

impl ElementRef {
    pub fn id(&self) -> &str {
        &self.0
    }

    /// JSON form used when passing the element as a script argument.
    pub fn to_json(&self) -> Value {
        json!({ ELEMENT_KEY: self.0 })
    }
}

/// Body of `POST /session`.
pub fn new_session_body(browser: Browser, headless: bool) -> Value {
    let mut always_match = json!({ "browserName": browser.name() });
    if headless {
        let (key, args) = match browser {
            Browser::Chrome => (
                "goog:chromeOptions",
                json!(["--headless=new", "--window-size=1920,1080"]),
            ),
            Browser::Firefox => ("moz:firefoxOptions", json!(["-headless"])),
        };
        always_match[key] = json!({ "args": args });
    }
    json!({ "capabilities": { "alwaysMatch": always_match } })
}

#[derive(Deserialize)]
struct Envelope {
    value: Value,
}

#[derive(Deserialize)]
struct ErrorValue {
    error: String,
    #[serde(default)]
    message: String,
}

/// Parses a WebDriver response and returns its `value`.
///
/// Error payloads (`{"value":{"error":..,"message":..}}`) become typed errors.
pub fn parse_response(status: u16, body: &str) -> Result<Value, WebDriverError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        if status >= 400 {
            WebDriverError::Command {
                status,
                error: "unknown error".to_owned(),
                message: truncate(body, 200),
            }
        } else {
            WebDriverError::Parse(e.to_string())
        }
    })?;

    let is_error_payload = envelope.value.get("error").is_some_and(Value::is_string);
    if status >= 400 || is_error_payload {
        let err: ErrorValue = serde_json::from_value(envelope.value)
            .map_err(|e| WebDriverError::Parse(e.to_string()))?;
        return Err(map_error(status, err.error, err.message));
    }

    Ok(envelope.value)
}

fn map_error(status: u16, error: String, message: String) -> WebDriverError {
    match error.as_str() {
        "no such element" | "stale element reference" => WebDriverError::NoSuchElement {
            selector: message,
        },
        "invalid session id" | "session not created" => {
            WebDriverError::Session(format!("{error}: {message}"))
        }
        "timeout" | "script timeout" => WebDriverError::Timeout {
            what: message,
            timeout_ms: 0,
        },
        _ => WebDriverError::Command {
            status,
            error,
            message,
        },
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_owned(),
    }
}

/// Extracts the session id from a new-session response value.
pub fn session_id(value: &Value) -> Result<String, WebDriverError> {
    value
        .get("sessionId")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| WebDriverError::Session("response has no sessionId".to_owned()))
}

/// Extracts one element reference.
pub fn element_ref(value: &Value) -> Result<ElementRef, WebDriverError> {
    value
        .get(ELEMENT_KEY)
        .and_then(Value::as_str)
        .map(|id| ElementRef(id.to_owned()))
        .ok_or_else(|| WebDriverError::Parse(format!("not an element reference: {value}")))
}

/// Extracts a list of element references.
pub fn element_refs(value: &Value) -> Result<Vec<ElementRef>, WebDriverError> {
    value
        .as_array()
        .ok_or_else(|| WebDriverError::Parse(format!("expected element array: {value}")))?
        .iter()
        .map(element_ref)
        .collect()
}

/// Reads a string value, treating `null` as empty.
pub fn string_value(value: &Value) -> Result<String, WebDriverError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Err(WebDriverError::Parse(format!("expected string: {other}"))),
    }
}

/// Reads an array of strings returned by a script.
pub fn string_list(value: &Value) -> Result<Vec<String>, WebDriverError> {
    value
        .as_array()
        .ok_or_else(|| WebDriverError::Parse(format!("expected string array: {value}")))?
        .iter()
        .map(string_value)
        .collect()
}
