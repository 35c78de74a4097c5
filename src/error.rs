use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::Element;

pub const DEFAULT_ERROR_MESSAGE: &str = "An error has occurred. Please try again.";
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str =
    "The server could not handle the request. Please try again.";

pub struct Error {
    msg: String,
    technical_msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: &str, technical_msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: technical_msg.to_owned(),
            parent: None,
        }
    }

    /// Wrap `parent` behind a more specific user message.
    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: msg.to_owned(),
            parent: Some(Box::from(parent)),
        }
    }

    /// Message meant to be displayed to the user.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::new(DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.technical_msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.technical_msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let technical_msg = value
            .as_string()
            .unwrap_or_else(|| format!("Unknown error has happened: {value:?}"));
        Self::new(DEFAULT_ERROR_MESSAGE, &technical_msg)
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        let text = format!("A cast has failed for element: {element:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}

impl From<serde_json_wasm::de::Error> for Error {
    fn from(error: serde_json_wasm::de::Error) -> Self {
        let text = format!("Can't deserialize server response: {error:?}");
        Self::new(DEFAULT_SERVER_ERROR_MESSAGE, &text)
    }
}

/// Log an error that can't be shown anywhere better, e.g. in an event handler.
pub fn unwrap_or_log<T>(result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log::error!("{error:?}");
            None
        }
    }
}
