//! Like Handler
//!
//! Click-to-like lifecycle for treasure buttons, independent of any UI framework.
//! A click suppresses the default action, sends one GET with the treasure id and
//! writes `"Likes: <body>"` to the clicked element when the response arrives.

mod handler;
mod request;

pub use handler::{DefaultAction, LikeDisplay, LikeHandler, LikeTransport};
pub use request::{like_label, request_url};

use serde::Deserialize;

/// Where likes are sent and how the result is shown
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LikeConfig {
    /// Relative endpoint path
    pub endpoint: String,
    /// Query parameter carrying the treasure id
    pub param: String,
    /// Text put in front of the response body
    pub label_prefix: String,
    /// CSS selector for like buttons in server-rendered markup
    pub selector: String,
    /// Attribute holding the treasure id
    pub id_attribute: String,
}

impl Default for LikeConfig {
    fn default() -> Self {
        Self {
            endpoint: "/like_treasure/".to_string(),
            param: "treasure_id".to_string(),
            label_prefix: "Likes: ".to_string(),
            selector: "button".to_string(),
            id_attribute: "data-id".to_string(),
        }
    }
}

/// Failure of a single like request
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unreadable response body: {0}")]
    Body(String),
}
