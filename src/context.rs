//! Application Context
//!
//! Shared like handler provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::PageLikeHandler;

/// App-wide state provided via context
#[derive(Clone)]
pub struct LikeContext {
    /// Handler every `LikeButton` delegates to
    pub handler: PageLikeHandler,
}

impl LikeContext {
    pub fn new(handler: PageLikeHandler) -> Self {
        Self { handler }
    }
}

/// Get the like context
pub fn use_like_context() -> LikeContext {
    expect_context::<LikeContext>()
}
