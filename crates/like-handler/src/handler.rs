//! Click Lifecycle
//!
//! Idle -> request in flight -> idle. Clicks are never coalesced: every click
//! sends its own request and whichever response resolves last owns the label.

use std::future::Future;
use std::sync::Arc;

use crate::request::{like_label, request_url};
use crate::{LikeConfig, LikeError};

/// Sends the like request and yields the response body
#[allow(async_fn_in_trait)]
pub trait LikeTransport {
    async fn get(&self, url: &str) -> Result<String, LikeError>;
}

/// Something whose displayed text can be replaced
pub trait LikeDisplay {
    fn show(&self, text: &str);
}

/// An event whose default browser action can be cancelled
pub trait DefaultAction {
    fn prevent_default(&self);
}

impl DefaultAction for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

impl LikeDisplay for web_sys::Element {
    fn show(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Shared like handler, cloned into every button's listener
pub struct LikeHandler<T> {
    transport: Arc<T>,
    config: Arc<LikeConfig>,
}

impl<T> Clone for LikeHandler<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: LikeTransport + 'static> LikeHandler<T> {
    pub fn new(transport: T, config: LikeConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &LikeConfig {
        &self.config
    }

    /// Send one like for `treasure_id` and show the returned count
    ///
    /// On failure the display is left as it was.
    pub async fn like<D: LikeDisplay>(&self, treasure_id: Option<&str>, display: &D) -> Result<String, LikeError> {
        let url = request_url(&self.config, treasure_id);
        tracing::debug!(%url, "sending like");

        let body = self.transport.get(&url).await?;
        let label = like_label(&self.config, &body);
        display.show(&label);
        Ok(label)
    }

    /// Handle a click on a like button
    ///
    /// The default action is cancelled before anything else, whatever the
    /// outcome. The returned future performs the request and is meant to be
    /// spawned on the local executor.
    pub fn click<E, D>(&self, event: &E, treasure_id: Option<String>, display: D) -> impl Future<Output = ()> + 'static
    where
        E: DefaultAction + ?Sized,
        D: LikeDisplay + 'static,
    {
        event.prevent_default();
        let handler = self.clone();
        async move {
            if let Err(err) = handler.like(treasure_id.as_deref(), &display).await {
                tracing::warn!(treasure_id = treasure_id.as_deref().unwrap_or_default(), "like failed: {err}");
            }
        }
    }
}
