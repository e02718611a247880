//! Like Commands
//!
//! HTTP transport for like requests.

use gloo_net::http::Request;
use like_handler::{LikeError, LikeHandler, LikeTransport};

/// Browser `fetch` transport
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl LikeTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, LikeError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| LikeError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(LikeError::Status(response.status()));
        }

        response.text().await.map_err(|e| LikeError::Body(e.to_string()))
    }
}

/// Handler used by every like button on the page
pub type PageLikeHandler = LikeHandler<HttpTransport>;
