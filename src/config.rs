//! Page Configuration
//!
//! The server may embed JSON blocks in the page:
//! `<script type="application/json" id="like-config">` overrides the like
//! endpoint and selectors, `<script type="application/json" id="treasures">`
//! lists the treasures to render.

use like_handler::LikeConfig;
use web_sys::Document;

use crate::models::Treasure;

pub const CONFIG_SCRIPT_ID: &str = "like-config";
pub const TREASURES_SCRIPT_ID: &str = "treasures";
/// Element that scopes binding of server-rendered buttons
pub const LIKE_ROOT_ID: &str = "like-root";

/// Text content of an embedded script block, if present
fn embedded_json(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}

/// Parse the config block, falling back to defaults when absent or malformed
pub fn parse_config(json: Option<&str>) -> LikeConfig {
    let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
        return LikeConfig::default();
    };
    match serde_json::from_str(json) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("ignoring malformed #{CONFIG_SCRIPT_ID}: {err}");
            LikeConfig::default()
        }
    }
}

/// Parse the embedded treasures; `None` when the page carries no list
pub fn parse_treasures(json: Option<&str>) -> Option<Vec<Treasure>> {
    let json = json?.trim();
    match serde_json::from_str(json) {
        Ok(treasures) => Some(treasures),
        Err(err) => {
            tracing::warn!("ignoring malformed #{TREASURES_SCRIPT_ID}: {err}");
            None
        }
    }
}

pub fn load_config(document: &Document) -> LikeConfig {
    parse_config(embedded_json(document, CONFIG_SCRIPT_ID).as_deref())
}

pub fn load_treasures(document: &Document) -> Option<Vec<Treasure>> {
    parse_treasures(embedded_json(document, TREASURES_SCRIPT_ID).as_deref())
}
