//! Treasure Likes Frontend Entry Point
//!
//! Renders embedded treasures with like buttons, or binds the buttons of a
//! server-rendered page when no treasure list is embedded.

mod app;
mod bind;
mod commands;
mod components;
mod config;
mod context;
mod models;

use app::App;
use commands::HttpTransport;
use leptos::prelude::*;
use like_handler::LikeHandler;

#[cfg(all(test, target_family = "wasm"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("no document available")]
    NoDocument,
    #[error("no #{} or <body> to bind like buttons under", config::LIKE_ROOT_ID)]
    NoRoot,
    #[error("binding like buttons failed: {0}")]
    Bind(String),
}

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init();

    match run() {
        Ok(()) => tracing::info!("treasure likes initialized"),
        Err(err) => tracing::error!("unable to start: {err}"),
    }
}

fn run() -> Result<(), StartupError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(StartupError::NoDocument)?;

    let handler = LikeHandler::new(HttpTransport, config::load_config(&document));

    match config::load_treasures(&document) {
        Some(treasures) => {
            tracing::info!("rendering {} embedded treasures", treasures.len());
            mount_to_body(move || view! { <App treasures=treasures handler=handler /> });
        }
        None => {
            let root = document
                .get_element_by_id(config::LIKE_ROOT_ID)
                .or_else(|| document.body().map(Into::into))
                .ok_or(StartupError::NoRoot)?;
            bind::bind_like_buttons(&root, &handler).map_err(|e| StartupError::Bind(format!("{e:?}")))?;
        }
    }

    Ok(())
}
