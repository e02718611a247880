//! Like Button Component
//!
//! Per-instance like button: the click listener belongs to this button only.

use leptos::prelude::*;
use like_handler::LikeDisplay;
use wasm_bindgen_futures::spawn_local;

use crate::context::use_like_context;

/// Displays like results through the button's label signal
#[derive(Clone, Copy)]
struct LabelSignal(WriteSignal<String>);

impl LikeDisplay for LabelSignal {
    fn show(&self, text: &str) {
        self.0.set(text.to_string());
    }
}

/// Like button for one treasure
///
/// # Arguments
/// * `treasure_id` - Sent as `treasure_id`; `None` sends an empty value
/// * `label` - Text shown until the first like succeeds (defaults to "Like")
#[component]
pub fn LikeButton(
    #[prop(into)] treasure_id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let ctx = use_like_context();
    let (text, set_text) = signal(label.unwrap_or_else(|| "Like".to_string()));
    let data_id = treasure_id.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        let ev: &web_sys::Event = ev.as_ref();
        spawn_local(ctx.handler.click(ev, treasure_id.clone(), LabelSignal(set_text)));
    };

    view! {
        <button class="like-btn" data-id=data_id on:click=on_click>
            {move || text.get()}
        </button>
    }
}
