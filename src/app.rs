//! Treasure Likes App
//!
//! Renders the embedded treasure list with a like button per treasure.

use leptos::prelude::*;

use crate::commands::PageLikeHandler;
use crate::components::TreasureCard;
use crate::context::LikeContext;
use crate::models::Treasure;

#[component]
pub fn App(treasures: Vec<Treasure>, handler: PageLikeHandler) -> impl IntoView {
    // Provide context to all children
    provide_context(LikeContext::new(handler));

    let count = treasures.len();
    let empty = treasures.is_empty();

    view! {
        <main class="treasure-app">
            <h1>"Treasures"</h1>

            <Show when=move || !empty>
                <p class="treasure-count">{format!("{} treasures", count)}</p>
            </Show>
            <Show when=move || empty>
                <p class="treasure-empty">"No treasures yet."</p>
            </Show>

            <ul class="treasure-list">
                {treasures
                    .into_iter()
                    .map(|treasure| view! { <TreasureCard treasure=treasure /> })
                    .collect_view()}
            </ul>
        </main>
    }
}
