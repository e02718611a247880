//! Treasure Card Component

use leptos::prelude::*;

use crate::components::LikeButton;
use crate::models::Treasure;

#[component]
pub fn TreasureCard(treasure: Treasure) -> impl IntoView {
    let href = treasure.detail_path();

    view! {
        <li class="treasure-card">
            <h2 class="treasure-name">
                <a href=href>{treasure.name}</a>
            </h2>
            <p class="treasure-meta">
                <span class="treasure-material">{treasure.material}</span>
                " from "
                <span class="treasure-location">{treasure.location}</span>
            </p>
            <p class="treasure-value">{format!("Value: {}", treasure.value)}</p>
            <LikeButton treasure_id=Some(treasure.id) />
        </li>
    }
}
