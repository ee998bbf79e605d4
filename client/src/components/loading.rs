//! Placeholder shown until the identity platform has reported once.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="loading-panel" aria-busy="true">
            <div class="loading-panel__spinner"></div>
            "Loading authentication state..."
        </div>
    }
}
