//! Full-screen loading indicator shown while auth or data requests settle.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] muted_backdrop: bool) -> impl IntoView {
    view! {
        <div class="spinner-screen" class:spinner-screen--gradient=!muted_backdrop role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
