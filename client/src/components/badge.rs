//! Pill label used for scan and project statuses.

use leptos::prelude::*;

use crate::util::status::BadgeVariant;

#[component]
pub fn Badge(variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=format!("badge {}", variant.class())>{children()}</span> }
}
