//! Dashboard summary card: a title, an icon, and one number.

use leptos::prelude::*;

use super::icon::{Icon, IconKind};

#[component]
pub fn StatCard(title: &'static str, icon: IconKind, value: String) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card__header">
                <span class="stat-card__title">{title}</span>
                <Icon kind=icon class="icon--sm text-muted"/>
            </div>
            <div class="stat-card__value">{value}</div>
        </div>
    }
}
