//! Feature grid section (`#features`).

use leptos::prelude::*;

use super::icon::{Icon, IconKind};
use crate::content::{FEATURES, animation_delay_style, feature_delay_ms};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section__header animate-fade-in">
                    <div class="pill">
                        <Icon kind=IconKind::Zap class="icon--sm"/>
                        <span>"Powerful Features"</span>
                    </div>
                    <h2 class="section__title">
                        "Everything You Need for"
                        <span class="gradient-text">"Perfect UI Quality"</span>
                    </h2>
                    <p class="section__lede">
                        "Our comprehensive suite of AI-powered tools ensures your UI is pixel-perfect, consistent, and bug-free across all platforms and devices."
                    </p>
                </div>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <div class="card feature-card animate-scale-in" style=animation_delay_style(feature_delay_ms(index))>
                                    <div class="feature-card__icon">
                                        <Icon kind=feature.icon class=format!("icon--lg {}", feature.tone.class())/>
                                    </div>
                                    <h3 class="feature-card__title">{feature.title}</h3>
                                    <p class="feature-card__body">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
