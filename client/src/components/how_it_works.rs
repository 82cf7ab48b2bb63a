//! Four-step workflow section (`#how-it-works`).

use leptos::prelude::*;

use super::icon::{Icon, IconKind};
use crate::content::{STEPS, animation_delay_style, shows_arrow, step_delay_ms};

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section section--tinted">
            <div class="container">
                <div class="section__header animate-fade-in">
                    <div class="pill">
                        <Icon kind=IconKind::Scan class="icon--sm"/>
                        <span>"How It Works"</span>
                    </div>
                    <h2 class="section__title">
                        "Four Simple Steps to"
                        <span class="gradient-text">"Bug-Free UI"</span>
                    </h2>
                    <p class="section__lede">
                        "Our streamlined workflow makes it easy to integrate visual testing into your development process."
                    </p>
                </div>
                <div class="step-grid">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="step animate-scale-in" style=animation_delay_style(step_delay_ms(index))>
                                    <div class="card step__card">
                                        <div class="step__number">{step.number}</div>
                                        <div class="step__icon">
                                            <Icon kind=step.icon class=format!("icon--xl {}", step.tone.class())/>
                                        </div>
                                        <h3 class="step__title">{step.title}</h3>
                                        <p class="step__body">{step.description}</p>
                                    </div>
                                    <Show when=move || shows_arrow(index)>
                                        <div class="step__arrow">
                                            <Icon kind=IconKind::ArrowRight class="icon--md text-muted"/>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="section__cta animate-fade-in">
                    <button class="btn btn--hero btn--lg" type="button">
                        "See It In Action"
                        <Icon kind=IconKind::ArrowRight class="icon--md btn__trailing"/>
                    </button>
                </div>
            </div>
        </section>
    }
}
