//! Hero section: pitch, calls to action, headline stats, and illustration.

use leptos::prelude::*;

use super::icon::{Icon, IconKind};
use crate::content::HERO_STATS;
use crate::state::auth::AuthState;
use crate::util::auth::primary_cta;

#[component]
pub fn Hero(#[prop(into)] auth: Signal<AuthState>) -> impl IntoView {
    let cta = Memo::new(move |_| primary_cta(&auth.get()));

    let on_watch_demo = move |_| {
        #[cfg(feature = "hydrate")]
        log::info!("demo functionality coming soon");
    };

    view! {
        <section class="hero">
            <div class="hero__glow" aria-hidden="true"></div>
            <div class="container hero__grid">
                <div class="hero__copy animate-fade-in">
                    <div class="pill">
                        <Icon kind=IconKind::Zap class="icon--sm"/>
                        <span>"AI-Powered Bug Detection"</span>
                    </div>
                    <h1 class="hero__headline">
                        "Find UI Bugs"
                        <span class="gradient-text">"Before Users Do"</span>
                    </h1>
                    <p class="hero__lede">
                        "VisualBug uses advanced machine learning to automatically detect UI inconsistencies, layout issues, and visual bugs across your entire application. Deploy with confidence."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--hero btn--lg" href=move || cta.get().1>
                            {move || cta.get().0}
                            <Icon kind=IconKind::ArrowRight class="icon--md btn__trailing"/>
                        </a>
                        <button class="btn btn--outline btn--lg" on:click=on_watch_demo>
                            <Icon kind=IconKind::Play class="icon--md"/>
                            "Watch Demo"
                        </button>
                    </div>
                    <div class="hero__stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="hero__stat">
                                        <div class="hero__stat-value">{stat.value}</div>
                                        <div class="hero__stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero__art animate-scale-in">
                    <div class="hero__frame">
                        <div class="hero__mock" role="img" aria-label="VisualBug AI detecting UI bugs">
                            <div class="hero__mock-bar"></div>
                            <div class="hero__mock-row"></div>
                            <div class="hero__mock-row hero__mock-row--flagged"></div>
                            <div class="hero__mock-row hero__mock-row--short"></div>
                        </div>
                        <div class="hero__float hero__float--top">
                            <Icon kind=IconKind::Eye class="icon--sm tone--primary"/>
                            <span>"3 issues detected"</span>
                        </div>
                        <div class="hero__float hero__float--bottom">
                            <Icon kind=IconKind::Brain class="icon--sm tone--accent"/>
                            <span>"AI Analysis"</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
