//! Marketing landing page at `/`.

use leptos::prelude::*;

use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::site_chrome::{SiteFooter, SiteHeader};
use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = Signal::derive(move || auth.get().user.is_some());

    view! {
        <div class="landing">
            <SiteHeader signed_in=signed_in/>
            <main>
                <Hero auth=auth/>
                <Features/>
                <HowItWorks/>
            </main>
            <SiteFooter/>
        </div>
    }
}
