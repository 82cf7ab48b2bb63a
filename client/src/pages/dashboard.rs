//! Authenticated dashboard at `/dashboard`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests projects and scans once the user is known, then renders summary
//! stats and the two record panels. Fetch failures arrive as empty lists, so
//! the page has no error state of its own.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icon::{Icon, IconKind};
use crate::components::record_panels::{ProjectsPanel, ScansPanel};
use crate::components::site_chrome::Logo;
use crate::components::spinner::Spinner;
use crate::components::stat_card::StatCard;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::dashboard::DashboardState;
use crate::util::auth::{install_redirect, redirect_from_dashboard};

/// Title, icon, and value of each summary card, in display order.
#[must_use]
pub fn stat_cards(state: &DashboardState) -> [(&'static str, IconKind, String); 3] {
    [
        ("Total Projects", IconKind::Globe, state.project_count().to_string()),
        ("Total Scans", IconKind::Eye, state.scan_count().to_string()),
        ("Bugs Found", IconKind::Bug, state.total_bugs().to_string()),
    ]
}

/// Whether the dashboard body can render: the user is known and both fetches settled.
#[must_use]
pub fn ready(auth: &AuthState, data: &DashboardState) -> bool {
    auth.phase() == AuthPhase::Authenticated && !data.loading
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, redirect_from_dashboard, use_navigate());

    let data = RwSignal::new(DashboardState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || auth.get().user.is_none() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (projects, scans) = crate::net::api::fetch_dashboard_data().await;
            data.update(|d| d.settle(projects, scans));
        });
    });

    let user_label = move || auth.get().user.map(|user| user.display_label()).unwrap_or_default();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::util::auth::HOME_ROUTE);
            }
        });
    };

    view! {
        <Show
            when=move || ready(&auth.get(), &data.get())
            fallback=|| view! { <Spinner muted_backdrop=true/> }
        >
            <div class="dashboard">
                <header class="dashboard__header">
                    <div class="container dashboard__header-inner">
                        <Logo/>
                        <div class="dashboard__user">
                            <span class="dashboard__identity">
                                <Icon kind=IconKind::User class="icon--sm text-muted"/>
                                <span>{user_label}</span>
                            </span>
                            <button class="btn btn--outline btn--sm" on:click=on_sign_out>
                                <Icon kind=IconKind::LogOut class="icon--sm"/>
                                "Sign Out"
                            </button>
                        </div>
                    </div>
                </header>
                <main class="container dashboard__main">
                    <section class="dashboard__welcome">
                        <h1>"Welcome back!"</h1>
                        <p class="text-muted">
                            "Monitor your websites for UI bugs and keep your applications pixel-perfect."
                        </p>
                    </section>
                    <div class="stat-grid">
                        {move || {
                            stat_cards(&data.get())
                                .into_iter()
                                .map(|(title, icon, value)| view! { <StatCard title=title icon=icon value=value/> })
                                .collect_view()
                        }}
                    </div>
                    <div class="panel-grid">
                        {move || view! { <ProjectsPanel projects=data.get().projects/> }}
                        {move || view! { <ScansPanel scans=data.get().scans/> }}
                    </div>
                </main>
            </div>
        </Show>
    }
}
