//! Dashboard cards listing the user's projects and recent scans.
//!
//! Both panels are pure over their rows so the empty placeholders can be
//! rendered without a live session.

use leptos::prelude::*;

use super::badge::Badge;
use super::icon::{Icon, IconKind};
use crate::net::types::{Project, Scan};
use crate::state::dashboard::{projects_placeholder, scans_placeholder};
use crate::util::format::format_scan_date;
use crate::util::status::{badge_variant, project_badge, status_icon};

#[component]
pub fn ProjectsPanel(projects: Vec<Project>) -> impl IntoView {
    let body = match projects_placeholder(&projects) {
        Some(message) => view! {
            <div class="panel__empty">
                <Icon kind=IconKind::Globe class="icon--xxl text-muted"/>
                <p class="text-muted">{message}</p>
                <button class="btn btn--hero btn--sm">
                    <Icon kind=IconKind::Plus class="icon--sm"/>
                    "Create Your First Project"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <ul class="panel__rows">
                {projects.into_iter().map(|project| view! { <ProjectRow project=project/> }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="card panel">
            <div class="panel__header">
                <div class="panel__title-row">
                    <h2 class="panel__title">"Your Projects"</h2>
                    <button class="btn btn--outline btn--sm">
                        <Icon kind=IconKind::Plus class="icon--sm"/>
                        "Add Project"
                    </button>
                </div>
                <p class="panel__description">"Websites and applications you're monitoring for bugs"</p>
            </div>
            {body}
        </div>
    }
}

#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let (label, variant) = project_badge(project.is_active);
    view! {
        <li class="panel__row">
            <div>
                <h4 class="panel__row-title">{project.name}</h4>
                <p class="panel__row-meta">{project.url}</p>
            </div>
            <Badge variant=variant>{label}</Badge>
        </li>
    }
}

#[component]
pub fn ScansPanel(scans: Vec<Scan>) -> impl IntoView {
    let body = match scans_placeholder(&scans) {
        Some(message) => view! {
            <div class="panel__empty">
                <Icon kind=IconKind::Eye class="icon--xxl text-muted"/>
                <p class="text-muted">{message}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <ul class="panel__rows">
                {scans.into_iter().map(|scan| view! { <ScanRow scan=scan/> }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="card panel">
            <div class="panel__header">
                <h2 class="panel__title">"Recent Scans"</h2>
                <p class="panel__description">"Latest bug detection results from your projects"</p>
            </div>
            {body}
        </div>
    }
}

#[component]
fn ScanRow(scan: Scan) -> impl IntoView {
    let icon = status_icon(&scan.status);
    let icon_class = format!("icon--sm {}", icon.tone.class());
    let icon_class = if icon.spinning { format!("{icon_class} animate-spin") } else { icon_class };
    let variant = badge_variant(&scan.status);
    let status = scan.status.as_str().to_owned();

    view! {
        <li class="panel__row panel__row--scan">
            <Icon kind=icon.kind class=icon_class/>
            <div>
                <div class="panel__row-title-line">
                    <Badge variant=variant>{status}</Badge>
                    <span class="panel__row-count">{format!("{} bugs found", scan.bugs_found)}</span>
                </div>
                <p class="panel__row-meta">{format_scan_date(&scan.started_at)}</p>
            </div>
        </li>
    }
}
