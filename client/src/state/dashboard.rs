//! Dashboard record state: the user's projects and recent scans.
//!
//! DESIGN
//! ======
//! Owned by the dashboard page. Both collections are replaced together once
//! the project and scan fetches have settled, which is also when `loading`
//! drops.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Project, Scan};

/// Placeholder copy for an empty project list.
pub const NO_PROJECTS_MESSAGE: &str = "No projects yet";
/// Placeholder copy for an empty scan list.
pub const NO_SCANS_MESSAGE: &str = "No scans yet";

#[derive(Clone, Debug)]
pub struct DashboardState {
    pub projects: Vec<Project>,
    pub scans: Vec<Scan>,
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { projects: Vec::new(), scans: Vec::new(), loading: true }
    }
}

impl DashboardState {
    /// Store both fetched collections and clear the loading flag.
    pub fn settle(&mut self, projects: Vec<Project>, scans: Vec<Scan>) {
        self.projects = projects;
        self.scans = scans;
        self.loading = false;
    }

    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn scan_count(&self) -> usize {
        self.scans.len()
    }

    /// Sum of `bugs_found` across the loaded scans.
    #[must_use]
    pub fn total_bugs(&self) -> u64 {
        total_bugs(&self.scans)
    }
}

/// Sum of `bugs_found`; saturates instead of overflowing.
#[must_use]
pub fn total_bugs(scans: &[Scan]) -> u64 {
    scans
        .iter()
        .fold(0_u64, |total, scan| total.saturating_add(scan.bugs_found))
}

/// Placeholder text to show instead of the project list, if any.
#[must_use]
pub fn projects_placeholder(projects: &[Project]) -> Option<&'static str> {
    projects.is_empty().then_some(NO_PROJECTS_MESSAGE)
}

/// Placeholder text to show instead of the scan list, if any.
#[must_use]
pub fn scans_placeholder(scans: &[Scan]) -> Option<&'static str> {
    scans.is_empty().then_some(NO_SCANS_MESSAGE)
}
