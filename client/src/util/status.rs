//! Static lookups from record fields to display treatments.
//!
//! Every lookup has a default arm, so statuses the backend adds later still
//! render.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::components::icon::IconKind;
use crate::net::types::ScanStatus;

/// Visual variant of a badge pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    /// BEM modifier class for the variant.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge--default",
            Self::Secondary => "badge--secondary",
            Self::Destructive => "badge--destructive",
            Self::Outline => "badge--outline",
        }
    }
}

/// Colour treatment of a status icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Info,
    Danger,
    Muted,
}

impl StatusTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "status-icon--success",
            Self::Info => "status-icon--info",
            Self::Danger => "status-icon--danger",
            Self::Muted => "status-icon--muted",
        }
    }
}

/// Icon shown next to a scan row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusIcon {
    pub kind: IconKind,
    pub tone: StatusTone,
    pub spinning: bool,
}

/// Badge variant for a scan status. Unrecognized values use `Outline`.
#[must_use]
pub fn badge_variant(status: &ScanStatus) -> BadgeVariant {
    match status {
        ScanStatus::Completed => BadgeVariant::Default,
        ScanStatus::Running => BadgeVariant::Secondary,
        ScanStatus::Failed => BadgeVariant::Destructive,
        ScanStatus::Pending | ScanStatus::Other(_) => BadgeVariant::Outline,
    }
}

/// Icon for a scan status. Unrecognized values get a muted clock.
#[must_use]
pub fn status_icon(status: &ScanStatus) -> StatusIcon {
    match status {
        ScanStatus::Completed => StatusIcon { kind: IconKind::CheckCircle, tone: StatusTone::Success, spinning: false },
        ScanStatus::Running => StatusIcon { kind: IconKind::Clock, tone: StatusTone::Info, spinning: true },
        ScanStatus::Failed => StatusIcon { kind: IconKind::AlertTriangle, tone: StatusTone::Danger, spinning: false },
        ScanStatus::Pending | ScanStatus::Other(_) => {
            StatusIcon { kind: IconKind::Clock, tone: StatusTone::Muted, spinning: false }
        }
    }
}

/// Label and variant of a project's activity badge.
#[must_use]
pub fn project_badge(is_active: bool) -> (&'static str, BadgeVariant) {
    if is_active { ("Active", BadgeVariant::Default) } else { ("Inactive", BadgeVariant::Secondary) }
}
