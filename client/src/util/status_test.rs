use super::*;

// =============================================================
// badge_variant
// =============================================================

#[test]
fn known_statuses_map_to_their_variants() {
    assert_eq!(badge_variant(&ScanStatus::Completed), BadgeVariant::Default);
    assert_eq!(badge_variant(&ScanStatus::Running), BadgeVariant::Secondary);
    assert_eq!(badge_variant(&ScanStatus::Failed), BadgeVariant::Destructive);
    assert_eq!(badge_variant(&ScanStatus::Pending), BadgeVariant::Outline);
}

#[test]
fn unrecognized_status_falls_back_to_outline() {
    for raw in ["queued", "", "COMPLETED", "cancelled"] {
        assert_eq!(
            badge_variant(&ScanStatus::parse(raw)),
            BadgeVariant::Outline,
            "expected fallback for {raw:?}"
        );
    }
}

#[test]
fn badge_classes_are_distinct() {
    let classes = [
        BadgeVariant::Default.class(),
        BadgeVariant::Secondary.class(),
        BadgeVariant::Destructive.class(),
        BadgeVariant::Outline.class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// status_icon
// =============================================================

#[test]
fn running_scan_icon_spins() {
    let icon = status_icon(&ScanStatus::Running);
    assert_eq!(icon.kind, IconKind::Clock);
    assert_eq!(icon.tone, StatusTone::Info);
    assert!(icon.spinning);
}

#[test]
fn completed_and_failed_icons() {
    assert_eq!(status_icon(&ScanStatus::Completed).kind, IconKind::CheckCircle);
    assert_eq!(status_icon(&ScanStatus::Completed).tone, StatusTone::Success);
    assert_eq!(status_icon(&ScanStatus::Failed).kind, IconKind::AlertTriangle);
    assert_eq!(status_icon(&ScanStatus::Failed).tone, StatusTone::Danger);
}

#[test]
fn unknown_status_icon_is_muted_clock() {
    let icon = status_icon(&ScanStatus::parse("queued"));
    assert_eq!(icon, StatusIcon { kind: IconKind::Clock, tone: StatusTone::Muted, spinning: false });
}

// =============================================================
// project_badge
// =============================================================

#[test]
fn project_badge_reflects_active_flag() {
    assert_eq!(project_badge(true), ("Active", BadgeVariant::Default));
    assert_eq!(project_badge(false), ("Inactive", BadgeVariant::Secondary));
}
