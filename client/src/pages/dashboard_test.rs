use super::*;
use crate::net::types::{Project, Scan, ScanStatus, User};

fn scan(bugs_found: u64) -> Scan {
    Scan {
        id: format!("s-{bugs_found}"),
        project_id: "p-1".to_owned(),
        status: ScanStatus::Completed,
        bugs_found,
        started_at: "2024-05-01T10:00:00Z".to_owned(),
        completed_at: None,
    }
}

fn project() -> Project {
    Project {
        id: "p-1".to_owned(),
        name: "Storefront".to_owned(),
        url: "https://shop.example.com".to_owned(),
        is_active: true,
        created_at: "2024-04-30T08:00:00Z".to_owned(),
    }
}

fn user() -> User {
    User { id: "u-1".to_owned(), email: Some("ada@example.com".to_owned()), first_name: None, last_name: None }
}

#[test]
fn stat_cards_show_counts_and_bug_total() {
    let mut state = DashboardState::default();
    state.settle(vec![project()], vec![scan(3), scan(0), scan(4)]);

    let cards = stat_cards(&state);
    assert_eq!(cards[0], ("Total Projects", IconKind::Globe, "1".to_owned()));
    assert_eq!(cards[1], ("Total Scans", IconKind::Eye, "3".to_owned()));
    assert_eq!(cards[2], ("Bugs Found", IconKind::Bug, "7".to_owned()));
}

#[test]
fn stat_cards_are_zero_for_empty_dashboard() {
    let mut state = DashboardState::default();
    state.settle(Vec::new(), Vec::new());
    let values: Vec<_> = stat_cards(&state).into_iter().map(|(_, _, v)| v).collect();
    assert_eq!(values, ["0", "0", "0"]);
}

#[test]
fn dashboard_waits_for_user_and_data() {
    let settled = {
        let mut state = DashboardState::default();
        state.settle(Vec::new(), Vec::new());
        state
    };
    assert!(!ready(&AuthState::pending(), &settled));
    assert!(!ready(&AuthState::signed_in(user()), &DashboardState::default()));
    assert!(ready(&AuthState::signed_in(user()), &settled));
    assert!(!ready(&AuthState::signed_out(), &settled));
}
