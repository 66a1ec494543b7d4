//! The full path a user takes: log in, load inventory, see the dashboard.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use stockroom_auth::{AuthError, Credentials, Session, StubAuthenticator};
use stockroom_core::FixedClock;
use stockroom_dashboard::{DashboardConfig, DashboardView};
use stockroom_inventory::{ItemPatch, mock_inventory};

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()))
}

#[test]
fn configured_user_sees_low_stock_alerts() {
    let config = DashboardConfig::from_lookup(|var| match var {
        "STOCKROOM_USERNAME" => Some("user".to_string()),
        "STOCKROOM_PASSWORD" => Some("user123".to_string()),
        "STOCKROOM_SEARCH" => Some("dairy".to_string()),
        _ => None,
    })
    .unwrap();

    let mut session = Session::new(StubAuthenticator::with_demo_accounts());
    let user = session.login(&config.credentials).unwrap().clone();
    let service = mock_inventory(clock()).unwrap();

    let view = DashboardView::build(&user, &service, &config.search);

    assert_eq!(view.username, "user");
    assert_eq!(view.items.len(), 4);
    assert!(view.items.iter().all(|row| row.category == "Dairy"));
    assert_eq!(view.alerts.len(), 4);
}

#[test]
fn restocking_clears_the_alert() {
    let mut session = Session::new(StubAuthenticator::with_demo_accounts());
    session.login(&Credentials::new("admin", "admin123")).unwrap();
    let user = session.require_user().unwrap().clone();
    let mut service = mock_inventory(clock()).unwrap();

    let bread = service
        .items()
        .iter()
        .find(|item| item.name == "Whole Wheat Bread")
        .map(|item| item.id)
        .unwrap();
    service.update_item(bread, ItemPatch::new().quantity(40)).unwrap();

    let view = DashboardView::build(&user, &service, "");
    assert_eq!(view.alerts.len(), 3);
    assert!(view.alerts.iter().all(|alert| alert.item_id != bread));
}

#[test]
fn wrong_password_never_reaches_the_dashboard() {
    let mut session = Session::new(StubAuthenticator::with_demo_accounts());

    let err = session.login(&Credentials::new("admin", "letmein")).unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(session.require_user().unwrap_err(), AuthError::NotAuthenticated);
}
