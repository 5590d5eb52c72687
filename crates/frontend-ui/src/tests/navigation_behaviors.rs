//! Behavioral tests for navigation and routing

use crate::error::UiError;
use crate::router::routes;

// ============================================================================
// ROUTE CONSTANT BEHAVIORS
// ============================================================================

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
}

#[test]
fn given_registered_routes_when_checked_then_all_unique() {
    let unique: std::collections::HashSet<_> = routes::ALL.iter().collect();
    assert_eq!(
        unique.len(),
        routes::ALL.len(),
        "All routes should be unique"
    );
}

#[test]
fn given_registered_routes_when_checked_then_all_absolute() {
    for route in routes::ALL {
        assert!(route.starts_with('/'), "{route} should start with /");
    }
}

#[test]
fn given_registered_routes_when_checked_then_lowercase() {
    for route in routes::ALL {
        assert_eq!(*route, route.to_lowercase(), "{route} should be lowercase");
    }
}

// ============================================================================
// UNMATCHED PATH BEHAVIORS
// ============================================================================

#[test]
fn given_unknown_path_when_checked_then_route_not_found() {
    let result = routes::check("/nowhere");
    assert_eq!(result, Err(UiError::RouteNotFound("/nowhere".to_string())));
}

#[test]
fn given_unknown_path_when_error_displayed_then_names_path() {
    let error = routes::check("/nowhere").unwrap_err();
    assert_eq!(error.to_string(), "Route not found: /nowhere");
}

#[test]
fn given_home_with_trailing_segment_when_checked_then_not_registered() {
    assert!(!routes::is_registered("/home"));
    assert!(!routes::is_registered("//"));
}

#[test]
fn given_home_when_checked_then_returned_unchanged() {
    assert_eq!(routes::check(routes::HOME).unwrap(), routes::HOME);
}
