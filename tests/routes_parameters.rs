use weaver_router_rs::path::normalize_path;
use weaver_router_rs::pattern::PatternError;
use weaver_router_rs::{RouteSpec, Router, RouterError};

#[test]
fn router_when_parameter_route_registered_then_captures_segment() {
    let router = Router::new(None);
    let id = router
        .add(RouteSpec::new("/users/:id"))
        .expect("route should register");

    let matched = router.recognize("/users/42").expect("path should match");
    assert_eq!(matched.route, id);
    assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn default_requirement_stops_at_separators() {
    let router = Router::new(None);
    router
        .add(RouteSpec::new("/users/:id"))
        .expect("route should register");

    assert!(router.recognize("/users/4.2").is_none());
    assert!(router.recognize("/users/4/2").is_none());
    assert!(router.recognize("/users/").is_none());
}

#[test]
fn custom_requirement_filters_matches() {
    let router = Router::new(None);
    router
        .add(RouteSpec::new("/users/:id").requirement("id", r"\d+"))
        .expect("route should register");

    assert!(router.recognize("/users/42").is_some());
    assert!(router.recognize("/users/abc").is_none());
}

#[test]
fn requirement_may_span_a_dot_separator() {
    let router = Router::new(None);
    let id = router
        .add(RouteSpec::new("/version/:v").requirement("v", r"\d+\.\d+"))
        .expect("route should register");

    let matched = router.recognize("/version/1.2").expect("path should match");
    assert_eq!(matched.route, id);
    assert_eq!(matched.params.get("v").map(String::as_str), Some("1.2"));
    assert!(router.recognize("/version/1").is_none());
}

#[test]
fn router_when_requirement_is_anchored_then_registration_fails() {
    let router = Router::new(None);
    let err = router
        .add(RouteSpec::new("/users/:id").requirement("id", r"^\d+$"))
        .expect_err("anchored requirement should be rejected");
    match err {
        RouterError::Pattern(PatternError::AnchoredRequirement { name }) => {
            assert_eq!(name, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_requirement_is_invalid_regex_then_registration_fails() {
    let router = Router::new(None);
    let err = router
        .add(RouteSpec::new("/users/:id").requirement("id", "["))
        .expect_err("invalid requirement should be rejected");
    assert!(matches!(
        err,
        RouterError::Pattern(PatternError::InvalidRequirement { .. })
    ));
}

#[test]
fn optional_format_group_captures_when_present() {
    let router = Router::new(None);
    router
        .add(RouteSpec::new("/users/:id(.:format)"))
        .expect("route should register");

    let matched = router.recognize("/users/42.json").expect("path should match");
    assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
    assert_eq!(
        matched.params.get("format").map(String::as_str),
        Some("json")
    );

    let matched = router.recognize("/users/42").expect("path should match");
    assert!(!matched.params.contains_key("format"));
}

#[test]
fn articles_scenario_matches_id_and_rejects_bare_collection_path() {
    let router = Router::new(None);
    let id = router
        .add(RouteSpec::new("/articles/:id").formatted(true))
        .expect("route should register");

    let matched = router.recognize("/articles/42").expect("path should match");
    assert_eq!(matched.route, id);
    assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));

    // A trailing slash normalizes away, leaving a path with no id segment.
    let normalized = normalize_path("/articles/");
    assert_eq!(normalized, "/articles");
    assert!(router.recognize(&normalized).is_none());
}
