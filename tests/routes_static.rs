use weaver_router_rs::{RouteSpec, Router};

#[test]
fn router_when_literal_route_registered_then_matches_exact_path() {
    let router = Router::new(None);
    let id = router
        .add(RouteSpec::new("/health"))
        .expect("route should register");

    let matched = router.recognize("/health").expect("path should match");
    assert_eq!(matched.route, id);
    assert!(matched.params.is_empty());
}

#[test]
fn router_when_path_unknown_then_returns_none() {
    let router = Router::new(None);
    router
        .add(RouteSpec::new("/health"))
        .expect("route should register");

    assert!(router.recognize("/nope").is_none());
    assert!(router.recognize("/healthz").is_none());
}

#[test]
fn router_when_root_registered_then_matches_root() {
    let router = Router::new(None);
    let id = router
        .add(RouteSpec::new("/"))
        .expect("root route should register");

    let matched = router.recognize("/").expect("root should match");
    assert_eq!(matched.route, id);
}

#[test]
fn router_when_empty_then_everything_misses() {
    let router = Router::new(None);
    assert!(router.recognize("/").is_none());
    assert!(router.recognize("/anything").is_none());
}

#[test]
fn recognize_does_not_match_prefixes_or_extensions_of_a_route() {
    let router = Router::new(None);
    router
        .add(RouteSpec::new("/admin/users"))
        .expect("route should register");

    assert!(router.recognize("/admin").is_none());
    assert!(router.recognize("/admin/users/list").is_none());
    assert!(router.recognize("/admin/users").is_some());
}
