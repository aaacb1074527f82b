//! Tests for registration and compilation

use super::{book_controller, echo_controller};
use crate::{EntityKind, Router, RouterConfig, RouterErrorCode, Verb};

#[test]
fn test_verb_helpers_register_under_their_verb() {
    let router = Router::new()
        .get("a", "C", "x")
        .post("b", "C", "x")
        .put("c", "C", "x")
        .delete("d", "C", "x")
        .patch("e", "C", "x");

    let table = router.table();
    assert_eq!(table.routes_for(Verb::Get)[0].pattern, "a");
    assert_eq!(table.routes_for(Verb::Post)[0].pattern, "b");
    assert_eq!(table.routes_for(Verb::Put)[0].pattern, "c");
    assert_eq!(table.routes_for(Verb::Delete)[0].pattern, "d");
    assert_eq!(table.routes_for(Verb::Patch)[0].pattern, "e");
    assert_eq!(router.routes().len(), 5);
}

#[test]
fn test_route_named_accepts_known_verbs() {
    let router = Router::new()
        .route_named("patch", "profile", "C", "x")
        .unwrap();
    assert!(router.table().route(Verb::Patch, "profile").is_some());
}

#[test]
fn test_route_named_rejects_unknown_verbs() {
    let err = Router::new()
        .route_named("OPTIONS", "profile", "C", "x")
        .err()
        .unwrap();
    assert_eq!(err.code, RouterErrorCode::UnsupportedVerb);
}

#[test]
fn test_last_registration_wins() {
    let router = Router::new()
        .controller(echo_controller("Old", &["show"]))
        .controller(echo_controller("New", &["view"]))
        .get("product/{id}", "Old", "show")
        .get("product/{id}", "New", "view");

    assert_eq!(router.routes().len(), 1);
    let route = router.table().route(Verb::Get, "product/{id}").unwrap();
    assert_eq!(route.controller, "New");
    assert_eq!(route.action, "view");
    assert!(router.compile().is_ok());
}

#[test]
fn test_compile_rejects_missing_action() {
    let err = Router::new()
        .controller(echo_controller("SomeController", &["index"]))
        .get("x", "SomeController", "missing")
        .compile()
        .err()
        .unwrap();

    assert_eq!(err.code, RouterErrorCode::HandlerNotFound);
    assert!(err.message.contains("missing"));
    assert!(err.message.contains("SomeController"));
    assert_eq!(err.cause.as_deref(), Some("route GET x"));
}

#[test]
fn test_compile_rejects_missing_controller() {
    let err = Router::new()
        .get("x", "Ghost", "index")
        .compile()
        .err()
        .unwrap();
    assert_eq!(err.code, RouterErrorCode::ControllerNotFound);
}

#[test]
fn test_compile_rejects_entity_with_incomplete_controller() {
    // index only; create/edit/delete/store/update are missing
    let err = Router::new()
        .controller(echo_controller("Partial", &["index"]))
        .resource_admin("report", "Partial")
        .compile()
        .err()
        .unwrap();
    assert_eq!(err.code, RouterErrorCode::HandlerNotFound);
    assert_eq!(err.cause.as_deref(), Some("resource 'report'"));
    // Every gap is reported at once
    let details = err.details.unwrap();
    assert_eq!(details["controller"], "Partial");
    assert_eq!(
        details["missing"],
        serde_json::json!(["create", "delete", "edit", "store", "update"])
    );
}

#[test]
fn test_compile_rejects_invalid_config() {
    let err = Router::new()
        .with_config(RouterConfig::new().with_query_var(""))
        .compile()
        .err()
        .unwrap();
    assert_eq!(err.code, RouterErrorCode::ConfigError);
}

#[test]
fn test_entity_kinds() {
    let router = Router::new()
        .post_type("book", "BookController")
        .resource_admin("author", "BookController");

    let kinds: Vec<_> = router.entities().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntityKind::PostType, EntityKind::Resource]);
}

#[test]
fn test_merge_folds_routes_and_controllers() {
    let shop = Router::new()
        .controller(echo_controller("Shop", &["show"]))
        .get("product/{id}", "Shop", "show");

    let router = Router::new()
        .controller(book_controller())
        .post_type("book", "BookController")
        .merge(shop)
        .compile()
        .unwrap();

    assert_eq!(router.table().route_count(), 1);
    assert_eq!(router.controllers().controllers(), vec!["BookController", "Shop"]);
    assert!(router.resolve(Verb::Get, "product/1").is_some());
}
