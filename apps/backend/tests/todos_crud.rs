mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};
use support::auth::{create_todo, register};
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn create_then_list() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "list@example.com", "secret1", "Lister").await;

    let first = create_todo(&app, &user, json!({ "title": "Buy milk" })).await;
    assert_eq!(first["title"], "Buy milk");
    assert_eq!(first["completed"], false);
    assert_eq!(first["description"], Value::Null);
    assert_eq!(first["user_id"].as_i64(), Some(user.id));

    let second = create_todo(
        &app,
        &user,
        json!({ "title": "Walk dog", "description": "twice" }),
    )
    .await;
    assert_eq!(second["description"], "twice");

    let req = test::TestRequest::get()
        .uri("/api/todos")
        .insert_header(user.bearer())
        .to_request();
    let todos: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    let titles: Vec<&str> = todos.iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Buy milk", "Walk dog"]);
}

#[actix_web::test]
async fn owner_in_body_is_ignored() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "me@example.com", "secret1", "Me").await;

    let todo = create_todo(
        &app,
        &user,
        json!({ "title": "mine", "user_id": user.id + 100 }),
    )
    .await;
    assert_eq!(todo["user_id"].as_i64(), Some(user.id));
}

#[actix_web::test]
async fn blank_title_is_rejected() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "blank@example.com", "secret1", "Blank").await;

    let req = test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(user.bearer())
        .set_json(json!({ "title": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "VALIDATION_ERROR",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("Title"),
    )
    .await;
}

#[actix_web::test]
async fn filter_by_completion() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "filter@example.com", "secret1", "Filter").await;

    let done = create_todo(&app, &user, json!({ "title": "done" })).await;
    create_todo(&app, &user, json!({ "title": "open" })).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/todos/{}", done["id"]))
        .insert_header(user.bearer())
        .set_json(json!({ "completed": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for (query, expected) in [("true", "done"), ("false", "open")] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/todos?completed={query}"))
            .insert_header(user.bearer())
            .to_request();
        let todos: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0]["title"], expected);
    }

    let req = test::TestRequest::get()
        .uri("/api/todos?completed=maybe")
        .insert_header(user.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
}

#[actix_web::test]
async fn partial_update_keeps_absent_fields_and_clears_null() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "patch@example.com", "secret1", "Patch").await;

    let todo = create_todo(&app, &user, json!({ "title": "draft", "description": "notes" })).await;
    let uri = format!("/api/todos/{}", todo["id"]);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "title": "final" }))
        .to_request();
    let updated: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(updated["title"], "final");
    assert_eq!(updated["description"], "notes");
    assert_eq!(updated["completed"], false);
    assert_eq!(updated["created_at"], todo["created_at"]);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "description": null }))
        .to_request();
    let cleared: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(cleared["title"], "final");
    assert_eq!(cleared["description"], Value::Null);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(user.bearer())
        .set_json(json!({ "title": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn delete_then_missing() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "del@example.com", "secret1", "Del").await;

    let todo = create_todo(&app, &user, json!({ "title": "temporary" })).await;
    let uri = format!("/api/todos/{}", todo["id"]);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(user.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(user.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "TODO_NOT_FOUND", StatusCode::NOT_FOUND, None).await;
}

#[actix_web::test]
async fn bad_ids_are_rejected() {
    let state = build_test_state().await.expect("test state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let user = register(&app, "ids@example.com", "secret1", "Ids").await;

    for id in ["abc", "0", "-4"] {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/todos/{id}"))
            .insert_header(user.bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "INVALID_ID", StatusCode::BAD_REQUEST, None).await;
    }
}
