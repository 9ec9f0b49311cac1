mod common;
mod support;

use support::build_test_state;
use todo_backend::errors::domain::{ConflictKind, DomainError};
use todo_backend::repos::todos::{self, TodoPatch};
use todo_backend::repos::users;
use todo_backend::{with_txn, AppError, ErrorCode};

#[tokio::test]
async fn users_round_trip_and_unique_email() {
    let state = build_test_state().await.expect("test state");
    let db = state.db().expect("db");

    let user = users::create_user(db, "repo@example.com", "Repo", "$2b$04$hash")
        .await
        .unwrap();
    assert!(user.id > 0);

    let by_id = users::find_user_by_id(db, user.id).await.unwrap().unwrap();
    assert_eq!((by_id.email.as_str(), by_id.name.as_str()), ("repo@example.com", "Repo"));
    assert_eq!(by_id.password_hash, "$2b$04$hash");
    let by_email = users::find_user_by_email(db, "repo@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);
    assert!(users::find_user_by_id(db, user.id + 1).await.unwrap().is_none());

    let err = users::create_user(db, "repo@example.com", "Other", "x")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::UniqueEmail, _)
    ));
}

#[tokio::test]
async fn todo_queries_always_filter_on_owner() {
    let state = build_test_state().await.expect("test state");
    let db = state.db().expect("db");

    let owner = users::create_user(db, "o@example.com", "O", "h").await.unwrap();
    let other = users::create_user(db, "x@example.com", "X", "h").await.unwrap();
    let todo = todos::insert_todo(db, owner.id, "mine", None).await.unwrap();

    assert!(todos::find_todo(db, todo.id, owner.id).await.unwrap().is_some());
    assert!(todos::find_todo(db, todo.id, other.id).await.unwrap().is_none());
    assert!(todos::select_todos(db, other.id, None).await.unwrap().is_empty());

    let patch = TodoPatch {
        completed: Some(true),
        ..Default::default()
    };
    let err = todos::update_todo(db, todo.id, other.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_, _)));

    assert!(!todos::delete_todo(db, todo.id, other.id).await.unwrap());
    assert!(todos::delete_todo(db, todo.id, owner.id).await.unwrap());
    assert!(todos::find_todo(db, todo.id, owner.id).await.unwrap().is_none());
}

#[tokio::test]
async fn failed_transaction_rolls_back() {
    let state = build_test_state().await.expect("test state");
    let db = state.db().expect("db");

    let owner = users::create_user(db, "t@example.com", "T", "h").await.unwrap();
    let todo = todos::insert_todo(db, owner.id, "before", None).await.unwrap();
    let (id, owner_id) = (todo.id, owner.id);

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            let patch = TodoPatch {
                title: Some("during".into()),
                ..Default::default()
            };
            todos::update_todo(txn, id, owner_id, patch).await?;
            Err(AppError::internal("abort"))
        })
    })
    .await;
    assert_eq!(result.unwrap_err().code(), ErrorCode::Internal);

    let after = todos::find_todo(db, id, owner_id).await.unwrap().unwrap();
    assert_eq!(after.title, "before");
}
