use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use serde_json::{json, Value};

/// A registered account and the credential returned for it.
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }
}

pub async fn register<S>(app: &S, email: &str, password: &str, name: &str) -> TestUser
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": email, "password": password, "name": name }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "registration failed");

    let body: Value = test::read_body_json(resp).await;
    TestUser {
        id: body["user"]["id"].as_i64().expect("user id"),
        email: body["user"]["email"].as_str().expect("email").to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}

pub async fn create_todo<S>(app: &S, user: &TestUser, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(user.bearer())
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "todo creation failed");
    test::read_body_json(resp).await
}
