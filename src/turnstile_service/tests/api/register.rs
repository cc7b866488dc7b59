use secrecy::{ExposeSecret, Secret};
use turnstile_core::{Email, UserStore};

use crate::helpers::{RegisterBody, TestApp, json_body};

#[tokio::test]
async fn should_return_success_and_store_one_hashed_record() {
    let app = TestApp::new().await;
    let body = RegisterBody::random();

    let response = app.post_register(&body).await;
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "Status": "Success" })
    );

    let email = Email::from(Secret::from(body.email.clone()));
    assert_eq!(app.user_store.count_by_email(&email).await, 1);

    let user = app.user_store.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(user.first_name(), body.first_name);
    assert_eq!(user.last_name(), body.last_name);
    let stored = user.password_hash().as_ref().expose_secret();
    assert_ne!(stored, &body.password);
    assert!(stored.starts_with("$2b$"));
}

#[tokio::test]
async fn should_reject_second_registration_with_same_email() {
    let app = TestApp::new().await;
    let body = RegisterBody::random();

    json_body(app.post_register(&body).await).await;

    let second = RegisterBody {
        first_name: "Someone".to_owned(),
        ..body.clone()
    };
    let response = app.post_register(&second).await;
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "Error": "Email already exists." })
    );

    let email = Email::from(Secret::from(body.email));
    assert_eq!(app.user_store.count_by_email(&email).await, 1);
}

#[tokio::test]
async fn should_treat_email_case_as_significant() {
    let app = TestApp::new().await;
    let body = RegisterBody {
        email: "ann@x.com".to_owned(),
        ..RegisterBody::random()
    };
    let upper = RegisterBody {
        email: "ANN@x.com".to_owned(),
        ..body.clone()
    };

    json_body(app.post_register(&body).await).await;
    let response = app.post_register(&upper).await;

    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "Status": "Success" })
    );
}

#[tokio::test]
async fn should_reject_malformed_body_outside_json_convention() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&serde_json::json!({ "email": "ann@x.com" }))
        .await;

    assert!(response.status().is_client_error());
}
