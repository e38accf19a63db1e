//! Integration tests for the single-record profile resources,
//! `/api/contact` and `/api/about`.
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{open_writes, setup_db, site};
use portfolio_backend::build_app;

fn contact(email: &str) -> Value {
    json!({
        "email": email,
        "location": "Nairobi, Kenya",
        "github_url": "https://github.com/someone",
    })
}

#[actix_web::test]
async fn test_contact_round_trip() {
    let app = test::init_service(build_app(setup_db().await, open_writes(), site())).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(contact("me@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["phone"], "");
    assert!(created["linkedin_url"].is_null());

    let req = test::TestRequest::get().uri("/api/contact").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["email"], "me@example.com");
    assert_eq!(all[0]["github_url"], "https://github.com/someone");
}

#[actix_web::test]
async fn test_contact_email_is_validated_and_unique() {
    let app = test::init_service(build_app(setup_db().await, open_writes(), site())).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(contact("not-an-email"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors: Value = test::read_body_json(resp).await;
    assert_eq!(errors["errors"]["email"], "Enter a valid email address.");

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(contact("me@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(contact("me@example.com"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_contact_url_and_length_checks() {
    let app = test::init_service(build_app(setup_db().await, open_writes(), site())).await;

    let mut body = contact("me@example.com");
    body["twitter_url"] = json!("twitter dot com");
    body["phone"] = json!("+254 700 000 000 000 000");
    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(body)
        .to_request();
    let errors: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(errors["errors"]["twitter_url"], "Enter a valid URL.");
    assert_eq!(
        errors["errors"]["phone"],
        "Ensure this field has no more than 20 characters."
    );
}

#[actix_web::test]
async fn test_about_lifecycle() {
    let app = test::init_service(build_app(setup_db().await, open_writes(), site())).await;

    let req = test::TestRequest::post()
        .uri("/api/about")
        .set_json(json!({"name": "", "title": "Engineer", "bio": "Hi"}))
        .to_request();
    let errors: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(errors["errors"]["name"], "This field may not be blank.");

    let req = test::TestRequest::post()
        .uri("/api/about")
        .set_json(json!({
            "name": "Jane Doe",
            "title": "Backend Engineer",
            "bio": "I build APIs.",
            "profile_image": "profile/jane.jpg"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/about/{}", created["id"].as_str().unwrap());

    let req = test::TestRequest::patch()
        .uri(&uri)
        .set_json(json!({"title": "Staff Engineer", "profile_image": null}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["title"], "Staff Engineer");
    assert_eq!(updated["name"], "Jane Doe");
    assert!(updated["profile_image"].is_null());

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/about").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert!(all.as_array().unwrap().is_empty());
}
