//! Integration tests for the aggregate endpoints `/api/summary` and
//! `/api/summary/stats`.
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};

use common::{education, experience, open_writes, project, setup_db, site, skill};
use portfolio_backend::build_app;
use portfolio_backend::models::summary::PortfolioStats;

#[actix_web::test]
async fn test_empty_portfolio() {
    let app = test::init_service(build_app(setup_db().await, open_writes(), site())).await;

    let req = test::TestRequest::get().uri("/api/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let summary: Value = test::read_body_json(resp).await;

    assert!(summary["about"].is_null());
    assert!(summary["contact"].is_null());
    assert_eq!(summary["featured_skills"], json!([]));
    assert_eq!(summary["featured_projects"], json!([]));
    assert_eq!(summary["recent_experience"], json!([]));
    assert_eq!(summary["education"], json!([]));

    let req = test::TestRequest::get().uri("/api/summary/stats").to_request();
    let stats: PortfolioStats = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats, PortfolioStats::default());
}

#[actix_web::test]
async fn test_summary_limits_and_stats_counts() {
    let app = test::init_service(build_app(setup_db().await, open_writes(), site())).await;

    let mut seeds: Vec<(&str, Value)> = Vec::new();
    for i in 0..10 {
        seeds.push(("/api/skills", skill(&format!("Featured {i}"), 1 + i % 5, true)));
    }
    for i in 0..2 {
        seeds.push(("/api/skills", skill(&format!("Plain {i}"), 3, false)));
    }
    for i in 0..8 {
        seeds.push(("/api/projects", project(&format!("Showcase {i}"), "Rust", true, true)));
    }
    seeds.push(("/api/projects", project("Hidden", "Rust", true, false)));
    seeds.push(("/api/projects", project("Side", "Go", false, true)));
    for (i, start) in ["2015-01-01", "2016-01-01", "2017-01-01", "2018-01-01"]
        .into_iter()
        .enumerate()
    {
        seeds.push(("/api/experience", experience(&format!("Company {i}"), start, false)));
    }
    seeds.push(("/api/experience", experience("Current Co", "2020-01-01", true)));
    seeds.push(("/api/education", education("University", false)));
    seeds.push(("/api/education", education("Night School", true)));
    seeds.push((
        "/api/contact",
        json!({"email": "first@example.com", "location": "Nairobi"}),
    ));
    seeds.push((
        "/api/about",
        json!({"name": "Jane Doe", "title": "Engineer", "bio": "Hello"}),
    ));

    for (uri, body) in seeds {
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED,
            "seeding {uri}"
        );
    }

    let req = test::TestRequest::get().uri("/api/summary").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;

    let skills = summary["featured_skills"].as_array().unwrap();
    assert_eq!(skills.len(), 8);
    assert!(skills.iter().all(|s| s["is_featured"] == true));
    assert!(skills.iter().all(|s| s["category_display"].is_string()));

    let projects = summary["featured_projects"].as_array().unwrap();
    assert_eq!(projects.len(), 6);
    assert!(
        projects
            .iter()
            .all(|p| p["is_featured"] == true && p["is_published"] == true)
    );
    assert!(projects.iter().all(|p| p["technologies_list"] == json!(["Rust"])));

    let recent = summary["recent_experience"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["company"], "Current Co");
    assert_eq!(recent[1]["company"], "Company 3");
    assert_eq!(recent[2]["company"], "Company 2");

    assert_eq!(summary["education"].as_array().unwrap().len(), 2);
    assert_eq!(summary["education"][0]["institution"], "Night School");
    assert_eq!(summary["contact"]["email"], "first@example.com");
    assert_eq!(summary["about"]["name"], "Jane Doe");

    let req = test::TestRequest::get().uri("/api/summary/stats").to_request();
    let stats: PortfolioStats = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        stats,
        PortfolioStats {
            total_projects: 9,
            featured_projects: 8,
            total_skills: 12,
            featured_skills: 10,
            total_experience: 5,
            current_experience: 1,
            total_education: 2,
            current_education: 1,
        }
    );
}

#[actix_web::test]
async fn test_failed_source_yields_single_opaque_error() {
    let db = setup_db().await;
    let app = test::init_service(build_app(db.clone(), open_writes(), site())).await;

    let req = test::TestRequest::post()
        .uri("/api/skills")
        .set_json(skill("Rust", 5, true))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    db.execute_unprepared("DROP TABLE education")
        .await
        .expect("Failed to drop table");

    for (uri, message) in [
        ("/api/summary", "Failed to retrieve portfolio summary"),
        ("/api/summary/stats", "Failed to retrieve portfolio stats"),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

        // No partial data and no database detail.
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": message }), "{uri}");
    }
}
