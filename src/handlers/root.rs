use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::SiteConfig;

const RESOURCES: [&str; 7] = [
    "skills",
    "projects",
    "experience",
    "education",
    "contact",
    "about",
    "summary",
];

#[derive(Debug, Serialize)]
struct ApiRoot<'a> {
    title: &'a str,
    header: &'a str,
    resources: BTreeMap<&'static str, String>,
}

/// GET /api/ - site branding and the absolute URL of every resource.
pub async fn api_root(req: HttpRequest, site: web::Data<SiteConfig>) -> HttpResponse {
    let info = req.connection_info();
    let base = format!("{}://{}/api", info.scheme(), info.host());

    let resources = RESOURCES
        .into_iter()
        .map(|name| (name, format!("{base}/{name}/")))
        .collect();

    HttpResponse::Ok().json(ApiRoot {
        title: &site.title,
        header: &site.header,
        resources,
    })
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
