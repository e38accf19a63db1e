pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod projects;
pub mod root;
pub mod skills;
pub mod summary;

use actix_web::{HttpResponse, web};

use crate::error::ApiError;

/// Malformed bodies, paths and query strings surface as API errors rather
/// than actix's plain-text defaults. An id that is not a UUID cannot name a
/// record, so it reads as not found.
fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        ApiError::NotFound(format!("No record matches this id: {err}")).into()
    }));
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    extractor_config(cfg);

    cfg.route("", web::get().to(root::api_root))
        .route("/", web::get().to(root::api_root));

    // ── Skills ──
    cfg.service(
        web::scope("/skills")
            .route("", web::get().to(skills::get_skills))
            .route("", web::post().to(skills::create_skill))
            .route("/categories", web::get().to(skills::get_categories))
            .route("/{id}", web::get().to(skills::get_skill))
            .route("/{id}", web::put().to(skills::update_skill))
            .route("/{id}", web::patch().to(skills::update_skill))
            .route("/{id}", web::delete().to(skills::delete_skill)),
    );

    // ── Projects ──
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::get_projects))
            .route("", web::post().to(projects::create_project))
            .route("/technologies", web::get().to(projects::get_technologies))
            .route("/{id}", web::get().to(projects::get_project))
            .route("/{id}", web::put().to(projects::update_project))
            .route("/{id}", web::patch().to(projects::update_project))
            .route("/{id}", web::delete().to(projects::delete_project)),
    );

    // ── Timeline ──
    cfg.service(
        web::scope("/experience")
            .route("", web::get().to(experience::get_experience_list))
            .route("", web::post().to(experience::create_experience))
            .route("/{id}", web::get().to(experience::get_experience))
            .route("/{id}", web::put().to(experience::update_experience))
            .route("/{id}", web::patch().to(experience::update_experience))
            .route("/{id}", web::delete().to(experience::delete_experience)),
    );
    cfg.service(
        web::scope("/education")
            .route("", web::get().to(education::get_education_list))
            .route("", web::post().to(education::create_education))
            .route("/{id}", web::get().to(education::get_education))
            .route("/{id}", web::put().to(education::update_education))
            .route("/{id}", web::patch().to(education::update_education))
            .route("/{id}", web::delete().to(education::delete_education)),
    );

    // ── Profile ──
    cfg.service(
        web::scope("/contact")
            .route("", web::get().to(contact::get_contacts))
            .route("", web::post().to(contact::create_contact))
            .route("/{id}", web::get().to(contact::get_contact))
            .route("/{id}", web::put().to(contact::update_contact))
            .route("/{id}", web::patch().to(contact::update_contact))
            .route("/{id}", web::delete().to(contact::delete_contact)),
    );
    cfg.service(
        web::scope("/about")
            .route("", web::get().to(about::get_about_list))
            .route("", web::post().to(about::create_about))
            .route("/{id}", web::get().to(about::get_about))
            .route("/{id}", web::put().to(about::update_about))
            .route("/{id}", web::patch().to(about::update_about))
            .route("/{id}", web::delete().to(about::delete_about)),
    );

    // ── Aggregates (read-only) ──
    cfg.service(
        web::scope("/summary")
            .route("", web::get().to(summary::get_summary))
            .route("/stats", web::get().to(summary::get_stats)),
    );
}

/// Fallback for unmatched routes so clients always get JSON back.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}
