//! HTTP handlers and route configuration.

mod auth;
mod dreams;
mod health;
mod interpretations;

use actix_web::web;

use crate::middleware::error::{dream_path_error_handler, json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Account routes
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .route("/profile", web::get().to(auth::profile))
                        .route("/profile", web::put().to(auth::update_profile)),
                )
                // Dream records, all bearer-protected via `Identity`
                .service(
                    web::scope("/dreams")
                        .app_data(web::PathConfig::default().error_handler(dream_path_error_handler))
                        .route("", web::post().to(dreams::create))
                        .route("", web::get().to(dreams::list))
                        .route("/{id}", web::get().to(dreams::get))
                        .route("/{id}", web::put().to(dreams::update))
                        .route("/{id}", web::delete().to(dreams::delete))
                        .route("/{id}/favorite", web::patch().to(dreams::set_favorite)),
                )
                .route(
                    "/interpretations",
                    web::post().to(interpretations::interpret),
                ),
        );
}
