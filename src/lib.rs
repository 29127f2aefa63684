//! Landing page server forwarding signup submissions to a configured webhook.
use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, web};

pub mod dto;
pub mod forms;
pub mod models;
pub mod routes;
pub mod services;

use crate::dto::ApiResponse;
use crate::models::config::SharedConfig;
use crate::services::signup::SignupService;

/// Directory with the landing page and its assets.
pub const PUBLIC_DIR: &str = "./public";

/// Config file stem resolved by default (picks up `config.yaml` or
/// `config.json` next to the binary).
pub const DEFAULT_CONFIG_FILE: &str = "config";

// Malformed request bodies get the same JSON envelope as everything else.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiResponse::failure("Requisição inválida.")),
        )
        .into()
    })
}

/// Build and run the HTTP server until shutdown.
pub async fn run(config: SharedConfig) -> std::io::Result<()> {
    let port = config.current().port;
    let config = web::Data::new(config);
    let signup_service =
        web::Data::new(SignupService::new().map_err(std::io::Error::other)?);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(signup_service.clone())
            .app_data(json_config())
            .service(routes::main::index)
            .service(routes::main::get_config)
            .service(routes::main::reload_config)
            .service(routes::main::signup)
            .service(Files::new("/", PUBLIC_DIR))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
