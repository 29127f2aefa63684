use std::path::Path;

use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::dto::{ApiResponse, ConfigDto};
use crate::forms::main::SignupForm;
use crate::models::config::SharedConfig;
use crate::services::ServiceError;
use crate::services::signup::{RequestMeta, SignupService};

#[get("/")]
pub async fn index() -> actix_web::Result<NamedFile> {
    let path = Path::new(crate::PUBLIC_DIR).join("index.html");
    Ok(NamedFile::open(path)?)
}

#[get("/api/config")]
pub async fn get_config(config: web::Data<SharedConfig>) -> impl Responder {
    HttpResponse::Ok().json(ConfigDto::from(&config.current()))
}

#[post("/api/reload-config")]
pub async fn reload_config(config: web::Data<SharedConfig>) -> impl Responder {
    match config.reload() {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::success(
            "Configurações recarregadas com sucesso!",
            None,
        )),
        Err(err) => {
            log::error!("Failed to reload configuration: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::failure("Erro ao recarregar configurações"))
        }
    }
}

#[post("/api/signup")]
pub async fn signup(
    req: HttpRequest,
    form: web::Json<SignupForm>,
    config: web::Data<SharedConfig>,
    service: web::Data<SignupService>,
) -> impl Responder {
    let meta = RequestMeta::from_request(&req);
    let current = config.current();

    match service.process(form.into_inner(), meta, &current).await {
        Ok(()) => {
            let redirect =
                (!current.redirect_url.is_empty()).then(|| current.redirect_url.clone());
            HttpResponse::Ok().json(ApiResponse::success("Conta criada com sucesso!", redirect))
        }
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(ApiResponse::failure(message))
        }
        Err(err) => {
            // Full detail stays server-side; the client gets a generic message.
            log::error!("Error processing signup: {err}");
            HttpResponse::InternalServerError().json(ApiResponse::failure(
                "Ocorreu um erro ao processar sua solicitação.",
            ))
        }
    }
}
