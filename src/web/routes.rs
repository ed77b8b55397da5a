use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error};

use crate::web::handlers;
use crate::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .route("/health", web::get().to(handlers::health_check))
        .route("/models", web::get().to(handlers::list_models))
        .route("/chat/completions", web::post().to(handlers::chat_completions))
        .route("/test", web::get().to(handlers::test_connection));
}

// Any origin, method and header. Tighten before exposing beyond localhost.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Full application: routes, CORS and the access log.
pub fn app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(cors())
        .wrap(Logger::default())
        .app_data(state)
        .configure(configure)
}
