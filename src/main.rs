use actix_web::{web::Data, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use mistral_local::config::ServerConfig;
use mistral_local::web::routes;
use mistral_local::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    info!("Starting Mistral local server on port {}", config.port);

    let app_state = Data::new(AppState::default());

    let result = HttpServer::new(move || routes::app(app_state.clone()))
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run()
        .await
        .context("server terminated with an error");

    info!("Mistral local server stopped");
    log::logger().flush();
    result
}
