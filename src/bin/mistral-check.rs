//! Probes a running server with every client operation and prints the
//! results as JSON. Exits non-zero when the connection test fails.
//!
//! Usage: `mistral-check [BASE_URL] [MESSAGE]`

use dotenv::dotenv;
use log::info;

use mistral_local::client::MistralLocalClient;
use mistral_local::config::server_url_from_env;
use mistral_local::web::models::{Message, DEFAULT_MODEL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(server_url_from_env);
    let prompt = args
        .next()
        .unwrap_or_else(|| "Estou tendo um erro no meu código".to_string());

    let client = MistralLocalClient::new(base_url);
    info!("Checking server at {}", client.base_url());

    let test = client.test_connection_or_fallback().await;
    let ok = test["success"].as_bool().unwrap_or(false);

    let report = serde_json::json!({
        "health": client.health_check_or_fallback().await,
        "models": client.list_models_or_fallback().await,
        "test": test,
        "chat": client
            .chat_completion_or_fallback(&[Message::user(prompt)], DEFAULT_MODEL, 0.7, 1000)
            .await,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    log::logger().flush();
    if !ok {
        anyhow::bail!("server at {} did not pass the connection test", client.base_url());
    }
    Ok(())
}
