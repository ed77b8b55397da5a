//! HTTP client for the local mock server.
//!
//! Every operation returns a [`ClientResult`]. Callers that want the
//! loose JSON shapes older integrations expect (a fallback body instead of
//! an error) use the `*_or_fallback` variants, which never fail.

use std::time::Duration;

use log::{error, info};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::DEFAULT_SERVER_URL;
use crate::web::models::{ChatResponse, HealthResponse, Message, ModelList, TestConnectionResponse};

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status} for url: {url}")]
    Status { status: StatusCode, url: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn health_fallback(&self) -> Value {
        json!({ "status": "error", "message": self.to_string() })
    }

    pub fn models_fallback(&self) -> Value {
        json!({ "data": [], "error": self.to_string() })
    }

    pub fn chat_fallback(&self) -> Value {
        let description = self.to_string();
        json!({
            "error": description,
            "id": "error",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": format!("Erro ao comunicar com o servidor: {}", description)
                }
            }]
        })
    }

    pub fn test_fallback(&self) -> Value {
        json!({ "success": false, "message": format!("Erro: {}", self) })
    }
}

pub struct MistralLocalClient {
    base_url: String,
    client: Client,
}

impl MistralLocalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Initializing Mistral client for: {}", base_url);
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).timeout(STATUS_TIMEOUT).send().await?;
        decode(response, url).await
    }

    pub async fn health_check(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await.inspect_err(|e| error!("Health check failed: {}", e))
    }

    pub async fn list_models(&self) -> ClientResult<ModelList> {
        self.get("/models").await.inspect_err(|e| error!("Failed to list models: {}", e))
    }

    pub async fn chat_completion(
        &self,
        messages: &[Message],
        model: &str,
        temperature: f64,
        max_tokens: i64,
    ) -> ClientResult<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = json!({
            "messages": messages,
            "model": model,
            "temperature": temperature,
            "max_tokens": max_tokens
        });

        info!("Sending request to {}", url);
        let result: ClientResult<ChatResponse> = async {
            let response = self
                .client
                .post(&url)
                .json(&payload)
                .timeout(CHAT_TIMEOUT)
                .send()
                .await?;
            decode(response, url).await
        }
        .await;

        result.inspect_err(|e| error!("Chat completion failed: {}", e))
    }

    pub async fn test_connection(&self) -> ClientResult<TestConnectionResponse> {
        self.get("/test").await.inspect_err(|e| error!("Connection test failed: {}", e))
    }

    pub async fn health_check_or_fallback(&self) -> Value {
        match self.health_check().await {
            Ok(health) => json!(health),
            Err(e) => e.health_fallback(),
        }
    }

    pub async fn list_models_or_fallback(&self) -> Value {
        match self.list_models().await {
            Ok(models) => json!(models),
            Err(e) => e.models_fallback(),
        }
    }

    pub async fn chat_completion_or_fallback(
        &self,
        messages: &[Message],
        model: &str,
        temperature: f64,
        max_tokens: i64,
    ) -> Value {
        match self.chat_completion(messages, model, temperature, max_tokens).await {
            Ok(response) => json!(response),
            Err(e) => e.chat_fallback(),
        }
    }

    pub async fn test_connection_or_fallback(&self) -> Value {
        match self.test_connection().await {
            Ok(test) => json!(test),
            Err(e) => e.test_fallback(),
        }
    }
}

impl Default for MistralLocalClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, url: String) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status { status, url });
    }
    Ok(response.json::<T>().await?)
}

/// True when the server at `base_url` answers its connection test.
pub async fn test_local_server(base_url: &str) -> bool {
    MistralLocalClient::new(base_url)
        .test_connection()
        .await
        .map(|r| r.success)
        .unwrap_or(false)
}
