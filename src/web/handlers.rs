use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use chrono::Local;
use log::{error, info};

use crate::web::models::{
    Capabilities, ChatRequest, ErrorDetail, HealthResponse, ModelDescriptor, ModelList,
    TestConnectionResponse,
};
use crate::AppState;

pub const TEST_CONNECTION_MESSAGE: &str = "Servidor local Mistral funcionando corretamente";

fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    info!("Health check request received");
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: epoch_seconds(),
    })
}

// Model listing endpoint
pub async fn list_models(data: web::Data<AppState>) -> impl Responder {
    info!("Models list request received");
    HttpResponse::Ok().json(ModelList {
        data: vec![ModelDescriptor {
            id: data.model.name().to_string(),
            object: "model".to_string(),
            created: epoch_seconds() as i64,
            owned_by: "local".to_string(),
            capabilities: Capabilities {
                coding: "excellent".to_string(),
                reasoning: "good".to_string(),
            },
        }],
    })
}

// Chat completion endpoint
pub async fn chat_completions(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    match data.model.complete(&req) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Error processing chat completion: {}", e);
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: e.to_string(),
            })
        }
    }
}

// Connectivity test endpoint
pub async fn test_connection() -> impl Responder {
    info!("Test connection request received");
    HttpResponse::Ok().json(TestConnectionResponse {
        success: true,
        message: TEST_CONNECTION_MESSAGE.to_string(),
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}

/// Rejects undecodable chat bodies with 422 before they reach the model.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    error!("Rejected chat request body: {}", detail);
    error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(ErrorDetail { detail }),
    )
    .into()
}
