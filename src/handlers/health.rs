use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: HashMap<String, ComponentCheck>,
    pub timestamp: String,
}

/// Basic health check
/// GET /health
pub async fn health_check(pool: web::Data<PgPool>) -> HttpResponse {
    let connected = match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Health check database error: {}", e);
            false
        }
    };

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
    };

    if connected {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Readiness probe, verifies the database dependency
/// GET /health/ready
pub async fn readiness_check(pool: web::Data<PgPool>) -> HttpResponse {
    let mut checks = HashMap::new();

    let started = Instant::now();
    let check = match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            latency_ms: started.elapsed().as_millis() as u64,
            error: None,
        },
        Err(e) => ComponentCheck {
            status: ComponentStatus::Unhealthy,
            latency_ms: started.elapsed().as_millis() as u64,
            error: Some(e.to_string()),
        },
    };

    let ready = matches!(check.status, ComponentStatus::Healthy);
    checks.insert("postgresql".to_string(), check);

    let response = ReadinessResponse {
        ready,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Liveness probe
/// GET /health/live
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "alive": true }))
}
