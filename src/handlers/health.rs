use actix_web::{HttpResponse, Result};
use crate::models::HealthResponse;

/// 健康检查
///
/// GET /api/health
pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse::healthy()))
}
