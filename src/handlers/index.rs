//! 服务描述接口

use actix_web::{HttpResponse, Result};

/// 服务信息
///
/// GET /
pub async fn service_info() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Stock Analysis API with AI-powered recommendations",
        "version": "1.0.0",
        "endpoints": {
            "daily_recommendations": "GET /api/stock/daily-recommendations",
            "analyze_stock": "POST /api/stock/analyze",
            "general_ai": "POST /api/prompt",
            "health": "GET /api/health"
        }
    })))
}
