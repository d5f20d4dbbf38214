use actix_web::{web, HttpResponse, Result};
use crate::models::response::current_date;
use crate::models::{AnalysisResponse, ErrorResponse, StockAnalysisRequest};
use crate::services::{GeminiService, PromptService};

/// 每日荐股
///
/// GET /api/stock/daily-recommendations
pub async fn daily_recommendations(
    gemini: web::Data<GeminiService>,
    prompts: web::Data<PromptService>,
) -> Result<HttpResponse> {
    let date = current_date();

    let prompt = match prompts.render_daily_recommendations(&date) {
        Ok(p) => p,
        Err(e) => {
            log::error!("渲染每日荐股模板失败: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(AnalysisResponse::error(e.to_string())));
        }
    };

    match gemini.generate(&prompt).await {
        Ok(analysis) => Ok(HttpResponse::Ok().json(AnalysisResponse::success(date, analysis))),
        Err(e) => {
            log::error!("调用 Gemini 失败: {}", e);
            Ok(HttpResponse::InternalServerError().json(AnalysisResponse::error(e.to_string())))
        }
    }
}

/// 个股分析
///
/// POST /api/stock/analyze
///
/// 请求体 {"stock_code": "BBCA"}，代码不做白名单校验，
/// 未收录的代码由模板走通用兜底文案
pub async fn analyze_stock(
    gemini: web::Data<GeminiService>,
    prompts: web::Data<PromptService>,
    body: web::Json<StockAnalysisRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    if request.stock_code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("Stock code cannot be empty")));
    }

    let date = current_date();

    let prompt = match prompts.render_stock_analysis(&request.stock_code, &date) {
        Ok(p) => p,
        Err(e) => {
            log::error!("渲染个股分析模板失败: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(AnalysisResponse::error(e.to_string())));
        }
    };

    match gemini.generate(&prompt).await {
        Ok(analysis) => Ok(HttpResponse::Ok().json(AnalysisResponse::success(date, analysis))),
        Err(e) => {
            log::error!("调用 Gemini 失败: {}", e);
            Ok(HttpResponse::InternalServerError().json(AnalysisResponse::error(e.to_string())))
        }
    }
}
