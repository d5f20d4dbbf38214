use actix_web::{web, HttpResponse, Result};
use crate::models::{ErrorResponse, PromptRequest, PromptResponse};
use crate::services::GeminiService;

/// 通用 AI 提示词接口
///
/// POST /api/prompt
///
/// 请求体 {"prompt": "..."}，提示词原样转发给模型，不做模板处理
pub async fn handle_prompt(
    gemini: web::Data<GeminiService>,
    body: web::Json<PromptRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    if request.prompt.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("Prompt cannot be empty")));
    }

    match gemini.generate(&request.prompt).await {
        Ok(text) => Ok(HttpResponse::Ok().json(PromptResponse::success(text))),
        Err(e) => {
            log::error!("调用 Gemini 失败: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string())))
        }
    }
}
