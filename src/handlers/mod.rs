//! HTTP 请求处理器模块
//!
//! ## API 列表
//! - GET  /                                  服务描述
//! - GET  /api/health                        健康检查
//! - POST /api/prompt                        通用 AI 提示词
//! - GET  /api/stock/daily-recommendations   每日荐股
//! - POST /api/stock/analyze                 个股分析

pub mod health;
pub mod index;
pub mod prompt;
pub mod stock;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

/// JSON 解析配置
///
/// 请求体解析失败统一返回 400 和固定错误信息
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new("Cannot parse JSON"));
        error::InternalError::from_response(err, response).into()
    })
}

/// 配置路由
///
/// 接口按 web::resource 注册，路径命中但方法不符时返回 405
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index::service_info)))
        .service(
            web::scope("/api")
                .service(web::resource("/health").route(web::get().to(health::health_check)))
                .service(web::resource("/prompt").route(web::post().to(prompt::handle_prompt)))
                .service(
                    web::scope("/stock")
                        .service(
                            web::resource("/daily-recommendations")
                                .route(web::get().to(stock::daily_recommendations)),
                        )
                        .service(
                            web::resource("/analyze").route(web::post().to(stock::analyze_stock)),
                        ),
                ),
        );
}
