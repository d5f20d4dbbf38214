//! 股票 AI 分析服务
//!
//! 提供基于 Gemini 的印尼股市分析 RESTful API
//! 请求经校验后代入固定印尼语模板，单次调用模型并透传生成文本

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::middleware::CorsMiddleware;
use crate::services::{GeminiService, PromptService};

/// 应用程序入口
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load();
    if config.gemini.api_key.is_empty() {
        log::warn!("未设置 GEMINI_API_KEY 环境变量，模型调用将直接失败");
    }

    // 模板服务和网关服务在启动时各构建一次，注入全部处理器
    let prompt_service = web::Data::new(PromptService::new()?);
    let gemini_service = web::Data::new(GeminiService::new(config.gemini.clone())?);

    let bind_addr = config.bind_addr();
    log::info!("启动股票 AI 分析服务，监听 {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let workers = config.server.workers;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 请求日志中间件
            .wrap(CorsMiddleware)     // 跨域与预检应答
            .app_data(handlers::json_config())
            .app_data(prompt_service.clone())
            .app_data(gemini_service.clone())
            .configure(handlers::config)  // 配置路由
    })
    .bind(&bind_addr)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
