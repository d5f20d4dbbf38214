//! 请求数据模型
//!
//! 定义各接口的请求体结构

use serde::Deserialize;

/// 通用 AI 提示词请求
///
/// POST /api/prompt 的请求体
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    /// 自由文本提示词，去除首尾空白后不能为空
    #[serde(default)]
    pub prompt: String,
}

/// 个股分析请求
///
/// POST /api/stock/analyze 的请求体
#[derive(Debug, Deserialize)]
pub struct StockAnalysisRequest {
    /// 股票代码（如 BBCA、GOTO），不能为空
    #[serde(default)]
    pub stock_code: String,
}
