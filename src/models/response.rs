//! 通用 API 响应模型
//!
//! 定义各接口的响应格式

use serde::{Deserialize, Serialize};
use chrono::Utc;
use chrono_tz::Asia::Jakarta;

/// 获取雅加达时间（UTC+7，印尼市场时区）
pub fn get_jakarta_time() -> chrono::DateTime<chrono_tz::Tz> {
    Utc::now().with_timezone(&Jakarta)
}

/// 获取雅加达当前日期（YYYY-MM-DD）
pub fn current_date() -> String {
    get_jakarta_time().format("%Y-%m-%d").to_string()
}

/// 错误响应
///
/// 所有 4xx/5xx 响应都带 error 字段
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误信息
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// 通用提示词响应
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    /// 请求状态（success）
    pub status: String,
    /// 模型生成的文本
    pub response: String,
}

impl PromptResponse {
    pub fn success(response: String) -> Self {
        Self {
            status: "success".to_string(),
            response,
        }
    }
}

/// 股票分析响应
///
/// 股票相关接口的统一响应结构，包含：
/// - status: success 或 error
/// - date: 分析日期（成功时有值）
/// - analysis: 分析文本（成功时有值）
/// - error: 错误信息（失败时有值）
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// 请求状态
    pub status: String,
    /// 分析日期（YYYY-MM-DD）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// 分析文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// 创建成功响应
    pub fn success(date: String, analysis: String) -> Self {
        Self {
            status: "success".to_string(),
            date: Some(date),
            analysis: Some(analysis),
            error: None,
        }
    }

    /// 创建错误响应
    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            date: None,
            analysis: None,
            error: Some(message),
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 响应时间戳（ISO 8601 格式，雅加达时间）
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: get_jakarta_time().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试雅加达时间
    #[test]
    fn test_get_jakarta_time() {
        println!("\n========== 测试雅加达时间获取 ==========");
        let time = get_jakarta_time().to_rfc3339();
        println!("  当前雅加达时间: {}", time);
        assert!(time.contains("+07:00"));
        println!("✅ 雅加达时间测试通过！");
    }

    /// 测试日期格式
    #[test]
    fn test_current_date_format() {
        println!("\n========== 测试日期格式 ==========");
        let date = current_date();
        println!("  当前日期: {}", date);
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    /// 测试成功响应序列化省略空字段
    #[test]
    fn test_analysis_response_success_shape() {
        println!("\n========== 测试成功响应结构 ==========");
        let response = AnalysisResponse::success("2024-01-01".to_string(), "analisis".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["analysis"], "analisis");
        assert!(json.get("error").is_none());
        println!("✅ 成功响应结构测试通过！");
    }

    /// 测试错误响应序列化省略空字段
    #[test]
    fn test_analysis_response_error_shape() {
        println!("\n========== 测试错误响应结构 ==========");
        let response = AnalysisResponse::error("upstream failed".to_string());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "upstream failed");
        assert!(json.get("date").is_none());
        assert!(json.get("analysis").is_none());
        println!("✅ 错误响应结构测试通过！");
    }
}
