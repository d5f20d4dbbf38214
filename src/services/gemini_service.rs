//! Gemini 调用服务
//!
//! 封装对 generativelanguage API 的单次同步调用，
//! 失败即返回错误，不做重试

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::{CredentialPlacement, GeminiConfig};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};

/// Gemini 网关服务
///
/// 进程启动时构建一次，注入各处理器共用；
/// HTTP 客户端超时取自配置
pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// 构建 generateContent 请求地址
    ///
    /// 查询参数认证模式下密钥附加在 URL 上
    fn endpoint_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        ))?;

        if self.config.credential_placement == CredentialPlacement::Query {
            url.query_pairs_mut().append_pair("key", &self.config.api_key);
        }

        Ok(url)
    }

    /// 调用模型生成文本
    ///
    /// 单次请求，返回第一个候选的第一段文本
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        // 凭证缺失直接失败，不发起网络请求
        if self.config.api_key.is_empty() {
            return Err(anyhow!("GEMINI_API_KEY is not set"));
        }

        let request_body = GenerateContentRequest::from_prompt(prompt);
        let url = self.endpoint_url()?;

        log::debug!(
            "调用 Gemini 模型 {}，提示词 {} 字节",
            self.config.model,
            prompt.len()
        );

        let mut builder = self.client.post(url).json(&request_body);
        if self.config.credential_placement == CredentialPlacement::Header {
            builder = builder.header("x-goog-api-key", &self.config.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| anyhow!("failed to send request to Gemini API: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            // 错误响应体尽量解析出来一并返回，便于排查
            let error_body: serde_json::Value =
                response.json().await.unwrap_or(serde_json::Value::Null);
            return Err(anyhow!(
                "error from Gemini API (status {}): {}",
                status.as_u16(),
                error_body
            ));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("failed to parse Gemini response: {}", e))?;

        envelope
            .first_text()
            .ok_or_else(|| anyhow!("no content received from Gemini"))
    }
}

// ==================== 测试模块 ====================
