//! Gemini API 数据模型
//!
//! 对接 Google generativelanguage API 的请求与响应结构，
//! 字段名遵循官方 camelCase 约定

use serde::{Deserialize, Serialize};

// 固定生成参数（较高温度便于模型给出具体价位估算）
const TEMPERATURE: f64 = 0.9;
const TOP_K: i32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: i32 = 8192;

/// 内容安全阈值类别，全部放行（分析文本会涉及风险、亏损等措辞）
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
];

/// generateContent 请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,
}

impl GenerateContentRequest {
    /// 从单条提示词构建请求，附带固定生成参数和安全设置
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig::default()),
            safety_settings: Some(SafetySetting::block_none()),
        }
    }
}

/// 一段对话内容
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// 内容片段
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// 生成参数
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: i32,
    pub top_p: f64,
    pub max_output_tokens: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// 单个类别的安全阈值
#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// 四个危害类别全部 BLOCK_NONE
    pub fn block_none() -> Vec<Self> {
        SAFETY_CATEGORIES
            .iter()
            .map(|category| Self {
                category: category.to_string(),
                threshold: "BLOCK_NONE".to_string(),
            })
            .collect()
    }
}

/// generateContent 响应体
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// 取第一个候选的第一段文本，其余全部丢弃
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
    }
}

/// 模型返回的一个候选回答
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}
