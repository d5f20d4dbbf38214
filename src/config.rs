//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，环境变量优先级最高

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Gemini API 默认地址
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 凭证放置方式
///
/// Gemini API 同时支持请求头和查询参数两种认证方式，
/// 默认使用请求头（x-goog-api-key），避免密钥出现在 URL 和访问日志中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPlacement {
    /// x-goog-api-key 请求头
    #[default]
    Header,
    /// key 查询参数
    Query,
}

/// Gemini API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API 密钥（从 GEMINI_API_KEY 环境变量读取）
    #[serde(default)]
    pub api_key: String,
    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,
    /// API 基础地址
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// 凭证放置方式
    #[serde(default)]
    pub credential_placement: CredentialPlacement,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini 配置
    #[serde(default)]
    pub gemini: GeminiConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_model() -> String { "gemini-2.0-flash".to_string() }
fn default_api_base() -> String { GEMINI_API_BASE.to_string() }
fn default_timeout() -> u64 { 60 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_base: default_api_base(),
            credential_placement: CredentialPlacement::default(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值，最后应用环境变量
    pub fn load() -> Self {
        let config_paths = ["config.json", "config/config.json"];

        let mut config = Self::default();
        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(c) => {
                        log::info!("从 {} 加载配置成功", path);
                        config = c;
                        break;
                    }
                    Err(e) => {
                        log::warn!("加载配置文件 {} 失败: {}", path, e);
                    }
                }
            }
        }

        config.apply_env();
        config
    }

    /// 应用环境变量覆盖
    ///
    /// - GEMINI_API_KEY: API 密钥
    /// - PORT: 监听端口
    fn apply_env(&mut self) {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                self.gemini.api_key = key;
            }
        }
        if let Ok(port) = env::var("PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => log::warn!("PORT 环境变量 {} 无效，保留端口 {}", port, self.server.port),
            }
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
