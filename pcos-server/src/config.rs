//! 服务配置
//!
//! 可选TOML文件叠加 `PCOS_` 前缀环境变量。API密钥缺失不视为
//! 错误，由调用方降级为演示模式。

use config::{Config, Environment, File};
use pcos_core::{PcosError, Result};
use pcos_recommend::generator::DEFAULT_GEMINI_MODEL;
use serde::Deserialize;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Gemini API密钥（环境变量 PCOS_GEMINI_API_KEY）
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini模型名
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

impl ServiceConfig {
    /// 加载配置：默认值 ← 配置文件（可选） ← 环境变量
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder = builder.add_source(Environment::with_prefix("PCOS"));

        let config = builder
            .build()
            .map_err(|e| PcosError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| PcosError::Config(e.to_string()))
    }

    /// 密钥是否可用
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}
