//! 错误定义模块

use thiserror::Error;

/// PCOS系统统一错误类型
#[derive(Error, Debug)]
pub enum PcosError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("输入验证错误: {0}")]
    Validation(String),

    #[error("推荐生成错误: {0}")]
    Recommendation(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("网络错误: {0}")]
    Network(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("系统内部错误: {0}")]
    Internal(String),
}

/// PCOS系统统一结果类型
pub type Result<T> = std::result::Result<T, PcosError>;
