//! # Error 模块
//!
//! 定义访问器与绑定配置使用的错误类型。

use thiserror::Error;

/// 访问器错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessorError {
    /// 通道索引越界（调用方违反约定）
    #[error("通道索引 {index} 越界，有效范围是 0..{count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// 无效参数
    #[error("无效参数: {message}")]
    InvalidArgument { message: String },

    /// 目标对象已被持有者释放
    #[error("目标对象已被释放")]
    TargetDropped,

    /// 目标对象正被其他借用占用
    #[error("目标对象正被借用，无法访问")]
    TargetBusy,

    /// 目标对象不再提供该属性
    #[error("属性 '{property}' 不可用")]
    PropertyUnavailable { property: &'static str },
}

impl AccessorError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读写失败
    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析失败
    #[error("配置解析失败: {0}")]
    Parse(#[source] serde_json::Error),

    /// JSON 序列化失败
    #[error("配置序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result 类型别名
pub type AccessorResult<T> = Result<T, AccessorError>;
