//! 统一错误处理
//!
//! 提供 JSON-PC 转换、提示词增强和配置加载共用的结构化错误类型

use thiserror::Error;

/// Errors that can occur while converting documents or augmenting prompts
#[derive(Error, Debug)]
pub enum JsonPcError {
    /// Prompt augmentation mode other than `response` or `question`
    #[error("invalid mode \"{0}\", expected \"response\" or \"question\"")]
    InvalidMode(String),

    /// A required attribute was absent on an element the parser understands
    #[error("<{tag}> element is missing required attribute \"{attribute}\"")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },

    /// Caller-supplied character encoding label is not known
    #[error("unknown encoding \"{0}\"")]
    UnknownEncoding(String),

    /// JSON-PC input could not be decoded
    #[error("invalid JSON-PC document: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file or environment value could not be used
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl JsonPcError {
    pub fn missing_attribute(tag: &'static str, attribute: &'static str) -> Self {
        JsonPcError::MissingAttribute { tag, attribute }
    }
}

/// 结果类型别名
pub type JsonPcResult<T> = Result<T, JsonPcError>;
