//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的 `JSONPC_*` 环境变量访问

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
///
/// `get` 在变量未设置时返回 `Ok(None)`，设置了但无法解析时返回错误。
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<Option<T>> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value).map(Some),
            Err(_) => Ok(None),
        }
    }
}

/// 日志级别
pub struct LogLevel;
impl EnvVar<String> for LogLevel {
    const NAME: &'static str = "JSONPC_LOG_LEVEL";
    const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

    fn parse(value: &str) -> EnvResult<String> {
        parse_log_level(value).ok_or_else(|| EnvError {
            variable: Self::NAME.to_string(),
            message: format!(
                "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                value
            ),
        })
    }
}

/// 首个二级标题之前内容的章节标题
pub struct FallbackHeader;
impl EnvVar<String> for FallbackHeader {
    const NAME: &'static str = "JSONPC_FALLBACK_HEADER";
    const DESCRIPTION: &'static str = "Header for content that precedes the first <h2>";

    fn parse(value: &str) -> EnvResult<String> {
        let header = value.trim();
        if header.is_empty() {
            return Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "Header must not be blank".to_string(),
            });
        }
        Ok(header.to_string())
    }
}

/// 渲染 HTML 时是否转义
pub struct EscapeHtml;
impl EnvVar<bool> for EscapeHtml {
    const NAME: &'static str = "JSONPC_ESCAPE_HTML";
    const DESCRIPTION: &'static str = "Escape text and attribute values when rendering HTML";

    fn parse(value: &str) -> EnvResult<bool> {
        parse_bool(value, Self::NAME)
    }
}

/// JSON 输出是否缩进
pub struct Pretty;
impl EnvVar<bool> for Pretty {
    const NAME: &'static str = "JSONPC_PRETTY";
    const DESCRIPTION: &'static str = "Pretty-print JSON-PC output";

    fn parse(value: &str) -> EnvResult<bool> {
        parse_bool(value, Self::NAME)
    }
}

/// 禁用颜色输出
pub struct NoColor;
impl EnvVar<bool> for NoColor {
    const NAME: &'static str = "NO_COLOR";
    const DESCRIPTION: &'static str = "Disable colored output when set to any value";

    fn parse(value: &str) -> EnvResult<bool> {
        // NO_COLOR 遵循标准：任何非空值都表示禁用颜色
        Ok(!value.is_empty())
    }
}

/// 所有已知环境变量的 (名称, 描述)
pub fn describe_all() -> Vec<(&'static str, &'static str)> {
    vec![
        (LogLevel::NAME, LogLevel::DESCRIPTION),
        (FallbackHeader::NAME, FallbackHeader::DESCRIPTION),
        (EscapeHtml::NAME, EscapeHtml::DESCRIPTION),
        (Pretty::NAME, Pretty::DESCRIPTION),
        (NoColor::NAME, NoColor::DESCRIPTION),
    ]
}

pub(crate) fn parse_log_level(value: &str) -> Option<String> {
    match value.trim().to_lowercase().as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error") => Some(level.to_string()),
        _ => None,
    }
}

fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off, enabled/disabled",
                value
            ),
        }),
    }
}
