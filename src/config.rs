//! 配置管理
//!
//! 提供统一的配置接口，支持文件配置（TOML / JSON）、`.env` 文件、环境变量和默认值

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::JsonPcOptions;
use crate::document::FALLBACK_HEADER;
use crate::env::{self, EnvVar};
use crate::error::{JsonPcError, JsonPcResult};

/// 配置常量
pub mod constants {
    pub const CONFIG_PATHS: &[&str] = &[
        "jsonpc.toml",
        ".jsonpc.toml",
        "~/.config/jsonpc/config.toml",
    ];

    pub const ENV_FILES: &[&str] = &[".env.local", ".env"];

    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct JsonPcConfig {
    /// 首个二级标题之前内容的章节标题
    pub fallback_header: String,
    /// 渲染 HTML 时是否转义
    pub escape_html: bool,
    /// JSON 输出是否缩进
    pub pretty: bool,
    pub log_level: String,
}

impl Default for JsonPcConfig {
    fn default() -> Self {
        Self {
            fallback_header: FALLBACK_HEADER.to_string(),
            escape_html: false,
            pretty: true,
            log_level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl JsonPcConfig {
    /// 验证配置
    pub fn validate(&self) -> JsonPcResult<()> {
        if self.fallback_header.trim().is_empty() {
            return Err(JsonPcError::Config(
                "fallback_header must not be blank".to_string(),
            ));
        }

        if env::parse_log_level(&self.log_level).is_none() {
            return Err(JsonPcError::Config(format!(
                "unknown log level \"{}\"",
                self.log_level
            )));
        }

        Ok(())
    }

    /// 应用环境变量覆盖，无法解析的值记录警告后忽略
    pub fn apply_env_overrides(&mut self) {
        match env::FallbackHeader::get() {
            Ok(Some(header)) => self.fallback_header = header,
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }

        match env::EscapeHtml::get() {
            Ok(Some(escape_html)) => self.escape_html = escape_html,
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }

        match env::Pretty::get() {
            Ok(Some(pretty)) => self.pretty = pretty,
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }

        match env::LogLevel::get() {
            Ok(Some(level)) => self.log_level = level,
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// 转换为转换选项
    pub fn to_options(&self) -> JsonPcOptions {
        JsonPcOptions {
            fallback_header: Some(self.fallback_header.clone()),
            escape_html: self.escape_html,
            ..Default::default()
        }
    }

    /// 从指定文件加载配置，扩展名为 `.json` 时按 JSON 解析，否则按 TOML
    pub fn load_from_file(path: &Path) -> JsonPcResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JsonPcError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                JsonPcError::Config(format!("cannot parse {}: {}", path.display(), e))
            })
        } else {
            toml::from_str(&content).map_err(|e| {
                JsonPcError::Config(format!("cannot parse {}: {}", path.display(), e))
            })
        }
    }

    /// 序列化为 TOML 文本
    pub fn to_toml(&self) -> JsonPcResult<String> {
        toml::to_string_pretty(self).map_err(|e| JsonPcError::Config(e.to_string()))
    }
}

/// 配置管理器
pub struct ConfigManager {
    config: JsonPcConfig,
    source: Option<String>,
}

impl ConfigManager {
    /// 加载配置：显式路径优先，其次依次查找默认路径，最后使用默认值
    pub fn new(explicit_path: Option<&Path>) -> JsonPcResult<Self> {
        Self::load_dotenv();

        let (mut config, source) = match explicit_path {
            Some(path) => (
                JsonPcConfig::load_from_file(path)?,
                Some(path.display().to_string()),
            ),
            None => Self::discover()?,
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(Self { config, source })
    }

    pub fn get_config(&self) -> &JsonPcConfig {
        &self.config
    }

    /// 实际加载的配置文件路径
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn discover() -> JsonPcResult<(JsonPcConfig, Option<String>)> {
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            let candidate = Path::new(expanded_path.as_ref());
            if candidate.exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Ok((
                    JsonPcConfig::load_from_file(candidate)?,
                    Some(expanded_path.into_owned()),
                ));
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok((JsonPcConfig::default(), None))
    }

    fn load_dotenv() {
        for env_file in constants::ENV_FILES {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::debug!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }
}
