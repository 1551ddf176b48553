//! # JSON-PC Library
//!
//! 在 HTML 页面与结构化的 JSON-PC 内容格式之间互相转换，
//! 并提供为提示词追加 JSON-PC 格式说明的工具。
//!
//! ## 模块组织
//!
//! - `core` - 转换选项与顶层转换函数
//! - `document` - JSON-PC 数据模型
//! - `parsers` - HTML 解析与章节组装
//! - `builders` - JSON-PC 到 HTML 的渲染
//! - `prompt` - 提示词增强
//! - `config` / `env` - 配置文件与环境变量
//! - `error` - 统一错误类型
//!
//! ```
//! use jsonpc::{html_to_jsonpc, jsonpc_to_html, JsonPcOptions};
//!
//! let options = JsonPcOptions::default();
//! let document = html_to_jsonpc("<h2>Intro</h2><p>A</p><p>B</p>", &options).unwrap();
//! assert_eq!(document.content[0].header, "Intro");
//!
//! let html = jsonpc_to_html(&document, &options);
//! assert!(html.contains("<h2>Intro</h2>"));
//! ```

pub mod builders;
pub mod config;
pub mod core;
pub mod document;
pub mod env;
pub mod error;
pub mod parsers;
pub mod prompt;

// Re-export commonly used items for convenience
pub use crate::core::{html_bytes_to_jsonpc, html_to_jsonpc, jsonpc_to_html, JsonPcOptions};
pub use document::{
    slugify, Document, Element, Faq, FaqEntry, Image, Link, LinkTarget, List, Microdata, Section,
    TextBlock, Video,
};
pub use error::{JsonPcError, JsonPcResult};
pub use prompt::{augment_prompt, augment_prompt_with_jsonpc, PromptMode};
