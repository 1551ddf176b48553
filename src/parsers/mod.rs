//! # 解析器模块
//!
//! 将输入内容解析为 JSON-PC 文档：
//!
//! - `html` - HTML文档解析、元数据提取、章节组装

pub mod html;

// Re-export commonly used items for convenience
pub use html::{dom_to_document, get_charset, get_title, html_to_dom, str_to_dom};
