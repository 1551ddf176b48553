//! # 构建器模块
//!
//! 这个模块包含用于构建各种输出格式的构建器：
//!
//! - `html_builder` - JSON-PC 文档到 HTML 页面的渲染

pub mod html_builder;

// Re-export commonly used items for convenience
pub use html_builder::{HtmlBuilder, HtmlBuilderConfig};
