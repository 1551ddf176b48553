//! HTML解析和处理模块
//!
//! - `utils`: 基础工具函数和常量
//! - `dom`: 基础DOM操作
//! - `metadata`: 文档元数据处理
//! - `microdata`: 微数据属性提取
//! - `sections`: 章节组装
//! - `parser`: HTML → JSON-PC 转换

pub mod dom;
pub mod metadata;
pub mod microdata;
pub mod parser;
pub mod sections;
pub mod utils;

pub use dom::{
    element_children, find_descendants, find_nodes, get_child_node_by_name, get_node_attr,
    get_node_name, get_node_text, has_node_attr, html_to_dom, str_to_dom,
};
pub use metadata::{get_charset, get_content_root, get_meta_description, get_title};
pub use microdata::extract_microdata;
pub use parser::dom_to_document;
pub use sections::SectionBuilder;
