//! HTML 文档元数据处理模块
//!
//! 提取 JSON-PC 文档的页面级信息：
//! - 文档标题（`<title>`）
//! - SEO 描述（`<meta name="description">`）
//! - 字符编码声明（`<meta charset>` 或 `http-equiv`）
//! - 正文根节点（`<body>`）

use markup5ever_rcdom::Handle;

use super::dom::{find_descendants, find_nodes, get_child_node_by_name, get_node_attr, get_node_text};
use super::utils::parse_content_type;

/// 获取文档标题
///
/// 返回第一个 `<title>` 元素去除首尾空白后的文本。
/// 文档中没有 `<title>` 时返回 `None`，由调用方决定默认值。
pub fn get_title(handle: &Handle) -> Option<String> {
    find_descendants(handle, "title")
        .first()
        .map(|title_node| get_node_text(title_node).trim().to_string())
}

/// 获取页面描述
///
/// 查找第一个 `name="description"` 的 meta 标签并返回其 `content` 属性。
/// 标签存在但缺少 `content` 时视为空描述。
pub fn get_meta_description(handle: &Handle) -> Option<String> {
    find_descendants(handle, "meta")
        .iter()
        .find(|meta_node| {
            get_node_attr(meta_node, "name")
                .unwrap_or_default()
                .eq_ignore_ascii_case("description")
        })
        .map(|meta_node| get_node_attr(meta_node, "content").unwrap_or_default())
}

/// 获取文档字符编码
///
/// 支持两种格式：
/// 1. HTML5 格式：`<meta charset="utf-8">`
/// 2. HTML4 格式：`<meta http-equiv="content-type" content="text/html; charset=utf-8">`
pub fn get_charset(handle: &Handle) -> Option<String> {
    for meta_node in find_nodes(handle, &["html", "head", "meta"]).iter() {
        if let Some(meta_charset_node_attr_value) = get_node_attr(meta_node, "charset") {
            return Some(meta_charset_node_attr_value);
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(meta_content_type_node_attr_value) = get_node_attr(meta_node, "content") {
                let (_media_type, charset) = parse_content_type(&meta_content_type_node_attr_value);
                return Some(charset);
            }
        }
    }

    None
}

/// 获取正文根节点
///
/// 返回 `<html><body>`；不存在时退回到文档节点本身，以兼容没有外层结构的片段。
pub fn get_content_root(document: &Handle) -> Handle {
    get_child_node_by_name(document, "html")
        .and_then(|html| get_child_node_by_name(&html, "body"))
        .unwrap_or_else(|| document.clone())
}
