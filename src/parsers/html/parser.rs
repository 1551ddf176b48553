//! HTML → JSON-PC 解析器
//!
//! 只解释正文根节点的直接子元素，按文档顺序逐个处理：
//!
//! - `h2` 开启新章节
//! - `p` 与不引导列表的 `h3` 累积为文本行，连续的行合并为一个 textBlock
//! - `ul` / `ol` 生成列表，紧邻其前的 `h3` 作为列表标题
//! - `a`、`img`、`video` 分别生成链接、图片、视频元素
//! - `dl` 生成 FAQ 元素（`dt` 为问题，`dd` 为答案）
//! - 其余元素忽略
//!
//! 嵌套结构不会被递归解释，例如 `<div>` 内部的段落会被整体忽略。

use markup5ever_rcdom::{Handle, RcDom};

use crate::document::{
    slugify, Document, Element, Faq, FaqEntry, Image, Link, LinkTarget, List, Video,
    DEFAULT_TITLE,
};
use crate::error::{JsonPcError, JsonPcResult};

use super::dom::{element_children, find_descendants, get_node_attr, get_node_name, get_node_text};
use super::metadata::{get_content_root, get_meta_description, get_title};
use super::microdata::extract_microdata;
use super::sections::SectionBuilder;
use super::utils::is_list_tag;

/// 将已解析的 DOM 转换为 JSON-PC 文档
///
/// # 参数
///
/// * `dom` - 已解析的 HTML 文档
/// * `url` - 写入文档 `url` 字段的页面地址
/// * `fallback_header` - 首个 `h2` 之前的内容所归入章节的标题
///
/// # 错误
///
/// `a` 缺少 `href`、`img` / `video` 缺少 `src` 时返回
/// [`JsonPcError::MissingAttribute`]，不返回部分结果。
pub fn dom_to_document(dom: &RcDom, url: &str, fallback_header: &str) -> JsonPcResult<Document> {
    let title = get_title(&dom.document).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let meta_description = get_meta_description(&dom.document).unwrap_or_default();

    let root = get_content_root(&dom.document);
    let children = element_children(&root);
    let mut builder = SectionBuilder::new(fallback_header);

    for (index, child) in children.iter().enumerate() {
        let Some(node_name) = get_node_name(child) else {
            continue;
        };

        let previous_name = index
            .checked_sub(1)
            .and_then(|i| children.get(i))
            .and_then(get_node_name);
        let next_name = children.get(index + 1).and_then(get_node_name);

        match node_name {
            "h2" => {
                builder.start_section(&trimmed_text(child), extract_microdata(child));
            }
            "p" => {
                builder.push_line(&trimmed_text(child));
            }
            "h3" => {
                builder.flush_text();
                if next_name.is_some_and(is_list_tag) {
                    // Becomes the title of the following list
                    continue;
                }
                builder.push_line(&trimmed_text(child));
            }
            "ul" | "ol" => {
                builder.flush_text();
                let title = match previous_name {
                    Some("h3") => children.get(index - 1).map(trimmed_text),
                    _ => None,
                };
                builder.push_element(parse_list(child, title));
            }
            "a" => {
                builder.push_element(parse_link(child)?);
            }
            "img" => {
                builder.push_element(parse_image(child)?);
            }
            "video" => {
                builder.push_element(parse_video(child)?);
            }
            "dl" => {
                builder.flush_text();
                builder.push_element(parse_faq(child));
            }
            other => {
                tracing::debug!("ignoring <{}> at top level", other);
            }
        }
    }

    Ok(Document {
        url: url.to_string(),
        slug: slugify(&title),
        title,
        meta_description,
        content: builder.finish(),
    })
}

fn trimmed_text(node: &Handle) -> String {
    get_node_text(node).trim().to_string()
}

fn required_attr(node: &Handle, tag: &'static str, attribute: &'static str) -> JsonPcResult<String> {
    get_node_attr(node, attribute).ok_or(JsonPcError::missing_attribute(tag, attribute))
}

fn parse_list(node: &Handle, title: Option<String>) -> Element {
    let items = find_descendants(node, "li")
        .iter()
        .map(trimmed_text)
        .collect();

    Element::List(List {
        items,
        title,
        microdata: extract_microdata(node),
    })
}

fn parse_link(node: &Handle) -> JsonPcResult<Element> {
    Ok(Element::Link(Link {
        text: trimmed_text(node),
        url: required_attr(node, "a", "href")?,
        target: LinkTarget::from_attr(get_node_attr(node, "target").as_deref()),
        microdata: extract_microdata(node),
    }))
}

fn parse_image(node: &Handle) -> JsonPcResult<Element> {
    Ok(Element::Image(Image {
        src: required_attr(node, "img", "src")?,
        alt: get_node_attr(node, "alt").unwrap_or_default(),
        caption: get_node_attr(node, "title").unwrap_or_default(),
        microdata: extract_microdata(node),
    }))
}

fn parse_video(node: &Handle) -> JsonPcResult<Element> {
    Ok(Element::Video(Video {
        src: required_attr(node, "video", "src")?,
        poster: get_node_attr(node, "poster").unwrap_or_default(),
        caption: get_node_attr(node, "title").unwrap_or_default(),
        microdata: extract_microdata(node),
    }))
}

fn parse_faq(node: &Handle) -> Element {
    let mut items: Vec<FaqEntry> = Vec::new();

    for term in dl_terms(node) {
        match get_node_name(&term) {
            Some("dt") => items.push(FaqEntry {
                question: trimmed_text(&term),
                answer: String::new(),
            }),
            Some("dd") => {
                if let Some(entry) = items.last_mut().filter(|entry| entry.answer.is_empty()) {
                    entry.answer = trimmed_text(&term);
                } else {
                    tracing::debug!("<dd> without a preceding <dt>, skipping");
                }
            }
            _ => {}
        }
    }

    Element::Faq(Faq {
        items,
        microdata: extract_microdata(node),
    })
}

/// `dt` / `dd` children of a `dl`, looking through one level of `div` grouping
fn dl_terms(node: &Handle) -> Vec<Handle> {
    element_children(node)
        .into_iter()
        .flat_map(|child| match get_node_name(&child) {
            Some("div") => element_children(&child),
            _ => vec![child],
        })
        .collect()
}
