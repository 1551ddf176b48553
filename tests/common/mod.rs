// 集成测试公共模块
//
// 提供测试辅助工具和共享功能

#![allow(dead_code)]

use jsonpc::{html_to_jsonpc, Document, Element, JsonPcOptions, List, TextBlock};

/// 使用默认选项解析 HTML，解析失败时直接 panic
pub fn parse(html: &str) -> Document {
    html_to_jsonpc(html, &JsonPcOptions::default()).expect("HTML should parse")
}

pub fn text_block(content: &str) -> Element {
    Element::TextBlock(TextBlock {
        content: content.to_string(),
    })
}

pub fn list(title: Option<&str>, items: &[&str]) -> Element {
    Element::List(List {
        items: items.iter().map(|item| item.to_string()).collect(),
        title: title.map(str::to_string),
        microdata: None,
    })
}

/// 完整页面样例，包含标题、描述与多种元素
pub const SAMPLE_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <title>Sample Page with Microdata</title>
    <meta name="description" content="This is a sample description.">
</head>
<body>
    <h2 itemscope itemtype="https://schema.org/Article">Introduction</h2>
    <p>This is the first paragraph of the introduction.</p>
    <p>This is the second one.</p>
    <a href="https://example.com" target="_blank">Visit Example</a>
    <img src="https://example.com/image.jpg" alt="Sample Image">
    <h2>Details</h2>
    <h3>Steps</h3>
    <ol itemprop="steps">
        <li>First</li>
        <li>Second</li>
    </ol>
    <h3>Notes</h3>
    <p>Keep it simple.</p>
    <video src="clip.mp4" poster="poster.jpg" title="A clip"></video>
</body>
</html>
"#;
