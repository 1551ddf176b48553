//! HTML 构建器模块
//!
//! 负责把 JSON-PC 文档还原为完整的 HTML5 页面。
//!
//! 默认不对文本和属性值做任何转义，内容按原样写出；
//! 需要安全输出时启用 [`HtmlBuilderConfig::escape_html`]。

use crate::document::{Document, Element, Faq, Image, Link, LinkTarget, List, Microdata, Section, Video};

#[derive(Debug, Clone, Default)]
pub struct HtmlBuilderConfig {
    /// 是否转义 `&`、`<`、`>`（属性值中另含 `"`）
    pub escape_html: bool,
}

pub struct HtmlBuilder {
    config: HtmlBuilderConfig,
}

impl HtmlBuilder {
    pub fn new(config: HtmlBuilderConfig) -> Self {
        Self { config }
    }

    /// 构建完整的 HTML 页面
    pub fn build(&self, document: &Document) -> String {
        let mut html_lines: Vec<String> = vec![
            "<!DOCTYPE html>".to_string(),
            "<html>".to_string(),
            "<head>".to_string(),
            format!("<title>{}</title>", self.text(&document.title)),
            format!(
                "<meta name=\"description\" content=\"{}\">",
                self.attr(&document.meta_description)
            ),
            "</head>".to_string(),
            "<body>".to_string(),
        ];

        for section in &document.content {
            self.build_section(section, &mut html_lines);
        }

        html_lines.push("</body>".to_string());
        html_lines.push("</html>".to_string());
        html_lines.join("\n")
    }

    fn build_section(&self, section: &Section, html_lines: &mut Vec<String>) {
        html_lines.push(format!(
            "<h2{}>{}</h2>",
            self.microdata(section.microdata.as_ref()),
            self.text(&section.header)
        ));

        for element in &section.elements {
            match element {
                Element::TextBlock(block) => {
                    for paragraph in block.content.split('\n') {
                        let paragraph = paragraph.trim();
                        if !paragraph.is_empty() {
                            html_lines.push(format!("<p>{}</p>", self.text(paragraph)));
                        }
                    }
                }
                Element::List(list) => self.build_list(list, html_lines),
                Element::Link(link) => html_lines.push(self.build_link(link)),
                Element::Image(image) => html_lines.push(self.build_image(image)),
                Element::Video(video) => html_lines.push(self.build_video(video)),
                Element::Faq(faq) => self.build_faq(faq, html_lines),
                Element::Unknown => {
                    tracing::debug!("skipping element of unknown type in \"{}\"", section.header);
                }
            }
        }
    }

    fn build_list(&self, list: &List, html_lines: &mut Vec<String>) {
        if let Some(title) = &list.title {
            html_lines.push(format!("<h3>{}</h3>", self.text(title)));
        }
        html_lines.push(format!("<ul{}>", self.microdata(list.microdata.as_ref())));
        for item in &list.items {
            html_lines.push(format!("<li>{}</li>", self.text(item)));
        }
        html_lines.push("</ul>".to_string());
    }

    fn build_link(&self, link: &Link) -> String {
        let target = match link.target {
            LinkTarget::Blank => " target=\"_blank\"",
            LinkTarget::SelfWindow => "",
        };
        format!(
            "<a href=\"{}\"{}{}>{}</a>",
            self.attr(&link.url),
            target,
            self.microdata(link.microdata.as_ref()),
            self.text(&link.text)
        )
    }

    fn build_image(&self, image: &Image) -> String {
        format!(
            "<img src=\"{}\" alt=\"{}\" title=\"{}\"{}>",
            self.attr(&image.src),
            self.attr(&image.alt),
            self.attr(&image.caption),
            self.microdata(image.microdata.as_ref())
        )
    }

    fn build_video(&self, video: &Video) -> String {
        format!(
            "<video src=\"{}\" poster=\"{}\" title=\"{}\"{}></video>",
            self.attr(&video.src),
            self.attr(&video.poster),
            self.attr(&video.caption),
            self.microdata(video.microdata.as_ref())
        )
    }

    fn build_faq(&self, faq: &Faq, html_lines: &mut Vec<String>) {
        html_lines.push(format!("<dl{}>", self.microdata(faq.microdata.as_ref())));
        for entry in &faq.items {
            html_lines.push(format!("<dt>{}</dt>", self.text(&entry.question)));
            html_lines.push(format!("<dd>{}</dd>", self.text(&entry.answer)));
        }
        html_lines.push("</dl>".to_string());
    }

    /// 微数据属性串，非空时带前导空格
    fn microdata(&self, microdata: Option<&Microdata>) -> String {
        let Some(microdata) = microdata else {
            return String::new();
        };

        let mut attrs: Vec<String> = Vec::new();
        if microdata.itemscope {
            attrs.push("itemscope".to_string());
        }
        if let Some(itemtype) = &microdata.itemtype {
            attrs.push(format!("itemtype=\"{}\"", self.attr(itemtype)));
        }
        if let Some(itemprop) = &microdata.itemprop {
            attrs.push(format!("itemprop=\"{}\"", self.attr(itemprop)));
        }

        if attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", attrs.join(" "))
        }
    }

    fn text(&self, value: &str) -> String {
        if self.config.escape_html {
            escape_text(value)
        } else {
            value.to_string()
        }
    }

    fn attr(&self, value: &str) -> String {
        if self.config.escape_html {
            escape_text(value).replace('"', "&quot;")
        } else {
            value.to_string()
        }
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new(HtmlBuilderConfig::default())
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
