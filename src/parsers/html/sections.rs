//! 章节组装器
//!
//! 顺序接收扁平的兄弟元素，维护当前章节与待合并的文本行，
//! 在遇到新的二级标题或输入结束时产出章节。

use crate::document::{Element, Microdata, Section, TextBlock};

/// Accumulates sections from a flat, ordered stream of body children.
///
/// Consecutive text lines are held back and merged into a single
/// [`TextBlock`] when something structural arrives. Elements that show up
/// before the first level-2 heading land in a leading section named after
/// `fallback_header`; plain text still pending at that heading carries over
/// into it.
pub struct SectionBuilder {
    fallback_header: String,
    sections: Vec<Section>,
    current: Option<Section>,
    pending_lines: Vec<String>,
}

impl SectionBuilder {
    pub fn new(fallback_header: &str) -> Self {
        Self {
            fallback_header: fallback_header.to_string(),
            sections: Vec::new(),
            current: None,
            pending_lines: Vec::new(),
        }
    }

    /// Closes the open section (if any) and starts a new one
    pub fn start_section(&mut self, header: &str, microdata: Option<Microdata>) {
        if self.current.is_some() {
            self.flush_text();
        }
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        self.current = Some(Section::new(header, microdata));
    }

    /// Queues a line of text for the current run
    pub fn push_line(&mut self, line: &str) {
        self.pending_lines.push(line.to_string());
    }

    /// Appends an element to the open section, opening the leading one if needed
    pub fn push_element(&mut self, element: Element) {
        let section = self.current_section();
        tracing::debug!("adding {} to \"{}\"", element.kind(), section.header);
        section.elements.push(element);
    }

    /// Turns the pending run of lines into one text block
    pub fn flush_text(&mut self) {
        if self.pending_lines.is_empty() {
            return;
        }

        let content = self.pending_lines.join("\n").trim().to_string();
        self.pending_lines.clear();

        if !content.is_empty() {
            self.push_element(Element::TextBlock(TextBlock { content }));
        }
    }

    pub fn finish(mut self) -> Vec<Section> {
        if self.current.is_none() && self.sections.is_empty() && !self.pending_lines.is_empty() {
            // Text-only document: one fallback section, even if the text is blank
            let content = self.pending_lines.join("\n").trim().to_string();
            let mut section = Section::new(&self.fallback_header, None);
            section.elements.push(Element::TextBlock(TextBlock { content }));
            return vec![section];
        }

        self.flush_text();
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        self.sections
    }

    fn current_section(&mut self) -> &mut Section {
        let fallback_header = &self.fallback_header;
        self.current.get_or_insert_with(|| {
            tracing::debug!("content before first <h2>, opening \"{}\" section", fallback_header);
            Section::new(fallback_header, None)
        })
    }
}
