//! JSON-PC document model
//!
//! A page is a [`Document`] holding an ordered list of [`Section`]s, each
//! keyed by a level-2 heading and carrying an ordered list of [`Element`]s.
//!
//! Every field is optional when reading JSON: missing keys resolve to the
//! defaults documented on each type, so partially filled documents produced
//! by other tools can still be rendered.

use serde::{Deserialize, Serialize};

use crate::error::JsonPcResult;

/// Title used when a page has none
pub const DEFAULT_TITLE: &str = "Untitled";

/// Header given to a section synthesized for content preceding any level-2 heading
pub const FALLBACK_HEADER: &str = "Content";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Derives a slug from a page title: lowercase, spaces become hyphens.
///
/// Nothing else is altered, punctuation and non-ASCII characters pass through.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub content: Vec<Section>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            url: String::new(),
            slug: slugify(DEFAULT_TITLE),
            title: default_title(),
            meta_description: String::new(),
            content: Vec::new(),
        }
    }
}

impl Document {
    /// Creates an empty document for the given title, deriving its slug
    pub fn new(title: &str, meta_description: &str) -> Self {
        Self {
            url: String::new(),
            slug: slugify(title),
            title: title.to_string(),
            meta_description: meta_description.to_string(),
            content: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> JsonPcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> JsonPcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> JsonPcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Marker serialized as `"type": "section"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionType {
    #[default]
    #[serde(rename = "section")]
    Section,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type", default)]
    pub kind: SectionType,
    #[serde(default)]
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microdata: Option<Microdata>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Section {
    pub fn new(header: &str, microdata: Option<Microdata>) -> Self {
        Self {
            kind: SectionType::Section,
            header: header.to_string(),
            microdata,
            elements: Vec::new(),
        }
    }
}

/// Structured-data annotation (`itemscope`, `itemtype`, `itemprop`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Microdata {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub itemscope: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemprop: Option<String>,
}

impl Microdata {
    pub fn is_empty(&self) -> bool {
        !self.itemscope && self.itemtype.is_none() && self.itemprop.is_none()
    }
}

/// One renderable unit within a section, tagged by `"type"` in JSON.
///
/// Unrecognised `type` values decode to [`Element::Unknown`], which the
/// HTML builder skips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    TextBlock(TextBlock),
    List(List),
    Image(Image),
    Video(Video),
    Link(Link),
    Faq(Faq),
    #[serde(other)]
    Unknown,
}

impl Element {
    /// JSON tag of this element
    pub fn kind(&self) -> &'static str {
        match self {
            Element::TextBlock(_) => "textBlock",
            Element::List(_) => "list",
            Element::Image(_) => "image",
            Element::Video(_) => "video",
            Element::Link(_) => "link",
            Element::Faq(_) => "faq",
            Element::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microdata: Option<Microdata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microdata: Option<Microdata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub src: String,
    pub poster: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microdata: Option<Microdata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub url: String,
    pub target: LinkTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microdata: Option<Microdata>,
}

/// Where a link opens.
///
/// Decoding accepts `"blank"` and the HTML spelling `"_blank"`; any other
/// value means the current window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum LinkTarget {
    #[serde(rename = "blank")]
    Blank,
    #[default]
    #[serde(rename = "self")]
    SelfWindow,
}

impl LinkTarget {
    /// Interprets an HTML `target` attribute value
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("_blank") || v.eq_ignore_ascii_case("blank") => {
                LinkTarget::Blank
            }
            _ => LinkTarget::SelfWindow,
        }
    }
}

impl From<String> for LinkTarget {
    fn from(value: String) -> Self {
        LinkTarget::from_attr(Some(&value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub items: Vec<FaqEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microdata: Option<Microdata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
