use encoding_rs::Encoding;
use markup5ever_rcdom::RcDom;

use crate::builders::{HtmlBuilder, HtmlBuilderConfig};
use crate::document::{Document, FALLBACK_HEADER};
use crate::error::{JsonPcError, JsonPcResult};
use crate::parsers::html::{dom_to_document, get_charset, html_to_dom, str_to_dom};

/// Options shared by the HTML → JSON-PC parser and the JSON-PC → HTML builder
///
/// The default value reproduces the plain conversion: empty `url`,
/// `"Content"` as the fallback header, no escaping.
#[derive(Default, Clone, Debug)]
pub struct JsonPcOptions {
    /// Written to the document's `url` field
    pub url: Option<String>,
    /// Header of the section that collects content preceding the first `<h2>`
    pub fallback_header: Option<String>,
    /// Escape text and attribute values when rendering HTML
    pub escape_html: bool,
}

impl JsonPcOptions {
    fn fallback_header(&self) -> &str {
        self.fallback_header.as_deref().unwrap_or(FALLBACK_HEADER)
    }

    fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Converts an HTML document or fragment into a JSON-PC document
///
/// # Errors
///
/// Returns [`JsonPcError::MissingAttribute`] when a link has no `href` or an
/// image/video has no `src`.
pub fn html_to_jsonpc(html: &str, options: &JsonPcOptions) -> JsonPcResult<Document> {
    let dom = str_to_dom(html);
    dom_to_document(&dom, options.url(), options.fallback_header())
}

/// Converts raw HTML bytes into a JSON-PC document, honouring the declared charset
///
/// The data is first decoded using `input_encoding` (UTF-8 when absent). If
/// the document then declares a known charset of its own, it is decoded
/// again using that one.
pub fn html_bytes_to_jsonpc(
    data: &[u8],
    input_encoding: Option<&str>,
    options: &JsonPcOptions,
) -> JsonPcResult<Document> {
    let dom = decode_document(data, input_encoding)?;
    dom_to_document(&dom, options.url(), options.fallback_header())
}

/// Renders a JSON-PC document as a complete HTML5 page. Never fails.
pub fn jsonpc_to_html(document: &Document, options: &JsonPcOptions) -> String {
    HtmlBuilder::new(HtmlBuilderConfig {
        escape_html: options.escape_html,
    })
    .build(document)
}

fn decode_document(data: &[u8], input_encoding: Option<&str>) -> JsonPcResult<RcDom> {
    let mut document_encoding = "utf-8".to_string();

    if let Some(label) = input_encoding {
        let encoding = Encoding::for_label_no_replacement(label.as_bytes())
            .ok_or_else(|| JsonPcError::UnknownEncoding(label.to_string()))?;
        document_encoding = encoding.name().to_string();
    }

    let mut dom = html_to_dom(data, &document_encoding);

    if let Some(html_charset) = get_charset(&dom.document) {
        if let Some(document_charset) = Encoding::for_label_no_replacement(html_charset.as_bytes())
        {
            if !document_charset.name().eq_ignore_ascii_case(&document_encoding) {
                tracing::debug!(
                    "re-decoding document as {} (declared charset)",
                    document_charset.name()
                );
                dom = html_to_dom(data, document_charset.name());
            }
        }
    }

    Ok(dom)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str, colored: bool) {
    if colored {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}
