//! Prompt augmentation
//!
//! Appends a description of the JSON-PC schema to a free-form prompt, so a
//! language model either answers in JSON-PC or knows that the content it
//! was handed is JSON-PC.

use std::fmt;
use std::str::FromStr;

use crate::error::{JsonPcError, JsonPcResult};

/// Describes the JSON-PC keys and element kinds
pub const SCHEMA_DESCRIPTION: &str = concat!(
    "The JSON-PC format includes the following keys:\n",
    "- 'url': the page URL\n",
    "- 'slug': a URL-friendly identifier\n",
    "- 'title': the page title\n",
    "- 'metaDescription': a short SEO description\n",
    "- 'content': an array of sections, where each section includes:\n",
    "   - 'type': should be 'section'\n",
    "   - 'header': section title (e.g., from h2 element)\n",
    "   - 'microdata' (optional): microdata attributes\n",
    "   - 'elements': an array of elements. Supported elements include:\n",
    "       * 'textBlock': multi-paragraph text\n",
    "       * 'list': with a title and items (e.g., from ul or ol)\n",
    "       * 'image': with src, alt, and caption\n",
    "       * 'video': with src, poster, and caption\n",
    "       * 'link': with text, url, and target ('blank' or 'self')\n",
    "       * 'faq': with questions and answers\n",
    "Please ensure that your output is valid JSON following the JSON-PC specification."
);

const RESPONSE_PREAMBLE: &str =
    "Your response must be in JSON-PC, a structured JSON format for webpage content. ";
const QUESTION_PREAMBLE: &str =
    "The provided content is JSON-PC, a structured JSON format for webpage content. ";

/// Which side of the conversation speaks JSON-PC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// The model must answer in JSON-PC
    Response,
    /// The prompt already carries JSON-PC content
    Question,
}

impl PromptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptMode::Response => "response",
            PromptMode::Question => "question",
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            PromptMode::Response => RESPONSE_PREAMBLE,
            PromptMode::Question => QUESTION_PREAMBLE,
        }
    }
}

impl FromStr for PromptMode {
    type Err = JsonPcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "response" => Ok(PromptMode::Response),
            "question" => Ok(PromptMode::Question),
            other => Err(JsonPcError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for PromptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the trimmed prompt followed by a blank line and the JSON-PC instructions
pub fn augment_prompt(prompt: &str, mode: PromptMode) -> String {
    format!(
        "{}\n\n{}{}",
        prompt.trim(),
        mode.preamble(),
        SCHEMA_DESCRIPTION
    )
}

/// String-mode variant of [`augment_prompt`].
///
/// Fails with [`JsonPcError::InvalidMode`] unless `mode` is exactly
/// `"response"` or `"question"`.
pub fn augment_prompt_with_jsonpc(prompt: &str, mode: &str) -> JsonPcResult<String> {
    let mode: PromptMode = mode.parse()?;
    Ok(augment_prompt(prompt, mode))
}
