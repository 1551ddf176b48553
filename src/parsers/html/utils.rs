/// 列表元素名称
pub const LIST_TAGS: &[&str] = &["ul", "ol"];

/// 检查是否为列表元素
pub fn is_list_tag(node_name: &str) -> bool {
    LIST_TAGS.contains(&node_name)
}

/// 解析 Content-Type 值，返回 (媒体类型, 字符集)
pub fn parse_content_type(content_type: &str) -> (String, String) {
    let mut parts = content_type.split(';');

    let media_type = parts
        .next()
        .map(|part| part.trim().to_lowercase())
        .unwrap_or_default();
    let mut charset = String::new();

    for part in parts {
        let part = part.trim();
        if let (Some(key), Some(value)) = (part.get(..8), part.get(8..)) {
            if key.eq_ignore_ascii_case("charset=") {
                charset = value.trim_matches('"').to_string();
            }
        }
    }

    (media_type, charset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_charset_from_content_type() {
        assert_eq!(
            parse_content_type("text/html; charset=\"ISO-8859-1\""),
            ("text/html".to_string(), "ISO-8859-1".to_string())
        );
        assert_eq!(
            parse_content_type("Text/HTML"),
            ("text/html".to_string(), String::new())
        );
    }

    #[test]
    fn recognises_list_tags() {
        assert!(is_list_tag("ul"));
        assert!(is_list_tag("ol"));
        assert!(!is_list_tag("dl"));
    }
}
