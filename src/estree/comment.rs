//! Комментарии исходного текста

use serde::Serialize;

use crate::core::position::{Range, SourceLocation};

/// Комментарий в выходном AST.
///
/// Все комментарии выводятся с `type: "Block"`, в том числе строчные.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Block")]
pub struct Comment {
    /// Текст без ограничителей (`/*`, `*/`, `//`, `<!--`)
    pub value: String,
    /// Исходный текст целиком
    pub raw: String,
    pub range: Range,
    pub loc: SourceLocation,
    #[serde(skip)]
    pub is_doc: bool,
}

impl Comment {
    pub fn new(raw: &str, range: Range, line: usize) -> Self {
        Self {
            value: strip_delimiters(raw).to_string(),
            raw: raw.to_string(),
            range,
            loc: SourceLocation::at_line(line),
            is_doc: is_doc_comment(raw),
        }
    }
}

/// Документирующий комментарий: начинается с `/**`, но не `/**/` и не `/***`
pub fn is_doc_comment(raw: &str) -> bool {
    raw.starts_with("/**") && !raw.starts_with("/**/") && !raw.starts_with("/***")
}

/// Снимает ограничители комментария
pub fn strip_delimiters(raw: &str) -> &str {
    if let Some(body) = raw.strip_prefix("/*") {
        return body.strip_suffix("*/").unwrap_or(body);
    }
    if let Some(body) = raw.strip_prefix("//") {
        return body;
    }
    if let Some(body) = raw.strip_prefix("<!--") {
        return body;
    }
    if let Some(body) = raw.strip_prefix("-->") {
        return body;
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_comment_detection() {
        assert!(is_doc_comment("/** Docs */"));
        assert!(is_doc_comment("/**\n * @param {string} a\n */"));
        assert!(!is_doc_comment("/**/"));
        assert!(!is_doc_comment("/*** banner ***/"));
        assert!(!is_doc_comment("/* plain */"));
        assert!(!is_doc_comment("// line"));
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("/** Docs */"), "* Docs ");
        assert_eq!(strip_delimiters("/* a */"), " a ");
        assert_eq!(strip_delimiters("// line"), " line");
        assert_eq!(strip_delimiters("<!-- html"), " html");
    }

    #[test]
    fn test_comment_serializes_as_block() {
        let comment = Comment::new("// note", Range::new(0, 7), 1);
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["type"], "Block");
        assert_eq!(value["value"], " note");
        assert_eq!(value["raw"], "// note");
        assert_eq!(value["range"], serde_json::json!([0, 7]));
        assert!(value.get("is_doc").is_none());
    }
}
