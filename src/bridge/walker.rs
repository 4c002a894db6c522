//! Обход нативного дерева tree-sitter
//!
//! Даёт маппингу доступ к тексту, полям и потомкам узлов, а также
//! собирает комментарии и ищет синтаксические ошибки.

use tree_sitter::Node as TsNode;

use super::native::NativeKind;
use crate::core::errors::{fragment, BridgeError};
use crate::core::position::Range;
use crate::estree::comment::is_doc_comment;

/// Обходчик нативного дерева одного исходника
pub struct SourceTreeWalker<'s> {
    source: &'s str,
    source_name: &'s str,
}

impl<'s> SourceTreeWalker<'s> {
    pub fn new(source: &'s str, source_name: &'s str) -> Self {
        Self {
            source,
            source_name,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn source_name(&self) -> &'s str {
        self.source_name
    }

    /// Исходный текст узла
    pub fn text(&self, node: TsNode<'_>) -> &'s str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    pub fn range(&self, node: TsNode<'_>) -> Range {
        Range::new(node.start_byte(), node.end_byte())
    }

    /// Номер строки начала узла (с единицы)
    pub fn line(&self, node: TsNode<'_>) -> usize {
        node.start_position().row + 1
    }

    /// Значимые именованные потомки: без комментариев и `#!`-строки
    pub fn named_children<'t>(&self, node: TsNode<'t>) -> Vec<TsNode<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| !child.is_extra() && child.kind() != "hash_bang_line")
            .collect()
    }

    /// Все потомки, включая анонимные токены, без комментариев
    pub fn tokens<'t>(&self, node: TsNode<'t>) -> Vec<TsNode<'t>> {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter(|child| !child.is_extra())
            .collect()
    }

    pub fn first_named_child<'t>(&self, node: TsNode<'t>) -> Option<TsNode<'t>> {
        self.named_children(node).into_iter().next()
    }

    pub fn field<'t>(&self, node: TsNode<'t>, name: &str) -> Option<TsNode<'t>> {
        node.child_by_field_name(name)
    }

    /// Обязательное поле; отсутствие означает повреждённое дерево
    pub fn required_field<'t>(
        &self,
        node: TsNode<'t>,
        kind: &'static str,
        name: &'static str,
    ) -> Result<TsNode<'t>, BridgeError> {
        node.child_by_field_name(name)
            .ok_or_else(|| BridgeError::malformed(kind, name, self.text(node)))
    }

    /// Именованные узлы поля (для повторяющихся полей)
    pub fn field_nodes<'t>(&self, node: TsNode<'t>, name: &str) -> Vec<TsNode<'t>> {
        let mut cursor = node.walk();
        node.children_by_field_name(name, &mut cursor)
            .filter(|child| child.is_named() && !child.is_extra())
            .collect()
    }

    /// Есть ли среди прямых потомков анонимный токен `token`
    pub fn has_token(&self, node: TsNode<'_>, token: &str) -> bool {
        self.tokens(node)
            .iter()
            .any(|child| !child.is_named() && child.kind() == token)
    }

    /// Все комментарии дерева в порядке исходника
    pub fn collect_comments<'t>(&self, root: TsNode<'t>) -> Vec<TsNode<'t>> {
        let mut comments = Vec::new();
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();

            if NativeKind::from_kind(node.kind()).is_some_and(|kind| kind.is_comment()) {
                comments.push(node);
            }

            if cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }

                if !cursor.goto_parent() {
                    return comments;
                }
            }
        }
    }

    /// Первый узел ERROR или MISSING в порядке исходника
    pub fn first_syntax_error<'t>(&self, root: TsNode<'t>) -> Option<TsNode<'t>> {
        if !root.has_error() {
            return None;
        }
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();

            if node.is_error() || node.is_missing() {
                return Some(node);
            }

            // в чистые поддеревья не спускаемся
            if node.has_error() && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }

                if !cursor.goto_parent() {
                    return None;
                }
            }
        }
    }

    pub fn syntax_error(&self, node: TsNode<'_>) -> BridgeError {
        let position = node.start_position();
        let near = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            fragment(self.text(node))
        };
        BridgeError::SyntaxError {
            source_name: self.source_name.to_string(),
            line: position.row + 1,
            column: position.column + 1,
            fragment: near,
        }
    }

    /// Документирующий комментарий, стоящий непосредственно перед узлом
    pub fn preceding_doc_comment<'t>(&self, node: TsNode<'t>) -> Option<TsNode<'t>> {
        let previous = node.prev_sibling()?;
        let is_comment = NativeKind::from_kind(previous.kind()).is_some_and(|kind| kind.is_comment());
        (is_comment && is_doc_comment(self.text(previous))).then_some(previous)
    }

    /// Начало первого значимого (не комментарий) узла верхнего уровня
    pub fn syntax_start(&self, root: TsNode<'_>) -> Option<usize> {
        self.named_children(root)
            .first()
            .map(|node| node.start_byte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::native::new_parser;

    fn parse(source: &str) -> tree_sitter::Tree {
        new_parser().unwrap().parse(source, None).unwrap()
    }

    #[test]
    fn test_collect_comments_in_order() {
        let source = "// a\nvar x; /* b */\nfunction f() { /** c */ }\n";
        let tree = parse(source);
        let walker = SourceTreeWalker::new(source, "test.js");
        let texts: Vec<&str> = walker
            .collect_comments(tree.root_node())
            .into_iter()
            .map(|node| walker.text(node))
            .collect();
        assert_eq!(texts, vec!["// a", "/* b */", "/** c */"]);
    }

    #[test]
    fn test_preceding_doc_comment() {
        let source = "/** Docs */\nfunction f() {}\n/* plain */\nvar x;";
        let tree = parse(source);
        let walker = SourceTreeWalker::new(source, "test.js");
        let statements = walker.named_children(tree.root_node());
        assert_eq!(statements.len(), 2);

        let doc = walker.preceding_doc_comment(statements[0]).unwrap();
        assert_eq!(walker.text(doc), "/** Docs */");
        assert!(walker.preceding_doc_comment(statements[1]).is_none());
    }

    #[test]
    fn test_first_syntax_error() {
        let source = "var a = ;\n";
        let tree = parse(source);
        let walker = SourceTreeWalker::new(source, "broken.js");
        let error_node = walker.first_syntax_error(tree.root_node()).unwrap();
        match walker.syntax_error(error_node) {
            BridgeError::SyntaxError {
                source_name, line, ..
            } => {
                assert_eq!(source_name, "broken.js");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_clean_tree_has_no_errors() {
        let source = "if (a) { b(); } else c();";
        let tree = parse(source);
        let walker = SourceTreeWalker::new(source, "ok.js");
        assert!(walker.first_syntax_error(tree.root_node()).is_none());
    }

    #[test]
    fn test_syntax_start_skips_comments() {
        let source = "/** header */\n\nvar x;";
        let tree = parse(source);
        let walker = SourceTreeWalker::new(source, "test.js");
        assert_eq!(walker.syntax_start(tree.root_node()), Some(15));

        let only_comments = "// nothing here";
        let tree = parse(only_comments);
        let walker = SourceTreeWalker::new(only_comments, "test.js");
        assert_eq!(walker.syntax_start(tree.root_node()), None);
    }
}
