//! Нативное дерево разбора: грамматика tree-sitter-javascript и закрытый
//! перечень видов её узлов

use once_cell::sync::Lazy;
use tree_sitter::{Language, Parser};

use crate::core::errors::BridgeError;

/// Грамматика JavaScript, загружается один раз на процесс
pub static JAVASCRIPT: Lazy<Language> = Lazy::new(|| tree_sitter_javascript::LANGUAGE.into());

/// Создаёт парсер, настроенный на [`JAVASCRIPT`]
pub fn new_parser() -> Result<Parser, BridgeError> {
    let mut parser = Parser::new();
    parser.set_language(&JAVASCRIPT)?;
    Ok(parser)
}

/// Вид узла нативного дерева.
///
/// Любая строка вида, отсутствующая здесь, считается неизвестной и
/// приводит к [`BridgeError::UnrecognizedNodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    // Структура
    Program,
    HashBangLine,
    Comment,
    HtmlComment,

    // Операторы
    ExpressionStatement,
    VariableDeclaration,
    LexicalDeclaration,
    VariableDeclarator,
    StatementBlock,
    IfStatement,
    ElseClause,
    SwitchStatement,
    SwitchBody,
    SwitchCase,
    SwitchDefault,
    ForStatement,
    ForInStatement,
    WhileStatement,
    DoStatement,
    TryStatement,
    CatchClause,
    FinallyClause,
    WithStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ThrowStatement,
    EmptyStatement,
    LabeledStatement,

    // Функции
    FunctionDeclaration,
    FunctionExpression,
    GeneratorFunctionDeclaration,
    GeneratorFunction,
    FormalParameters,

    /// `true`, `false`, `null`, `this`, `super`, `debugger`
    KeywordLiteral,

    // Имена
    Identifier,
    PropertyIdentifier,
    ShorthandPropertyIdentifier,
    ShorthandPropertyIdentifierPattern,
    StatementIdentifier,
    Undefined,

    // Литералы
    Number,
    String,
    Regex,
    Array,
    Object,
    Pair,
    MethodDefinition,
    ComputedPropertyName,

    // Деструктуризация
    ArrayPattern,
    ObjectPattern,
    PairPattern,
    AssignmentPattern,
    ObjectAssignmentPattern,

    // Выражения
    ParenthesizedExpression,
    SequenceExpression,
    AssignmentExpression,
    AugmentedAssignmentExpression,
    BinaryExpression,
    UnaryExpression,
    UpdateExpression,
    TernaryExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    SubscriptExpression,
    YieldExpression,
    Arguments,

    /// Части строк и регулярных выражений, разбираются родителем
    LexicalPart,

    /// Синтаксис за пределами поддерживаемого уровня языка
    Unsupported,
}

impl NativeKind {
    pub fn from_kind(kind: &str) -> Option<Self> {
        use NativeKind::*;
        let native = match kind {
            "program" => Program,
            "hash_bang_line" => HashBangLine,
            "comment" => Comment,
            "html_comment" => HtmlComment,

            "expression_statement" => ExpressionStatement,
            "variable_declaration" => VariableDeclaration,
            "lexical_declaration" => LexicalDeclaration,
            "variable_declarator" => VariableDeclarator,
            "statement_block" => StatementBlock,
            "if_statement" => IfStatement,
            "else_clause" => ElseClause,
            "switch_statement" => SwitchStatement,
            "switch_body" => SwitchBody,
            "switch_case" => SwitchCase,
            "switch_default" => SwitchDefault,
            "for_statement" => ForStatement,
            "for_in_statement" => ForInStatement,
            "while_statement" => WhileStatement,
            "do_statement" => DoStatement,
            "try_statement" => TryStatement,
            "catch_clause" => CatchClause,
            "finally_clause" => FinallyClause,
            "with_statement" => WithStatement,
            "break_statement" => BreakStatement,
            "continue_statement" => ContinueStatement,
            "return_statement" => ReturnStatement,
            "throw_statement" => ThrowStatement,
            "empty_statement" => EmptyStatement,
            "labeled_statement" => LabeledStatement,

            "function_declaration" => FunctionDeclaration,
            "function_expression" => FunctionExpression,
            "generator_function_declaration" => GeneratorFunctionDeclaration,
            "generator_function" => GeneratorFunction,
            "formal_parameters" => FormalParameters,

            "true" | "false" | "null" | "this" | "super" | "debugger_statement" => KeywordLiteral,

            "identifier" => Identifier,
            "property_identifier" => PropertyIdentifier,
            "shorthand_property_identifier" => ShorthandPropertyIdentifier,
            "shorthand_property_identifier_pattern" => ShorthandPropertyIdentifierPattern,
            "statement_identifier" => StatementIdentifier,
            "undefined" => Undefined,

            "number" => Number,
            "string" => String,
            "regex" => Regex,
            "array" => Array,
            "object" => Object,
            "pair" => Pair,
            "method_definition" => MethodDefinition,
            "computed_property_name" => ComputedPropertyName,

            "array_pattern" => ArrayPattern,
            "object_pattern" => ObjectPattern,
            "pair_pattern" => PairPattern,
            "assignment_pattern" => AssignmentPattern,
            "object_assignment_pattern" => ObjectAssignmentPattern,

            "parenthesized_expression" => ParenthesizedExpression,
            "sequence_expression" => SequenceExpression,
            "assignment_expression" => AssignmentExpression,
            "augmented_assignment_expression" => AugmentedAssignmentExpression,
            "binary_expression" => BinaryExpression,
            "unary_expression" => UnaryExpression,
            "update_expression" => UpdateExpression,
            "ternary_expression" => TernaryExpression,
            "call_expression" => CallExpression,
            "new_expression" => NewExpression,
            "member_expression" => MemberExpression,
            "subscript_expression" => SubscriptExpression,
            "yield_expression" => YieldExpression,
            "arguments" => Arguments,

            "escape_sequence" | "string_fragment" | "regex_pattern" | "regex_flags" => {
                LexicalPart
            }

            "arrow_function"
            | "await_expression"
            | "class"
            | "class_declaration"
            | "class_body"
            | "class_heritage"
            | "class_static_block"
            | "field_definition"
            | "decorator"
            | "template_string"
            | "template_substitution"
            | "spread_element"
            | "rest_pattern"
            | "import"
            | "import_statement"
            | "import_clause"
            | "import_specifier"
            | "import_attribute"
            | "named_imports"
            | "namespace_import"
            | "export_statement"
            | "export_clause"
            | "export_specifier"
            | "namespace_export"
            | "meta_property"
            | "optional_chain"
            | "private_property_identifier"
            | "jsx_element"
            | "jsx_self_closing_element"
            | "jsx_opening_element"
            | "jsx_closing_element"
            | "jsx_attribute"
            | "jsx_expression"
            | "jsx_namespace_name"
            | "jsx_text"
            | "html_character_reference" => Unsupported,

            _ => return None,
        };
        Some(native)
    }

    /// Узлы, которые в выходном дереве заменяются своим единственным потомком
    pub fn is_transparent(&self) -> bool {
        matches!(
            self,
            NativeKind::ParenthesizedExpression
                | NativeKind::ElseClause
                | NativeKind::FinallyClause
                | NativeKind::ComputedPropertyName
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, NativeKind::Comment | NativeKind::HtmlComment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_loads() {
        let mut parser = new_parser().unwrap();
        let tree = parser.parse("var a = 1;", None).unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_known_kinds() {
        assert_eq!(NativeKind::from_kind("if_statement"), Some(NativeKind::IfStatement));
        assert_eq!(NativeKind::from_kind("this"), Some(NativeKind::KeywordLiteral));
        assert_eq!(NativeKind::from_kind("arrow_function"), Some(NativeKind::Unsupported));
        assert_eq!(NativeKind::from_kind("string_fragment"), Some(NativeKind::LexicalPart));
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(NativeKind::from_kind("comprehension_block"), None);
        assert_eq!(NativeKind::from_kind(""), None);
    }

    #[test]
    fn test_transparent_wrappers() {
        assert!(NativeKind::ParenthesizedExpression.is_transparent());
        assert!(NativeKind::ElseClause.is_transparent());
        assert!(!NativeKind::StatementBlock.is_transparent());
    }
}
