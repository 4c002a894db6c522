//! Маппинг нативных узлов tree-sitter в узлы ESTree
//!
//! Один вызов [`NodeMapper::map`] конвертирует нативный узел вместе со всем
//! поддеревом. Диспетчеризация идёт по закрытому перечню [`NativeKind`],
//! поэтому каждый вид узла обработан явно.

use tree_sitter::Node as TsNode;

use super::builder::{BuildOptions, CatchHandlerStyle};
use super::comments::CommentAttacher;
use super::native::NativeKind;
use super::table::{NodeId, NodeOrigin, NodeTable};
use super::walker::SourceTreeWalker;
use crate::core::errors::{fragment, BridgeError};
use crate::core::position::{Range, SourceLocation};
use crate::estree::literal::{decode_string, parse_number, LiteralValue};
use crate::estree::node::{Function, Node, NodeKind, PropertyKind, VariableKind};
use crate::estree::operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};

type MapResult<T> = Result<T, BridgeError>;

/// Конвертер нативного дерева в ESTree на время одного построения
pub struct NodeMapper<'a, 's> {
    walker: &'a SourceTreeWalker<'s>,
    comments: &'a mut CommentAttacher,
    table: &'a mut NodeTable,
    options: &'a BuildOptions,
}

impl<'a, 's> NodeMapper<'a, 's> {
    pub fn new(
        walker: &'a SourceTreeWalker<'s>,
        comments: &'a mut CommentAttacher,
        table: &'a mut NodeTable,
        options: &'a BuildOptions,
    ) -> Self {
        Self {
            walker,
            comments,
            table,
            options,
        }
    }

    /// Операторы верхнего уровня программы
    pub fn map_program_body(&mut self, root: TsNode<'_>) -> MapResult<Vec<Node>> {
        let statements = self.walker.named_children(root);
        self.map_all(statements)
    }

    /// Конвертирует нативный узел со всем поддеревом
    pub fn map(&mut self, native: TsNode<'_>) -> MapResult<Node> {
        let kind = self.classify(native)?;
        if kind.is_transparent() {
            let inner = self.first_child(native)?;
            return self.map(inner);
        }
        let id = self.register(native, true);
        let converted = self.convert(kind, native)?;
        Ok(self.finish(id, converted))
    }

    fn classify(&self, native: TsNode<'_>) -> MapResult<NativeKind> {
        NativeKind::from_kind(native.kind()).ok_or_else(|| BridgeError::UnrecognizedNodeKind {
            kind: native.kind().to_string(),
            fragment: fragment(self.walker.text(native)),
        })
    }

    fn convert(&mut self, kind: NativeKind, native: TsNode<'_>) -> MapResult<NodeKind> {
        use NativeKind as K;
        let walker = self.walker;
        let name = native.kind();

        match kind {
            K::ExpressionStatement => Ok(NodeKind::ExpressionStatement {
                expression: self.map_first_child(native)?,
            }),
            K::VariableDeclaration => self.variable_declaration(native, VariableKind::Var),
            K::LexicalDeclaration => {
                let keyword = walker.required_field(native, name, "kind")?;
                let kind = self.variable_kind(keyword)?;
                self.variable_declaration(native, kind)
            }
            K::VariableDeclarator => Ok(NodeKind::VariableDeclarator {
                id: self.map_field(native, "name")?,
                init: self.map_optional_field(native, "value")?,
            }),
            K::StatementBlock => Ok(NodeKind::BlockStatement {
                body: self.map_all(walker.named_children(native))?,
            }),
            K::IfStatement => Ok(NodeKind::IfStatement {
                test: self.map_field(native, "condition")?,
                consequent: self.map_field(native, "consequence")?,
                alternate: self.map_optional_field(native, "alternative")?,
            }),
            K::SwitchStatement => {
                let discriminant = self.map_field(native, "value")?;
                let body = walker.required_field(native, name, "body")?;
                Ok(NodeKind::SwitchStatement {
                    discriminant,
                    cases: self.map_all(walker.named_children(body))?,
                })
            }
            K::SwitchCase => Ok(NodeKind::SwitchCase {
                test: Some(self.map_field(native, "value")?),
                consequent: self.map_all(walker.field_nodes(native, "body"))?,
            }),
            K::SwitchDefault => Ok(NodeKind::SwitchCase {
                test: None,
                consequent: self.map_all(walker.field_nodes(native, "body"))?,
            }),
            K::ForStatement => self.for_statement(native),
            K::ForInStatement => self.for_in_statement(native),
            K::WhileStatement => Ok(NodeKind::WhileStatement {
                test: self.map_field(native, "condition")?,
                body: self.map_field(native, "body")?,
            }),
            K::DoStatement => Ok(NodeKind::DoWhileStatement {
                body: self.map_field(native, "body")?,
                test: self.map_field(native, "condition")?,
            }),
            K::TryStatement => self.try_statement(native),
            K::CatchClause => Ok(NodeKind::CatchClause {
                param: self.map_optional_field(native, "parameter")?,
                body: self.map_field(native, "body")?,
            }),
            K::WithStatement => Ok(NodeKind::WithStatement {
                object: self.map_field(native, "object")?,
                body: self.map_field(native, "body")?,
            }),
            K::BreakStatement => Ok(NodeKind::BreakStatement {
                label: self.map_optional_field(native, "label")?,
            }),
            K::ContinueStatement => Ok(NodeKind::ContinueStatement {
                label: self.map_optional_field(native, "label")?,
            }),
            K::ReturnStatement => Ok(NodeKind::ReturnStatement {
                argument: self.map_optional(walker.first_named_child(native))?,
            }),
            K::ThrowStatement => Ok(NodeKind::ThrowStatement {
                argument: self.map_first_child(native)?,
            }),
            K::EmptyStatement => Ok(NodeKind::EmptyStatement),
            K::LabeledStatement => Ok(NodeKind::LabeledStatement {
                label: self.map_field(native, "label")?,
                body: self.map_field(native, "body")?,
            }),

            K::FunctionDeclaration => Ok(NodeKind::FunctionDeclaration(self.function(native, false)?)),
            K::GeneratorFunctionDeclaration => {
                Ok(NodeKind::FunctionDeclaration(self.function(native, true)?))
            }
            K::FunctionExpression => Ok(NodeKind::FunctionExpression(self.function(native, false)?)),
            K::GeneratorFunction => Ok(NodeKind::FunctionExpression(self.function(native, true)?)),

            K::KeywordLiteral => self.keyword_literal(native),

            K::Identifier
            | K::PropertyIdentifier
            | K::ShorthandPropertyIdentifier
            | K::ShorthandPropertyIdentifierPattern
            | K::StatementIdentifier
            | K::Undefined => Ok(NodeKind::Identifier {
                name: walker.text(native).to_string(),
            }),

            K::Number => {
                let raw = walker.text(native);
                let value = parse_number(raw)
                    .ok_or_else(|| BridgeError::unsupported("number (bigint)", raw))?;
                Ok(NodeKind::Literal {
                    value: LiteralValue::Number(value),
                    raw: raw.to_string(),
                })
            }
            K::String => {
                let raw = walker.text(native);
                Ok(NodeKind::Literal {
                    value: LiteralValue::String(decode_string(raw)),
                    raw: raw.to_string(),
                })
            }
            K::Regex => {
                let raw = walker.text(native);
                Ok(NodeKind::Literal {
                    value: LiteralValue::String(raw.to_string()),
                    raw: raw.to_string(),
                })
            }

            K::Array => Ok(NodeKind::ArrayExpression {
                elements: self.elements(native)?,
            }),
            K::ArrayPattern => Ok(NodeKind::ArrayPattern {
                elements: self.elements(native)?,
            }),
            K::Object => {
                let mut properties = Vec::new();
                for member in walker.named_children(native) {
                    let property = match member.kind() {
                        "shorthand_property_identifier" => self.shorthand_property(member)?,
                        _ => self.map(member)?,
                    };
                    properties.push(property);
                }
                Ok(NodeKind::ObjectExpression { properties })
            }
            K::ObjectPattern => {
                let mut properties = Vec::new();
                for member in walker.named_children(native) {
                    let property = match member.kind() {
                        "shorthand_property_identifier_pattern" => self.shorthand_property(member)?,
                        "object_assignment_pattern" => self.shorthand_default_property(member)?,
                        _ => self.map(member)?,
                    };
                    properties.push(property);
                }
                Ok(NodeKind::ObjectPattern { properties })
            }
            K::Pair | K::PairPattern => {
                let key = walker.required_field(native, name, "key")?;
                let computed = key.kind() == "computed_property_name";
                Ok(NodeKind::Property {
                    key: Box::new(self.map(key)?),
                    value: self.map_field(native, "value")?,
                    kind: PropertyKind::Init,
                    computed,
                    shorthand: false,
                    method: false,
                })
            }
            K::MethodDefinition => self.method_property(native),
            K::AssignmentPattern | K::ObjectAssignmentPattern => Ok(NodeKind::AssignmentPattern {
                left: self.map_field(native, "left")?,
                right: self.map_field(native, "right")?,
            }),

            K::SequenceExpression => Ok(NodeKind::SequenceExpression {
                expressions: self.map_all(walker.named_children(native))?,
            }),
            K::AssignmentExpression => Ok(NodeKind::AssignmentExpression {
                operator: AssignmentOperator::Assign,
                left: self.map_field(native, "left")?,
                right: self.map_field(native, "right")?,
            }),
            K::AugmentedAssignmentExpression => {
                let token = self.operator_token(native)?;
                let operator = AssignmentOperator::from_token(token)
                    .ok_or_else(|| unrecognized_operator(token, name))?;
                Ok(NodeKind::AssignmentExpression {
                    operator,
                    left: self.map_field(native, "left")?,
                    right: self.map_field(native, "right")?,
                })
            }
            K::BinaryExpression => self.binary_expression(native),
            K::UnaryExpression => {
                let token = self.operator_token(native)?;
                let operator =
                    UnaryOperator::from_token(token).ok_or_else(|| unrecognized_operator(token, name))?;
                Ok(NodeKind::UnaryExpression {
                    operator,
                    prefix: true,
                    argument: self.map_field(native, "argument")?,
                })
            }
            K::UpdateExpression => {
                let operator_node = walker.required_field(native, name, "operator")?;
                let argument_node = walker.required_field(native, name, "argument")?;
                let token = walker.text(operator_node);
                let operator =
                    UpdateOperator::from_token(token).ok_or_else(|| unrecognized_operator(token, name))?;
                Ok(NodeKind::UpdateExpression {
                    operator,
                    prefix: operator_node.start_byte() < argument_node.start_byte(),
                    argument: Box::new(self.map(argument_node)?),
                })
            }
            K::TernaryExpression => Ok(NodeKind::ConditionalExpression {
                test: self.map_field(native, "condition")?,
                consequent: self.map_field(native, "consequence")?,
                alternate: self.map_field(native, "alternative")?,
            }),
            K::CallExpression => {
                self.reject_optional_chain(native)?;
                let callee = self.map_field(native, "function")?;
                let arguments = walker.required_field(native, name, "arguments")?;
                if arguments.kind() == "template_string" {
                    return Err(BridgeError::unsupported("tagged template", walker.text(native)));
                }
                Ok(NodeKind::CallExpression {
                    callee,
                    arguments: self.map_all(walker.named_children(arguments))?,
                })
            }
            K::NewExpression => {
                let callee = self.map_field(native, "constructor")?;
                let arguments = match walker.field(native, "arguments") {
                    Some(arguments) => self.map_all(walker.named_children(arguments))?,
                    None => Vec::new(),
                };
                Ok(NodeKind::NewExpression { callee, arguments })
            }
            K::MemberExpression => {
                self.reject_optional_chain(native)?;
                Ok(NodeKind::MemberExpression {
                    object: self.map_field(native, "object")?,
                    property: self.map_field(native, "property")?,
                    computed: false,
                })
            }
            K::SubscriptExpression => {
                self.reject_optional_chain(native)?;
                Ok(NodeKind::MemberExpression {
                    object: self.map_field(native, "object")?,
                    property: self.map_field(native, "index")?,
                    computed: true,
                })
            }
            K::YieldExpression => Ok(NodeKind::YieldExpression {
                argument: self.map_optional(walker.first_named_child(native))?,
                delegate: walker.has_token(native, "*"),
            }),

            K::Unsupported => Err(BridgeError::unsupported(name, walker.text(native))),

            // обрабатываются родителем или не порождают узлов
            K::Program
            | K::HashBangLine
            | K::Comment
            | K::HtmlComment
            | K::ElseClause
            | K::FinallyClause
            | K::ParenthesizedExpression
            | K::ComputedPropertyName
            | K::SwitchBody
            | K::FormalParameters
            | K::Arguments
            | K::LexicalPart => Err(BridgeError::unexpected(name, walker.text(native))),
        }
    }

    fn variable_declaration(&mut self, native: TsNode<'_>, kind: VariableKind) -> MapResult<NodeKind> {
        let declarators: Vec<TsNode<'_>> = self
            .walker
            .named_children(native)
            .into_iter()
            .filter(|child| child.kind() == "variable_declarator")
            .collect();
        Ok(NodeKind::VariableDeclaration {
            declarations: self.map_all(declarators)?,
            kind,
        })
    }

    fn variable_kind(&self, keyword: TsNode<'_>) -> MapResult<VariableKind> {
        let token = self.walker.text(keyword);
        VariableKind::from_keyword(token).ok_or_else(|| BridgeError::UnrecognizedKeyword {
            token: token.to_string(),
            fragment: fragment(token),
        })
    }

    fn for_statement(&mut self, native: TsNode<'_>) -> MapResult<NodeKind> {
        let walker = self.walker;
        let init = walker.required_field(native, "for_statement", "initializer")?;
        let init = Some(Box::new(self.map(init)?));

        // поле condition включает и завершающую `;`
        let test = walker
            .field_nodes(native, "condition")
            .into_iter()
            .next()
            .ok_or_else(|| BridgeError::malformed("for_statement", "condition", walker.text(native)))?;
        let test = Some(Box::new(self.map(test)?));

        Ok(NodeKind::ForStatement {
            init,
            test,
            update: self.map_optional_field(native, "increment")?,
            body: self.map_field(native, "body")?,
        })
    }

    fn for_in_statement(&mut self, native: TsNode<'_>) -> MapResult<NodeKind> {
        let walker = self.walker;
        if walker.has_token(native, "await") {
            return Err(BridgeError::unsupported("for await", walker.text(native)));
        }
        let left_node = walker.required_field(native, "for_in_statement", "left")?;
        let left = match walker.field(native, "kind") {
            Some(keyword) => {
                self.for_in_declaration(keyword, left_node, walker.field(native, "value"))?
            }
            None => self.map(left_node)?,
        };
        let right = self.map_field(native, "right")?;
        let body = self.map_field(native, "body")?;

        let operator = walker.required_field(native, "for_in_statement", "operator")?;
        match walker.text(operator) {
            "in" => Ok(NodeKind::ForInStatement {
                left: Box::new(left),
                right,
                body,
                each: false,
            }),
            "of" => Ok(NodeKind::ForOfStatement {
                left: Box::new(left),
                right,
                body,
            }),
            other => Err(unrecognized_operator(other, "for_in_statement")),
        }
    }

    /// `var x [= init]` в заголовке for-in/of: объявление с одним декларатором
    fn for_in_declaration(
        &mut self,
        keyword: TsNode<'_>,
        left: TsNode<'_>,
        value: Option<TsNode<'_>>,
    ) -> MapResult<Node> {
        let walker = self.walker;
        let kind = self.variable_kind(keyword)?;
        let end = value.unwrap_or(left).end_byte();

        let declaration_id = self.register_span(
            "variable_declaration",
            Range::new(keyword.start_byte(), end),
            walker.line(keyword),
        );
        let declarator_id = self.register_span(
            "variable_declarator",
            Range::new(left.start_byte(), end),
            walker.line(left),
        );

        let id = Box::new(self.map(left)?);
        let init = self.map_optional(value)?;
        let declarator = self.finish(declarator_id, NodeKind::VariableDeclarator { id, init });
        Ok(self.finish(
            declaration_id,
            NodeKind::VariableDeclaration {
                declarations: vec![declarator],
                kind,
            },
        ))
    }

    fn try_statement(&mut self, native: TsNode<'_>) -> MapResult<NodeKind> {
        let block = self.map_field(native, "body")?;
        let handler = self.map_optional_field(native, "handler")?;
        let finalizer = self.map_optional_field(native, "finalizer")?;

        let (handler, handlers) = match self.options.catch_handlers {
            CatchHandlerStyle::Single => (Some(handler), None),
            CatchHandlerStyle::List => (None, Some(handler.map(|h| vec![*h]).unwrap_or_default())),
        };
        Ok(NodeKind::TryStatement {
            block,
            handler,
            handlers,
            guarded_handlers: Vec::new(),
            finalizer,
        })
    }

    fn function(&mut self, native: TsNode<'_>, generator: bool) -> MapResult<Function> {
        let walker = self.walker;
        if walker.has_token(native, "async") {
            return Err(BridgeError::unsupported("async function", walker.text(native)));
        }
        let id = self.map_optional_field(native, "name")?;
        let parameters = walker.required_field(native, native.kind(), "parameters")?;
        let params = self.map_all(walker.named_children(parameters))?;
        let body = self.map_field(native, "body")?;

        Ok(Function {
            id,
            params,
            defaults: Vec::new(),
            body,
            rest: None,
            generator,
            expression: false,
        })
    }

    fn keyword_literal(&mut self, native: TsNode<'_>) -> MapResult<NodeKind> {
        let token = match native.kind() {
            "debugger_statement" => "debugger",
            other => other,
        };
        let literal = |value: LiteralValue| NodeKind::Literal {
            value,
            raw: token.to_string(),
        };
        match token {
            "true" => Ok(literal(LiteralValue::Boolean(true))),
            "false" => Ok(literal(LiteralValue::Boolean(false))),
            "null" => Ok(literal(LiteralValue::Null)),
            "this" => Ok(NodeKind::ThisExpression),
            "debugger" => Ok(NodeKind::DebuggerStatement),
            other => Err(BridgeError::UnrecognizedKeyword {
                token: other.to_string(),
                fragment: fragment(self.walker.text(native)),
            }),
        }
    }

    fn binary_expression(&mut self, native: TsNode<'_>) -> MapResult<NodeKind> {
        let token = self.operator_token(native)?;
        let left = self.map_field(native, "left")?;
        let right = self.map_field(native, "right")?;

        if let Some(operator) = LogicalOperator::from_token(token) {
            return Ok(NodeKind::LogicalExpression {
                operator,
                left,
                right,
            });
        }
        let operator = BinaryOperator::from_token(token)
            .ok_or_else(|| unrecognized_operator(token, "binary_expression"))?;
        Ok(NodeKind::BinaryExpression {
            operator,
            left,
            right,
        })
    }

    /// Метод, геттер или сеттер литерала объекта
    fn method_property(&mut self, native: TsNode<'_>) -> MapResult<NodeKind> {
        let walker = self.walker;
        if walker.field(native, "decorator").is_some() {
            return Err(BridgeError::unsupported("decorator", walker.text(native)));
        }
        for modifier in ["static", "static get", "async"] {
            if walker.has_token(native, modifier) {
                return Err(BridgeError::unsupported(
                    format!("{modifier} method"),
                    walker.text(native),
                ));
            }
        }

        let kind = if walker.has_token(native, "get") {
            PropertyKind::Get
        } else if walker.has_token(native, "set") {
            PropertyKind::Set
        } else {
            PropertyKind::Init
        };
        let generator = walker.has_token(native, "*");

        let key = walker.required_field(native, "method_definition", "name")?;
        let computed = key.kind() == "computed_property_name";
        let key = Box::new(self.map(key)?);

        let parameters = walker.required_field(native, "method_definition", "parameters")?;
        let body = walker.required_field(native, "method_definition", "body")?;
        let function_id = self.register_span(
            "method_definition",
            Range::new(parameters.start_byte(), body.end_byte()),
            walker.line(parameters),
        );
        let params = self.map_all(walker.named_children(parameters))?;
        let body = Box::new(self.map(body)?);
        let value = self.finish(
            function_id,
            NodeKind::FunctionExpression(Function {
                id: None,
                params,
                defaults: Vec::new(),
                body,
                rest: None,
                generator,
                expression: false,
            }),
        );

        Ok(NodeKind::Property {
            key,
            value: Box::new(value),
            kind,
            computed,
            shorthand: false,
            method: kind == PropertyKind::Init,
        })
    }

    /// `{ a }`: ключ и значение строятся из одного идентификатора
    fn shorthand_property(&mut self, native: TsNode<'_>) -> MapResult<Node> {
        let property_id = self.register(native, true);
        let key = self.identifier(native);
        let value = self.identifier(native);
        Ok(self.finish(property_id, shorthand(key, value)))
    }

    /// `{ a = 1 }` в шаблоне деструктуризации
    fn shorthand_default_property(&mut self, native: TsNode<'_>) -> MapResult<Node> {
        let walker = self.walker;
        let left = walker.required_field(native, "object_assignment_pattern", "left")?;
        if left.kind() != "shorthand_property_identifier_pattern" {
            // `{ [a] = [] }` и подобные сводятся к обычному шаблону
            return self.map(native);
        }

        let property_id = self.register(native, true);
        let key = self.identifier(left);
        let pattern_id = self.register(native, false);
        let target = self.identifier(left);
        let right = self.map_field(native, "right")?;
        let value = self.finish(
            pattern_id,
            NodeKind::AssignmentPattern {
                left: Box::new(target),
                right,
            },
        );
        Ok(self.finish(property_id, shorthand(key, value)))
    }

    /// Элементы массива; пропуски (`[1,,2]`) становятся `None`
    fn elements(&mut self, native: TsNode<'_>) -> MapResult<Vec<Option<Node>>> {
        let mut elements = Vec::new();
        let mut expect_element = true;
        for token in self.walker.tokens(native) {
            if token.is_named() {
                elements.push(Some(self.map(token)?));
                expect_element = false;
            } else if token.kind() == "," {
                if expect_element {
                    elements.push(None);
                }
                expect_element = true;
            }
        }
        Ok(elements)
    }

    fn identifier(&mut self, native: TsNode<'_>) -> Node {
        let id = self.register(native, false);
        let name = self.walker.text(native).to_string();
        self.finish(id, NodeKind::Identifier { name })
    }

    fn operator_token(&self, native: TsNode<'_>) -> MapResult<&'s str> {
        let operator = self
            .walker
            .required_field(native, native.kind(), "operator")?;
        Ok(self.walker.text(operator))
    }

    fn reject_optional_chain(&self, native: TsNode<'_>) -> MapResult<()> {
        match self.walker.field(native, "optional_chain") {
            Some(_) => Err(BridgeError::unsupported("optional_chain", self.walker.text(native))),
            None => Ok(()),
        }
    }

    // --- общие помощники ---

    fn map_all(&mut self, natives: Vec<TsNode<'_>>) -> MapResult<Vec<Node>> {
        natives.into_iter().map(|native| self.map(native)).collect()
    }

    fn map_optional(&mut self, native: Option<TsNode<'_>>) -> MapResult<Option<Box<Node>>> {
        native.map(|native| self.map(native).map(Box::new)).transpose()
    }

    fn map_field(&mut self, native: TsNode<'_>, field: &'static str) -> MapResult<Box<Node>> {
        let child = self.walker.required_field(native, native.kind(), field)?;
        Ok(Box::new(self.map(child)?))
    }

    fn map_optional_field(&mut self, native: TsNode<'_>, field: &str) -> MapResult<Option<Box<Node>>> {
        let child = self.walker.field(native, field);
        self.map_optional(child)
    }

    fn map_first_child(&mut self, native: TsNode<'_>) -> MapResult<Box<Node>> {
        let child = self.first_child(native)?;
        Ok(Box::new(self.map(child)?))
    }

    fn first_child<'t>(&self, native: TsNode<'t>) -> MapResult<TsNode<'t>> {
        self.walker
            .first_named_child(native)
            .ok_or_else(|| BridgeError::malformed(native.kind(), "child", self.walker.text(native)))
    }

    fn register(&mut self, native: TsNode<'_>, with_doc: bool) -> NodeId {
        let doc_comment = if with_doc {
            self.walker
                .preceding_doc_comment(native)
                .map(|comment| comment.id())
        } else {
            None
        };
        self.table.register(NodeOrigin {
            native_kind: native.kind(),
            native_id: Some(native.id()),
            range: self.walker.range(native),
            line: self.walker.line(native),
            doc_comment,
        })
    }

    fn register_span(&mut self, native_kind: &'static str, range: Range, line: usize) -> NodeId {
        self.table.register(NodeOrigin {
            native_kind,
            native_id: None,
            range,
            line,
            doc_comment: None,
        })
    }

    /// Создаёт выходной узел по записи в таблице идентичности
    fn finish(&mut self, id: NodeId, kind: NodeKind) -> Node {
        let (native_kind, range, line, doc_comment) = self
            .table
            .origin(id)
            .map(|origin| (origin.native_kind, origin.range, origin.line, origin.doc_comment))
            .unwrap_or_default();
        let mut node = Node::new(kind, range, SourceLocation::at_line(line));
        tracing::trace!("{} {} -> {}", native_kind, range, node.type_name());
        node.leading_comments = doc_comment.and_then(|comment| self.comments.attach(comment));
        node
    }
}

fn shorthand(key: Node, value: Node) -> NodeKind {
    NodeKind::Property {
        key: Box::new(key),
        value: Box::new(value),
        kind: PropertyKind::Init,
        computed: false,
        shorthand: true,
        method: false,
    }
}

fn unrecognized_operator(token: &str, kind: &'static str) -> BridgeError {
    BridgeError::UnrecognizedOperator {
        operator: token.to_string(),
        kind,
    }
}
