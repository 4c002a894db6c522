//! Узлы стандартизированного AST (ESTree/Esprima)

use serde::Serialize;

use super::comment::Comment;
use super::literal::LiteralValue;
use super::operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
use crate::core::position::{Range, SourceLocation};

/// Корневой узел: программа целиком
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
    pub range: Range,
    pub loc: SourceLocation,
    /// Все комментарии исходника в порядке следования
    pub comments: Vec<Comment>,
    #[serde(rename = "leadingComments", skip_serializing_if = "Option::is_none")]
    pub leading_comments: Option<Vec<Comment>>,
    #[serde(rename = "trailingComments", skip_serializing_if = "Option::is_none")]
    pub trailing_comments: Option<Vec<Comment>>,
}

impl Program {
    /// Обход всех узлов в прямом порядке
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        for node in &self.body {
            node.walk(visit);
        }
    }

    /// Количество узлов (без корня)
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}

/// Узел AST: вид плюс общие поля
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub range: Range,
    pub loc: SourceLocation,
    /// Документирующий комментарий, непосредственно предшествующий узлу
    #[serde(rename = "leadingComments", skip_serializing_if = "Option::is_none")]
    pub leading_comments: Option<Vec<Comment>>,
}

impl Node {
    pub fn new(kind: NodeKind, range: Range, loc: SourceLocation) -> Self {
        Self {
            kind,
            range,
            loc,
            leading_comments: None,
        }
    }

    /// Имя вида узла, как в поле `type`
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn line(&self) -> usize {
        self.loc.line()
    }

    /// Прямые дочерние узлы в порядке исходника
    pub fn children(&self) -> Vec<&Node> {
        self.kind.children()
    }

    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Вид объявления переменных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "var" => Some(Self::Var),
            "let" => Some(Self::Let),
            "const" => Some(Self::Const),
            _ => None,
        }
    }
}

/// Вид свойства объекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// Функция (объявление или выражение)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub id: Option<Box<Node>>,
    pub params: Vec<Node>,
    pub defaults: Vec<Node>,
    pub body: Box<Node>,
    pub rest: Option<Box<Node>>,
    pub generator: bool,
    pub expression: bool,
}

/// Виды узлов
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    // Операторы
    ExpressionStatement {
        expression: Box<Node>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    EmptyStatement,
    DebuggerStatement,
    WithStatement {
        object: Box<Node>,
        body: Box<Node>,
    },
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    LabeledStatement {
        label: Box<Node>,
        body: Box<Node>,
    },
    BreakStatement {
        label: Option<Box<Node>>,
    },
    ContinueStatement {
        label: Option<Box<Node>>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },
    SwitchCase {
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },
    ThrowStatement {
        argument: Box<Node>,
    },
    TryStatement {
        block: Box<Node>,
        /// Одиночный обработчик (`null`, если `catch` нет)
        #[serde(skip_serializing_if = "Option::is_none")]
        handler: Option<Option<Box<Node>>>,
        /// Список обработчиков, если выбран списочный стиль
        #[serde(skip_serializing_if = "Option::is_none")]
        handlers: Option<Vec<Node>>,
        #[serde(rename = "guardedHandlers")]
        guarded_handlers: Vec<Node>,
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        param: Option<Box<Node>>,
        body: Box<Node>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },
    ForStatement {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
        each: bool,
    },
    ForOfStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },

    // Объявления
    FunctionDeclaration(Function),
    VariableDeclaration {
        declarations: Vec<Node>,
        kind: VariableKind,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },

    // Выражения
    FunctionExpression(Function),
    ThisExpression,
    ArrayExpression {
        elements: Vec<Option<Node>>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    Property {
        key: Box<Node>,
        value: Box<Node>,
        kind: PropertyKind,
        computed: bool,
        shorthand: bool,
        method: bool,
    },
    SequenceExpression {
        expressions: Vec<Node>,
    },
    UnaryExpression {
        operator: UnaryOperator,
        prefix: bool,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: UpdateOperator,
        prefix: bool,
        argument: Box<Node>,
    },
    BinaryExpression {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    LogicalExpression {
        operator: LogicalOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    AssignmentExpression {
        operator: AssignmentOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
    },
    YieldExpression {
        argument: Option<Box<Node>>,
        delegate: bool,
    },

    // Шаблоны деструктуризации
    ArrayPattern {
        elements: Vec<Option<Node>>,
    },
    ObjectPattern {
        properties: Vec<Node>,
    },
    AssignmentPattern {
        left: Box<Node>,
        right: Box<Node>,
    },

    // Листья
    Identifier {
        name: String,
    },
    Literal {
        value: LiteralValue,
        raw: String,
    },
}

impl NodeKind {
    pub fn type_name(&self) -> &'static str {
        use NodeKind::*;
        match self {
            ExpressionStatement { .. } => "ExpressionStatement",
            BlockStatement { .. } => "BlockStatement",
            EmptyStatement => "EmptyStatement",
            DebuggerStatement => "DebuggerStatement",
            WithStatement { .. } => "WithStatement",
            ReturnStatement { .. } => "ReturnStatement",
            LabeledStatement { .. } => "LabeledStatement",
            BreakStatement { .. } => "BreakStatement",
            ContinueStatement { .. } => "ContinueStatement",
            IfStatement { .. } => "IfStatement",
            SwitchStatement { .. } => "SwitchStatement",
            SwitchCase { .. } => "SwitchCase",
            ThrowStatement { .. } => "ThrowStatement",
            TryStatement { .. } => "TryStatement",
            CatchClause { .. } => "CatchClause",
            WhileStatement { .. } => "WhileStatement",
            DoWhileStatement { .. } => "DoWhileStatement",
            ForStatement { .. } => "ForStatement",
            ForInStatement { .. } => "ForInStatement",
            ForOfStatement { .. } => "ForOfStatement",
            FunctionDeclaration(_) => "FunctionDeclaration",
            VariableDeclaration { .. } => "VariableDeclaration",
            VariableDeclarator { .. } => "VariableDeclarator",
            FunctionExpression(_) => "FunctionExpression",
            ThisExpression => "ThisExpression",
            ArrayExpression { .. } => "ArrayExpression",
            ObjectExpression { .. } => "ObjectExpression",
            Property { .. } => "Property",
            SequenceExpression { .. } => "SequenceExpression",
            UnaryExpression { .. } => "UnaryExpression",
            UpdateExpression { .. } => "UpdateExpression",
            BinaryExpression { .. } => "BinaryExpression",
            LogicalExpression { .. } => "LogicalExpression",
            AssignmentExpression { .. } => "AssignmentExpression",
            ConditionalExpression { .. } => "ConditionalExpression",
            CallExpression { .. } => "CallExpression",
            NewExpression { .. } => "NewExpression",
            MemberExpression { .. } => "MemberExpression",
            YieldExpression { .. } => "YieldExpression",
            ArrayPattern { .. } => "ArrayPattern",
            ObjectPattern { .. } => "ObjectPattern",
            AssignmentPattern { .. } => "AssignmentPattern",
            Identifier { .. } => "Identifier",
            Literal { .. } => "Literal",
        }
    }

    /// Прямые дочерние узлы в порядке исходника
    pub fn children(&self) -> Vec<&Node> {
        use NodeKind::*;

        fn opt(node: &Option<Box<Node>>) -> Option<&Node> {
            node.as_deref()
        }

        let mut out: Vec<&Node> = Vec::new();
        match self {
            EmptyStatement | DebuggerStatement | ThisExpression | Identifier { .. }
            | Literal { .. } => {}
            ExpressionStatement { expression } => out.push(expression),
            BlockStatement { body } => out.extend(body),
            WithStatement { object, body } => out.extend([object.as_ref(), body.as_ref()]),
            ReturnStatement { argument } => out.extend(opt(argument)),
            LabeledStatement { label, body } => out.extend([label.as_ref(), body.as_ref()]),
            BreakStatement { label } | ContinueStatement { label } => out.extend(opt(label)),
            IfStatement {
                test,
                consequent,
                alternate,
            } => {
                out.extend([test.as_ref(), consequent.as_ref()]);
                out.extend(opt(alternate));
            }
            SwitchStatement {
                discriminant,
                cases,
            } => {
                out.push(discriminant);
                out.extend(cases);
            }
            SwitchCase { test, consequent } => {
                out.extend(opt(test));
                out.extend(consequent);
            }
            ThrowStatement { argument } => out.push(argument),
            TryStatement {
                block,
                handler,
                handlers,
                guarded_handlers,
                finalizer,
            } => {
                out.push(block);
                out.extend(guarded_handlers);
                out.extend(handler.iter().flatten().map(|h| h.as_ref()));
                out.extend(handlers.iter().flatten());
                out.extend(opt(finalizer));
            }
            CatchClause { param, body } => {
                out.extend(opt(param));
                out.push(body);
            }
            WhileStatement { test, body } => out.extend([test.as_ref(), body.as_ref()]),
            DoWhileStatement { body, test } => out.extend([body.as_ref(), test.as_ref()]),
            ForStatement {
                init,
                test,
                update,
                body,
            } => {
                out.extend(opt(init));
                out.extend(opt(test));
                out.extend(opt(update));
                out.push(body);
            }
            ForInStatement {
                left, right, body, ..
            }
            | ForOfStatement { left, right, body } => {
                out.extend([left.as_ref(), right.as_ref(), body.as_ref()])
            }
            FunctionDeclaration(function) | FunctionExpression(function) => {
                out.extend(opt(&function.id));
                out.extend(&function.params);
                out.extend(&function.defaults);
                out.extend(opt(&function.rest));
                out.push(&function.body);
            }
            VariableDeclaration { declarations, .. } => out.extend(declarations),
            VariableDeclarator { id, init } => {
                out.push(id);
                out.extend(opt(init));
            }
            ArrayExpression { elements } | ArrayPattern { elements } => {
                out.extend(elements.iter().flatten())
            }
            ObjectExpression { properties } | ObjectPattern { properties } => {
                out.extend(properties)
            }
            Property {
                key,
                value,
                shorthand,
                ..
            } => {
                if *shorthand {
                    out.push(value);
                } else {
                    out.extend([key.as_ref(), value.as_ref()]);
                }
            }
            SequenceExpression { expressions } => out.extend(expressions),
            UnaryExpression { argument, .. } | UpdateExpression { argument, .. } => {
                out.push(argument)
            }
            BinaryExpression { left, right, .. }
            | LogicalExpression { left, right, .. }
            | AssignmentExpression { left, right, .. }
            | AssignmentPattern { left, right } => out.extend([left.as_ref(), right.as_ref()]),
            ConditionalExpression {
                test,
                consequent,
                alternate,
            } => out.extend([test.as_ref(), consequent.as_ref(), alternate.as_ref()]),
            CallExpression { callee, arguments } | NewExpression { callee, arguments } => {
                out.push(callee);
                out.extend(arguments);
            }
            MemberExpression {
                object, property, ..
            } => out.extend([object.as_ref(), property.as_ref()]),
            YieldExpression { argument, .. } => out.extend(opt(argument)),
        }
        out
    }
}
