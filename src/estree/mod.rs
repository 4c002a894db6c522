//! Стандартизированное дерево ESTree/Esprima
//!
//! Модель выходного AST, которую строит [`crate::bridge::AstBuilder`].
//! Сериализуется через serde в JSON того же вида, что выдаёт Esprima:
//! поле `type`, `range: [start, end]`, `loc.start.line`.

pub mod comment;
pub mod literal;
pub mod node;
pub mod operators;

pub use comment::{is_doc_comment, Comment};
pub use literal::LiteralValue;
pub use node::{Function, Node, NodeKind, Program, PropertyKind, VariableKind};
pub use operators::{
    AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator, UpdateOperator,
};
