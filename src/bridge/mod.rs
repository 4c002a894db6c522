//! AST-мост: нативное дерево tree-sitter → ESTree
//!
//! Конвейер одного построения:
//! [`SourceTreeWalker`] обходит нативное дерево, [`NodeMapper`] конвертирует
//! узлы по их виду, [`CommentAttacher`] привязывает документирующие
//! комментарии, [`AstBuilder`] управляет состоянием вызова.

pub mod builder;
pub mod comments;
pub mod mapper;
pub mod native;
pub mod table;
pub mod walker;

pub use builder::{build_ast, AstBuilder, BuildOptions, CatchHandlerStyle};
pub use comments::CommentAttacher;
pub use mapper::NodeMapper;
pub use native::NativeKind;
pub use table::{NodeId, NodeTable};
pub use walker::SourceTreeWalker;
