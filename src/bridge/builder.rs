//! Построитель ESTree AST из исходного текста

use serde::{Deserialize, Serialize};

use super::comments::CommentAttacher;
use super::mapper::NodeMapper;
use super::native::new_parser;
use super::table::NodeTable;
use super::walker::SourceTreeWalker;
use crate::core::errors::BridgeError;
use crate::core::position::{Range, SourceLocation};
use crate::estree::node::Program;

/// Формат обработчиков `catch` в `TryStatement`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatchHandlerStyle {
    /// Поле `handler`: узел или `null`
    #[default]
    Single,
    /// Поле `handlers`: массив из нуля или одного узла
    List,
}

/// Настройки построения AST
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub catch_handlers: CatchHandlerStyle,
}

/// Построитель AST.
///
/// Состояние (комментарии, таблица идентичности) живёт один вызов
/// [`AstBuilder::build`] и сбрасывается в начале следующего. Экземпляр
/// не предназначен для совместного использования потоками: каждому
/// потоку нужен свой построитель.
#[derive(Debug, Default)]
pub struct AstBuilder {
    options: BuildOptions,
    comments: CommentAttacher,
    table: NodeTable,
    ast: Option<Program>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Разбирает исходник и строит по нему ESTree AST
    pub fn build(&mut self, source: &str, source_name: &str) -> Result<Program, BridgeError> {
        self.reset();

        let mut parser = new_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| BridgeError::ParseAborted {
                source_name: source_name.to_string(),
            })?;
        let root = tree.root_node();
        let walker = SourceTreeWalker::new(source, source_name);

        // Проверяем на синтаксические ошибки
        if let Some(error_node) = walker.first_syntax_error(root) {
            return Err(walker.syntax_error(error_node));
        }

        for comment in walker.collect_comments(root) {
            self.comments.record(comment, &walker);
        }

        let body = NodeMapper::new(&walker, &mut self.comments, &mut self.table, &self.options)
            .map_program_body(root)?;

        let (leading, trailing) = self.comments.unattached(walker.syntax_start(root));
        let program = Program {
            body,
            range: Range::new(0, source.len()),
            loc: SourceLocation::at_line(1),
            comments: self.comments.all(),
            leading_comments: non_empty(leading),
            trailing_comments: non_empty(trailing),
        };

        tracing::debug!(
            "built AST for {}: {} nodes, {} comments",
            source_name,
            self.table.len(),
            self.comments.len()
        );

        self.ast = Some(program.clone());
        Ok(program)
    }

    /// Последнее успешно построенное дерево
    pub fn ast(&self) -> Option<&Program> {
        self.ast.as_ref()
    }

    /// Количество узлов, созданных последним вызовом `build`
    pub fn node_count(&self) -> usize {
        self.table.len()
    }

    /// Сбрасывает всё состояние предыдущего построения
    pub fn reset(&mut self) {
        self.comments.clear();
        self.table.clear();
        self.ast = None;
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// Разовое построение AST с настройками по умолчанию
pub fn build_ast(source: &str, source_name: &str) -> Result<Program, BridgeError> {
    AstBuilder::new().build(source, source_name)
}
