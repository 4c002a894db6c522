//! Таблица идентичности узлов одного построения

use crate::core::position::Range;

/// Идентификатор выходного узла внутри одного построения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Происхождение выходного узла
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOrigin {
    /// Вид нативного узла (или синтетическое имя для узлов без прообраза)
    pub native_kind: &'static str,
    /// `id()` нативного узла tree-sitter
    pub native_id: Option<usize>,
    pub range: Range,
    pub line: usize,
    /// Нативный документирующий комментарий перед узлом
    pub doc_comment: Option<usize>,
}

/// Соответствие выходных узлов нативным; не сериализуется и живёт
/// ровно одно построение
#[derive(Debug, Default)]
pub struct NodeTable {
    origins: Vec<NodeOrigin>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, origin: NodeOrigin) -> NodeId {
        let id = NodeId(self.origins.len());
        self.origins.push(origin);
        id
    }

    pub fn origin(&self, id: NodeId) -> Option<&NodeOrigin> {
        self.origins.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn clear(&mut self) {
        self.origins.clear();
    }
}
