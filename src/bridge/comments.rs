//! Привязка документирующих комментариев к узлам

use std::collections::HashMap;

use tree_sitter::Node as TsNode;

use super::walker::SourceTreeWalker;
use crate::estree::comment::Comment;

/// Реестр комментариев одного построения.
///
/// Каждый нативный комментарий конвертируется ровно один раз. Документирующий
/// комментарий привязывается не более чем к одному узлу; непривязанные
/// остаются корню.
#[derive(Debug, Default)]
pub struct CommentAttacher {
    comments: Vec<Comment>,
    seen: Vec<bool>,
    by_native: HashMap<usize, usize>,
}

impl CommentAttacher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.comments.clear();
        self.seen.clear();
        self.by_native.clear();
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Регистрирует нативный комментарий; повторная регистрация возвращает тот же индекс
    pub fn record(&mut self, native: TsNode<'_>, walker: &SourceTreeWalker<'_>) -> usize {
        if let Some(index) = self.by_native.get(&native.id()) {
            return *index;
        }
        let comment = Comment::new(walker.text(native), walker.range(native), walker.line(native));
        let index = self.comments.len();
        self.comments.push(comment);
        self.seen.push(false);
        self.by_native.insert(native.id(), index);
        index
    }

    /// Забирает комментарий для привязки к узлу.
    ///
    /// Возвращает `None`, если комментарий не зарегистрирован, не является
    /// документирующим или уже привязан.
    pub fn attach(&mut self, native_id: usize) -> Option<Vec<Comment>> {
        let index = *self.by_native.get(&native_id)?;
        if self.seen[index] || !self.comments[index].is_doc {
            return None;
        }
        self.seen[index] = true;
        Some(vec![self.comments[index].clone()])
    }

    /// Все комментарии в порядке исходника
    pub fn all(&self) -> Vec<Comment> {
        self.comments.clone()
    }

    /// Непривязанные документирующие комментарии, разделённые началом
    /// первого синтаксического узла: до него ведущие, остальные хвостовые.
    ///
    /// Без синтаксических узлов все они хвостовые.
    pub fn unattached(&self, syntax_start: Option<usize>) -> (Vec<Comment>, Vec<Comment>) {
        self.comments
            .iter()
            .zip(&self.seen)
            .filter(|(comment, seen)| comment.is_doc && !**seen)
            .map(|(comment, _)| comment.clone())
            .partition(|comment| syntax_start.is_some_and(|start| comment.range.start < start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::native::new_parser;

    #[test]
    fn test_record_is_idempotent_and_attach_once() {
        let source = "/** a */\nvar x;\n/** b */";
        let tree = new_parser().unwrap().parse(source, None).unwrap();
        let walker = SourceTreeWalker::new(source, "test.js");
        let natives = walker.collect_comments(tree.root_node());

        let mut attacher = CommentAttacher::new();
        let first = attacher.record(natives[0], &walker);
        assert_eq!(attacher.record(natives[0], &walker), first);
        attacher.record(natives[1], &walker);
        assert_eq!(attacher.len(), 2);

        let attached = attacher.attach(natives[0].id()).unwrap();
        assert_eq!(attached[0].raw, "/** a */");
        assert!(attacher.attach(natives[0].id()).is_none());

        let (leading, trailing) = attacher.unattached(walker.syntax_start(tree.root_node()));
        assert!(leading.is_empty());
        assert_eq!(trailing.len(), 1);
        assert_eq!(trailing[0].raw, "/** b */");
    }

    #[test]
    fn test_plain_comments_never_attach() {
        let source = "/* plain */ var x;";
        let tree = new_parser().unwrap().parse(source, None).unwrap();
        let walker = SourceTreeWalker::new(source, "test.js");
        let natives = walker.collect_comments(tree.root_node());

        let mut attacher = CommentAttacher::new();
        attacher.record(natives[0], &walker);
        assert!(attacher.attach(natives[0].id()).is_none());
        let (leading, trailing) = attacher.unattached(Some(12));
        assert!(leading.is_empty() && trailing.is_empty());
    }

    #[test]
    fn test_unattached_without_syntax_nodes_are_trailing() {
        let source = "/** only docs */";
        let tree = new_parser().unwrap().parse(source, None).unwrap();
        let walker = SourceTreeWalker::new(source, "test.js");

        let mut attacher = CommentAttacher::new();
        for native in walker.collect_comments(tree.root_node()) {
            attacher.record(native, &walker);
        }
        let (leading, trailing) = attacher.unattached(None);
        assert!(leading.is_empty());
        assert_eq!(trailing.len(), 1);

        attacher.clear();
        assert!(attacher.is_empty());
    }
}
