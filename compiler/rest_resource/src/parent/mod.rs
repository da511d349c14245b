//! Resource type to parent resource links.

use rest_ir::TypeId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Parent links recorded by `@parentResource`.
///
/// Setting a link again replaces it. Acyclicity is not enforced here; walks
/// over the links guard against loops themselves.
#[derive(Clone, Debug, Default)]
pub struct ParentResourceGraph {
    parents: FxHashMap<TypeId, TypeId>,
}

impl ParentResourceGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `parent` as the parent of `resource`, returning the previous one.
    pub fn set_parent(&mut self, resource: TypeId, parent: TypeId) -> Option<TypeId> {
        self.parents.insert(resource, parent)
    }

    /// The parent of `resource`, if one was recorded.
    #[inline]
    pub fn parent(&self, resource: TypeId) -> Option<TypeId> {
        self.parents.get(&resource).copied()
    }

    /// Ancestors of `resource`, nearest first, stopping before any repeat.
    pub fn ancestors(&self, resource: TypeId) -> Ancestors<'_> {
        let mut seen = FxHashSet::default();
        seen.insert(resource);
        Ancestors {
            graph: self,
            current: resource,
            seen,
        }
    }

    /// Number of recorded links.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Check if no link is recorded.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Iterator over a resource's ancestors. See [`ParentResourceGraph::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    graph: &'a ParentResourceGraph,
    current: TypeId,
    seen: FxHashSet<TypeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let parent = self.graph.parent(self.current)?;
        if !self.seen.insert(parent) {
            return None;
        }
        self.current = parent;
        Some(parent)
    }
}

#[cfg(test)]
mod tests;
