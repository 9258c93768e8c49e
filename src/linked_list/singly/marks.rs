use core::{hash::BuildHasher, ptr::NonNull};

use hashbrown::{DefaultHashBuilder, HashSet};

use super::node::Node;

/// Visited flags for the nodes touched by one algorithm run.
///
/// The flags live outside the nodes, so two runs over the same nodes never see
/// each other's marks unless the same `VisitMarks` is handed to both. Marks are
/// never cleared implicitly; call [`VisitMarks::clear`] to reuse an instance.
pub struct VisitMarks<S = DefaultHashBuilder> {
    visited: HashSet<NonNull<Node>, S>,
}

impl VisitMarks {
    pub fn new() -> Self {
        Self {
            visited: HashSet::with_hasher(DefaultHashBuilder::default()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl Default for VisitMarks {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> VisitMarks<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            visited: HashSet::with_hasher(hasher),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            visited: HashSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Marks `node` as visited. Returns false if it was already marked.
    #[inline]
    pub fn mark(&mut self, node: NonNull<Node>) -> bool {
        self.visited.insert(node)
    }

    #[inline]
    pub fn is_marked(&self, node: NonNull<Node>) -> bool {
        self.visited.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn clear(&mut self) {
        self.visited.clear();
    }
}
