use core::{fmt, ptr::NonNull};

use hashbrown::HashSet;
use tracing::debug;

use super::{
    error::{ListError, Result},
    iter::{NodeIter, Values},
    node::Node,
    traits::Link,
};

/// A singly linked list of caller-owned nodes.
#[derive(Debug, Default)]
pub struct SinglyLinkedList {
    head: Option<NonNull<Node>>,
}

impl SinglyLinkedList {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    /// Creates a list starting at `head`, taking whatever chain follows it.
    pub const fn with_head(head: NonNull<Node>) -> Self {
        SinglyLinkedList { head: Some(head) }
    }

    /// Links every node of `nodes` in slice order.
    ///
    /// Existing `next` pointers of the nodes are overwritten.
    ///
    /// # Safety
    ///
    /// The returned list does not borrow `nodes`. Every node in `nodes` must
    /// outlive the list and must not move (no drop, reallocation or `mem::swap`
    /// of the backing storage) while the list is in use.
    ///
    /// ```compile_fail,E0133
    /// use linkwork::linked_list::singly::{list::SinglyLinkedList, node::Node};
    ///
    /// let mut storage = vec![Node::new(1), Node::new(2)];
    /// let list = SinglyLinkedList::from_nodes(&mut storage);
    /// ```
    pub unsafe fn from_nodes(nodes: &mut [Node]) -> Self {
        let mut bucket = Bucket::default();
        for node in nodes.iter_mut() {
            bucket.push(NonNull::from(node));
        }
        SinglyLinkedList { head: bucket.head }
    }

    pub fn head(&self) -> Option<NonNull<Node>> {
        self.head
    }

    pub fn set_head(&mut self, head: Option<NonNull<Node>>) {
        self.head = head;
    }

    /// Get the last node of the list. O(n).
    pub fn tail(&self) -> Option<NonNull<Node>> {
        let mut current = self.head?;
        while let Some(next) = unsafe { current.as_ref().next() } {
            current = next;
        }
        Some(current)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the values from head to tail.
    pub fn values(&self) -> Values<'_> {
        Values::new(self)
    }

    /// Get an iterator over the nodes of the list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the linked list is not modified while iterating.
    pub unsafe fn iter(&self) -> NodeIter<'_> {
        unsafe { NodeIter::new(self) }
    }

    /// Returns true if `node` is reachable from the head.
    pub fn contains_node(&self, node: NonNull<Node>) -> bool {
        unsafe { self.iter() }.any(|current| current == node)
    }

    /// Pushes `node` to the front of the list. O(1).
    pub fn insert_head(&mut self, node: NonNull<Node>) {
        unsafe { self.link_after(node) }
    }

    /// Links `node` after the current tail. O(n).
    ///
    /// Whatever chain already follows `node` comes along with it, which is how
    /// a shared tail is attached to a second list.
    pub fn append(&mut self, node: NonNull<Node>) {
        match self.tail() {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
    }

    /// Links `node` right after `anchor`. O(1).
    ///
    /// # Safety
    ///
    /// `anchor` must be a live node of some list and `node` must be a live
    /// node that is not already reachable from `anchor`.
    pub unsafe fn insert_after(mut anchor: NonNull<Node>, node: NonNull<Node>) {
        unsafe { anchor.as_mut().link_after(node) }
    }

    /// Same as [`SinglyLinkedList::insert_after`], but checks that `anchor`
    /// belongs to this list first. O(n).
    pub fn insert_after_checked(
        &mut self,
        anchor: NonNull<Node>,
        node: NonNull<Node>,
    ) -> Result<()> {
        if !self.contains_node(anchor) {
            return Err(ListError::InvalidAnchor);
        }
        unsafe { Self::insert_after(anchor, node) };
        Ok(())
    }

    /// Moves the head `n` nodes forward, dropping the skipped prefix.
    pub fn skip_head(&mut self, n: usize) -> Result<()> {
        let mut current = self.head;
        for skipped in 0..n {
            match current {
                Some(node) => current = unsafe { node.as_ref().next() },
                None => return Err(ListError::OutOfRange { k: n, len: skipped }),
            }
        }
        self.head = current;
        Ok(())
    }

    /// Removes the first node holding `key` and returns it unlinked. O(n).
    pub fn delete_by_value(&mut self, key: i32) -> Result<NonNull<Node>> {
        let head = self.head.ok_or(ListError::Empty)?;
        if unsafe { head.as_ref().value() } == key {
            self.head = unsafe { head.as_ref().next() };
            debug!(key, "deleted head node");
            return Ok(unlinked(head));
        }

        let mut prev = head;
        while let Some(current) = unsafe { prev.as_ref().next() } {
            if unsafe { current.as_ref().value() } == key {
                unsafe { prev.as_mut().unlink_next() };
                debug!(key, "deleted node");
                return Ok(unlinked(current));
            }
            prev = current;
        }
        Err(ListError::NotFound { key })
    }

    /// Recursive version of [`SinglyLinkedList::delete_by_value`].
    ///
    /// Uses O(n) stack.
    pub fn delete_by_value_recursive(&mut self, key: i32) -> Result<NonNull<Node>> {
        let head = self.head.ok_or(ListError::Empty)?;
        if unsafe { head.as_ref().value() } == key {
            self.head = unsafe { head.as_ref().next() };
            debug!(key, "deleted head node");
            return Ok(unlinked(head));
        }
        match delete_after(head, unsafe { head.as_ref().next() }, key) {
            Some(removed) => {
                debug!(key, "deleted node");
                Ok(removed)
            }
            None => Err(ListError::NotFound { key }),
        }
    }

    /// Deletes the logical position of `node` knowing nothing but the node itself.
    ///
    /// Every following value is shifted one node back and the last node is cut
    /// off and returned. O(length of the suffix).
    ///
    /// # Safety
    ///
    /// `node` and every node after it must be alive.
    pub unsafe fn delete_given_only(node: NonNull<Node>) -> Result<NonNull<Node>> {
        let mut current = node;
        let mut next = unsafe { current.as_ref().next() }.ok_or(ListError::TailNode)?;
        loop {
            unsafe { current.as_mut().set_value(next.as_ref().value()) };
            match unsafe { next.as_ref().next() } {
                Some(after) => {
                    current = next;
                    next = after;
                }
                None => {
                    unsafe { current.as_mut().set_next(None) };
                    return Ok(next);
                }
            }
        }
    }

    /// Removes repeated values in place without extra memory, keeping the
    /// first occurrence of each. O(n^2). Returns the number of nodes removed.
    pub fn remove_duplicates(&mut self) -> usize {
        let mut removed = 0;
        let mut current = self.head;
        while let Some(node) = current {
            let value = unsafe { node.as_ref().value() };
            let mut runner = node;
            while let Some(next) = unsafe { runner.as_ref().next() } {
                if unsafe { next.as_ref().value() } == value {
                    unsafe { runner.as_mut().unlink_next() };
                    removed += 1;
                } else {
                    runner = next;
                }
            }
            current = unsafe { node.as_ref().next() };
        }
        debug!(removed, "removed duplicates");
        removed
    }

    /// Same result as [`SinglyLinkedList::remove_duplicates`] in O(n) expected
    /// time, remembering seen values in a hash set.
    pub fn remove_duplicates_using_seen(&mut self) -> usize {
        let Some(head) = self.head else {
            return 0;
        };
        let mut seen = HashSet::new();
        seen.insert(unsafe { head.as_ref().value() });

        let mut removed = 0;
        let mut prev = head;
        while let Some(current) = unsafe { prev.as_ref().next() } {
            if seen.insert(unsafe { current.as_ref().value() }) {
                prev = current;
            } else {
                unsafe { prev.as_mut().unlink_next() };
                removed += 1;
            }
        }
        debug!(removed, distinct = seen.len(), "removed duplicates");
        removed
    }

    /// Counts the nodes iteratively.
    pub fn count(&self) -> usize {
        self.values().count()
    }

    /// Counts the nodes recursively. Uses O(n) stack.
    pub fn count_recursive(&self) -> usize {
        count_from(self.head)
    }

    /// The k-th node from the end (1-based) when the length is already known.
    ///
    /// Walks `len - k` nodes from the head.
    pub fn kth_to_last_with_len(&self, k: usize, len: usize) -> Result<i32> {
        if k == 0 || k > len {
            return Err(ListError::OutOfRange { k, len });
        }
        self.values()
            .nth(len - k)
            .ok_or(ListError::OutOfRange { k, len })
    }

    /// The k-th node from the end (1-based) without knowing the length.
    ///
    /// Counts what is left behind every node in turn. O(n^2). A `k` matching
    /// no node is reported as [`ListError::PositionNotFound`].
    pub fn kth_to_last(&self, k: usize) -> Result<i32> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let mut current = self.head;
        while let Some(node) = current {
            if remaining(node) == k {
                return Ok(unsafe { node.as_ref().value() });
            }
            current = unsafe { node.as_ref().next() };
        }
        Err(ListError::PositionNotFound { k, len: self.count() })
    }

    /// The k-th node from the end (1-based), found while the recursion unwinds.
    ///
    /// Reports a missing position the same way as [`SinglyLinkedList::kth_to_last`].
    pub fn kth_to_last_recursive(&self, k: usize) -> Result<i32> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let (found, len) = kth_from_end(self.head, k);
        found.ok_or(ListError::PositionNotFound { k, len })
    }

    /// Stable partition: values below `pivot` first, then the rest, each group
    /// in its original order. Returns the new head.
    pub fn partition(&mut self, pivot: i32) -> Option<NonNull<Node>> {
        let mut before = Bucket::default();
        let mut after = Bucket::default();

        let mut current = self.head;
        while let Some(node) = current {
            current = unsafe { node.as_ref().next() };
            if unsafe { node.as_ref().value() } < pivot {
                before.push(node);
            } else {
                after.push(node);
            }
        }

        self.head = match before.tail {
            Some(mut tail) => {
                unsafe { tail.as_mut().set_next(after.head) };
                before.head
            }
            None => after.head,
        };
        debug!(pivot, below = before.len, at_or_above = after.len, "partitioned list");
        self.head
    }
}

impl Link for SinglyLinkedList {
    fn next(&self) -> Option<NonNull<Node>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.head = next;
    }
}

impl fmt::Display for SinglyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Head and tail of a chain being built in order.
#[derive(Default)]
struct Bucket {
    head: Option<NonNull<Node>>,
    tail: Option<NonNull<Node>>,
    len: usize,
}

impl Bucket {
    fn push(&mut self, mut node: NonNull<Node>) {
        unsafe { node.as_mut().set_next(None) };
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }
}

fn unlinked(mut node: NonNull<Node>) -> NonNull<Node> {
    unsafe { node.as_mut().set_next(None) };
    node
}

// End of list is checked before the match, `prev` is always a live node.
fn delete_after(
    mut prev: NonNull<Node>,
    current: Option<NonNull<Node>>,
    key: i32,
) -> Option<NonNull<Node>> {
    let current = current?;
    if unsafe { current.as_ref().value() } == key {
        unsafe { prev.as_mut().set_next(current.as_ref().next()) };
        return Some(unlinked(current));
    }
    delete_after(current, unsafe { current.as_ref().next() }, key)
}

fn count_from(node: Option<NonNull<Node>>) -> usize {
    match node {
        Some(node) => 1 + count_from(unsafe { node.as_ref().next() }),
        None => 0,
    }
}

/// Number of nodes from `node` to the tail, `node` included.
fn remaining(node: NonNull<Node>) -> usize {
    let mut count = 1;
    let mut runner = node;
    while let Some(next) = unsafe { runner.as_ref().next() } {
        runner = next;
        count += 1;
    }
    count
}

/// Returns the value found so far and the position of `node` counted from the end.
fn kth_from_end(node: Option<NonNull<Node>>, k: usize) -> (Option<i32>, usize) {
    let Some(node) = node else {
        return (None, 0);
    };
    let (found, position) = kth_from_end(unsafe { node.as_ref().next() }, k);
    let position = position + 1;
    if found.is_none() && position == k {
        return (Some(unsafe { node.as_ref().value() }), position);
    }
    (found, position)
}
