use core::ptr::NonNull;

use super::traits::Link;

/// A node in a singly linked list.
///
/// The node is owned by the caller; lists only point at it.
#[derive(Debug, Default)]
pub struct Node {
    value: i32,
    next: Option<NonNull<Node>>,
}

impl Node {
    /// Creates an unlinked node holding `value`.
    pub const fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Returns true if nothing follows this node.
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

/// Follows the `next` pointer of a live node.
#[inline]
pub(super) fn step(node: NonNull<Node>) -> Option<NonNull<Node>> {
    unsafe { node.as_ref().next() }
}

impl Link for Node {
    #[inline]
    fn next(&self) -> Option<NonNull<Node>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.next = next;
    }
}
