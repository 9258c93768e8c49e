use core::ptr::NonNull;

use super::node::Node;

/// A trait for a link in a singly linked list.
///
/// A list is a link whose `next` is its head, so "the previous link" of the
/// first node is the list itself and unlinking never needs a special case.
pub trait Link {
    /// Get the next pointer
    fn next(&self) -> Option<NonNull<Node>>;

    /// Set the next pointer
    fn set_next(&mut self, next: Option<NonNull<Node>>);

    /// Unlink the node following this link and return it.
    ///
    /// The detached node keeps its own `next` pointer untouched.
    ///
    /// # Safety
    ///
    /// The next node, if any, must be alive.
    unsafe fn unlink_next(&mut self) -> Option<NonNull<Node>> {
        let next = self.next()?;
        let after = unsafe { next.as_ref().next() };
        self.set_next(after);
        Some(next)
    }

    /// Link `node` right after this link, keeping the rest of the chain behind it.
    ///
    /// # Safety
    ///
    /// `node` must be alive and not already reachable from this link.
    unsafe fn link_after(&mut self, mut node: NonNull<Node>) {
        unsafe { node.as_mut().set_next(self.next()) };
        self.set_next(Some(node));
    }
}
