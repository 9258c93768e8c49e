use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::SinglyLinkedList, node::Node, traits::Link};

/// An iterator over the nodes of a list.
pub struct NodeIter<'a> {
    current: Option<NonNull<Node>>,
    _list: PhantomData<&'a SinglyLinkedList>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new iterator over the given list.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the list is not modified while the iterator is alive.
    pub unsafe fn new(list: &'a SinglyLinkedList) -> Self {
        Self {
            current: list.head(),
            _list: PhantomData,
        }
    }
}

impl Iterator for NodeIter<'_> {
    type Item = NonNull<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

impl FusedIterator for NodeIter<'_> {}

/// A lazy head-to-tail walk over the values of a list.
///
/// Created by [`SinglyLinkedList::values`]. Every call to `values` starts over
/// from the current head.
pub struct Values<'a> {
    nodes: NodeIter<'a>,
}

impl<'a> Values<'a> {
    pub(super) fn new(list: &'a SinglyLinkedList) -> Self {
        Self {
            nodes: unsafe { NodeIter::new(list) },
        }
    }
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.nodes
            .next()
            .map(|node| unsafe { node.as_ref().value() })
    }
}

impl FusedIterator for Values<'_> {}
