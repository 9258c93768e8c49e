//! Loop detection, and the scoped cycle used by
//! [`merge_point_cycle`](super::intersect::merge_point_cycle).

use core::{hash::BuildHasher, marker::PhantomData, ptr::NonNull};

use hashbrown::HashSet;
use tracing::debug;

use super::{
    list::SinglyLinkedList,
    marks::VisitMarks,
    node::{Node, step},
    traits::Link,
};

impl SinglyLinkedList {
    /// Detects a loop by remembering every node identity seen. O(n) time and space.
    pub fn contains_loop(&self) -> bool {
        let mut seen = HashSet::new();
        let mut current = self.head();
        while let Some(node) = current {
            if !seen.insert(node) {
                return true;
            }
            current = step(node);
        }
        false
    }

    /// Detects a loop by flagging nodes as visited, using fresh marks.
    pub fn contains_loop_flagged(&self) -> bool {
        self.contains_loop_flagged_with(&mut VisitMarks::new())
    }

    /// Detects a loop by flagging nodes in `marks`.
    ///
    /// The marks stay set afterwards. A node already marked by an earlier,
    /// unrelated run counts as visited, so reusing `marks` without
    /// [`VisitMarks::clear`] can report a loop that does not exist.
    pub fn contains_loop_flagged_with<S>(&self, marks: &mut VisitMarks<S>) -> bool
    where
        S: BuildHasher,
    {
        let mut current = self.head();
        while let Some(node) = current {
            if !marks.mark(node) {
                return true;
            }
            current = step(node);
        }
        false
    }

    /// Tortoise and hare. O(n) time, O(1) space.
    pub fn contains_loop_floyd(&self) -> bool {
        let mut slow = self.head();
        let mut fast = self.head();
        while let Some(hare) = fast {
            let Some(hare) = step(hare) else {
                return false;
            };
            fast = step(hare);
            slow = slow.and_then(step);
            if fast.is_some() && slow == fast {
                return true;
            }
        }
        false
    }

    /// The first node of the loop, if the list has one.
    pub fn loop_start(&self) -> Option<NonNull<Node>> {
        cycle_entry(self.head())
    }
}

/// Floyd's cycle entry search starting at `start`.
///
/// Returns `None` when the walk from `start` reaches an end.
pub(super) fn cycle_entry(start: Option<NonNull<Node>>) -> Option<NonNull<Node>> {
    let start = start?;
    let mut slow = start;
    let mut fast = start;
    loop {
        fast = step(step(fast)?)?;
        slow = step(slow)?;
        if slow == fast {
            break;
        }
    }

    let mut from_start = start;
    while from_start != slow {
        from_start = step(from_start)?;
        slow = step(slow)?;
    }
    Some(from_start)
}

/// Links the tail of a list back to its head for as long as the guard lives.
///
/// The list stays mutably borrowed, so nothing can walk it as if it were
/// acyclic. Dropping the guard cuts the loop again, on every exit path.
pub struct CycleGuard<'a> {
    head: NonNull<Node>,
    tail: NonNull<Node>,
    _list: PhantomData<&'a mut SinglyLinkedList>,
}

impl<'a> CycleGuard<'a> {
    /// Closes `list` into a loop. Returns `None` for an empty list.
    pub fn close(list: &'a mut SinglyLinkedList) -> Option<Self> {
        let head = list.head()?;
        let mut tail = list.tail()?;
        unsafe { tail.as_mut().set_next(Some(head)) };
        debug!("closed list into a loop");
        Some(CycleGuard {
            head,
            tail,
            _list: PhantomData,
        })
    }

    /// The head of the looped list.
    pub fn head(&self) -> NonNull<Node> {
        self.head
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        unsafe { self.tail.as_mut().set_next(None) };
        debug!("reopened looped list");
    }
}
