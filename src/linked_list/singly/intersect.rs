//! Finding the merge point of two lists.
//!
//! Two lists intersect when, from some node onward, they walk the very same
//! nodes. The merge point is the first of those shared nodes. Nodes are
//! compared by identity, never by value.
//!
//! | Algorithm | Time | Extra space | Touches the lists |
//! |---|---|---|---|
//! | [`merge_point_brute_force`] | O(n·m) | O(1) | no |
//! | [`merge_point_by_length`] | O(n+m) | O(1) | no |
//! | [`merge_point_flagged`] | O(n+m) | O(n) marks | no |
//! | [`merge_point_cycle`] | O(n+m) | O(1) | loops `list1`, then restores it |
//! | [`merge_point_two_pointer`] | O(n+m) | O(1) | no |
//!
//! All of them return [`ListError::Disjoint`] when the lists never meet.

use core::{hash::BuildHasher, ptr::NonNull};

use tracing::trace;

use super::{
    cycle::{CycleGuard, cycle_entry},
    error::{ListError, Result},
    list::SinglyLinkedList,
    marks::VisitMarks,
    node::{Node, step},
};

/// The default merge point search, [`merge_point_by_length`].
#[inline]
pub fn merge_point(list1: &SinglyLinkedList, list2: &SinglyLinkedList) -> Result<NonNull<Node>> {
    merge_point_by_length(list1, list2)
}

/// For every node of `list1`, scans the whole of `list2`.
pub fn merge_point_brute_force(
    list1: &SinglyLinkedList,
    list2: &SinglyLinkedList,
) -> Result<NonNull<Node>> {
    let mut runner1 = list1.head();
    while let Some(node1) = runner1 {
        let mut runner2 = list2.head();
        while let Some(node2) = runner2 {
            if node1 == node2 {
                trace!("brute force found the merge point");
                return Ok(node1);
            }
            runner2 = step(node2);
        }
        runner1 = step(node1);
    }
    Err(ListError::Disjoint)
}

/// Skips the extra prefix of the longer list, then walks both in lockstep.
///
/// Neither list is modified; only the cursors are moved.
pub fn merge_point_by_length(
    list1: &SinglyLinkedList,
    list2: &SinglyLinkedList,
) -> Result<NonNull<Node>> {
    let len1 = list1.count();
    let len2 = list2.count();
    trace!(len1, len2, "aligning lists by length");

    let mut runner1 = list1.head();
    let mut runner2 = list2.head();
    if len1 > len2 {
        runner1 = advance(runner1, len1 - len2);
    } else {
        runner2 = advance(runner2, len2 - len1);
    }

    while let (Some(node1), Some(node2)) = (runner1, runner2) {
        if node1 == node2 {
            return Ok(node1);
        }
        runner1 = step(node1);
        runner2 = step(node2);
    }
    Err(ListError::Disjoint)
}

/// Flags every node of `list1`, then returns the first flagged node of `list2`.
pub fn merge_point_flagged(
    list1: &SinglyLinkedList,
    list2: &SinglyLinkedList,
) -> Result<NonNull<Node>> {
    merge_point_flagged_with(list1, list2, &mut VisitMarks::new())
}

/// Like [`merge_point_flagged`], flagging into caller-provided `marks`.
///
/// Marks left over from an earlier run are honoured as-is.
pub fn merge_point_flagged_with<S>(
    list1: &SinglyLinkedList,
    list2: &SinglyLinkedList,
    marks: &mut VisitMarks<S>,
) -> Result<NonNull<Node>>
where
    S: BuildHasher,
{
    unsafe {
        for node in list1.iter() {
            marks.mark(node);
        }
        list2
            .iter()
            .find(|&node| marks.is_marked(node))
            .ok_or(ListError::Disjoint)
    }
}

/// Loops `list1` back onto itself and looks for where the walk from the head
/// of `list2` enters that loop.
///
/// `list1` is reopened before returning, whatever the outcome.
pub fn merge_point_cycle(
    list1: &mut SinglyLinkedList,
    list2: &SinglyLinkedList,
) -> Result<NonNull<Node>> {
    let start = list2.head();
    let guard = CycleGuard::close(list1).ok_or(ListError::Disjoint)?;
    trace!("searching loop entry from the second list");
    let entry = cycle_entry(start);
    drop(guard);
    entry.ok_or(ListError::Disjoint)
}

/// Two cursors that jump to the other list's head when they run out.
///
/// Both cover `n + m` nodes and meet on the merge point, or both run out
/// together when there is none.
pub fn merge_point_two_pointer(
    list1: &SinglyLinkedList,
    list2: &SinglyLinkedList,
) -> Result<NonNull<Node>> {
    let head1 = list1.head().ok_or(ListError::Disjoint)?;
    let head2 = list2.head().ok_or(ListError::Disjoint)?;

    let mut runner1 = Some(head1);
    let mut runner2 = Some(head2);
    while runner1 != runner2 {
        runner1 = match runner1 {
            Some(node) => step(node),
            None => Some(head2),
        };
        runner2 = match runner2 {
            Some(node) => step(node),
            None => Some(head1),
        };
    }
    runner1.ok_or(ListError::Disjoint)
}

fn advance(mut cursor: Option<NonNull<Node>>, steps: usize) -> Option<NonNull<Node>> {
    for _ in 0..steps {
        cursor = cursor.and_then(step);
    }
    cursor
}
