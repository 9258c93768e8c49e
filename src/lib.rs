//! # linkwork
//!
//! Classic singly linked list manipulation algorithms over integer nodes:
//! traversal, insertion, deletion, duplicate removal, k-th to last lookup,
//! stable partitioning, loop detection and list intersection.
//!
//! Nodes are owned by the caller and linked by pointer, so two lists can share
//! a suffix. See [`linked_list::singly`] for the safety contract.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub mod prelude {
    pub use crate::linked_list::singly::{
        error::ListError,
        intersect::{
            merge_point, merge_point_brute_force, merge_point_by_length, merge_point_cycle,
            merge_point_flagged, merge_point_flagged_with, merge_point_two_pointer,
        },
        list::SinglyLinkedList,
        marks::VisitMarks,
        node::Node,
        traits::Link,
    };
}
