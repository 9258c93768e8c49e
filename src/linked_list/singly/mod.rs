//! # Singly Linked List
//!
//! A singly linked list of `i32` nodes together with the textbook algorithms
//! that operate on it.
//!
//! ## Core Components
//!
//! - [`traits::Link`]: anything holding a `next` pointer. Both [`node::Node`] and
//!   [`list::SinglyLinkedList`] implement it, the list exposing its head as `next`.
//! - [`list::SinglyLinkedList`]: insertion, deletion, counting, k-th to last, partition.
//! - [`cycle`]: loop detection and the scoped cycle injection used by [`intersect`].
//! - [`intersect`]: five algorithms finding the first node shared by two lists.
//! - [`marks::VisitMarks`]: visited flags owned by a single algorithm invocation.
//!
//! ## Safety
//!
//! Nodes are linked through raw pointers. The user of this module is
//! responsible for upholding several invariants:
//!
//! - Nodes must outlive every list they are linked into.
//! - A node may belong to two lists only as part of a shared tail.
//! - When iterating, the list must not be modified.
//! - Anchor and node arguments must point to live nodes.
//! - Lists handed to any operation other than the loop detectors are acyclic.

pub mod traits;
pub mod node;
pub mod list;
pub mod iter;
pub mod marks;
pub mod cycle;
pub mod intersect;
pub mod error;

#[cfg(test)]
mod tests;
