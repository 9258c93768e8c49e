//! Linked list algorithms.
//!
//! The nodes are stored by the caller and the list only keeps pointers to
//! them. A list never allocates or frees a node, which lets several lists
//! share a common tail and lets algorithms relink nodes freely.
//!
//! # Examples
//!
//! ```
//! use linkwork::linked_list::singly::{list::SinglyLinkedList, node::Node};
//! use core::ptr::NonNull;
//!
//! let mut list = SinglyLinkedList::new();
//! let mut node1 = Node::new(1);
//! let mut node2 = Node::new(2);
//! let mut node3 = Node::new(3);
//!
//! list.append(NonNull::from(&mut node1));
//! list.append(NonNull::from(&mut node2));
//! list.insert_head(NonNull::from(&mut node3));
//!
//! assert_eq!(list.count(), 3);
//! assert_eq!(list.values().collect::<Vec<_>>(), vec![3, 1, 2]);
//!
//! let removed = list.delete_by_value(1).unwrap();
//! assert_eq!(unsafe { removed.as_ref().value() }, 1);
//! assert_eq!(list.values().collect::<Vec<_>>(), vec![3, 2]);
//! ```
pub mod singly;
