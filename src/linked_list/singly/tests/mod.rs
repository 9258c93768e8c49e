use alloc::vec::Vec;

use super::{list::SinglyLinkedList, node::Node};

mod queries;

fn nodes(values: &[i32]) -> Vec<Node> {
    values.iter().copied().map(Node::new).collect()
}

fn values(list: &SinglyLinkedList) -> Vec<i32> {
    list.values().collect()
}
