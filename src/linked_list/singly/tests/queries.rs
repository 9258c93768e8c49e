extern crate std;

use std::{string::ToString, vec};

use super::{nodes, values};
use crate::linked_list::singly::{error::ListError, list::SinglyLinkedList};

#[test]
fn test_count_matches_count_recursive() {
    for len in [0, 1, 2, 10, 100] {
        let input: std::vec::Vec<i32> = (0..len).collect();
        let mut storage = nodes(&input);
        let list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };
        assert_eq!(list.count(), len as usize);
        assert_eq!(list.count_recursive(), len as usize);
    }
}

#[test]
fn test_kth_to_last_with_len() {
    let mut storage = nodes(&[10, 20, 30, 40]);
    let list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };

    assert_eq!(list.kth_to_last_with_len(1, 4), Ok(40));
    assert_eq!(list.kth_to_last_with_len(2, 4), Ok(30));
    assert_eq!(list.kth_to_last_with_len(4, 4), Ok(10));

    assert_eq!(list.kth_to_last_with_len(0, 4), Err(ListError::OutOfRange { k: 0, len: 4 }));
    assert_eq!(list.kth_to_last_with_len(5, 4), Err(ListError::OutOfRange { k: 5, len: 4 }));
    // A length larger than the real one runs off the end.
    assert_eq!(list.kth_to_last_with_len(1, 9), Err(ListError::OutOfRange { k: 1, len: 9 }));
}

#[test]
fn test_kth_to_last() {
    let mut storage = nodes(&[10, 20, 30, 40]);
    let list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };

    assert_eq!(list.kth_to_last(1), Ok(40));
    assert_eq!(list.kth_to_last(3), Ok(20));
    assert_eq!(list.kth_to_last(4), Ok(10));
    assert_eq!(list.kth_to_last(5), Err(ListError::PositionNotFound { k: 5, len: 4 }));
    assert_eq!(list.kth_to_last(0), Err(ListError::PositionNotFound { k: 0, len: 4 }));
    assert_eq!(
        ListError::PositionNotFound { k: 5, len: 4 }.to_string(),
        "no node is 5 from the end of a list of 4 nodes"
    );

    assert_eq!(SinglyLinkedList::new().kth_to_last(1), Err(ListError::Empty));
}

#[test]
fn test_kth_to_last_recursive() {
    let mut storage = nodes(&[10, 20, 30, 40]);
    let list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };

    assert_eq!(list.kth_to_last_recursive(1), Ok(40));
    assert_eq!(list.kth_to_last_recursive(2), Ok(30));
    assert_eq!(list.kth_to_last_recursive(4), Ok(10));
    assert_eq!(list.kth_to_last_recursive(7), Err(ListError::PositionNotFound { k: 7, len: 4 }));

    assert_eq!(SinglyLinkedList::new().kth_to_last_recursive(1), Err(ListError::Empty));
}

#[test]
fn test_kth_to_last_variants_agree() {
    let input = [3, 1, 4, 1, 5, 9, 2, 6];
    let mut storage = nodes(&input);
    let list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };
    let len = list.count();

    for k in 1..=len {
        let expected = input[len - k];
        assert_eq!(list.kth_to_last_with_len(k, len), Ok(expected));
        assert_eq!(list.kth_to_last(k), Ok(expected));
        assert_eq!(list.kth_to_last_recursive(k), Ok(expected));
    }
}

#[test]
fn test_partition_is_stable() {
    let mut storage = nodes(&[3, 1, 4, 1, 5, 9, 2, 6]);
    let mut list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };

    let head = list.partition(4);
    assert_eq!(head, list.head());
    assert_eq!(values(&list), vec![3, 1, 1, 2, 4, 5, 9, 6]);
    assert_eq!(list.count(), 8);
}

#[test]
fn test_partition_nothing_below_pivot() {
    let mut storage = nodes(&[5, 7, 6]);
    let mut list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };
    let old_head = list.head();

    assert_eq!(list.partition(1), old_head);
    assert_eq!(values(&list), vec![5, 7, 6]);
}

#[test]
fn test_partition_everything_below_pivot() {
    let mut storage = nodes(&[5, 7, 6]);
    let mut list = unsafe { SinglyLinkedList::from_nodes(&mut storage) };

    list.partition(100);
    assert_eq!(values(&list), vec![5, 7, 6]);
    assert!(list.tail().is_some_and(|tail| unsafe { tail.as_ref().is_tail() }));
}

#[test]
fn test_partition_empty() {
    let mut list = SinglyLinkedList::new();
    assert!(list.partition(0).is_none());
    assert!(list.is_empty());
}
