use thiserror::Error;

/// Errors reported by list operations.
///
/// None of these are fatal: the list is left untouched whenever an error is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("the list is empty")]
    Empty,

    #[error("no node with value {key}")]
    NotFound { key: i32 },

    #[error("position {k} is out of range for a list of {len} nodes")]
    OutOfRange { k: usize, len: usize },

    #[error("no node is {k} from the end of a list of {len} nodes")]
    PositionNotFound { k: usize, len: usize },

    #[error("the node has no successor")]
    TailNode,

    #[error("the anchor node is not part of the list")]
    InvalidAnchor,

    #[error("the lists do not intersect")]
    Disjoint,
}

pub type Result<T> = core::result::Result<T, ListError>;
