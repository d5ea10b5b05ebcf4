use crate::node::NodeId;

/// Errors reported by the fallible (`try_`) operations of the lists.
///
/// The panicking counterparts of those operations fail with the `Display`
/// form of the same variant, so a precondition violation reads the same
/// whichever entry point hit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The payload of a sentinel node was requested.
    #[error("empty access: sentinel nodes carry no element")]
    EmptyAccess,
    /// An element or node was required but the list is empty.
    #[error("the list is empty")]
    Empty,
    /// The node was removed from its list (or the list was cleared).
    #[error("{0:?} is no longer linked in this list")]
    StaleNode(NodeId),
    /// The node handle was produced by another list.
    #[error("{0:?} belongs to another list")]
    ForeignNode(NodeId),
    /// The index was produced by another list.
    #[error("the index belongs to another list")]
    ForeignIndex,
    /// A sentinel was used where an element node is required.
    #[error("{0:?} is a sentinel and cannot be used as an element position")]
    SentinelNode(NodeId),
    /// The upper bound of an index range does not follow its lower bound.
    #[error("the upper bound of the range does not follow its lower bound")]
    InvalidRange,
}

impl ListError {
    /// Fails at the call site. Used by the panicking variants of the fallible
    /// operations.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}
