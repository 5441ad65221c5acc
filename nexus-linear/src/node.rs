//! Node layouts of the list family.
//!
//! Sentinel nodes carry `data: None`; every node between the sentinels
//! carries `Some`. The lists never hand out a sentinel's payload.

use crate::NodeRef;

/// Node of a [`ForwardList`](crate::ForwardList).
#[derive(Debug)]
pub(crate) struct ForwardNode<T> {
    pub(crate) data: Option<T>,
    pub(crate) next: NodeRef,
}

impl<T> ForwardNode<T> {
    #[inline]
    pub(crate) fn new(data: T, next: NodeRef) -> Self {
        Self {
            data: Some(data),
            next,
        }
    }

    #[inline]
    pub(crate) fn sentinel(next: NodeRef) -> Self {
        Self { data: None, next }
    }
}

/// Node of a [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// `next` is the ownership order, `prev` is only a back reference.
#[derive(Debug)]
pub(crate) struct BiNode<T> {
    pub(crate) data: Option<T>,
    pub(crate) prev: NodeRef,
    pub(crate) next: NodeRef,
}

impl<T> BiNode<T> {
    #[inline]
    pub(crate) fn new(data: T, prev: NodeRef, next: NodeRef) -> Self {
        Self {
            data: Some(data),
            prev,
            next,
        }
    }

    #[inline]
    pub(crate) fn sentinel() -> Self {
        Self {
            data: None,
            prev: NodeRef::NONE,
            next: NodeRef::NONE,
        }
    }
}

/// Node of a [`StaticList`](crate::StaticList). Links are slot indices;
/// `0` is the nil index.
#[derive(Debug, Clone)]
pub(crate) struct StaticNode<T> {
    pub(crate) data: Option<T>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl<T> StaticNode<T> {
    #[inline]
    pub(crate) fn vacant() -> Self {
        Self {
            data: None,
            prev: 0,
            next: 0,
        }
    }
}
