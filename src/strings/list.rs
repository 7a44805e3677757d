/*!
 * String Lists
 * Append-only singly linked list of slices, nodes allocated from an arena
 */

use super::slice::StrSlice;
use crate::memory::{ArenaAlloc, ArenaResult};
use std::cell::Cell;
use std::fmt;

/// One list node, living in the arena
pub struct StrNode<'a> {
    value: Cell<StrSlice<'a>>,
    next: Cell<Option<&'a StrNode<'a>>>,
}

impl<'a> StrNode<'a> {
    #[inline]
    pub fn get(&self) -> StrSlice<'a> {
        self.value.get()
    }

    /// Fill the node after [`StrList::push`]
    #[inline]
    pub fn set(&self, value: StrSlice<'a>) {
        self.value.set(value);
    }

    #[inline]
    pub fn next(&self) -> Option<&'a StrNode<'a>> {
        self.next.get()
    }
}

impl fmt::Debug for StrNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrNode").field(&self.get()).finish()
    }
}

/// Ordered, append-only sequence of slices
///
/// Valid for as long as the arena (or scratch) its nodes came from. There is
/// no removal; the list only grows until the arena is full.
#[derive(Default)]
pub struct StrList<'a> {
    head: Option<&'a StrNode<'a>>,
    tail: Option<&'a StrNode<'a>>,
    len: usize,
}

impl<'a> StrList<'a> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Allocate an empty node after the tail and return it for filling
    pub fn push<A>(&mut self, arena: &'a A) -> ArenaResult<&'a StrNode<'a>>
    where
        A: ArenaAlloc + ?Sized,
    {
        let node: &'a StrNode<'a> = arena.alloc_value(StrNode {
            value: Cell::new(StrSlice::empty()),
            next: Cell::new(None),
        })?;

        match self.tail {
            Some(tail) => tail.next.set(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(node)
    }

    /// Append a filled node
    pub fn push_slice<A>(&mut self, arena: &'a A, value: StrSlice<'a>) -> ArenaResult<&'a StrNode<'a>>
    where
        A: ArenaAlloc + ?Sized,
    {
        let node = self.push(arena)?;
        node.set(value);
        Ok(node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<&'a StrNode<'a>> {
        self.head
    }

    /// Slices in insertion order
    pub fn iter(&self) -> Iter<'a> {
        Iter { node: self.head }
    }
}

impl<'a> IntoIterator for StrList<'a> {
    type Item = StrSlice<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &StrList<'a> {
    type Item = StrSlice<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for StrList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Forward iterator over a [`StrList`]
#[derive(Clone)]
pub struct Iter<'a> {
    node: Option<&'a StrNode<'a>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = StrSlice<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some(node.get())
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
