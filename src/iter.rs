use core::iter::FusedIterator;
use core::slice;

use crate::UnrolledList;
use crate::chain::Chain;
use crate::node::NodeId;

/// An iterator over the elements of an UnrolledList.
///
/// This struct is created by UnrolledList::iter().
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,

    front: slice::Iter<'a, T>,
    front_next: Option<NodeId>,

    back: slice::Iter<'a, T>,
    back_prev: Option<NodeId>,

    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a UnrolledList<T>) -> Self {
        let chain = &list.chain;
        let head = &chain[chain.head()];
        let tail = &chain[chain.tail()];

        Self {
            chain,
            front: head.as_slice().iter(),
            front_next: head.next(),
            back: tail.as_slice().iter(),
            back_prev: tail.prev(),
            len: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain,
            front: self.front.clone(),
            front_next: self.front_next,
            back: self.back.clone(),
            back_prev: self.back_prev,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let chain = self.chain;
        loop {
            if let Some(value) = self.front.next() {
                self.len -= 1;
                return Some(value);
            }

            let node = &chain[self.front_next?];
            self.front = node.as_slice().iter();
            self.front_next = node.next();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let chain = self.chain;
        loop {
            if let Some(value) = self.back.next_back() {
                self.len -= 1;
                return Some(value);
            }

            let node = &chain[self.back_prev?];
            self.back = node.as_slice().iter();
            self.back_prev = node.prev();
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}
