use core::iter::FusedIterator;
use std::iter::Flatten;
use std::vec;

use crate::UnrolledList;

/// An owning iterator over the elements of an UnrolledList.
///
/// This struct is created by UnrolledList::into_iter().
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    delegate: Flatten<vec::IntoIter<Vec<T>>>,
    len: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            delegate: Vec::new().into_iter().flatten(),
            len: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: UnrolledList<T>) -> Self {
        let len = list.len();

        Self {
            delegate: list.chain.into_blocks().into_iter().flatten(),
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next()?;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IntoIter<T> {}
