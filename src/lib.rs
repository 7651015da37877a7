//! # unrolled_list
//!
//! `unrolled_list` implements an **unrolled linked list**: an ordered sequence stored as a
//! doubly-linked chain of fixed-capacity blocks instead of one element per link node.
//!
//! ## Features
//! - Ordered sequence with index based access, insertion and removal anywhere.
//! - Chunked storage, which improves cache locality and reduces
//!   pointer overhead compared to traditional linked lists.
//! - Index resolution walks from whichever end of the chain is closer.
//! - Full blocks are split in half on insertion, and adjacent blocks that fit
//!   in one are merged back on removal.
//! - A fail-fast [`ListIter`] that detects structural modifications made
//!   behind its back.
//!
//! ## Example
//! ```rust
//! use unrolled_list::UnrolledList;
//!
//! let mut list = UnrolledList::with_node_capacity(8).unwrap();
//! list.extend(0..100);
//!
//! assert_eq!(list.get(50), Ok(&50));
//! assert_eq!(list.remove(20), Ok(20));
//! assert_eq!(list.get(20), Ok(&21));
//!
//! list.insert(0, -1).unwrap();
//! assert_eq!(list.front(), Some(&-1));
//! assert_eq!(list.index_of(&99), Some(99));
//! ```

mod chain;
mod config;
mod error;
mod into_iter;
mod iter;
mod list_iter;
mod node;

pub use config::{Config, DEFAULT_NODE_CAPACITY, MIN_NODE_CAPACITY};
pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use list_iter::ListIter;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, RangeBounds};
use std::sync::atomic::{self, AtomicU64};

use log::debug;

use crate::chain::Chain;
use crate::node::NodeId;

/// A sequence stored as a doubly-linked chain of fixed-capacity blocks.
///
/// # Features
/// - **Chunked Storage**: Each block holds up to `node_capacity` elements, reducing the
///   overhead of individual allocations compared to a traditional linked list.
/// - **Flexible Operations**: Index based lookups and insertions, deletions, and access
///   at arbitrary positions without shifting the whole sequence.
///
/// The list is not internally synchronized. Callers sharing it between threads must
/// serialize access themselves.
///
/// # Example
/// ```rust
/// use unrolled_list::UnrolledList;
///
/// let mut list = UnrolledList::new();
/// list.push_back(3);
/// list.push_front(1);
/// list.insert(1, 2).unwrap();
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_front(), Some(2));
/// assert_eq!(list.pop_front(), Some(3));
/// ```
pub struct UnrolledList<T> {
    chain: Chain<T>,
    len: usize,
    modifications: u64,
    instance: u64,
}

/// Counter for unique list instance ids.
static LIST_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Allocates an id no other list in this process has been given.
fn next_instance() -> u64 {
    LIST_INSTANCE_COUNTER.fetch_add(1, atomic::Ordering::Relaxed)
}

/// A block and an offset inside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) node: NodeId,
    pub(crate) offset: usize,
}

impl<T, const M: usize> From<[T; M]> for UnrolledList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for UnrolledList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for UnrolledList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> Extend<&'a T> for UnrolledList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for UnrolledList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnrolledList<T> {
    /// Creates a new, empty `UnrolledList` whose blocks hold
    /// [`DEFAULT_NODE_CAPACITY`] elements.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{UnrolledList, DEFAULT_NODE_CAPACITY};
    ///
    /// let list: UnrolledList<i64> = UnrolledList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.node_capacity(), DEFAULT_NODE_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::from_capacity(DEFAULT_NODE_CAPACITY)
    }

    /// Creates a new, empty `UnrolledList` whose blocks hold `node_capacity` elements.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNodeCapacity`] if `node_capacity` is below
    /// [`MIN_NODE_CAPACITY`].
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// assert!(UnrolledList::<i64>::with_node_capacity(8).is_ok());
    /// assert_eq!(
    ///     UnrolledList::<i64>::with_node_capacity(4).err(),
    ///     Some(Error::InvalidNodeCapacity { capacity: 4, min: 8 })
    /// );
    /// ```
    pub fn with_node_capacity(node_capacity: usize) -> Result<Self> {
        Self::with_config(Config::new().with_node_capacity(node_capacity))
    }

    /// Creates a new, empty `UnrolledList` from a validated [`Config`].
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        debug!(
            "creating unrolled list with node capacity {}",
            config.node_capacity()
        );
        Ok(Self::from_capacity(config.node_capacity()))
    }

    fn from_capacity(node_capacity: usize) -> Self {
        Self {
            chain: Chain::new(node_capacity),
            len: 0,
            modifications: 0,
            instance: next_instance(),
        }
    }

    /// Returns the maximum number of elements a single block can hold.
    #[inline]
    pub const fn node_capacity(&self) -> usize {
        self.chain.capacity()
    }

    /// Returns the number of elements currently stored in the `UnrolledList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `UnrolledList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let list = UnrolledList::from([10, 20]);
    ///
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        let Position { node, offset } = self.resolve(index);
        Ok(&self.chain[node].as_slice()[offset])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2, 3]);
    /// *list.get_mut(1).unwrap() *= 10;
    ///
    /// assert_eq!(list, [1, 20, 3]);
    /// assert!(list.get_mut(3).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let Position { node, offset } = self.resolve(index);
        Ok(&mut self.chain[node].as_mut_slice()[offset])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// This is not a structural modification: live list iterators stay valid.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Returns a reference to the first element, if any.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.chain[self.chain.head()].as_slice().first()
    }

    /// Returns a mutable reference to the first element, if any.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2]);
    /// if let Some(first) = list.front_mut() {
    ///     *first = 5;
    /// }
    ///
    /// assert_eq!(list, [5, 2]);
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.chain.head();
        self.chain[head].as_mut_slice().first_mut()
    }

    /// Returns a reference to the last element, if any.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.chain[self.chain.tail()].as_slice().last()
    }

    /// Returns a mutable reference to the last element, if any.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2]);
    /// if let Some(last) = list.back_mut() {
    ///     *last = 5;
    /// }
    ///
    /// assert_eq!(list, [1, 5]);
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.chain.tail();
        self.chain[tail].as_mut_slice().last_mut()
    }

    /// Appends an element to the tail block, splitting it first if it is full.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list, [10, 20]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = self.chain.tail();
        let offset = self.chain[node].len();
        self.insert_into_block(Position { node, offset }, value);
    }

    /// Prepends an element to the head block, splitting it first if it is full.
    pub fn push_front(&mut self, value: T) {
        let node = self.chain.head();
        self.insert_into_block(Position { node, offset: 0 }, value);
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index > len`; the list is left untouched.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([10, 30]);
    /// list.insert(1, 20).unwrap();
    /// list.insert(3, 40).unwrap();
    ///
    /// assert_eq!(list, [10, 20, 30, 40]);
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_position(index)?;
        let position = self.resolve(index);
        self.insert_into_block(position, value);
        Ok(())
    }

    /// Inserts every element of `values` starting at `index`, preserving their order.
    ///
    /// Returns whether the list changed.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index > len`; nothing is inserted.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([0, 4]);
    /// assert_eq!(list.insert_all(1, [1, 2, 3]), Ok(true));
    /// assert_eq!(list, [0, 1, 2, 3, 4]);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<bool> {
        self.check_position(index)?;

        let before = self.len;
        let mut position = self.resolve(index);
        for value in values {
            let at = self.insert_into_block(position, value);
            position = Position {
                node: at.node,
                offset: at.offset + 1,
            };
        }

        Ok(self.len != before)
    }

    /// Appends every element of `values`, preserving their order.
    ///
    /// Returns whether the list changed.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> bool {
        let before = self.len;
        self.extend(values);
        self.len != before
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`; the list is left untouched.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([10, 20, 30, 40, 50]);
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list.get(1), Ok(&30));
    /// assert_eq!(list.len(), 4);
    /// assert!(list.remove(10).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let position = self.resolve(index);
        Ok(self.remove_from_block(position).0)
    }

    /// Removes and returns the first element, if any.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2]);
    ///
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let node = self.chain.head();
        Some(self.remove_from_block(Position { node, offset: 0 }).0)
    }

    /// Removes and returns the last element, if any.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2]);
    ///
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let node = self.chain.tail();
        let offset = self.chain[node].len() - 1;
        Some(self.remove_from_block(Position { node, offset }).0)
    }

    /// Removes the first element equal to `value`, scanning from the front.
    ///
    /// Returns whether an element was removed.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([Some(1), None, Some(2), None]);
    ///
    /// assert!(list.remove_item(&None));
    /// assert_eq!(list, [Some(1), Some(2), None]);
    /// assert!(!list.remove_item(&Some(3)));
    /// ```
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = Some(self.chain.head());

        while let Some(node) = cursor {
            let block = &self.chain[node];
            if let Some(offset) = block.as_slice().iter().position(|item| item == value) {
                self.remove_from_block(Position { node, offset });
                return true;
            }

            cursor = block.next();
        }

        false
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::from([7, 8, 7]);
    ///
    /// assert_eq!(list.index_of(&7), Some(0));
    /// assert_eq!(list.index_of(&9), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::from([7, 8, 7]);
    ///
    /// assert_eq!(list.last_index_of(&7), Some(2));
    /// assert_eq!(list.last_index_of(&9), None);
    /// ```
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == value)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns `true` if the list contains every element of `values`.
    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        values.iter().all(|value| self.contains(value))
    }

    /// Removes every element that is contained in `values`.
    ///
    /// Returns whether the list changed.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2, 3, 2, 1]);
    ///
    /// assert!(list.remove_all(&[2, 5]));
    /// assert_eq!(list, [1, 3, 1]);
    /// assert!(!list.remove_all(&[7]));
    /// ```
    pub fn remove_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        let before = self.len;
        self.retain(|item| !values.contains(item));
        self.len != before
    }

    /// Removes every element that is not contained in `values`.
    ///
    /// Returns whether the list changed.
    pub fn retain_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        let before = self.len;
        self.retain(|item| values.contains(item));
        self.len != before
    }

    /// Retains only the elements for which `keep` returns `true`, visiting them in order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = Position {
            node: self.chain.head(),
            offset: 0,
        };

        loop {
            let block = &self.chain[cursor.node];
            if cursor.offset >= block.len() {
                match block.next() {
                    Some(next) => {
                        cursor = Position {
                            node: next,
                            offset: 0,
                        };
                        continue;
                    }
                    None => break,
                }
            }

            if keep(&block.as_slice()[cursor.offset]) {
                cursor.offset += 1;
            } else {
                cursor = self.remove_from_block(cursor).1;
            }
        }
    }

    /// Removes all elements from the `UnrolledList`, releasing every block but one.
    ///
    /// # Example
    /// ```rust
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        let released = self.chain.clear();
        self.len = 0;
        self.modifications = self.modifications.wrapping_add(1);
        debug!("cleared unrolled list, released {released} blocks");
    }

    /// Copies the elements into a new `Vec`, in order.
    ///
    /// The snapshot does not alias the list's storage.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// Range views are not supported by this container.
    ///
    /// # Errors
    /// Always returns [`Error::Unsupported`].
    pub fn sub_list<R: RangeBounds<usize>>(&self, _range: R) -> Result<Self> {
        Err(Error::Unsupported("sub_list"))
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a fail-fast list iterator positioned before the first element.
    ///
    /// # Examples
    /// ```
    /// use unrolled_list::{Error, UnrolledList};
    ///
    /// let mut list = UnrolledList::from([1, 2, 3]);
    /// let mut iter = list.list_iter();
    ///
    /// assert_eq!(iter.next(&list), Ok(&1));
    /// list.push_back(4);
    /// assert_eq!(iter.next(&list), Err(Error::ConcurrentModification));
    /// ```
    pub fn list_iter(&self) -> ListIter {
        let position = Position {
            node: self.chain.head(),
            offset: 0,
        };
        ListIter::new(self, position, 0)
    }

    /// Provides a fail-fast list iterator whose first `next` returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `index > len`.
    pub fn list_iter_at(&self, index: usize) -> Result<ListIter> {
        self.check_position(index)?;
        Ok(ListIter::new(self, self.resolve(index), index))
    }

    /// Finds the block owning `index`, walking from the closer end of the chain.
    ///
    /// `index` must be in `[0, len]`; `len` resolves to the end of the tail block.
    fn resolve(&self, index: usize) -> Position {
        debug_assert!(index <= self.len);

        if self.len - index > index {
            let mut node = self.chain.head();
            let mut start = 0;

            loop {
                let block = &self.chain[node];
                match block.next() {
                    Some(next) if start + block.len() <= index => {
                        start += block.len();
                        node = next;
                    }
                    _ => break,
                }
            }

            return Position {
                node,
                offset: index - start,
            };
        }

        let mut node = self.chain.tail();
        let mut start = self.len - self.chain[node].len();

        while start > index {
            let Some(prev) = self.chain[node].prev() else {
                break;
            };

            node = prev;
            start -= self.chain[node].len();
        }

        Position {
            node,
            offset: index - start,
        }
    }

    /// Inserts `value` at `position`, splitting the block first when it is full.
    ///
    /// Returns where the value ended up.
    pub(crate) fn insert_into_block(&mut self, position: Position, value: T) -> Position {
        let Position { node, offset } = position;

        let target = if self.chain[node].len() < self.node_capacity() {
            position
        } else {
            let sibling = self.chain.split(node);
            let retained = self.chain[node].len();

            if offset <= retained {
                position
            } else {
                Position {
                    node: sibling,
                    offset: offset - retained,
                }
            }
        };

        self.chain[target.node].insert(target.offset, value);
        self.len += 1;
        self.modifications = self.modifications.wrapping_add(1);
        target
    }

    /// Removes the element at `position`, then merges at most one pair of neighbouring
    /// blocks: the following block into this one if they fit, otherwise this one into the
    /// preceding block.
    ///
    /// Returns the removed value and the position now holding its successor.
    pub(crate) fn remove_from_block(&mut self, position: Position) -> (T, Position) {
        let Position { node, offset } = position;
        let capacity = self.node_capacity();

        let value = self.chain[node].remove(offset);
        self.len -= 1;
        self.modifications = self.modifications.wrapping_add(1);

        let count = self.chain[node].len();
        let (next, prev) = (self.chain[node].next(), self.chain[node].prev());

        let successor = match (next, prev) {
            (Some(next), _) if self.chain[next].len() + count <= capacity => {
                self.chain.merge(node, next);
                position
            }
            (_, Some(prev)) if self.chain[prev].len() + count <= capacity => {
                let base = self.chain[prev].len();
                self.chain.merge(prev, node);
                Position {
                    node: prev,
                    offset: base + offset,
                }
            }
            _ => position,
        };

        (value, successor)
    }

    fn blocks(&self) -> impl Iterator<Item = &[T]> {
        std::iter::successors(Some(self.chain.head()), |&id| self.chain[id].next())
            .map(|id| self.chain[id].as_slice())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok(())
    }

    fn check_position(&self, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        Ok(())
    }
}

impl<T> Index<usize> for UnrolledList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for UnrolledList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Clone> Clone for UnrolledList<T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
            len: self.len,
            modifications: 0,
            instance: next_instance(),
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for UnrolledList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for UnrolledList<T> where T: Eq {}

impl<T> PartialOrd for UnrolledList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for UnrolledList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for UnrolledList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for UnrolledList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.blocks()).finish()
    }
}

impl<T> IntoIterator for UnrolledList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a UnrolledList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
