use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::{Position, UnrolledList};

/// A bidirectional, fail-fast iterator over an UnrolledList.
///
/// A `ListIter` is a detached cursor: it does not borrow the list between steps, and every
/// step takes the list that created it. The cursor always rests between two elements; its
/// index is the index of the element the next call to [`ListIter::next`] would return.
///
/// On creation the iterator records the list's structural modification count. Inserting
/// or removing elements through the list itself (rather than through this iterator)
/// invalidates it, and every later step fails with [`Error::ConcurrentModification`].
/// Replacing elements in place does not. Handing the iterator a list other than the one
/// that created it, clones included, fails the same way.
///
/// # Example
/// ```rust
/// use unrolled_list::{Error, UnrolledList};
///
/// let mut list = UnrolledList::from([1, 2, 3]);
/// let mut iter = list.list_iter();
///
/// while iter.has_next(&list) {
///     if *iter.next(&list)? % 2 == 0 {
///         iter.remove(&mut list)?;
///     }
/// }
///
/// assert_eq!(list, [1, 3]);
/// assert_eq!(iter.next(&list), Err(Error::NoSuchElement));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ListIter {
    node: NodeId,
    offset: usize,
    index: usize,
    instance: u64,
    expected_modifications: u64,
    last: Option<Returned>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Where the element last handed out by `next` or `previous` lives.
#[derive(Debug, Clone, Copy)]
struct Returned {
    position: Position,
    direction: Direction,
}

impl ListIter {
    pub(crate) fn new<T>(list: &UnrolledList<T>, position: Position, index: usize) -> Self {
        Self {
            node: position.node,
            offset: position.offset,
            index,
            instance: list.instance,
            expected_modifications: list.modifications,
            last: None,
        }
    }

    #[inline]
    pub fn has_next<T>(&self, list: &UnrolledList<T>) -> bool {
        self.index < list.len()
    }

    /// Only the cursor is consulted; the list is taken to mirror [`ListIter::has_next`].
    #[inline]
    pub fn has_previous<T>(&self, _list: &UnrolledList<T>) -> bool {
        self.index > 0
    }

    /// Index of the element a subsequent `next` would return.
    #[inline]
    pub const fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the element a subsequent `previous` would return, if any.
    #[inline]
    pub const fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Returns the next element and advances the cursor.
    ///
    /// # Errors
    /// - [`Error::ConcurrentModification`] if the list was structurally modified
    ///   outside of this iterator.
    /// - [`Error::NoSuchElement`] if the cursor is already past the last element.
    pub fn next<'a, T>(&mut self, list: &'a UnrolledList<T>) -> Result<&'a T> {
        self.check_for_modification(list)?;
        if self.index >= list.len() {
            return Err(Error::NoSuchElement);
        }

        let chain = &list.chain;
        while self.offset >= chain[self.node].len() {
            let Some(next) = chain[self.node].next() else {
                return Err(Error::NoSuchElement);
            };

            self.node = next;
            self.offset = 0;
        }

        let position = Position {
            node: self.node,
            offset: self.offset,
        };
        self.offset += 1;
        self.index += 1;
        self.last = Some(Returned {
            position,
            direction: Direction::Forward,
        });

        Ok(&chain[position.node].as_slice()[position.offset])
    }

    /// Returns the previous element and moves the cursor back.
    ///
    /// # Errors
    /// - [`Error::ConcurrentModification`] if the list was structurally modified
    ///   outside of this iterator.
    /// - [`Error::NoSuchElement`] if the cursor is already before the first element.
    pub fn previous<'a, T>(&mut self, list: &'a UnrolledList<T>) -> Result<&'a T> {
        self.check_for_modification(list)?;
        if self.index == 0 {
            return Err(Error::NoSuchElement);
        }

        let chain = &list.chain;
        while self.offset == 0 {
            let Some(prev) = chain[self.node].prev() else {
                return Err(Error::NoSuchElement);
            };

            self.node = prev;
            self.offset = chain[prev].len();
        }

        self.offset -= 1;
        self.index -= 1;
        let position = Position {
            node: self.node,
            offset: self.offset,
        };
        self.last = Some(Returned {
            position,
            direction: Direction::Backward,
        });

        Ok(&chain[position.node].as_slice()[position.offset])
    }

    /// Removes the element last returned by `next` or `previous`.
    ///
    /// # Errors
    /// - [`Error::ConcurrentModification`] if the list was structurally modified
    ///   outside of this iterator.
    /// - [`Error::NoCurrentElement`] if nothing was returned since the cursor was created
    ///   or last modified the list.
    pub fn remove<T>(&mut self, list: &mut UnrolledList<T>) -> Result<T> {
        self.check_for_modification(list)?;
        let returned = self.last.take().ok_or(Error::NoCurrentElement)?;

        let (value, successor) = list.remove_from_block(returned.position);
        if returned.direction == Direction::Forward {
            self.index -= 1;
        }

        self.node = successor.node;
        self.offset = successor.offset;
        self.expected_modifications = list.modifications;

        Ok(value)
    }

    /// Replaces the element last returned by `next` or `previous`, returning the old one.
    ///
    /// # Errors
    /// - [`Error::ConcurrentModification`] if the list was structurally modified
    ///   outside of this iterator.
    /// - [`Error::NoCurrentElement`] if there is no element to replace.
    pub fn set<T>(&mut self, list: &mut UnrolledList<T>, value: T) -> Result<T> {
        self.check_for_modification(list)?;
        let Returned { position, .. } = self.last.ok_or(Error::NoCurrentElement)?;

        let slot = &mut list.chain[position.node].as_mut_slice()[position.offset];
        Ok(std::mem::replace(slot, value))
    }

    /// Inserts `value` at the cursor, right after the element last returned by `next`.
    ///
    /// A subsequent `next` is unaffected; a subsequent `previous` returns the new element.
    ///
    /// # Errors
    /// Returns [`Error::ConcurrentModification`] if the list was structurally modified
    /// outside of this iterator.
    pub fn add<T>(&mut self, list: &mut UnrolledList<T>, value: T) -> Result<()> {
        self.check_for_modification(list)?;

        let cursor = Position {
            node: self.node,
            offset: self.offset,
        };
        let at = list.insert_into_block(cursor, value);

        self.node = at.node;
        self.offset = at.offset + 1;
        self.index += 1;
        self.last = None;
        self.expected_modifications = list.modifications;

        Ok(())
    }

    fn check_for_modification<T>(&self, list: &UnrolledList<T>) -> Result<()> {
        if list.instance != self.instance || list.modifications != self.expected_modifications {
            return Err(Error::ConcurrentModification);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{Error, UnrolledList};

    fn numbers(len: i32) -> UnrolledList<i32> {
        let mut list = UnrolledList::with_node_capacity(8).unwrap();
        list.extend(0..len);
        list
    }

    #[test]
    fn test_forward_then_backward_traversal() {
        let list = numbers(100);
        let mut sut = list.list_iter();

        let mut forward = Vec::new();
        while sut.has_next(&list) {
            forward.push(*sut.next(&list).unwrap());
        }
        assert_eq!(forward, (0..100).collect::<Vec<_>>());
        assert_eq!(sut.next(&list), Err(Error::NoSuchElement));

        let mut backward = Vec::new();
        while sut.has_previous(&list) {
            backward.push(*sut.previous(&list).unwrap());
        }
        assert_eq!(backward, (0..100).rev().collect::<Vec<_>>());
        assert_eq!(sut.previous(&list), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_iterating_an_empty_list_fails_with_no_such_element() {
        let list: UnrolledList<i32> = UnrolledList::new();
        let mut sut = list.list_iter();

        assert!(!sut.has_next(&list));
        assert!(!sut.has_previous(&list));
        assert_eq!(sut.next(&list), Err(Error::NoSuchElement));
        assert_eq!(sut.previous(&list), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_list_iter_at_starts_at_the_requested_index() {
        let list = numbers(100);

        for start in [0, 1, 7, 8, 27, 50, 99] {
            let mut sut = list.list_iter_at(start).unwrap();
            assert_eq!(sut.next_index(), start);
            assert_eq!(sut.next(&list), Ok(&(start as i32)));
        }

        let mut sut = list.list_iter_at(100).unwrap();
        assert!(!sut.has_next(&list));
        assert_eq!(sut.previous(&list), Ok(&99));

        let mut sut = list.list_iter_at(27).unwrap();
        assert_eq!(sut.previous_index(), Some(26));
        assert_eq!(sut.previous(&list), Ok(&26));

        assert_eq!(
            list.list_iter_at(101).err(),
            Some(Error::IndexOutOfBounds {
                index: 101,
                len: 100
            })
        );
    }

    #[test]
    fn test_direct_insert_invalidates_the_iterator() {
        let mut list = numbers(10);
        let mut sut = list.list_iter();

        list.insert(0, -1).unwrap();
        assert_eq!(sut.next(&list), Err(Error::ConcurrentModification));
        assert_eq!(sut.previous(&list), Err(Error::ConcurrentModification));
        assert_eq!(sut.add(&mut list, 5), Err(Error::ConcurrentModification));
        assert_eq!(list.len(), 11);
    }

    #[test]
    fn test_direct_remove_and_clear_invalidate_the_iterator() {
        let mut list = numbers(10);

        let mut sut = list.list_iter();
        assert_eq!(sut.next(&list), Ok(&0));
        list.remove(5).unwrap();
        assert_eq!(sut.remove(&mut list), Err(Error::ConcurrentModification));
        assert_eq!(sut.set(&mut list, 42), Err(Error::ConcurrentModification));

        let mut sut = list.list_iter();
        list.clear();
        assert_eq!(sut.next(&list), Err(Error::ConcurrentModification));
    }

    #[test]
    fn test_iterator_rejects_a_list_it_was_not_created_from() {
        let big = numbers(100);
        let copy = big.clone();
        let mut empty: UnrolledList<i32> = UnrolledList::new();

        let mut sut = copy.list_iter_at(60).unwrap();
        assert_eq!(sut.previous(&empty), Err(Error::ConcurrentModification));
        assert_eq!(sut.next(&empty), Err(Error::ConcurrentModification));
        assert_eq!(sut.add(&mut empty, 1), Err(Error::ConcurrentModification));
        assert!(empty.is_empty());

        let mut sut = big.list_iter();
        assert_eq!(sut.next(&copy), Err(Error::ConcurrentModification));
        assert_eq!(sut.next(&big), Ok(&0));

        let mut other = big.clone();
        assert_eq!(sut.remove(&mut other), Err(Error::ConcurrentModification));
        assert_eq!(sut.set(&mut other, 5), Err(Error::ConcurrentModification));
        assert_eq!(other, copy);
    }

    #[test]
    fn test_direct_set_does_not_invalidate_the_iterator() {
        let mut list = numbers(10);
        let mut sut = list.list_iter();

        list.set(1, 100).unwrap();
        assert_eq!(sut.next(&list), Ok(&0));
        assert_eq!(sut.next(&list), Ok(&100));
    }

    #[test]
    fn test_remove_through_the_iterator_keeps_it_valid() {
        let mut list = numbers(100);
        let mut sut = list.list_iter();

        while sut.has_next(&list) {
            let value = *sut.next(&list).unwrap();
            if value % 3 != 0 {
                assert_eq!(sut.remove(&mut list), Ok(value));
            }
        }

        let expected: Vec<_> = (0..100).filter(|v| v % 3 == 0).collect();
        assert_eq!(list, expected.as_slice());

        let mut backward = Vec::new();
        while sut.has_previous(&list) {
            backward.push(*sut.previous(&list).unwrap());
        }
        assert_eq!(backward, expected.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_while_walking_backward() {
        let mut list = numbers(40);
        let mut sut = list.list_iter_at(40).unwrap();

        while sut.has_previous(&list) {
            let value = *sut.previous(&list).unwrap();
            if value % 2 == 1 {
                assert_eq!(sut.remove(&mut list), Ok(value));
            }
        }

        let expected: Vec<_> = (0..40).filter(|v| v % 2 == 0).collect();
        assert_eq!(list, expected.as_slice());
        assert_eq!(sut.next_index(), 0);
        assert_eq!(sut.next(&list), Ok(&0));
    }

    #[test]
    fn test_remove_and_set_require_a_current_element() {
        let mut list = numbers(10);
        let mut sut = list.list_iter();

        assert_eq!(sut.remove(&mut list), Err(Error::NoCurrentElement));
        assert_eq!(sut.set(&mut list, 1), Err(Error::NoCurrentElement));

        sut.next(&list).unwrap();
        assert_eq!(sut.remove(&mut list), Ok(0));
        assert_eq!(sut.remove(&mut list), Err(Error::NoCurrentElement));

        sut.next(&list).unwrap();
        sut.add(&mut list, 50).unwrap();
        assert_eq!(sut.set(&mut list, 1), Err(Error::NoCurrentElement));
    }

    #[test]
    fn test_set_replaces_the_last_returned_element() {
        let mut list = numbers(20);
        let mut sut = list.list_iter();

        while sut.has_next(&list) {
            let value = *sut.next(&list).unwrap();
            assert_eq!(sut.set(&mut list, value * 10), Ok(value));
        }

        assert_eq!(sut.previous(&list), Ok(&190));
        assert_eq!(sut.set(&mut list, -1), Ok(190));
        assert_eq!(list.back(), Some(&-1));
        assert_eq!(list.get(5), Ok(&50));
    }

    #[test]
    fn test_add_inserts_after_the_last_returned_element() {
        let mut list = numbers(20);
        let mut sut = list.list_iter();

        while sut.has_next(&list) {
            let value = *sut.next(&list).unwrap();
            sut.add(&mut list, value + 1000).unwrap();
        }

        let expected: Vec<_> = (0..20).flat_map(|v| [v, v + 1000]).collect();
        assert_eq!(list, expected.as_slice());
        assert_eq!(sut.next_index(), 40);
        assert_eq!(sut.previous(&list), Ok(&1019));
    }

    #[test]
    fn test_add_at_the_front_then_previous_returns_it() {
        let mut list = numbers(16);
        let mut sut = list.list_iter();

        sut.add(&mut list, -1).unwrap();
        assert_eq!(sut.next_index(), 1);
        assert_eq!(sut.next(&list), Ok(&0));
        assert_eq!(sut.previous(&list), Ok(&0));
        assert_eq!(sut.previous(&list), Ok(&-1));
        assert_eq!(list.front(), Some(&-1));
    }

    #[quickcheck]
    fn test_list_iter_behaves_like_a_vec_cursor(seed: Vec<i32>) {
        let mut expected = seed.clone();
        let mut actual = UnrolledList::with_node_capacity(8).unwrap();
        actual.extend(seed.iter().copied());

        let mut cursor = 0;
        let mut last: Option<usize> = None;
        let mut sut = actual.list_iter();

        for _ in 0..256 {
            match rand::random_range(0..=4) {
                0 => {
                    let result = sut.next(&actual).copied();
                    if cursor < expected.len() {
                        assert_eq!(result, Ok(expected[cursor]));
                        last = Some(cursor);
                        cursor += 1;
                    } else {
                        assert_eq!(result, Err(Error::NoSuchElement));
                    }
                }
                1 => {
                    let result = sut.previous(&actual).copied();
                    if cursor > 0 {
                        cursor -= 1;
                        assert_eq!(result, Ok(expected[cursor]));
                        last = Some(cursor);
                    } else {
                        assert_eq!(result, Err(Error::NoSuchElement));
                    }
                }
                2 => {
                    let result = sut.remove(&mut actual);
                    match last.take() {
                        Some(at) => {
                            assert_eq!(result, Ok(expected.remove(at)));
                            if at < cursor {
                                cursor -= 1;
                            }
                        }
                        None => assert_eq!(result, Err(Error::NoCurrentElement)),
                    }
                }
                3 => {
                    let value = rand::random();
                    let result = sut.set(&mut actual, value);
                    match last {
                        Some(at) => {
                            assert_eq!(result, Ok(expected[at]));
                            expected[at] = value;
                        }
                        None => assert_eq!(result, Err(Error::NoCurrentElement)),
                    }
                }
                4 => {
                    let value = rand::random();
                    assert_eq!(sut.add(&mut actual, value), Ok(()));
                    expected.insert(cursor, value);
                    cursor += 1;
                    last = None;
                }
                _ => unreachable!(),
            }

            assert_eq!(sut.next_index(), cursor);
            assert_eq!(actual, expected.as_slice());
        }
    }
}
