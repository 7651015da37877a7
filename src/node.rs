pub type NodeId = usize;

/// A single block of the chain: a contiguous run of at most `capacity` elements.
///
/// Links are arena indices owned by [`Chain`](crate::chain::Chain).
pub struct Node<T> {
    items: Vec<T>,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            next: None,
            prev: None,
        }
    }

    pub fn from_items(capacity: usize, items: Vec<T>) -> Self {
        let mut this = Self::new(capacity);
        this.items.extend(items);
        this
    }

    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            panic!("Index out of bounds: cannot insert at index {}", index);
        }

        self.items.insert(index, value);
    }

    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len() {
            panic!("Index out of bounds: cannot remove at index {}", index);
        }

        self.items.remove(index)
    }

    /// Moves the elements `[at, len)` out of this block.
    pub fn split_off(&mut self, at: usize) -> Vec<T> {
        self.items.split_off(at)
    }

    /// Appends every element of `other` after the live elements of this block.
    pub fn append(&mut self, other: &mut Node<T>) {
        self.items.append(&mut other.items);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[inline]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub const fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub const fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    #[inline]
    pub fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    #[inline]
    pub fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Node;

    #[test]
    fn node_insert_puts_elements_in_the_correct_positions() {
        let mut sut: Node<i64> = Node::new(8);
        assert_eq!(sut.len(), 0);

        sut.insert(0, 10);
        sut.insert(1, 15);
        sut.insert(0, 5);
        sut.insert(3, 20);
        sut.insert(2, 13);
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 20]);
        assert_eq!(sut.len(), 5);

        let result = std::panic::catch_unwind(move || sut.insert(6, 100));
        assert!(result.is_err());
    }

    #[test]
    fn node_remove_removes_correct_elements() {
        let mut sut = Node::from_items(8, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(sut.len(), 6);

        assert_eq!(sut.remove(2), 2);
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4, 5]);

        assert_eq!(sut.remove(4), 5);
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4]);

        assert_eq!(sut.remove(0), 0);
        assert_eq!(sut.as_slice(), &[1, 3, 4]);

        let result = std::panic::catch_unwind(move || sut.remove(3));
        assert!(result.is_err());
    }

    #[test]
    fn node_split_off_and_append_move_elements() {
        let mut lower = Node::from_items(8, (0..8).collect());
        let upper = lower.split_off(4);
        assert_eq!(lower.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(upper, vec![4, 5, 6, 7]);

        let mut upper = Node::from_items(8, upper);
        lower.append(&mut upper);
        assert_eq!(lower.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(upper.len(), 0);
    }

    #[test]
    fn node_slices_of_empty_node_are_empty() {
        let mut sut: Node<i64> = Node::new(8);
        assert!(sut.as_slice().is_empty());
        assert!(sut.as_mut_slice().is_empty());
        assert_eq!(sut.next(), None);
        assert_eq!(sut.prev(), None);
    }
}
