use std::ops::{Index, IndexMut};

use log::trace;

use crate::node::{Node, NodeId};

/// The doubly-linked chain of blocks, stored in an arena.
///
/// Vacant slots left behind by merges are recycled through `free`.
/// The chain always holds at least one block.
pub struct Chain<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    head: NodeId,
    tail: NodeId,
    capacity: usize,
}

impl<T> Chain<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: vec![Some(Node::new(capacity))],
            free: Vec::new(),
            head: 0,
            tail: 0,
            capacity,
        }
    }

    #[inline]
    pub const fn head(&self) -> NodeId {
        self.head
    }

    #[inline]
    pub const fn tail(&self) -> NodeId {
        self.tail
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live blocks.
    pub fn block_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Splits the full block `id` in two, moving its upper `capacity / 2` elements into a
    /// new block linked right after it. Returns the id of the new block.
    pub fn split(&mut self, id: NodeId) -> NodeId {
        debug_assert_eq!(self[id].len(), self.capacity);

        let moved = self.capacity / 2;
        let at = self.capacity - moved;
        let upper = self[id].split_off(at);

        let next = self[id].next();
        let mut sibling = Node::from_items(self.capacity, upper);
        sibling.set_prev(Some(id));
        sibling.set_next(next);

        let sibling_id = self.alloc(sibling);
        self[id].set_next(Some(sibling_id));
        match next {
            Some(next) => self[next].set_prev(Some(sibling_id)),
            None => self.tail = sibling_id,
        }

        trace!(
            "split block {id} into {id} ({} elements) and {sibling_id} ({moved} elements)",
            self[id].len()
        );

        sibling_id
    }

    /// Appends the elements of `source` to `target` and unlinks `source`.
    ///
    /// `source` must directly follow `target` and their combined length must fit a block.
    pub fn merge(&mut self, target: NodeId, source: NodeId) {
        debug_assert_eq!(self[target].next(), Some(source));
        debug_assert!(self[target].len() + self[source].len() <= self.capacity);

        let mut removed = self.release(source);
        self[target].append(&mut removed);

        let next = removed.next();
        self[target].set_next(next);
        match next {
            Some(next) => self[next].set_prev(Some(target)),
            None => self.tail = target,
        }

        trace!(
            "merged block {source} into {target} ({} elements)",
            self[target].len()
        );
    }

    /// Drops every block and starts over with a single empty one.
    ///
    /// Returns the number of blocks released.
    pub fn clear(&mut self) -> usize {
        let released = self.block_count();

        self.nodes.clear();
        self.free.clear();
        self.nodes.push(Some(Node::new(self.capacity)));
        self.head = 0;
        self.tail = 0;

        released
    }

    /// Consumes the chain, returning the contents of every block in chain order.
    pub fn into_blocks(mut self) -> Vec<Vec<T>> {
        let mut blocks = Vec::with_capacity(self.block_count());
        let mut cursor = Some(self.head);

        while let Some(id) = cursor {
            let node = self.release(id);
            cursor = node.next();
            blocks.push(node.into_items());
        }

        blocks
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        match self.nodes[id].take() {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => unreachable!("block {id} released twice"),
        }
    }
}

impl<T> Index<NodeId> for Chain<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match &self.nodes[id] {
            Some(node) => node,
            None => unreachable!("block {id} is vacant"),
        }
    }
}

impl<T> IndexMut<NodeId> for Chain<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match &mut self.nodes[id] {
            Some(node) => node,
            None => unreachable!("block {id} is vacant"),
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|slot| {
                slot.as_ref().map(|node| {
                    let mut copy = Node::from_items(self.capacity, node.as_slice().to_vec());
                    copy.set_next(node.next());
                    copy.set_prev(node.prev());
                    copy
                })
            })
            .collect();

        Self {
            nodes,
            free: self.free.clone(),
            head: self.head,
            tail: self.tail,
            capacity: self.capacity,
        }
    }
}
