use crate::error::{Error, Result};

/// Block capacity used by [`UnrolledList::new`](crate::UnrolledList::new).
pub const DEFAULT_NODE_CAPACITY: usize = 16;

/// Smallest accepted block capacity.
///
/// Splitting a block of this capacity yields two halves of four elements each.
pub const MIN_NODE_CAPACITY: usize = 8;

/// Construction parameters of an [`UnrolledList`](crate::UnrolledList).
///
/// # Example
/// ```rust
/// use unrolled_list::{Config, UnrolledList};
///
/// let config = Config::new().with_node_capacity(32);
/// let list: UnrolledList<i32> = UnrolledList::with_config(config).unwrap();
///
/// assert_eq!(list.node_capacity(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    node_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }

    /// Sets the maximum number of elements stored in a single block.
    ///
    /// The value is checked by [`Config::validate`] when the list is built.
    #[must_use]
    pub const fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    #[inline]
    pub const fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_capacity < MIN_NODE_CAPACITY {
            return Err(Error::InvalidNodeCapacity {
                capacity: self.node_capacity,
                min: MIN_NODE_CAPACITY,
            });
        }

        Ok(())
    }
}
