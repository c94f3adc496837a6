//! An indexed priority queue: a binary min-heap whose elements are named by a stable index
//! in a fixed range, so that a specific element can be looked up, re-prioritized or removed
//! in O(log n).
//!
//! ```
//! use index_pq::IndexPriorityQueue;
//!
//! let mut q = IndexPriorityQueue::new(5);
//! q.push(10, 1).unwrap();
//! q.push(5, 2).unwrap();
//! q.change_key(1, 1).unwrap();
//! assert_eq!(q.top(), Ok((&1, 1)));
//! assert_eq!(q.erase(2), Some(5));
//! assert_eq!(q.pop(), Some((1, 1)));
//! assert!(q.is_empty());
//! ```

pub mod error;
pub mod index_pq;
pub mod shortest_path;
pub mod vec_option;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::index_pq::IndexPriorityQueue;
