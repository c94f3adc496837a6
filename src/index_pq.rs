use crate::error::Error;
use crate::vec_option::VecOption;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use log::{debug, trace};

/// Value of `position[i]` when index `i` is not in the queue.
const NO_POSITION: usize = !0usize;

fn left(parent: usize) -> usize { parent * 2 + 1 }
fn right(parent: usize) -> usize { parent * 2 + 2 }
fn parent(child: usize) -> usize { (child - 1) / 2 }

/// A binary min-heap whose elements are identified by a stable index in `0..capacity`.
///
/// Each index is either absent or present with one priority. Besides the usual `push`, `top`
/// and `pop`, an index can be tested for membership, re-prioritized in place
/// (`change_key`), or removed from anywhere in the heap (`erase`), all in O(log n). This is
/// what Dijkstra-style algorithms need in order to "relax vertex v" without a linear scan.
///
/// The queue is three parallel tables:
///
/// * `priorities`, indexed by external index. A slot is present iff the index is queued.
/// * `heap`, a min-heap of external indices, indexed by heap position. `heap.len()` is the
///   number of queued indices.
/// * `position`, indexed by external index: the heap position of the index, or
///   `NO_POSITION`.
///
/// `heap` and `position` are inverses of each other over the queued indices. Every move of
/// an entry within `heap` goes through `swap_positions`, which updates both.
///
/// All tables are allocated at construction and never grow.
pub struct IndexPriorityQueue<P> {
    priorities: VecOption<P>,
    heap: Vec<usize>,
    position: Vec<usize>,
}

impl<P> IndexPriorityQueue<P> {
    /// Creates an empty queue that accepts the indices `0..=n`.
    pub fn new(n: usize) -> Self {
        Self::with_capacity(n + 1)
    }

    /// Creates an empty queue that accepts the indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!("new index priority queue, capacity {}", capacity);
        Self {
            priorities: VecOption::new_repeat_none(capacity),
            heap: Vec::with_capacity(capacity),
            position: vec![NO_POSITION; capacity],
        }
    }

    /// The number of distinct indices this queue accepts.
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `index` is queued. Any `index`, including ones outside the capacity,
    /// may be asked about.
    pub fn contains(&self, index: usize) -> bool {
        self.priorities.is_some(index)
    }

    /// The priority of `index`, if it is queued.
    pub fn priority(&self, index: usize) -> Option<&P> {
        self.priorities.get(index)
    }

    /// Returns the minimum entry as `(priority, index)`, without removing it.
    pub fn top(&self) -> Result<(&P, usize), Error> {
        let &index = self.heap.first().ok_or(Error::Empty)?;
        self.priorities
            .get(index)
            .map(|priority| (priority, index))
            .ok_or(Error::Empty)
    }

    /// Iterates the queued entries as `(index, priority)`, in heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = (usize, &P)> + '_ {
        self.heap
            .iter()
            .filter_map(move |&index| self.priorities.get(index).map(|priority| (index, priority)))
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        debug!("clearing {} entries", self.heap.len());
        for index in self.heap.drain(..) {
            self.position[index] = NO_POSITION;
            drop(self.priorities.take(index));
        }
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }

    fn is_valid_position(&self, p: usize) -> bool {
        p < self.heap.len()
    }

    /// Exchanges the entries at two heap positions, keeping `position` in step.
    fn swap_positions(&mut self, p1: usize, p2: usize) {
        let i1 = self.heap[p1];
        let i2 = self.heap[p2];
        trace!("swap: [{}] = {} <-> [{}] = {}", p1, i1, p2, i2);
        self.heap.swap(p1, p2);
        self.position.swap(i1, i2);
    }

    /// Detaches the entry at the last heap position.
    fn remove_last(&mut self) -> Option<(P, usize)> {
        let index = self.heap.pop()?;
        self.position[index] = NO_POSITION;
        self.priorities.take(index).map(|priority| (priority, index))
    }
}

impl<P: PartialOrd> IndexPriorityQueue<P> {
    /// Inserts `index` with `priority`.
    ///
    /// Returns `Ok(false)` and leaves the queue unchanged if `index` is already queued. Use
    /// `change_key` to re-prioritize a queued index.
    pub fn push(&mut self, priority: P, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        if self.contains(index) {
            return Ok(false);
        }
        self.priorities.set_some(index, priority);
        let p = self.heap.len();
        self.heap.push(index);
        self.position[index] = p;
        self.swim(p);
        Ok(true)
    }

    /// Removes the minimum entry and returns it as `(priority, index)`.
    /// Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<(P, usize)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        if last != 0 {
            self.swap_positions(0, last);
        }
        let removed = self.remove_last();
        self.sink(0);
        removed
    }

    /// Removes `index` from wherever it is in the heap, and returns its priority.
    /// Returns `None` if `index` is not queued (or not in range).
    pub fn erase(&mut self, index: usize) -> Option<P> {
        let p = *self.position.get(index)?;
        if p == NO_POSITION || self.heap.is_empty() {
            return None;
        }
        if p == 0 {
            return self.pop().map(|(priority, _)| priority);
        }
        let last = self.heap.len() - 1;
        self.swap_positions(p, last);
        let removed = self.remove_last().map(|(priority, _)| priority);
        if self.is_valid_position(p) {
            // The last entry now sits at p. It may be larger than the children of p, or
            // smaller than the parent of p; at most one of these moves it.
            self.sink(p);
            self.swim(p);
        }
        removed
    }

    /// Sets the priority of `index`, inserting it if it is not queued.
    ///
    /// Returns the previous priority, if `index` was queued.
    pub fn change_key(&mut self, priority: P, index: usize) -> Result<Option<P>, Error> {
        self.check_index(index)?;
        let p = self.position[index];
        if p == NO_POSITION {
            self.push(priority, index)?;
            return Ok(None);
        }
        let order = self
            .priorities
            .get(index)
            .and_then(|old| priority.partial_cmp(old));
        let old = self.priorities.set_some(index, priority);
        match order {
            Some(Ordering::Greater) => self.sink(p),
            Some(Ordering::Equal) => {}
            _ => self.swim(p),
        }
        Ok(old)
    }

    /// True if the priority at heap position `p1` is no larger than the one at `p2`.
    /// False if either position is not live, so missing children never win a comparison.
    fn is_smaller(&self, p1: usize, p2: usize) -> bool {
        if !self.is_valid_position(p1) || !self.is_valid_position(p2) {
            return false;
        }
        match (
            self.priorities.get(self.heap[p1]),
            self.priorities.get(self.heap[p2]),
        ) {
            (Some(a), Some(b)) => a <= b,
            _ => false,
        }
    }

    // Repair ordering constraints, by moving an entry up the tree (toward the root).
    fn swim(&mut self, mut p: usize) {
        while p > 0 && self.is_smaller(p, parent(p)) {
            self.swap_positions(p, parent(p));
            p = parent(p);
        }
    }

    // Repair ordering constraints, by moving an entry down the tree.
    fn sink(&mut self, mut p: usize) {
        while self.is_valid_position(left(p)) {
            let mut child = left(p);
            if self.is_smaller(right(p), child) {
                child = right(p);
            }
            if !self.is_smaller(child, p) {
                break;
            }
            self.swap_positions(child, p);
            p = child;
        }
    }

    /// Asserts that the heap is ordered and that `heap`, `position` and `priorities`
    /// agree with each other.
    pub fn check(&self) {
        for p in 1..self.heap.len() {
            assert!(
                self.is_smaller(parent(p), p),
                "heap order violated between positions {} and {}",
                parent(p),
                p
            );
        }
        for (p, &index) in self.heap.iter().enumerate() {
            assert_eq!(self.position[index], p, "position of index {}", index);
            assert!(self.priorities.is_some(index), "index {} has no priority", index);
        }
        let num_positioned = self
            .position
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != NO_POSITION)
            .inspect(|&(index, &p)| assert_eq!(self.heap[p], index))
            .count();
        assert_eq!(num_positioned, self.heap.len());
        assert_eq!(self.priorities.iter_present().count(), self.heap.len());
    }
}

impl<P: Debug> Debug for IndexPriorityQueue<P> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q:")?;
        for (index, priority) in self.iter() {
            write!(fmt, " {}:{:?}", index, priority)?;
        }
        Ok(())
    }
}
