//! `PriorityQueue` — array-backed binary min-heap with keyed decrease-key.
//!
//! # Layout
//!
//! The heap is the usual implicit tree over a `Vec`: the children of slot
//! `i` are `2i + 1` and `2i + 2`.  Beside it, `slots` maps every resident
//! key to its current slot and is kept in sync on every swap.
//!
//! # Ordering
//!
//! Entries are ordered by `priority`, then by insertion sequence, so equal
//! priorities pop first-in first-out and runs are deterministic.
//!
//! # Capacity
//!
//! The capacity is a hard limit fixed at construction.  Storage is
//! reserved up front only up to [`PREALLOC_LIMIT`] entries and grows on
//! demand beyond that, because planner capacities (`resolution² × horizon`)
//! are far larger than typical frontiers.

use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::{QueueError, QueueResult};

/// Upper bound on the storage reserved by [`PriorityQueue::new`].
pub const PREALLOC_LIMIT: usize = 4_096;

/// One queued entry.
#[derive(Clone, Debug)]
pub struct Entry<K, T> {
    pub priority: f32,
    pub key:      K,
    pub item:     T,
    seq:          u64,
}

impl<K, T> Entry<K, T> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
            == Ordering::Less
    }
}

/// Capacity-bounded binary min-heap keyed by `K`.
#[derive(Clone, Debug)]
pub struct PriorityQueue<K, T> {
    heap:     Vec<Entry<K, T>>,
    slots:    FxHashMap<K, usize>,
    capacity: usize,
    next_seq: u64,
}

impl<K: Copy + Eq + Hash, T> PriorityQueue<K, T> {
    pub fn new(capacity: usize) -> Self {
        let reserve = capacity.min(PREALLOC_LIMIT);
        Self {
            heap:     Vec::with_capacity(reserve),
            slots:    FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            capacity,
            next_seq: 0,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn priority_of(&self, key: &K) -> Option<f32> {
        self.slots.get(key).map(|&i| self.heap[i].priority)
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<&Entry<K, T>> {
        self.heap.first()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Queue `item` under `key` with `priority`.
    pub fn insert(&mut self, priority: f32, key: K, item: T) -> QueueResult<()> {
        if priority.is_nan() {
            return Err(QueueError::InvalidPriority(priority));
        }
        if self.heap.len() >= self.capacity {
            return Err(QueueError::Full { capacity: self.capacity });
        }
        if self.slots.contains_key(&key) {
            return Err(QueueError::DuplicateKey);
        }

        let slot = self.heap.len();
        self.heap.push(Entry { priority, key, item, seq: self.next_seq });
        self.next_seq += 1;
        self.slots.insert(key, slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the lowest-priority entry.
    pub fn extract_min(&mut self) -> QueueResult<Entry<K, T>> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop().ok_or(QueueError::Empty)?;
        self.slots.remove(&min.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Lower the priority of the entry queued under `key` and replace its
    /// payload with `item`.
    ///
    /// Returns `Ok(false)` if `key` is not queued (e.g. it was already
    /// extracted); the queue is left unchanged in that case.
    pub fn update_cost(&mut self, priority: f32, key: K, item: T) -> QueueResult<bool> {
        if priority.is_nan() {
            return Err(QueueError::InvalidPriority(priority));
        }
        let Some(&slot) = self.slots.get(&key) else {
            return Ok(false);
        };
        let current = self.heap[slot].priority;
        if priority > current {
            return Err(QueueError::PriorityIncrease { current, requested: priority });
        }
        let entry = &mut self.heap[slot];
        entry.priority = priority;
        entry.item = item;
        self.sift_up(slot);
        Ok(true)
    }

    /// Drop every entry.  Reserved storage is kept for the next search.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.next_seq = 0;
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// `true` if every parent precedes-or-equals both children and the
    /// key → slot index matches the heap array.
    pub fn verify(&self) -> bool {
        if self.slots.len() != self.heap.len() {
            return false;
        }
        self.heap.iter().enumerate().all(|(i, e)| {
            let ordered = [2 * i + 1, 2 * i + 2]
                .into_iter()
                .filter(|&c| c < self.heap.len())
                .all(|c| e.priority <= self.heap[c].priority);
            ordered && self.slots.get(&e.key) == Some(&i)
        })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].key, a);
        self.slots.insert(self.heap[b].key, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
