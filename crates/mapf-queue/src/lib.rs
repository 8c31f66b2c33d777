//! `mapf-queue` — the search frontier.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`heap`]  | `PriorityQueue<K, T>`, `Entry<K, T>`                      |
//! | [`error`] | `QueueError`, `QueueResult<T>`                            |
//!
//! # Why not `std::collections::BinaryHeap`
//!
//! A* relaxation needs decrease-key: lower the priority of an entry that is
//! already queued.  `BinaryHeap` cannot locate an entry, so callers push
//! duplicates and skip stale pops.  `PriorityQueue` keeps a key → slot
//! index beside the heap array, so an entry is found in O(1) and re-sifted
//! in O(log n), and each key is resident at most once.

pub mod error;
pub mod heap;


pub use error::{QueueError, QueueResult};
pub use heap::{Entry, PriorityQueue};
