//! Binary heap with a runtime-selectable ordering direction
//!
//! This crate provides [`PolarHeap`], an array-backed binary heap whose
//! ordering direction (smallest-first or largest-first) is chosen when the
//! heap is constructed rather than baked into the element type. Both
//! extrema remain observable on any heap: the configured one in O(1), the
//! opposite one through a linear scan.
//!
//! # Features
//!
//! - **Insert**: O(log n) append + sift-up
//! - **Remove**: O(log n) extraction of the configured extremum
//! - **Peek**: O(1) for the configured extremum, O(n) for the opposite one
//! - **Heapify**: O(n) construction from an existing `Vec`
//! - **Rendering**: `Display` lists the live elements in storage order
//!
//! Operating on an empty heap is a named error ([`HeapError::Empty`]), not
//! a silent absence, so callers can always tell "empty" apart from any
//! valid element.
//!
//! # Example
//!
//! ```rust
//! use polar_heap::{PolarHeap, Polarity};
//!
//! let mut heap = PolarHeap::new(Polarity::Max);
//! for value in [5, 1, 8, 3] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek_max(), Ok(&8));
//! assert_eq!(heap.peek_min(), Ok(&1));
//!
//! assert_eq!(heap.remove(), Ok(8));
//! assert_eq!(heap.remove(), Ok(5));
//! assert_eq!(heap.remove(), Ok(3));
//! assert_eq!(heap.remove(), Ok(1));
//! assert!(heap.is_empty());
//! ```
//!
//! # Concurrency
//!
//! The heap is a plain single-threaded container: all mutation goes through
//! `&mut self`, and no internal locking is provided. Sharing a heap across
//! threads is the caller's obligation, with whatever external
//! synchronization their use requires; `PolarHeap<T>` is `Send`/`Sync`
//! exactly when `T` is.

pub mod binary;
pub mod error;
pub mod polarity;

pub use binary::PolarHeap;
pub use error::HeapError;
pub use polarity::Polarity;
