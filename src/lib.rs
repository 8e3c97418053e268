//! ## Intro
//!
//! A small library of foundational linear data structures (dynamic array,
//! singly linked list, stack and queue) built from first principles with
//! manual storage management instead of wrapping a standard-library
//! container.
//!
//! The crate exists for learning and reference: each structure carries its
//! classic insertion, deletion and search operations, and the array and
//! list additionally sort in place with explicitly written algorithms
//! (bubble, insertion and Lomuto quicksort) rather than delegating to
//! built-ins. The complexity trade-offs are part of the API documentation.
//!
//! ## Containers
//!
//! ### [`DynArray`]
//!
//! - **Contiguous** growable buffer managed through raw allocations
//! - **Amortized O(1)** append; capacity starts at 10 and strictly doubles
//! - **Shift-based** insert/remove anywhere, linear and binary search,
//!   three in-place sorts, in-place reversal
//!
//! ```
//! # use lineal::DynArray;
//! let mut arr: DynArray<i32> = DynArray::new();
//! arr.push(5);
//! arr.push(3);
//! arr.push(8);
//! arr.push(1);
//!
//! arr.quick_sort();
//! assert_eq!(arr, [1, 3, 5, 8]);
//! ```
//!
//! ### [`LinkedList`]
//!
//! - **Singly-owned** chain of heap nodes; each node owns its successor
//! - **O(1)** prepend and (via a cached tail cursor) append
//! - **O(index)** positional access, value-swapping bubble sort, in-place
//!   pointer-rewiring reversal
//!
//! ```
//! # use lineal::LinkedList;
//! let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
//! list.reverse();
//! assert_eq!(list.pop_front(), Ok(3));
//! ```
//!
//! ### [`Stack`] and [`Queue`]
//!
//! Thin adapters over [`DynArray`] adding LIFO and FIFO discipline through
//! index bookkeeping alone. `Queue::dequeue` is O(n) by construction: it
//! is the array's front removal, shift and all.
//!
//! ```
//! # use lineal::{Queue, Stack};
//! let mut stack = Stack::new();
//! stack.push('a');
//! stack.push('b');
//! assert_eq!(stack.pop(), Ok('b'));
//!
//! let mut queue = Queue::new();
//! queue.enqueue('a');
//! queue.enqueue('b');
//! assert_eq!(queue.dequeue(), Ok('a'));
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return [`Error`]: [`Error::OutOfBounds`] for an
//! index outside the valid range, [`Error::Empty`] for pop/top/front/rear
//! on an empty structure. Preconditions are checked before any mutation,
//! so an `Err` always means the structure is untouched.
//!
//! ## Concurrency
//!
//! None. Every structure is designed for exclusive single-owner access and
//! carries no internal synchronization; wrap them yourself if you need
//! shared mutation.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`, making it suitable for
//! embedded and no_std environments.
#![no_std]

extern crate alloc;

mod utils;

pub mod array;
pub mod error;
pub mod list;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use array::{DynArray, DEFAULT_CAPACITY};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
