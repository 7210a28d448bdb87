//! Regroup - in-place grouped reversal of arena-backed singly linked chains.
//!
//! # Quick Start
//!
//! ```
//! use regroup::ListArena;
//! use regroup::fixtures::list;
//!
//! // Build the chain 0 -> 1 -> 2 -> 3 -> 4
//! let mut arena = ListArena::new();
//! let head = list::iota(&mut arena, 5);
//!
//! // Reverse it in groups of three; the short trailing group stays put
//! let head = arena.reverse_in_groups(head, 3).unwrap();
//! assert_eq!(arena.values_from(head), vec![2, 1, 0, 3, 4]);
//! ```

pub mod arena;
pub mod fixtures;
pub mod reverse;

pub use arena::{ListArena, NodeRef};
pub use reverse::ReverseError;
