//! Fixture builders for linked-structure topologies.
//!
//! Test and demo code needs lists and trees in specific shapes, including
//! deliberately malformed (cyclic) ones for negative testing. These
//! builders make construction explicit: a factory allocates a counted batch
//! of nodes with distinct identities, and a separate linking step stitches
//! them into the requested topology. No ambient allocator state, and the
//! caller keeps the full handle list for identity checks after relinking.

pub mod list;
pub mod tree;
