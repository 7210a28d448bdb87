//! In-place reversal of a chain in contiguous groups of fixed size.
//!
//! Reverses a singly linked chain K nodes at a time, leaving a trailing
//! group shorter than K exactly as found. Key design decisions:
//!
//! 1. **Scan before mutate**: a read-only boundary scan confirms a full
//!    group exists before any link is touched, so a short remainder is never
//!    half-reversed and no fallible step remains once mutation begins.
//!
//! 2. **Synthetic predecessor as a local slot**: the first group's
//!    reattachment target is a plain local variable, not an arena node, so
//!    the first group needs no special case and nothing synthetic can leak
//!    into the returned chain.
//!
//! 3. **Seed the relink walk with the remainder head**: each node's link is
//!    redirected to the node that preceded it in walk order, starting from
//!    the node after the group, so the reversed group's tail already points
//!    into the untouched remainder when the walk finishes.
//!
//! Each node is visited once by the scan and once by the relink walk of the
//! group it belongs to: linear time overall, a constant number of cursors,
//! no allocation, and no node created or freed.

use crate::arena::{ListArena, NodeRef};

/// Errors reported by the grouped-reversal entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReverseError {
    /// The group size was zero; group sizes must be at least 1. Reported
    /// before anything is touched, never silently coerced.
    InvalidGroupSize,
    /// The chain contains a cycle. Only the checked entry point reports
    /// this; the unchecked one requires acyclic input as a precondition.
    CyclicInput,
}

impl std::fmt::Display for ReverseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReverseError::InvalidGroupSize => {
                return write!(f, "group size must be at least 1");
            }
            ReverseError::CyclicInput => {
                return write!(f, "chain is cyclic; grouped reversal requires an acyclic chain");
            }
        }
    }
}

impl std::error::Error for ReverseError {}

impl<T> ListArena<T> {
    /// Find the k-th node of a candidate group, counting `start` as the 1st.
    ///
    /// Walks `k - 1` successor hops from `start`. Returns the "no node"
    /// handle if a terminal is reached first, which means fewer than `k`
    /// nodes remain. Read-only; safe to call speculatively. `k == 1` returns
    /// `start` itself, and a "no node" `start` reports no group immediately.
    pub fn find_group_end(&self, start: NodeRef, k: usize) -> NodeRef {
        debug_assert!(k >= 1, "group size must be at least 1");
        let mut cursor = start;
        for _ in 1..k {
            if cursor.is_none() {
                return NodeRef::none();
            }
            cursor = self.next(cursor);
        }
        return cursor;
    }

    /// Reverse the chain starting at `head` in groups of `k`, in place.
    ///
    /// Returns the new head. A trailing group shorter than `k` keeps its
    /// original order and position; `k == 1` and a chain shorter than `k`
    /// return `head` unchanged. Only links are rewritten: the node set,
    /// node values, and node identities are untouched.
    ///
    /// The chain must be finite and acyclic; on cyclic input this routine
    /// does not terminate. Callers with untrusted topologies should use
    /// [`reverse_in_groups_checked`](ListArena::reverse_in_groups_checked).
    pub fn reverse_in_groups(&mut self, head: NodeRef, k: usize) -> Result<NodeRef, ReverseError> {
        if k == 0 {
            return Err(ReverseError::InvalidGroupSize);
        }
        if k == 1 || head.is_none() {
            return Ok(head);
        }

        // The synthetic predecessor is this local slot: `dummy_next` always
        // holds the overall head, and a "no node" `group_pred` stands for
        // the slot itself. It is scoped to this call and cannot leak.
        let mut dummy_next = head;
        let mut group_pred = NodeRef::none();

        loop {
            // Invariant: everything before `group_head` is a finalized
            // forward chain, and `group_head` heads the untouched remainder.
            let group_head = if group_pred.is_none() {
                dummy_next
            } else {
                self.next(group_pred)
            };

            let group_end = self.find_group_end(group_head, k);
            if group_end.is_none() {
                // Fewer than k nodes remain; leave them exactly as found.
                break;
            }

            // Relink the group in place. `prev` starts at the node after the
            // group so the reversed tail points into the remainder.
            let mut prev = self.next(group_end);
            let mut cursor = group_head;
            while cursor != group_end {
                let after = self.next(cursor);
                self.set_next(cursor, prev);
                prev = cursor;
                cursor = after;
            }
            self.set_next(group_end, prev);

            // Reattach: the group now runs end-to-head. Its old head is the
            // new tail, which is the correct predecessor for the next group.
            if group_pred.is_none() {
                dummy_next = group_end;
            } else {
                self.set_next(group_pred, group_end);
            }
            group_pred = group_head;
        }

        return Ok(dummy_next);
    }

    /// Like [`reverse_in_groups`](ListArena::reverse_in_groups), but runs a
    /// cycle check first and reports [`ReverseError::CyclicInput`] before
    /// any link is rewritten.
    ///
    /// The guard costs one extra O(n) traversal; callers that can guarantee
    /// acyclic input should prefer the unchecked entry point.
    pub fn reverse_in_groups_checked(
        &mut self,
        head: NodeRef,
        k: usize,
    ) -> Result<NodeRef, ReverseError> {
        if k == 0 {
            return Err(ReverseError::InvalidGroupSize);
        }
        if self.has_cycle(head) {
            return Err(ReverseError::CyclicInput);
        }
        return self.reverse_in_groups(head, k);
    }
}
