//! Singly linked chain fixtures: batch allocation plus explicit linking.

use crate::arena::{ListArena, NodeRef};

/// Allocate `n` nodes with distinct identities, valued `0..n` in allocation
/// order. No links are set; pair with [`link_linear`] or [`link_cyclic`].
pub fn nodes(arena: &mut ListArena<i32>, n: usize) -> Vec<NodeRef> {
    let mut handles = Vec::with_capacity(n);
    for i in 0..n {
        handles.push(arena.alloc(i as i32));
    }
    return handles;
}

/// Stitch handles into a linear chain in slice order. Returns the head, or
/// the "no node" handle for an empty slice.
pub fn link_linear<T>(arena: &mut ListArena<T>, handles: &[NodeRef]) -> NodeRef {
    for pair in handles.windows(2) {
        arena.set_next(pair[0], pair[1]);
    }
    return handles.first().copied().unwrap_or(NodeRef::none());
}

/// Stitch handles into a ring: a linear chain plus a back-edge from the last
/// handle to the first. A single handle becomes a self-loop. Returns the
/// head, or the "no node" handle for an empty slice.
pub fn link_cyclic<T>(arena: &mut ListArena<T>, handles: &[NodeRef]) -> NodeRef {
    let head = link_linear(arena, handles);
    if let Some(&last) = handles.last() {
        arena.set_next(last, head);
    }
    return head;
}

/// Convenience: a linear chain of `n` nodes valued `0..n`. Returns the head.
pub fn iota(arena: &mut ListArena<i32>, n: usize) -> NodeRef {
    let handles = nodes(arena, n);
    return link_linear(arena, &handles);
}
