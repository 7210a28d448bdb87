//! Arena-backed storage for singly linked chains.
//!
//! All nodes live in a single `Vec` owned by a `ListArena`. A "next" link is
//! a plain `u32` slot index with `u32::MAX` as the "no successor" sentinel,
//! so rebinding a link during reversal is a pure data update: no ownership
//! moves, no copies, and no way to dangle, because the arena is the sole
//! owner of every node and never frees one.
//!
//! Key design decisions:
//!
//! 1. **Index links, not owning pointers**: reversal changes link direction
//!    mid-walk, which requires several live references to the same node at
//!    once. Indices make that a non-event.
//!
//! 2. **Sentinel over `Option`**: links are stored as `u32` with a `NONE`
//!    sentinel; the public `NodeRef` handle wraps the same representation so
//!    "no node" travels through APIs as an ordinary value.
//!
//! 3. **The arena never frees**: handles stay valid for the arena's lifetime,
//!    so fixture code can hold a full handle list while the algorithm relinks.

/// Sentinel value indicating no node.
const NONE: u32 = u32::MAX;

/// A copyable handle to a node slot, or to no node at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef {
    idx: u32,
}

impl NodeRef {
    /// The handle meaning "no node" (empty list, end of chain).
    pub fn none() -> NodeRef {
        return NodeRef { idx: NONE };
    }

    /// A handle to the given slot index.
    pub fn some(idx: u32) -> NodeRef {
        assert!(idx != NONE, "slot index {} is reserved as the sentinel", NONE);
        return NodeRef { idx };
    }

    /// Check if this handle refers to no node.
    pub fn is_none(&self) -> bool {
        return self.idx == NONE;
    }

    /// Check if this handle refers to a node.
    pub fn is_some(&self) -> bool {
        return self.idx != NONE;
    }

    /// The slot index this handle refers to. Panics on the "no node" handle.
    pub fn index(&self) -> usize {
        assert!(self.is_some(), "dereferenced NodeRef::none()");
        return self.idx as usize;
    }
}

impl std::fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "NodeRef(none)");
        }
        return write!(f, "NodeRef({})", self.idx);
    }
}

/// A value plus its successor link.
#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    next: u32,
}

/// Owner of every node in a set of chains.
///
/// The arena hands out `NodeRef` handles and exposes link reads and rebinds;
/// chain topology is whatever the caller links up, including deliberately
/// cyclic shapes for negative testing.
#[derive(Clone, Debug)]
pub struct ListArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> ListArena<T> {
    /// Create a new empty arena.
    pub fn new() -> ListArena<T> {
        return ListArena { nodes: Vec::new() };
    }

    /// Create an arena with room for `n` nodes before reallocating.
    pub fn with_capacity(n: usize) -> ListArena<T> {
        return ListArena {
            nodes: Vec::with_capacity(n),
        };
    }

    /// Number of nodes ever allocated.
    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    /// Check if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        return self.nodes.is_empty();
    }

    /// Allocate a node with no successor, returning its handle.
    pub fn alloc(&mut self, value: T) -> NodeRef {
        let idx = self.nodes.len();
        assert!(idx < NONE as usize, "arena full (max {} nodes)", NONE);
        self.nodes.push(Node { value, next: NONE });
        return NodeRef::some(idx as u32);
    }

    /// Read a node's successor link.
    pub fn next(&self, r: NodeRef) -> NodeRef {
        let next = self.nodes[r.index()].next;
        if next == NONE {
            return NodeRef::none();
        }
        return NodeRef::some(next);
    }

    /// Rebind a node's successor link. `succ` may be the "no node" handle.
    pub fn set_next(&mut self, r: NodeRef, succ: NodeRef) {
        self.nodes[r.index()].next = succ.idx;
    }

    /// Read a node's value.
    pub fn value(&self, r: NodeRef) -> &T {
        return &self.nodes[r.index()].value;
    }

    /// Mutably read a node's value.
    pub fn value_mut(&mut self, r: NodeRef) -> &mut T {
        return &mut self.nodes[r.index()].value;
    }

    /// Iterate over handles in chain order starting at `head`.
    ///
    /// Terminates only for acyclic chains; on a cyclic chain the iterator
    /// loops forever, same as any other traversal of malformed input.
    pub fn iter_from(&self, head: NodeRef) -> ChainIter<'_, T> {
        return ChainIter {
            arena: self,
            cursor: head,
        };
    }

    /// Collect the values of an acyclic chain in order.
    pub fn values_from(&self, head: NodeRef) -> Vec<T>
    where
        T: Clone,
    {
        return self
            .iter_from(head)
            .map(|r| self.value(r).clone())
            .collect();
    }

    /// Detect whether the chain starting at `head` contains a cycle.
    ///
    /// Floyd's tortoise and hare: the slow cursor advances one hop per step,
    /// the fast cursor two; they meet only inside a cycle. O(n) time, O(1)
    /// extra space, no mutation.
    pub fn has_cycle(&self, head: NodeRef) -> bool {
        let mut slow = head;
        let mut fast = head;
        while fast.is_some() {
            fast = self.next(fast);
            if fast.is_none() {
                break;
            }
            fast = self.next(fast);
            slow = self.next(slow);
            if slow == fast && slow.is_some() {
                return true;
            }
        }
        return false;
    }
}

/// Iterator over the handles of a chain, in link order.
pub struct ChainIter<'a, T> {
    arena: &'a ListArena<T>,
    cursor: NodeRef,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        if self.cursor.is_none() {
            return None;
        }
        let current = self.cursor;
        self.cursor = self.arena.next(current);
        return Some(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_has_no_successor() {
        let mut arena = ListArena::new();
        let a = arena.alloc(7);
        assert!(arena.next(a).is_none());
        assert_eq!(*arena.value(a), 7);
    }

    #[test]
    fn set_next_rebinds() {
        let mut arena = ListArena::new();
        let a = arena.alloc(0);
        let b = arena.alloc(1);
        let c = arena.alloc(2);

        arena.set_next(a, b);
        assert_eq!(arena.next(a), b);

        arena.set_next(a, c);
        assert_eq!(arena.next(a), c);

        arena.set_next(a, NodeRef::none());
        assert!(arena.next(a).is_none());
    }

    #[test]
    fn iter_from_walks_chain_order() {
        let mut arena = ListArena::new();
        let a = arena.alloc(0);
        let b = arena.alloc(1);
        let c = arena.alloc(2);
        arena.set_next(a, b);
        arena.set_next(b, c);

        let handles: Vec<NodeRef> = arena.iter_from(a).collect();
        assert_eq!(handles, vec![a, b, c]);
        assert_eq!(arena.values_from(a), vec![0, 1, 2]);
    }

    #[test]
    fn iter_from_empty() {
        let arena: ListArena<i32> = ListArena::new();
        assert_eq!(arena.iter_from(NodeRef::none()).count(), 0);
    }

    #[test]
    fn has_cycle_linear_chain() {
        let mut arena = ListArena::new();
        let a = arena.alloc(0);
        let b = arena.alloc(1);
        arena.set_next(a, b);
        assert!(!arena.has_cycle(a));
        assert!(!arena.has_cycle(NodeRef::none()));
    }

    #[test]
    fn has_cycle_self_loop() {
        let mut arena = ListArena::new();
        let a = arena.alloc(0);
        arena.set_next(a, a);
        assert!(arena.has_cycle(a));
    }

    #[test]
    fn has_cycle_ring() {
        let mut arena = ListArena::new();
        let a = arena.alloc(0);
        let b = arena.alloc(1);
        let c = arena.alloc(2);
        arena.set_next(a, b);
        arena.set_next(b, c);
        arena.set_next(c, a);
        assert!(arena.has_cycle(a));
        // Entering the ring mid-way detects it too.
        assert!(arena.has_cycle(b));
    }

    #[test]
    fn has_cycle_tail_into_loop() {
        // a -> b -> c -> d -> b
        let mut arena = ListArena::new();
        let a = arena.alloc(0);
        let b = arena.alloc(1);
        let c = arena.alloc(2);
        let d = arena.alloc(3);
        arena.set_next(a, b);
        arena.set_next(b, c);
        arena.set_next(c, d);
        arena.set_next(d, b);
        assert!(arena.has_cycle(a));
    }

    #[test]
    #[should_panic(expected = "dereferenced NodeRef::none()")]
    fn none_handle_panics_on_index() {
        NodeRef::none().index();
    }
}
