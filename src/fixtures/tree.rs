//! Binary tree fixtures for structure-traversal tooling.
//!
//! Trees are fixture scaffolding only; the grouped-reversal core never
//! touches them. Same storage scheme as the list arena: nodes in a `Vec`,
//! child links as `u32` indices with a sentinel, cyclic shapes allowed for
//! negative testing.

/// Sentinel value indicating no node.
const NONE: u32 = u32::MAX;

/// A copyable handle to a tree node slot, or to no node at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeRef {
    idx: u32,
}

impl TreeRef {
    /// The handle meaning "no node".
    pub fn none() -> TreeRef {
        return TreeRef { idx: NONE };
    }

    /// A handle to the given slot index.
    pub fn some(idx: u32) -> TreeRef {
        assert!(idx != NONE, "slot index {} is reserved as the sentinel", NONE);
        return TreeRef { idx };
    }

    /// Check if this handle refers to no node.
    pub fn is_none(&self) -> bool {
        return self.idx == NONE;
    }

    /// Check if this handle refers to a node.
    pub fn is_some(&self) -> bool {
        return self.idx != NONE;
    }

    fn index(&self) -> usize {
        assert!(self.is_some(), "dereferenced TreeRef::none()");
        return self.idx as usize;
    }
}

impl std::fmt::Debug for TreeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "TreeRef(none)");
        }
        return write!(f, "TreeRef({})", self.idx);
    }
}

/// A value plus left/right child links.
#[derive(Clone, Debug)]
struct TreeNode {
    value: i32,
    left: u32,
    right: u32,
}

/// Owner of every node in a set of binary trees.
#[derive(Clone, Debug, Default)]
pub struct TreeArena {
    nodes: Vec<TreeNode>,
}

impl TreeArena {
    /// Create a new empty arena.
    pub fn new() -> TreeArena {
        return TreeArena { nodes: Vec::new() };
    }

    /// Number of nodes ever allocated.
    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    /// Check if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        return self.nodes.is_empty();
    }

    /// Allocate a leaf node, returning its handle.
    pub fn alloc(&mut self, value: i32) -> TreeRef {
        let idx = self.nodes.len();
        assert!(idx < NONE as usize, "arena full (max {} nodes)", NONE);
        self.nodes.push(TreeNode {
            value,
            left: NONE,
            right: NONE,
        });
        return TreeRef::some(idx as u32);
    }

    /// Read a node's value.
    pub fn value(&self, r: TreeRef) -> i32 {
        return self.nodes[r.index()].value;
    }

    /// Read a node's left child link.
    pub fn left(&self, r: TreeRef) -> TreeRef {
        return Self::wrap(self.nodes[r.index()].left);
    }

    /// Read a node's right child link.
    pub fn right(&self, r: TreeRef) -> TreeRef {
        return Self::wrap(self.nodes[r.index()].right);
    }

    /// Rebind a node's left child link.
    pub fn set_left(&mut self, r: TreeRef, child: TreeRef) {
        self.nodes[r.index()].left = child.idx;
    }

    /// Rebind a node's right child link.
    pub fn set_right(&mut self, r: TreeRef, child: TreeRef) {
        self.nodes[r.index()].right = child.idx;
    }

    fn wrap(idx: u32) -> TreeRef {
        if idx == NONE {
            return TreeRef::none();
        }
        return TreeRef::some(idx);
    }
}

/// Four nodes: a root with two children, and a left grandchild under the
/// right child.
pub fn binary_tree_linear(arena: &mut TreeArena) -> TreeRef {
    let w = arena.alloc(0);
    let x = arena.alloc(1);
    let y = arena.alloc(2);
    let z = arena.alloc(3);
    arena.set_left(w, x);
    arena.set_right(w, y);
    arena.set_left(y, z);
    return w;
}

/// The same four-node shape plus a back-edge from the right child to the
/// root, making the "tree" cyclic.
pub fn binary_tree_cyclic(arena: &mut TreeArena) -> TreeRef {
    let w = binary_tree_linear(arena);
    let y = arena.right(w);
    arena.set_right(y, w);
    return w;
}
