//! Arena-backed element tree.
//!
//! Children are owned through the arena; parent links are plain indices used
//! only to navigate upward, so no ownership cycles can form.

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::element::ElementData;

/// Tree node: one position in the builder's tree.
///
/// The root node carries no element data; every appended node does. The
/// `data_key` / `query_key` tags are structural lookup markers on the node
/// itself, distinct from the element's attributes.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Element payload, None for the root
    pub element: Option<ElementData>,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in append order (append order is render order)
    pub children: Vec<Index>,
    /// Free-form lookup tag
    pub data_key: Option<String>,
    /// Free-form lookup tag
    pub query_key: Option<String>,
}

impl TreeNode {
    fn root() -> Self {
        Self {
            element: None,
            parent: None,
            children: Vec::new(),
            data_key: None,
            query_key: None,
        }
    }

    fn element(data: ElementData, parent: Index) -> Self {
        Self {
            element: Some(data),
            parent: Some(parent),
            children: Vec::new(),
            data_key: None,
            query_key: None,
        }
    }

    /// Most recently appended child, the target of attribute setters.
    pub fn last_child(&self) -> Option<Index> {
        self.children.last().copied()
    }
}

/// Arena-based tree structure for one builder chain.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Exactly one node has no parent (the root); it exists from construction on
/// and nothing is ever removed.
#[derive(Debug, Clone)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node
    root: Index,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode::root());
        Self { arena, root }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Index {
        self.root
    }

    /// Appends a new element node as the last child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_element(&mut self, data: ElementData, parent: Index) -> Index {
        let node_idx = self.arena.insert(TreeNode::element(data, parent));

        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    /// Copies every node of `other` (except its bare root) beneath `parent`,
    /// preserving child order and lookup tags.
    #[instrument(level = "trace", skip(self, other))]
    pub fn graft(&mut self, other: &TreeArena, parent: Index) {
        if let Some(other_root) = other.get_node(other.root()) {
            for &child in &other_root.children {
                self.graft_node(other, child, parent);
            }
        }
    }

    fn graft_node(&mut self, other: &TreeArena, node_idx: Index, parent: Index) {
        if let Some(node) = other.get_node(node_idx) {
            if let Some(element) = &node.element {
                let new_idx = self.insert_element(element.clone(), parent);
                if let Some(new_node) = self.get_node_mut(new_idx) {
                    new_node.data_key = node.data_key.clone();
                    new_node.query_key = node.query_key.clone();
                }
                for &child in &node.children {
                    self.graft_node(other, child, new_idx);
                }
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    /// Total number of nodes, the bare root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// ASCII rendering of the logical tree, one line per node.
    pub fn to_tree_string(&self) -> Tree<String> {
        self.node_tree_string(self.root)
    }

    fn node_tree_string(&self, node_idx: Index) -> Tree<String> {
        match self.get_node(node_idx) {
            Some(node) => {
                let label = node
                    .element
                    .as_ref()
                    .map(ElementData::to_string)
                    .unwrap_or_else(|| "fragment".to_string());

                let leaves: Vec<_> = node
                    .children
                    .iter()
                    .map(|&child| self.node_tree_string(child))
                    .collect();

                Tree::new(label).with_leaves(leaves)
            }
            None => Tree::new(String::new()),
        }
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            stack: vec![arena.root()],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            stack: vec![(arena.root(), false)],
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
