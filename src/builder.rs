//! Fluent builder over the element tree.
//!
//! A [`Component`] is a handle bound to a "current" tree position. Element
//! methods append siblings at that position, [`Component::descend`] moves
//! into the last-appended child, [`Component::ascend`] moves back up, and
//! attribute setters target the most recently appended child. Every method
//! consumes and returns the builder, so calls chain:
//!
//! ```
//! use rsdom::build;
//!
//! # fn main() -> rsdom::DomResult<()> {
//! let fragment = build()
//!     .div().id("content")?
//!     .descend()?
//!     .span().text("hello")?
//!     .ascend()
//!     .p()
//!     .render();
//!
//! assert_eq!(fragment.children.len(), 2);
//! # Ok(())
//! # }
//! ```

use tracing::instrument;

use crate::arena::{TreeArena, TreeNode};
use crate::element::{AttrMap, ElementData, TEXT_ATTR};
use crate::errors::{DomError, DomResult};
use crate::render::Fragment;
use crate::tag::{for_each_tag, Tag};

/// Argument to [`Component::append_with`]: either initial attributes for the
/// new element, or a sub-builder whose tree becomes the element's children.
#[derive(Debug)]
pub enum ElementArg {
    Attributes(AttrMap),
    SubTree(Component),
}

impl From<AttrMap> for ElementArg {
    fn from(attributes: AttrMap) -> Self {
        ElementArg::Attributes(attributes)
    }
}

impl From<Component> for ElementArg {
    fn from(sub: Component) -> Self {
        ElementArg::SubTree(sub)
    }
}

/// Creates a fresh builder positioned on a new, empty tree.
pub fn build() -> Component {
    Component::new()
}

/// Chainable handle bound to a current position in an owned element tree.
#[derive(Debug, Clone)]
pub struct Component {
    tree: TreeArena,
    cursor: generational_arena::Index,
}

impl Default for Component {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! element_methods {
    ($($method:ident => $variant:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Appends a `", stringify!($method), "` element at the current level.")]
            pub fn $method(self) -> Self {
                self.append(Tag::$variant)
            }
        )+
    };
}

impl Component {
    pub fn new() -> Self {
        let tree = TreeArena::new();
        let cursor = tree.root();
        Self { tree, cursor }
    }

    /// Appends an element as the last child of the current node. The current
    /// position stays put, so further appends create siblings.
    #[instrument(level = "trace", skip(self))]
    pub fn append(mut self, tag: Tag) -> Self {
        self.tree.insert_element(ElementData::new(tag), self.cursor);
        self
    }

    /// Appends an element carrying either initial attributes or an entire
    /// sub-tree of children, depending on the argument variant.
    #[instrument(level = "trace", skip(self, arg))]
    pub fn append_with(mut self, tag: Tag, arg: impl Into<ElementArg>) -> Self {
        match arg.into() {
            ElementArg::Attributes(attributes) => {
                self.tree
                    .insert_element(ElementData::with_attributes(tag, attributes), self.cursor);
            }
            ElementArg::SubTree(sub) => {
                let idx = self.tree.insert_element(ElementData::new(tag), self.cursor);
                self.tree.graft(&sub.tree, idx);
            }
        }
        self
    }

    /// Splices another builder's tree in as children of the current node,
    /// in that builder's append order.
    #[instrument(level = "trace", skip(self, other))]
    pub fn subtree(mut self, other: Component) -> Self {
        self.tree.graft(&other.tree, self.cursor);
        self
    }

    /// Moves the current position into the last-appended child, so nested
    /// appends become children instead of siblings.
    #[instrument(level = "trace", skip(self))]
    pub fn descend(mut self) -> DomResult<Self> {
        let last = self
            .tree
            .get_node(self.cursor)
            .and_then(TreeNode::last_child);

        match last {
            Some(idx) => {
                self.cursor = idx;
                Ok(self)
            }
            None => Err(DomError::NoLastChild { op: "descend" }),
        }
    }

    /// Moves the current position to the parent. No-op on the root.
    #[instrument(level = "trace", skip(self))]
    pub fn ascend(mut self) -> Self {
        if let Some(parent) = self.tree.get_node(self.cursor).and_then(|node| node.parent) {
            self.cursor = parent;
        }
        self
    }

    /// Sets an attribute on the most recently appended child.
    #[instrument(level = "trace", skip(self))]
    pub fn attr(self, key: &str, value: &str) -> DomResult<Self> {
        let (key, value) = (key.to_string(), value.to_string());
        self.with_last_node("attr", move |node| {
            if let Some(element) = node.element.as_mut() {
                element.attributes.insert(key, value);
            }
        })
    }

    pub fn id(self, value: &str) -> DomResult<Self> {
        self.attr("id", value)
    }

    pub fn class_name(self, value: &str) -> DomResult<Self> {
        self.attr("class", value)
    }

    /// Sets the element's text content (materialized as inner text, not as a
    /// markup attribute).
    pub fn text(self, value: &str) -> DomResult<Self> {
        self.attr(TEXT_ATTR, value)
    }

    /// Tags the most recently appended node for later lookup. A node-level
    /// marker, not a DOM attribute.
    #[instrument(level = "trace", skip(self))]
    pub fn data_key(self, value: &str) -> DomResult<Self> {
        let value = value.to_string();
        self.with_last_node("data_key", move |node| node.data_key = Some(value))
    }

    /// Tags the most recently appended node for later lookup. A node-level
    /// marker, not a DOM attribute.
    #[instrument(level = "trace", skip(self))]
    pub fn query_key(self, value: &str) -> DomResult<Self> {
        let value = value.to_string();
        self.with_last_node("query_key", move |node| node.query_key = Some(value))
    }

    fn with_last_node(
        mut self,
        op: &'static str,
        mutate: impl FnOnce(&mut TreeNode),
    ) -> DomResult<Self> {
        let last = self
            .tree
            .get_node(self.cursor)
            .and_then(TreeNode::last_child)
            .ok_or(DomError::NoLastChild { op })?;

        if let Some(node) = self.tree.get_node_mut(last) {
            mutate(node);
        }
        Ok(self)
    }

    /// First node tagged with the given data key, in pre-order.
    pub fn find_by_data_key(&self, key: &str) -> Option<&TreeNode> {
        self.tree
            .iter()
            .find(|(_, node)| node.data_key.as_deref() == Some(key))
            .map(|(_, node)| node)
    }

    /// First node tagged with the given query key, in pre-order.
    pub fn find_by_query_key(&self, key: &str) -> Option<&TreeNode> {
        self.tree
            .iter()
            .find(|(_, node)| node.query_key.as_deref() == Some(key))
            .map(|(_, node)| node)
    }

    /// Materializes the whole tree from its root into a [`Fragment`].
    /// Non-destructive: the logical tree is untouched and further chaining
    /// or repeated rendering is fine.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self) -> Fragment {
        Fragment::from_tree(&self.tree)
    }

    /// ASCII rendering of the logical tree, for debugging.
    pub fn to_tree_string(&self) -> termtree::Tree<String> {
        self.tree.to_tree_string()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    for_each_tag!(element_methods);
}
