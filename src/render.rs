//! Materialization of the logical tree into renderable output.
//!
//! A render is a full pre-order walk from the root: one [`RenderedElement`]
//! per tree node, attributes copied verbatim (text content split out), and
//! children attached in append order. The walk never mutates the source
//! tree, so rendering can be repeated at will.

use std::fmt;

use generational_arena::Index;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::arena::TreeArena;
use crate::element::{AttrMap, TEXT_ATTR};
use crate::tag::Tag;

/// Output formatting knobs for HTML serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit newlines and indentation
    pub pretty: bool,
    /// Spaces per nesting level when pretty printing
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

/// One materialized element: tag, attributes, optional text, children.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedElement {
    pub tag: String,
    pub attributes: AttrMap,
    pub text: Option<String>,
    pub children: Vec<RenderedElement>,
}

/// Materialized root children of a tree: the fragment-like container that
/// would be attached into a document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Fragment {
    pub children: Vec<RenderedElement>,
}

impl Fragment {
    /// Depth-first pre-order materialization of the entire tree.
    #[instrument(level = "debug", skip(tree))]
    pub(crate) fn from_tree(tree: &TreeArena) -> Self {
        let children = tree
            .get_node(tree.root())
            .map(|root| {
                root.children
                    .iter()
                    .filter_map(|&child| materialize(tree, child))
                    .collect()
            })
            .unwrap_or_default();

        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serializes the fragment to an HTML string.
    pub fn to_html(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out, options, 0);
        }
        out
    }

    /// ASCII rendering of the fragment, one line per element.
    pub fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(RenderedElement::to_tree_string)
            .collect();
        Tree::new("fragment".to_string()).with_leaves(leaves)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_html(&RenderOptions::default()))
    }
}

fn materialize(tree: &TreeArena, node_idx: Index) -> Option<RenderedElement> {
    let node = tree.get_node(node_idx)?;
    let element = node.element.as_ref()?;

    let mut attributes = element.attributes.clone();
    let text = attributes.remove(TEXT_ATTR);

    let children = node
        .children
        .iter()
        .filter_map(|&child| materialize(tree, child))
        .collect();

    Some(RenderedElement {
        tag: element.tag.as_str().to_string(),
        attributes,
        text,
        children,
    })
}

impl RenderedElement {
    fn write_html(&self, out: &mut String, options: &RenderOptions, level: usize) {
        let pad = if options.pretty {
            " ".repeat(options.indent * level)
        } else {
            String::new()
        };

        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.tag);

        if !self.attributes.is_empty() {
            out.push(' ');
            let attrs = self
                .attributes
                .iter()
                .map(|(key, value)| format!("{}=\"{}\"", key, escape_html(value)))
                .join(" ");
            out.push_str(&attrs);
        }
        out.push('>');

        let void = Tag::from_name(&self.tag).map(|tag| tag.is_void()).unwrap_or(false);
        if void {
            if options.pretty {
                out.push('\n');
            }
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }

        if !self.children.is_empty() {
            if options.pretty {
                out.push('\n');
            }
            for child in &self.children {
                child.write_html(out, options, level + 1);
            }
            out.push_str(&pad);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        if options.pretty {
            out.push('\n');
        }
    }

    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(RenderedElement::to_tree_string)
            .collect();
        Tree::new(self.label()).with_leaves(leaves)
    }

    fn label(&self) -> String {
        let mut label = self.tag.clone();
        if let Some(id) = self.attributes.get("id") {
            label.push('#');
            label.push_str(id);
        }
        if let Some(class) = self.attributes.get("class") {
            label.push('.');
            label.push_str(class);
        }
        label
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
