//! Fluent builder for HTML element trees.
//!
//! Build a fragment by chaining element appends, move the current position
//! with [`Component::descend`] / [`Component::ascend`], set attributes on
//! the most recently appended element, and materialize the whole tree with
//! [`Component::render`]:
//!
//! ```
//! use rsdom::{build, RenderOptions};
//!
//! # fn main() -> rsdom::DomResult<()> {
//! let component = build()
//!     .div().id("content")?
//!     .descend()?
//!     .span().text("hello")?
//!     .ascend()
//!     .p();
//!
//! let fragment = component.render();
//! assert_eq!(
//!     fragment.to_html(&RenderOptions::default()),
//!     r#"<div id="content"><span>hello</span></div><p></p>"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The element vocabulary is a fixed set of chainable methods (one per
//! allowed HTML tag, `body` excluded), so misspelled tag names fail to
//! compile instead of failing at runtime. Trees from separate builders
//! compose via [`Component::subtree`] and [`Component::append_with`].

pub mod arena;
pub mod builder;
pub mod element;
pub mod errors;
pub mod render;
pub mod tag;
pub mod util;

pub use arena::{TreeArena, TreeNode};
pub use builder::{build, Component, ElementArg};
pub use element::{merge_attributes, AttrMap, ElementData, TEXT_ATTR};
pub use errors::{DomError, DomResult};
pub use render::{Fragment, RenderOptions, RenderedElement};
pub use tag::Tag;
