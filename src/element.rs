//! Element descriptors: tag plus attribute map.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{DomError, DomResult};
use crate::tag::Tag;

/// Attribute name to value mapping. Insertion order is irrelevant, so a
/// sorted map keeps serialization deterministic.
pub type AttrMap = BTreeMap<String, String>;

/// Reserved attribute holding an element's text content. Split out of the
/// attribute map during materialization.
pub const TEXT_ATTR: &str = "textContent";

/// Describes one renderable element: tag name plus attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: Tag,
    pub attributes: AttrMap,
}

impl ElementData {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: AttrMap::new(),
        }
    }

    pub fn with_attributes(tag: Tag, attributes: AttrMap) -> Self {
        Self { tag, attributes }
    }
}

/// CSS-selector-like label, e.g. `div#main.panel`. Used for tree display.
impl fmt::Display for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        if let Some(id) = self.attributes.get("id") {
            write!(f, "#{}", id)?;
        }
        if let Some(class) = self.attributes.get("class") {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

/// Merges attribute maps left to right, later sources winning on key
/// collisions. Requires at least two sources.
pub fn merge_attributes(sources: &[&AttrMap]) -> DomResult<AttrMap> {
    if sources.len() < 2 {
        return Err(DomError::MergeArity {
            given: sources.len(),
        });
    }

    let mut merged = AttrMap::new();
    for source in sources {
        for (key, value) in source.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn merge_with_fewer_than_two_sources_fails() {
        let single = attrs(&[("id", "a")]);
        let result = merge_attributes(&[&single]);
        assert_eq!(result, Err(DomError::MergeArity { given: 1 }));
    }

    #[test]
    fn merge_later_sources_win() {
        let base = attrs(&[("id", "a"), ("class", "old")]);
        let overlay = attrs(&[("class", "new")]);

        let merged = merge_attributes(&[&base, &overlay]).unwrap();

        assert_eq!(merged.get("id").map(String::as_str), Some("a"));
        assert_eq!(merged.get("class").map(String::as_str), Some("new"));
    }

    #[test]
    fn display_shows_selector_style_label() {
        let mut element = ElementData::new(Tag::Div);
        element.attributes.insert("id".into(), "main".into());
        element.attributes.insert("class".into(), "panel".into());

        assert_eq!(element.to_string(), "div#main.panel");
        assert_eq!(ElementData::new(Tag::Span).to_string(), "span");
    }
}
