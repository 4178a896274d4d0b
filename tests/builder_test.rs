//! Tests for the fluent Component builder

use rsdom::util::testing::init_test_setup;
use rsdom::{build, AttrMap, DomError, DomResult, Tag};

#[test]
fn given_two_appends_at_root_when_rendering_then_siblings_follow_call_order() {
    init_test_setup();

    // Act
    let fragment = build().div().div().render();

    // Assert
    let tags: Vec<_> = fragment.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(tags, ["div", "div"]);
}

#[test]
fn given_mixed_appends_when_rendering_then_order_is_preserved_per_level() -> DomResult<()> {
    let fragment = build()
        .ul()
        .descend()?
        .li()
        .text("one")?
        .li()
        .text("two")?
        .render();

    let list = &fragment.children[0];
    assert_eq!(list.tag, "ul");
    assert_eq!(list.children.len(), 2);
    assert_eq!(list.children[0].text.as_deref(), Some("one"));
    assert_eq!(list.children[1].text.as_deref(), Some("two"));
    Ok(())
}

#[test]
fn given_fresh_builder_when_setting_attribute_then_fails_with_no_last_child() {
    // Arrange
    let builder = build();

    // Act
    let result = builder.attr("id", "a");

    // Assert
    assert_eq!(result.unwrap_err(), DomError::NoLastChild { op: "attr" });
}

#[test]
fn given_fresh_builder_when_descending_then_fails_with_no_last_child() {
    let result = build().descend();
    assert_eq!(result.unwrap_err(), DomError::NoLastChild { op: "descend" });
}

#[test]
fn given_fresh_builder_when_tagging_then_fails_with_no_last_child() {
    let result = build().data_key("needle");
    assert_eq!(
        result.unwrap_err(),
        DomError::NoLastChild { op: "data_key" }
    );
}

#[test]
fn given_descend_then_ascend_when_appending_then_sibling_lands_at_original_level() -> DomResult<()>
{
    // Arrange: descend into the div, come straight back up
    let builder = build().div().descend()?.ascend();

    // Act: the p must become a sibling of the div
    let fragment = builder.p().render();

    // Assert
    assert_eq!(fragment.children.len(), 2);
    assert_eq!(fragment.children[0].tag, "div");
    assert_eq!(fragment.children[1].tag, "p");
    Ok(())
}

#[test]
fn given_root_position_when_ascending_repeatedly_then_position_stays_on_root() {
    let fragment = build().ascend().ascend().div().render();
    assert_eq!(fragment.children.len(), 1);
}

#[test]
fn given_chained_build_when_rendering_then_structure_matches() -> DomResult<()> {
    // div#a > span("hi"), then a p appended after ascending back
    let component = build()
        .div()
        .id("a")?
        .descend()?
        .span()
        .text("hi")?
        .ascend()
        .p();

    let fragment = component.render();

    assert_eq!(fragment.children.len(), 2);

    let div = &fragment.children[0];
    assert_eq!(div.tag, "div");
    assert_eq!(div.attributes.get("id").map(String::as_str), Some("a"));
    assert_eq!(div.children.len(), 1);

    let span = &div.children[0];
    assert_eq!(span.tag, "span");
    assert_eq!(span.text.as_deref(), Some("hi"));
    assert!(span.children.is_empty());

    assert_eq!(fragment.children[1].tag, "p");
    Ok(())
}

#[test]
fn given_attribute_setters_when_chaining_then_last_appended_child_is_targeted() -> DomResult<()> {
    let fragment = build().div().span().class_name("highlight")?.render();

    // class must land on the span, not the div
    assert!(fragment.children[0].attributes.is_empty());
    assert_eq!(
        fragment.children[1]
            .attributes
            .get("class")
            .map(String::as_str),
        Some("highlight")
    );
    Ok(())
}

#[test]
fn given_sub_builder_when_splicing_then_its_tree_lands_under_current_node() -> DomResult<()> {
    // Arrange
    let item = build().li().text("leaf")?;

    // Act
    let fragment = build().ul().descend()?.subtree(item).render();

    // Assert
    let list = &fragment.children[0];
    assert_eq!(list.tag, "ul");
    assert_eq!(list.children.len(), 1);
    assert_eq!(list.children[0].tag, "li");
    assert_eq!(list.children[0].text.as_deref(), Some("leaf"));
    Ok(())
}

#[test]
fn given_spliced_subtree_when_setting_attribute_then_last_grafted_child_is_targeted(
) -> DomResult<()> {
    let sub = build().span();

    let fragment = build().subtree(sub).class_name("tagged")?.render();

    assert_eq!(
        fragment.children[0]
            .attributes
            .get("class")
            .map(String::as_str),
        Some("tagged")
    );
    Ok(())
}

#[test]
fn given_attributes_arg_when_appending_then_element_starts_with_them() {
    let mut attrs = AttrMap::new();
    attrs.insert("class".to_string(), "wide".to_string());

    let fragment = build().append_with(Tag::Div, attrs).render();

    assert_eq!(
        fragment.children[0]
            .attributes
            .get("class")
            .map(String::as_str),
        Some("wide")
    );
}

#[test]
fn given_subtree_arg_when_appending_then_element_wraps_the_grafted_tree() -> DomResult<()> {
    let inner = build().span().text("x")?;

    let fragment = build().append_with(Tag::Div, inner).render();

    let div = &fragment.children[0];
    assert_eq!(div.tag, "div");
    assert_eq!(div.children.len(), 1);
    assert_eq!(div.children[0].tag, "span");
    Ok(())
}

#[test]
fn given_tagged_nodes_when_looking_up_then_first_preorder_match_wins() -> DomResult<()> {
    let component = build()
        .div()
        .descend()?
        .span()
        .data_key("needle")?
        .ascend()
        .p()
        .query_key("probe")?;

    let by_data = component.find_by_data_key("needle").expect("tagged node");
    assert_eq!(by_data.element.as_ref().map(|e| e.tag), Some(Tag::Span));

    let by_query = component.find_by_query_key("probe").expect("tagged node");
    assert_eq!(by_query.element.as_ref().map(|e| e.tag), Some(Tag::P));

    assert!(component.find_by_data_key("missing").is_none());
    Ok(())
}

#[test]
fn given_rendered_builder_when_chaining_further_then_tree_was_untouched() {
    init_test_setup();

    let component = build().div();
    let first = component.render();

    let second = component.p().render();

    assert_eq!(first.children.len(), 1);
    assert_eq!(second.children.len(), 2);
}

#[test]
fn given_nested_structure_when_inspecting_then_depth_and_count_match() -> DomResult<()> {
    let empty = build();
    assert_eq!(empty.node_count(), 1);
    assert_eq!(empty.depth(), 1);

    let nested = build().div().descend()?.span();
    assert_eq!(nested.node_count(), 3);
    assert_eq!(nested.depth(), 3);
    Ok(())
}
