//! Integration tests for specificity and debug serialization.

use sable_selector::{Combinator, Specificity, attr, class, combine, element, id, pseudo_element};

#[test]
fn test_specificity_single_fragments() {
    assert_eq!(element("div").specificity(), Specificity(0, 0, 1));
    assert_eq!(id("main").specificity(), Specificity(1, 0, 0));
    assert_eq!(class("btn").specificity(), Specificity(0, 1, 0));
    assert_eq!(attr("href").specificity(), Specificity(0, 1, 0));
    assert_eq!(pseudo_element("before").specificity(), Specificity(0, 0, 1));
}

#[test]
fn test_specificity_compound() {
    // a#home.nav[href]:hover::after
    let mut selector = element("a");
    selector
        .set_id("home")
        .unwrap()
        .add_class("nav")
        .unwrap()
        .add_attribute("href")
        .unwrap()
        .add_pseudo_class("hover")
        .unwrap()
        .set_pseudo_element("after")
        .unwrap();
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
}

#[test]
fn test_specificity_includes_chained_builders() {
    let mut div = element("div");
    div.set_id("main")
        .unwrap()
        .add_class("container")
        .unwrap()
        .add_class("draggable")
        .unwrap();
    let mut table = element("table");
    table.set_id("data").unwrap();

    let selector = combine(div, Combinator::NextSibling, table);
    assert_eq!(selector.specificity(), Specificity(2, 2, 2));
}

#[test]
fn test_universal_selector_has_no_specificity() {
    let selector = combine(element("*"), Combinator::Child, element("p"));
    assert_eq!(selector.specificity(), Specificity(0, 0, 1));
}

#[test]
fn test_serialize_to_json() {
    let mut selector = element("ul");
    selector.add_class("menu").unwrap();
    let selector = combine(selector, Combinator::Child, element("li"));

    let json = serde_json::to_value(&selector).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "element": "ul",
            "classes": ["menu"],
            "combinators": [[">", { "element": "li" }]]
        })
    );
}
