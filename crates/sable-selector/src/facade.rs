//! Entry points for building selectors.
//!
//! Each function starts a new [`SelectorBuilder`] holding one fragment.
//! Nothing here keeps state between calls.

use crate::builder::SelectorBuilder;
use crate::combinator::Combinator;
use crate::fragment::FragmentKind;

/// Start a selector with a type selector, e.g. `element("div")`.
#[must_use]
pub fn element(tag: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Element, tag.into())
}

/// Start a selector with an id, e.g. `id("main")` for `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Id, value.into())
}

/// Start a selector with a class, e.g. `class("btn")` for `.btn`.
#[must_use]
pub fn class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Class, name.into())
}

/// Start a selector with a raw attribute expression, e.g. `attr("href")`
/// for `[href]`.
#[must_use]
pub fn attr(expr: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Attribute, expr.into())
}

/// Start a selector with a pseudo-class, e.g. `pseudo_class("hover")`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoClass, name.into())
}

/// Start a selector with a pseudo-element, e.g. `pseudo_element("before")`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoElement, name.into())
}

/// Chain `right` after `left` and return `left`.
///
/// ```
/// use sable_selector::{Combinator, combine, element};
///
/// let selector = combine(element("ul"), Combinator::Child, element("li"));
/// assert_eq!(selector.to_css(), "ul > li");
/// ```
#[must_use]
pub fn combine(
    mut left: SelectorBuilder,
    combinator: Combinator,
    right: SelectorBuilder,
) -> SelectorBuilder {
    left.chain(combinator, right);
    left
}
