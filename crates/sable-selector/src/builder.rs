//! The selector builder.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! A [`SelectorBuilder`] holds one compound selector plus the builders
//! chained after it. Fragments must be added in [`FragmentKind`] order; the
//! builder remembers the highest kind added so far (its watermark) and
//! rejects anything lower.

use std::fmt;

use sable_common::warning::warn_once;
use serde::Serialize;

use crate::combinator::Combinator;
use crate::error::{Result, SelectorError};
use crate::fragment::FragmentKind;

/// Accumulates selector fragments and serializes them to CSS.
///
/// Builders are obtained from the facade functions ([`crate::element`],
/// [`crate::id`], ...). Every mutating call returns `&mut Self` so calls
/// chain with `?`:
///
/// ```
/// use sable_selector::{SelectorError, id};
///
/// let mut selector = id("main");
/// selector.add_class("container")?.add_class("editable")?;
/// assert_eq!(selector.to_css(), "#main.container.editable");
/// # Ok::<(), SelectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
    /// Builders chained to the right, each owned by its entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    combinators: Vec<(Combinator, SelectorBuilder)>,
    #[serde(skip)]
    watermark: FragmentKind,
}

impl SelectorBuilder {
    /// An empty builder. Callers go through the facade instead.
    pub(crate) const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
            combinators: Vec::new(),
            watermark: FragmentKind::Element,
        }
    }

    /// A fresh builder holding a single fragment.
    ///
    /// Any kind is valid on an empty builder, so this cannot fail.
    pub(crate) fn seeded(kind: FragmentKind, value: String) -> Self {
        let mut builder = Self::new();
        builder.store(kind, value);
        builder
    }

    /// Set the type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if any fragment was already added, since the
    /// element always comes first. [`SelectorError::Occurrence`] if the
    /// element is already set.
    pub fn set_element(&mut self, tag: impl Into<String>) -> Result<&mut Self> {
        self.push(FragmentKind::Element, tag.into())
    }

    /// Set the id, serialized as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a class or later fragment is present.
    /// [`SelectorError::Occurrence`] if the id is already set.
    pub fn set_id(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(FragmentKind::Id, value.into())
    }

    /// Append a class, serialized as `.name`. Repeats are kept.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute or later fragment is present.
    pub fn add_class(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(FragmentKind::Class, name.into())
    }

    /// Append a raw attribute expression such as `href$=".png"`, serialized
    /// inside brackets. The expression is not validated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is
    /// present.
    pub fn add_attribute(&mut self, expr: impl Into<String>) -> Result<&mut Self> {
        self.push(FragmentKind::Attribute, expr.into())
    }

    /// Append a pseudo-class, serialized as `:name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if the pseudo-element is set.
    pub fn add_pseudo_class(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(FragmentKind::PseudoClass, name.into())
    }

    /// Set the pseudo-element, serialized as `::name`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Occurrence`] if the pseudo-element is already set.
    pub fn set_pseudo_element(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(FragmentKind::PseudoElement, name.into())
    }

    /// Chain `right` after this builder's fragments and earlier chains.
    ///
    /// No ordering is checked across the two builders.
    pub fn chain(&mut self, combinator: Combinator, right: Self) -> &mut Self {
        #[cfg(feature = "build-trace")]
        eprintln!("[SELECTOR] chain '{combinator}' {right}");

        self.combinators.push((combinator, right));
        self
    }

    /// Serialize to a CSS selector string.
    ///
    /// An empty builder serializes to the empty string.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// The type selector, if set.
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute expressions in insertion order, without brackets.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Chained builders in the order they were chained.
    #[must_use]
    pub fn combinators(&self) -> &[(Combinator, Self)] {
        &self.combinators
    }

    /// The highest fragment kind added so far.
    ///
    /// An empty builder reports [`FragmentKind::Element`].
    #[must_use]
    pub const fn watermark(&self) -> FragmentKind {
        self.watermark
    }

    /// Whether there are no fragments and nothing chained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none() && self.combinators.is_empty()
    }

    /// This builder's own fragments in serialization order, excluding
    /// chained builders.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        tagged(FragmentKind::Element, self.element.as_slice())
            .chain(tagged(FragmentKind::Id, self.id.as_slice()))
            .chain(tagged(FragmentKind::Class, &self.classes))
            .chain(tagged(FragmentKind::Attribute, &self.attributes))
            .chain(tagged(FragmentKind::PseudoClass, &self.pseudo_classes))
            .chain(tagged(FragmentKind::PseudoElement, self.pseudo_element.as_slice()))
    }

    /// Validate and store one fragment.
    ///
    /// Order is checked before occurrence, and nothing changes on error.
    fn push(&mut self, kind: FragmentKind, value: String) -> Result<&mut Self> {
        if kind < self.watermark {
            return Err(SelectorError::Order {
                attempted: kind,
                watermark: self.watermark,
            });
        }
        if kind.is_single_occurrence() && self.is_set(kind) {
            return Err(SelectorError::Occurrence { kind });
        }

        self.store(kind, value);
        Ok(self)
    }

    fn is_set(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => false,
        }
    }

    fn store(&mut self, kind: FragmentKind, value: String) {
        if value.is_empty() {
            warn_once(
                "Selector",
                &format!("empty {kind} produces an invalid selector"),
            );
        }

        #[cfg(feature = "build-trace")]
        eprintln!(
            "[SELECTOR] {kind} {value:?} watermark={} -> {kind}",
            self.watermark
        );

        match kind {
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.watermark = kind;
    }
}

fn tagged(kind: FragmentKind, values: &[String]) -> impl Iterator<Item = (FragmentKind, &str)> {
    values.iter().map(move |value| (kind, value.as_str()))
}

impl fmt::Display for SelectorBuilder {
    /// Fragments in kind order with no separators, then each chained
    /// builder as ` <combinator> <builder>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            write!(f, "{}{value}{}", kind.prefix(), kind.suffix())?;
        }
        for (combinator, right) in &self.combinators {
            write!(f, " {combinator} {right}")?;
        }
        Ok(())
    }
}
