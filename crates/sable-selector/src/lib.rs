//! Order-checked construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate builds selectors; it never parses them.
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - element, id, classes, attributes, pseudo-classes, pseudo-element
//!   - written as `element#id.class[attr]:pseudo-class::pseudo-element`
//!   - fragments must be added in that order, and element, id and
//!     pseudo-element at most once
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - descendant (` `), child (`>`), next-sibling (`+`), subsequent-sibling (`~`)
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Example
//!
//! ```
//! use sable_selector::{Combinator, SelectorError, combine, element};
//!
//! let mut left = element("div");
//! left.set_id("main")?.add_class("container")?.add_class("draggable")?;
//! let mut right = element("table");
//! right.set_id("data")?;
//!
//! let selector = combine(left, Combinator::NextSibling, right);
//! assert_eq!(selector.to_css(), "div#main.container.draggable + table#data");
//! # Ok::<(), SelectorError>(())
//! ```

/// The selector builder and its serialization.
pub mod builder;
/// Combinator symbols per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Builder errors.
pub mod error;
/// Stateless entry points that start a builder.
pub mod facade;
/// Fragment kinds and their required order.
pub mod fragment;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use error::{Result, SelectorError};
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use fragment::FragmentKind;
pub use specificity::Specificity;
