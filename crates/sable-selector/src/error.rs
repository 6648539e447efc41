//! Errors raised while building a selector.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// A rejected builder call.
///
/// The builder is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was added after a fragment that must follow it.
    #[error(
        "cannot add {attempted} after {watermark}: selector parts should be arranged in the \
         following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// The kind the caller tried to add.
        attempted: FragmentKind,
        /// The highest kind already present.
        watermark: FragmentKind,
    },

    /// Element, id or pseudo-element was assigned a second time.
    #[error(
        "{kind} is already set: element, id and pseudo-element should not occur more than \
         once inside the selector"
    )]
    Occurrence {
        /// The single-occurrence kind that was repeated.
        kind: FragmentKind,
    },

    /// A combinator symbol other than `' '`, `'>'`, `'+'` or `'~'`.
    #[error("unknown combinator {0:?}: expected one of ' ', '>', '+', '~'")]
    UnknownCombinator(String),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
