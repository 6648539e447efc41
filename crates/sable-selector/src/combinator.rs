//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::str::FromStr;

use sable_common::warning::warn_once;
use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::error::{Result, SelectorError};

/// The relation between a builder and the builder chained after it.
///
/// Serializes to its symbol verbatim; the builder pads it with one space on
/// each side, so the descendant combinator renders as three spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(serialize = " ")]
    #[serde(rename = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    #[serde(rename = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    #[strum(serialize = "+")]
    #[serde(rename = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that follows
    /// element A (not necessarily immediately), where A and B share the
    /// same parent."
    #[strum(serialize = "~")]
    #[serde(rename = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's symbol as written in a selector.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }

    /// The symbol as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            ' ' => Ok(Self::Descendant),
            '>' => Ok(Self::Child),
            '+' => Ok(Self::NextSibling),
            '~' => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::UnknownCombinator(other.to_string())),
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Parse a combinator symbol.
    ///
    /// Surrounding whitespace is tolerated (`" > "` is a child combinator
    /// and any run of whitespace is a descendant combinator), with a
    /// warning, since the builder adds its own padding.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || SelectorError::UnknownCombinator(s.to_string());

        let trimmed = s.trim();
        let combinator = if trimmed.is_empty() {
            if s.is_empty() {
                return Err(unknown());
            }
            Self::Descendant
        } else {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Self::try_from(symbol).map_err(|_| unknown())?,
                _ => return Err(unknown()),
            }
        };

        if s != combinator.as_str() {
            warn_once(
                "Selector",
                &format!("combinator {s:?} normalized to {:?}", combinator.as_str()),
            );
        }
        Ok(combinator)
    }
}
