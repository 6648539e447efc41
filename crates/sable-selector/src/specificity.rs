//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

use std::ops::Add;

use serde::Serialize;

use crate::builder::SelectorBuilder;
use crate::fragment::FragmentKind;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// The contribution of a single fragment.
    ///
    /// Pseudo-class arguments are not inspected, so `:not(#a)` counts as
    /// one pseudo-class rather than taking its argument's specificity.
    #[must_use]
    pub fn of(kind: FragmentKind, value: &str) -> Self {
        match kind {
            FragmentKind::Id => Self(1, 0, 0),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                Self(0, 1, 0)
            }
            // [§ 5.2](https://www.w3.org/TR/selectors-4/#universal-selector)
            // "The universal selector ... does not affect the specificity"
            FragmentKind::Element if value == "*" => Self::default(),
            FragmentKind::Element | FragmentKind::PseudoElement => Self(0, 0, 1),
        }
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

impl SelectorBuilder {
    /// Specificity of the whole selector, including every chained builder.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let own = self
            .fragments()
            .map(|(kind, value)| Specificity::of(kind, value))
            .fold(Specificity::default(), Add::add);

        self.combinators()
            .iter()
            .map(|(_, right)| right.specificity())
            .fold(own, Add::add)
    }
}
