//! Resolution state shared by both matcher variants.
//!
//! A matcher starts [`MatchState::Unresolved`] and moves to
//! [`MatchState::Resolved`] exactly once. There is no way back: the first
//! branch that passes owns the result for the lifetime of the matcher.

use std::fmt;

/// The result slot of a matcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MatchState<U> {
    /// No branch has matched yet.
    #[default]
    Unresolved,
    /// A branch matched and produced this value.
    Resolved(U),
}

impl<U> MatchState<U> {
    /// Returns `true` once a branch has matched.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Borrow the resolved value, if any.
    pub fn as_resolved(&self) -> Option<&U> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }

    /// Resolve with the value produced by `produce`.
    ///
    /// `produce` only runs while unresolved. Returns `true` when this call
    /// performed the transition.
    pub fn resolve_with(&mut self, produce: impl FnOnce() -> U) -> bool {
        match self {
            Self::Resolved(_) => false,
            Self::Unresolved => {
                *self = Self::Resolved(produce());
                true
            }
        }
    }

    /// Consume the slot, yielding the resolved value if any.
    pub fn into_resolved(self) -> Option<U> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }
}

/// Which chained operation a branch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    When,
    WhenAny,
    WhenAll,
    WhenNone,
    WhenWithFn,
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::When => write!(f, "when"),
            Self::WhenAny => write!(f, "when_any"),
            Self::WhenAll => write!(f, "when_all"),
            Self::WhenNone => write!(f, "when_none"),
            Self::WhenWithFn => write!(f, "when_with_fn"),
        }
    }
}
