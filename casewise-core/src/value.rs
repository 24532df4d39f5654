//! Subject-bound matching.
//!
//! A [`ValueMatcher`] owns a subject and walks a chain of branches. The first
//! branch whose condition passes computes the result; every later branch is
//! skipped without evaluating anything. The terminal call returns the result,
//! falling back to a default when nothing matched.
//!
//! ```rust,ignore
//! use casewise_core::prelude::*;
//!
//! fn double(x: &i32) -> i32 { x * 2 }
//! fn add_five(x: &i32) -> i32 { x + 5 }
//!
//! let n = match_on(10).when(10, double).when(0, add_five).otherwise(-2);
//! assert_eq!(n, 20);
//! ```

use tracing::debug;

use crate::condition::Condition;
use crate::config::MatchConfig;
use crate::error::{MatchError, MatchResult};
use crate::report::{BranchLog, Outcome};
use crate::state::{BranchKind, MatchState};
use crate::transform::Transform;

/// Fluent first-match-wins matcher over a subject of type `T`, producing a
/// result of type `U`.
///
/// Conditions are [`Condition<T>`] values (literals or predicates over `&T`)
/// and results are [`Transform<T, U>`] values (constants or mappings over
/// `&T`). Predicates and transforms run at most once each, in chain order, and
/// only while no earlier branch has matched.
#[derive(Debug, Clone)]
#[must_use = "a matcher does nothing until a terminal call such as `otherwise`"]
pub struct ValueMatcher<T, U> {
    subject: T,
    state: MatchState<U>,
    log: BranchLog,
}

impl<T, U> ValueMatcher<T, U> {
    /// Create an unresolved matcher that owns `subject`.
    pub fn new(subject: T) -> Self {
        Self {
            subject,
            state: MatchState::Unresolved,
            log: BranchLog::default(),
        }
    }

    /// Attach a label and tracing options.
    pub fn with_config(mut self, config: &MatchConfig) -> Self {
        self.log.configure(config);
        self
    }

    /// Evaluates one branch: `passes` and then `transform`, both only if
    /// still unresolved, `transform` only if `passes` returned `true`.
    fn branch(
        mut self,
        kind: BranchKind,
        passes: impl FnOnce(&T) -> bool,
        transform: impl Transform<T, U>,
    ) -> Self {
        if self.state.is_resolved() {
            return self;
        }

        let passed = passes(&self.subject);
        self.log.record(kind, passed);
        if passed {
            let subject = &self.subject;
            self.state.resolve_with(|| transform.apply(subject));
        }
        self
    }

    /// Match when `condition` holds for the subject.
    ///
    /// A literal condition is compared with `==`; a predicate is called with
    /// the subject.
    ///
    /// Closures are picked up through a blanket impl over `Fn(&T)`, so an
    /// inline closure needs its parameter type written out:
    /// `.when(|x: &i32| *x > 0, |x: &i32| x + 1)`. Plain `|x| *x > 0` fails
    /// with "type annotations needed". Named functions need no annotation.
    pub fn when<C, F>(self, condition: C, transform: F) -> Self
    where
        C: Condition<T>,
        F: Transform<T, U>,
    {
        self.branch(BranchKind::When, |subject| condition.test(subject), transform)
    }

    /// Match when at least one of `conditions` holds.
    ///
    /// Stops at the first passing condition. An empty list never matches.
    pub fn when_any<I, F>(self, conditions: I, transform: F) -> Self
    where
        I: IntoIterator,
        I::Item: Condition<T>,
        F: Transform<T, U>,
    {
        self.branch(
            BranchKind::WhenAny,
            |subject| conditions.into_iter().any(|c| c.test(subject)),
            transform,
        )
    }

    /// Match when every predicate holds.
    ///
    /// Only functions are accepted: a subject cannot equal two different
    /// literals at once, so conjoined literals would never match. Stops at
    /// the first failing predicate. An empty list always matches.
    pub fn when_all<I, F>(self, predicates: I, transform: F) -> Self
    where
        I: IntoIterator,
        I::Item: Fn(&T) -> bool,
        F: Transform<T, U>,
    {
        self.branch(
            BranchKind::WhenAll,
            |subject| predicates.into_iter().all(|p| p(subject)),
            transform,
        )
    }

    /// Match when none of `conditions` holds.
    ///
    /// Stops at the first passing condition. An empty list always matches.
    pub fn when_none<I, F>(self, conditions: I, transform: F) -> Self
    where
        I: IntoIterator,
        I::Item: Condition<T>,
        F: Transform<T, U>,
    {
        self.branch(
            BranchKind::WhenNone,
            |subject| !conditions.into_iter().any(|c| c.test(subject)),
            transform,
        )
    }

    /// Match on a value derived from the subject.
    ///
    /// `derive` runs once, only while unresolved; `condition` and `transform`
    /// then see the derived value instead of the subject.
    pub fn when_with_fn<V, D, C, F>(mut self, derive: D, condition: C, transform: F) -> Self
    where
        D: FnOnce(&T) -> V,
        C: Condition<V>,
        F: Transform<V, U>,
    {
        if self.state.is_resolved() {
            return self;
        }

        let derived = derive(&self.subject);
        let passed = condition.test(&derived);
        self.log.record(BranchKind::WhenWithFn, passed);
        if passed {
            self.state.resolve_with(|| transform.apply(&derived));
        }
        self
    }

    /// Returns the matched result, or `transform` applied to the subject when
    /// no branch matched.
    ///
    /// `transform` is not evaluated if a branch already matched.
    pub fn otherwise<F>(self, transform: F) -> U
    where
        F: Transform<T, U>,
    {
        match self.state {
            MatchState::Resolved(value) => value,
            MatchState::Unresolved => {
                debug!(
                    label = self.log.label().unwrap_or_default(),
                    branches = self.log.branches_evaluated(),
                    "no branch matched, using default"
                );
                transform.apply(&self.subject)
            }
        }
    }

    /// Returns the matched result, or `U::default()` when no branch matched.
    pub fn otherwise_default(self) -> U
    where
        U: Default,
    {
        self.otherwise(|_: &T| U::default())
    }

    /// Returns the matched result, or [`MatchError::Unmatched`].
    pub fn try_otherwise(self) -> MatchResult<U> {
        let err = MatchError::unmatched(self.log.label(), self.log.branches_evaluated());
        self.into_option().ok_or(err)
    }

    /// Returns the matched result, if any.
    pub fn into_option(self) -> Option<U> {
        self.state.into_resolved()
    }

    /// Borrow the subject.
    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Check if a branch has matched.
    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Borrow the matched result, if any.
    pub fn resolved(&self) -> Option<&U> {
        self.state.as_resolved()
    }

    /// Which branch matched, and how many were evaluated.
    pub fn outcome(&self) -> &Outcome {
        self.log.outcome()
    }
}
