//! Subjectless matching over pre-computed booleans.
//!
//! A [`ConditionMatcher`] replaces an `if / else if / else` chain with a
//! single expression. Conditions are plain `bool`s the caller has already
//! computed; results are constants or zero-argument producers that only run
//! for the winning branch.
//!
//! ```rust,ignore
//! let (x, a, b) = (-4, -4, -2);
//! let n = match_cond().when(x == a, 10).when(x == b, 100).otherwise(5);
//! assert_eq!(n, 10);
//! ```

use tracing::debug;

use crate::config::MatchConfig;
use crate::error::{MatchError, MatchResult};
use crate::report::{BranchLog, Outcome};
use crate::state::{BranchKind, MatchState};
use crate::transform::Produce;

/// Fluent first-match-wins matcher without a subject.
#[derive(Debug, Clone)]
#[must_use = "a matcher does nothing until a terminal call such as `otherwise`"]
pub struct ConditionMatcher<U> {
    state: MatchState<U>,
    log: BranchLog,
}

impl<U> Default for ConditionMatcher<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ConditionMatcher<U> {
    pub fn new() -> Self {
        Self {
            state: MatchState::Unresolved,
            log: BranchLog::default(),
        }
    }

    /// Attach a label and tracing options.
    pub fn with_config(mut self, config: &MatchConfig) -> Self {
        self.log.configure(config);
        self
    }

    fn branch(
        mut self,
        kind: BranchKind,
        passes: impl FnOnce() -> bool,
        result: impl Produce<U>,
    ) -> Self {
        if self.state.is_resolved() {
            return self;
        }

        let passed = passes();
        self.log.record(kind, passed);
        if passed {
            self.state.resolve_with(|| result.produce());
        }
        self
    }

    /// Match when `condition` is `true`.
    pub fn when<R: Produce<U>>(self, condition: bool, result: R) -> Self {
        self.branch(BranchKind::When, || condition, result)
    }

    /// Match when at least one condition is `true`. An empty list never
    /// matches.
    pub fn when_any<I, R>(self, conditions: I, result: R) -> Self
    where
        I: IntoIterator<Item = bool>,
        R: Produce<U>,
    {
        self.branch(BranchKind::WhenAny, || conditions.into_iter().any(|c| c), result)
    }

    /// Match when every condition is `true`. An empty list always matches.
    pub fn when_all<I, R>(self, conditions: I, result: R) -> Self
    where
        I: IntoIterator<Item = bool>,
        R: Produce<U>,
    {
        self.branch(BranchKind::WhenAll, || conditions.into_iter().all(|c| c), result)
    }

    /// Match when no condition is `true`. An empty list always matches.
    pub fn when_none<I, R>(self, conditions: I, result: R) -> Self
    where
        I: IntoIterator<Item = bool>,
        R: Produce<U>,
    {
        self.branch(
            BranchKind::WhenNone,
            || !conditions.into_iter().any(|c| c),
            result,
        )
    }

    /// Returns the matched result, or `result` when no branch matched.
    ///
    /// A producer passed here only runs when nothing matched.
    pub fn otherwise<R: Produce<U>>(self, result: R) -> U {
        match self.state {
            MatchState::Resolved(value) => value,
            MatchState::Unresolved => {
                debug!(
                    label = self.log.label().unwrap_or_default(),
                    branches = self.log.branches_evaluated(),
                    "no branch matched, using default"
                );
                result.produce()
            }
        }
    }

    /// Returns the matched result, or `U::default()` when no branch matched.
    pub fn otherwise_default(self) -> U
    where
        U: Default,
    {
        self.otherwise(U::default)
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

    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    pub fn resolved(&self) -> Option<&U> {
        self.state.as_resolved()
    }

    pub fn outcome(&self) -> &Outcome {
        self.log.outcome()
    }
}
