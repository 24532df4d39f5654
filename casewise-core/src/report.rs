//! Outcome reporting: which branch resolved a matcher.
//!
//! Every matcher keeps a small [`Outcome`] record next to its result slot.
//! It counts the branches reached while the matcher was still unresolved and
//! remembers the one that matched. The same bookkeeping drives the `tracing`
//! events the matchers emit.

use std::fmt;

use tracing::trace;

use crate::config::MatchConfig;
use crate::state::BranchKind;

/// The branch that resolved a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedBranch {
    /// 1-based position among the branches that were evaluated
    pub ordinal: usize,
    /// Operation that produced the branch
    pub kind: BranchKind,
}

/// Diagnostic summary of a matcher's evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Label from the attached [`MatchConfig`], if any
    pub label: Option<String>,
    /// Branches reached while the matcher was unresolved
    pub branches_evaluated: usize,
    /// The winning branch, if one matched
    pub matched: Option<MatchedBranch>,
}

impl Outcome {
    /// Check if any branch matched.
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "[{}] ", label)?;
        }
        match self.matched {
            Some(MatchedBranch { ordinal, kind }) => write!(
                f,
                "matched {} at branch {} of {}",
                kind, ordinal, self.branches_evaluated
            ),
            None => write!(
                f,
                "no branch matched ({} considered)",
                self.branches_evaluated
            ),
        }
    }
}

/// Branch bookkeeping shared by both matcher variants.
#[derive(Debug, Clone, Default)]
pub(crate) struct BranchLog {
    outcome: Outcome,
    trace_misses: bool,
}

impl BranchLog {
    pub(crate) fn configure(&mut self, config: &MatchConfig) {
        self.outcome.label = config.label.clone();
        self.trace_misses = config.trace_misses.unwrap_or(false);
    }

    pub(crate) fn label(&self) -> Option<&str> {
        self.outcome.label.as_deref()
    }

    pub(crate) fn branches_evaluated(&self) -> usize {
        self.outcome.branches_evaluated
    }

    /// Records a branch reached while unresolved.
    pub(crate) fn record(&mut self, kind: BranchKind, passed: bool) {
        self.outcome.branches_evaluated += 1;
        let ordinal = self.outcome.branches_evaluated;
        let label = self.label().unwrap_or_default();

        if passed {
            trace!(label, ordinal, kind = %kind, "branch matched");
            self.outcome.matched = Some(MatchedBranch { ordinal, kind });
        } else if self.trace_misses {
            trace!(label, ordinal, kind = %kind, "branch missed");
        }
    }

    pub(crate) fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_first_match() {
        let mut log = BranchLog::default();
        log.record(BranchKind::When, false);
        log.record(BranchKind::WhenAny, true);

        let outcome = log.outcome();
        assert!(outcome.is_match());
        assert_eq!(outcome.branches_evaluated, 2);
        assert_eq!(
            outcome.matched,
            Some(MatchedBranch {
                ordinal: 2,
                kind: BranchKind::WhenAny
            })
        );
    }

    #[test]
    fn test_display() {
        let mut log = BranchLog::default();
        log.record(BranchKind::When, false);
        assert_eq!(log.outcome().to_string(), "no branch matched (1 considered)");

        log.record(BranchKind::WhenAll, true);
        assert_eq!(log.outcome().to_string(), "matched when_all at branch 2 of 2");
    }

    #[test]
    fn test_configure_label() {
        let mut log = BranchLog::default();
        log.configure(&MatchConfig::new().with_label("status"));
        log.record(BranchKind::WhenWithFn, true);

        assert_eq!(log.label(), Some("status"));
        assert_eq!(
            log.outcome().to_string(),
            "[status] matched when_with_fn at branch 1 of 1"
        );
    }
}
