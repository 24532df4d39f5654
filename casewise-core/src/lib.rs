//! casewise-core: expression-style, first-match-wins conditional matching
//!
//! A matcher tests a subject (or, in the subjectless form, a series of
//! pre-computed booleans) against an ordered chain of branches. The first
//! branch whose condition passes produces the result; if none does, the
//! terminal call supplies a default. The chain is a single expression that
//! always yields a value.
//!
//! # Features
//!
//! - **Literal or predicate conditions**: `when(10, ...)` compares with `==`,
//!   `when(is_even, ...)` calls the predicate
//! - **Constant or computed results**: `when(.., -2)` or `when(.., double)`
//! - **Combinators**: `when_any`, `when_all` (predicates only), `when_none`
//! - **Derived values**: `when_with_fn` matches on a projection of the subject
//! - **Lazy, ordered evaluation**: predicates and transforms after the first
//!   match never run
//! - **Outcome reporting**: which branch matched, for diagnostics
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use casewise_core::prelude::*;
//!
//! fn double(x: &i32) -> i32 { x * 2 }
//! fn add_five(x: &i32) -> i32 { x + 5 }
//!
//! assert_eq!(match_on(0).when(10, double).when(0, add_five).otherwise(-2), 5);
//!
//! let (x, a, b) = (-4, -4, -2);
//! assert_eq!(match_cond().when(x == a, 10).when(x == b, 100).otherwise(5), 10);
//! ```
//!
//! # Module Organization
//!
//! - [`value`]: subject-bound [`ValueMatcher`]
//! - [`conditional`]: subjectless [`ConditionMatcher`]
//! - [`condition`]: the [`Condition`] trait and literal wrappers
//! - [`transform`]: the [`Transform`] / [`Produce`] traits and [`as_is`]
//! - [`state`]: the resolved/unresolved slot
//! - [`report`]: [`Outcome`] diagnostics
//! - [`config`]: [`MatchConfig`] and casewise.toml loading
//! - [`error`]: Typed error handling
//!
//! # Cargo Features
//!
//! - `config` (default): Enable casewise.toml loading via serde + toml

pub mod condition;
pub mod conditional;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod state;
pub mod transform;
pub mod value;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Entry points
pub use factory::{match_cond, match_on};

// Matchers
pub use conditional::ConditionMatcher;
pub use value::ValueMatcher;

// Conditions and results
pub use condition::{Cond, Condition, Is};
pub use transform::{as_is, Const, Produce, Transform};

// Resolution state and reporting
pub use report::{MatchedBranch, Outcome};
pub use state::{BranchKind, MatchState};

// Configuration
pub use config::MatchConfig;
#[cfg(feature = "config")]
pub use config::{load_config, CONFIG_FILE};

// Error types
pub use error::{IoResultExt, MatchError, MatchResult};

// Logging
pub use logging::init_structured_logging;
