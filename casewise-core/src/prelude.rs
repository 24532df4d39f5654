//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use casewise_core::prelude::*;
//! ```

// Entry points
pub use crate::factory::{match_cond, match_on};
pub use crate::matcher;

// Matchers
pub use crate::conditional::ConditionMatcher;
pub use crate::value::ValueMatcher;

// Conditions and results
pub use crate::condition::{Cond, Condition, Is};
pub use crate::transform::{as_is, Const, Produce, Transform};

// Errors and configuration
pub use crate::config::MatchConfig;
pub use crate::error::{MatchError, MatchResult};
