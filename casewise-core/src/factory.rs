//! Entry points for building matchers.
//!
//! [`match_on`] binds a subject; [`match_cond`] starts a subjectless chain.
//! The [`matcher!`](crate::matcher) macro picks between them by arity.

use crate::conditional::ConditionMatcher;
use crate::value::ValueMatcher;

/// Start a matcher bound to `subject`.
pub fn match_on<T, U>(subject: T) -> ValueMatcher<T, U> {
    ValueMatcher::new(subject)
}

/// Start a matcher over pre-computed boolean conditions.
pub fn match_cond<U>() -> ConditionMatcher<U> {
    ConditionMatcher::new()
}

/// Build a matcher: `matcher!(subject)` binds a subject, `matcher!()` does
/// not.
///
/// ```rust,ignore
/// let sign = matcher!(n).when(0, "zero").when(is_negative, "negative").otherwise("positive");
/// let band = matcher!().when(t < 0.0, "ice").when(t < 100.0, "water").otherwise("steam");
/// ```
#[macro_export]
macro_rules! matcher {
    () => {
        $crate::match_cond()
    };
    ($subject:expr $(,)?) => {
        $crate::match_on($subject)
    };
}
