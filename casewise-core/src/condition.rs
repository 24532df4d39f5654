//! Branch conditions for subject-bound matching.
//!
//! A condition is either a literal compared to the subject with `==`, or a
//! predicate called with a reference to the subject. The type system picks
//! between the two:
//!
//! - any `Fn(&T) -> bool` is a predicate,
//! - [`Is`] wraps an arbitrary `PartialEq` value as a literal,
//! - scalar primitives, `String` and `&str` are literals as-is,
//! - [`Cond`] mixes both kinds inside a single list.
//!
//! ```rust,ignore
//! fn is_even(x: &i32) -> bool { x % 2 == 0 }
//!
//! match_on(4).when(4, 1).when(is_even, 2).when(Is(7), 3).otherwise(0);
//! ```

use std::fmt;

/// Something that can be tested against a subject of type `T`.
pub trait Condition<T: ?Sized> {
    /// Returns `true` if the condition holds for `subject`.
    fn test(&self, subject: &T) -> bool;
}

impl<T: ?Sized, F> Condition<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, subject: &T) -> bool {
        self(subject)
    }
}

/// Literal condition: passes when the subject equals the wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Is<T>(pub T);

impl<T: PartialEq> Condition<T> for Is<T> {
    fn test(&self, subject: &T) -> bool {
        self.0 == *subject
    }
}

macro_rules! literal_condition {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Condition<$ty> for $ty {
                fn test(&self, subject: &$ty) -> bool {
                    self == subject
                }
            }
        )*
    };
}

literal_condition!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl Condition<String> for &str {
    fn test(&self, subject: &String) -> bool {
        *self == subject.as_str()
    }
}

impl<'a> Condition<&'a str> for &str {
    fn test(&self, subject: &&'a str) -> bool {
        *self == *subject
    }
}

/// A literal or a predicate, for lists that mix both.
///
/// `when_any` and `when_none` take a homogeneous list; wrap each element in
/// `Cond` to combine `-3` with `is_positive` in one call.
pub enum Cond<'a, T> {
    /// Passes when the subject equals the value.
    Is(T),
    /// Passes when the predicate returns `true`.
    Pred(Box<dyn Fn(&T) -> bool + 'a>),
}

impl<'a, T> Cond<'a, T> {
    pub fn is(value: T) -> Self {
        Self::Is(value)
    }

    pub fn pred(predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Self::Pred(Box::new(predicate))
    }
}

impl<T: PartialEq> Condition<T> for Cond<'_, T> {
    fn test(&self, subject: &T) -> bool {
        match self {
            Self::Is(value) => value == subject,
            Self::Pred(predicate) => predicate(subject),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Cond<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Is(value) => f.debug_tuple("Is").field(value).finish(),
            Self::Pred(_) => f.write_str("Pred(<fn>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_positive(x: &i32) -> bool {
        *x > 0
    }

    #[test]
    fn test_literal_equality() {
        assert!(10i32.test(&10));
        assert!(!10i32.test(&11));
        assert!('x'.test(&'x'));
        assert!("pig".test(&String::from("pig")));
        assert!("pig".test(&"pig"));
    }

    #[test]
    fn test_predicate() {
        assert!(is_positive.test(&3));
        assert!(!is_positive.test(&-3));
        let threshold = 5;
        let above = |x: &i32| *x > threshold;
        assert!(above.test(&6));
    }

    #[test]
    fn test_is_wrapper() {
        assert!(Is(vec![1, 2]).test(&vec![1, 2]));
        assert!(!Is(Some(1)).test(&None));
    }

    #[test]
    fn test_cond_mixed() {
        let conds = [Cond::is(-3), Cond::pred(is_positive)];
        assert!(conds.iter().any(|c| c.test(&-3)));
        assert!(conds.iter().any(|c| c.test(&8)));
        assert!(!conds.iter().any(|c| c.test(&-8)));
    }

    #[test]
    fn test_cond_debug() {
        assert_eq!(format!("{:?}", Cond::<i32>::is(1)), "Is(1)");
        assert_eq!(format!("{:?}", Cond::pred(is_positive)), "Pred(<fn>)");
    }
}
