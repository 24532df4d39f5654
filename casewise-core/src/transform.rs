//! Branch results.
//!
//! A [`Transform`] computes a subject-bound matcher's result from a reference
//! to its input (the subject, or a derived value). A [`Produce`] computes a
//! subjectless matcher's result from nothing. Both accept either a function,
//! which runs lazily only when its branch is selected, or a constant.

/// Computes a result of type `U` from an input of type `I`.
pub trait Transform<I: ?Sized, U> {
    fn apply(self, input: &I) -> U;
}

impl<I: ?Sized, U, F> Transform<I, U> for F
where
    F: FnOnce(&I) -> U,
{
    fn apply(self, input: &I) -> U {
        self(input)
    }
}

/// Computes a result of type `U` without an input.
pub trait Produce<U> {
    fn produce(self) -> U;
}

impl<U, F> Produce<U> for F
where
    F: FnOnce() -> U,
{
    fn produce(self) -> U {
        self()
    }
}

/// Constant result, for result types that are not covered by the built-in
/// literal impls (structs, enums, collections, `Option`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const<U>(pub U);

impl<I: ?Sized, U> Transform<I, U> for Const<U> {
    fn apply(self, _input: &I) -> U {
        self.0
    }
}

impl<U> Produce<U> for Const<U> {
    fn produce(self) -> U {
        self.0
    }
}

macro_rules! literal_result {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<I: ?Sized> Transform<I, $ty> for $ty {
                fn apply(self, _input: &I) -> $ty {
                    self
                }
            }

            impl Produce<$ty> for $ty {
                fn produce(self) -> $ty {
                    self
                }
            }
        )*
    };
}

literal_result!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<'a, I: ?Sized> Transform<I, &'a str> for &'a str {
    fn apply(self, _input: &I) -> &'a str {
        self
    }
}

impl<'a> Produce<&'a str> for &'a str {
    fn produce(self) -> &'a str {
        self
    }
}

/// Identity transform: passes the matched (or derived) value through.
///
/// Transforms receive their input by reference, so the value is cloned out.
pub fn as_is<T: Clone>(value: &T) -> T {
    value.clone()
}
