//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Every membership answer in this crate is one of these two types. The
//! `VALUE` constant is how an answer leaves the type system, and it is a
//! constant: reading it never costs a branch at runtime.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<B: Bool>() -> bool {
        B::VALUE
    }

    #[test]
    fn truth_table() {
        assert!(value::<<Present as Bool>::And<Present>>());
        assert!(!value::<<Present as Bool>::And<Absent>>());
        assert!(!value::<<Absent as Bool>::And<Present>>());
        assert!(value::<<Absent as Bool>::Or<Present>>());
        assert!(!value::<<Absent as Bool>::Or<Absent>>());
        assert!(value::<<Absent as Bool>::Not>());
        assert!(!value::<<Present as Bool>::Not>());
    }
}
