//! Convenience macros for interface sets.

/// Union of a non-empty list of sets.
#[macro_export]
#[doc(hidden)]
macro_rules! __union_of {
    ($one:ty) => { $one };
    ($head:ty, $($rest:ty),+) => {
        <$head as $crate::set::SetUnion<$crate::__union_of!($($rest),+)>>::Out
    };
}

/// Macro to build an interface set from tags.
///
/// Each tag contributes its closure, so composite tags bring their
/// constituents along.
///
/// Usage: `interfaces![Stream, Handshake]`
///
/// ```
/// use socket_caps::{interfaces, SyncStream, AsyncStream, Stream, Slots, Bool};
///
/// type Full = interfaces![Stream];
/// assert!(<<Full as Slots>::SyncStream as Bool>::VALUE);
///
/// // Both halves do not make the composite.
/// type Halves = interfaces![SyncStream, AsyncStream];
/// assert!(!<<Halves as Slots>::Stream as Bool>::VALUE);
/// ```
#[macro_export]
macro_rules! interfaces {
    () => { $crate::set::Empty };
    ($($tag:ty),+ $(,)?) => {
        $crate::__union_of!($(<$tag as $crate::interface::Interface>::Closure),+)
    };
}

/// Macro to compute union of two interface sets
/// Usage: `union![SetA, SetB]`
#[macro_export]
macro_rules! union {
    ($a:ty, $b:ty) => {
        <$a as $crate::set::SetUnion<$b>>::Out
    };
}

/// Macro to compute intersection of two interface sets
/// Usage: `intersect![SetA, SetB]`
#[macro_export]
macro_rules! intersect {
    ($a:ty, $b:ty) => {
        <$a as $crate::set::SetIntersect<$b>>::Out
    };
}
