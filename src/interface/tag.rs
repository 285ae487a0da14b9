use crate::primitives::Bool;
use crate::set::Slots;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Interface Tag Trait
///
/// Implemented by the unit structs of the vocabulary, and only by them: the
/// trait is sealed. Tags carry no data; they are positions in the lattice.
///
/// ```compile_fail
/// use socket_caps::{Interface, Slots, Present};
///
/// struct Datagram;
///
/// impl Interface for Datagram {
///     const NAME: &'static str = "Datagram";
///     type Closure = socket_caps::Empty;
///     type In<Set: Slots> = Present;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a socket interface tag",
    label = "expected one of the interface tags, e.g. `Stream` or `Handshake`",
    note = "the vocabulary is closed: Socket, SyncStream, AsyncStream, Stream, SyncHandshake, SyncBufferedHandshake, AsyncHandshake, AsyncBufferedHandshake, Handshake"
)]
pub trait Interface: sealed::Sealed + 'static {
    /// Display name, used by inspection and logging.
    const NAME: &'static str;

    /// This tag plus every tag it implies, transitively.
    type Closure: Slots;

    /// Membership of this tag in `Set`.
    ///
    /// `Present` iff some slot set in `Set` belongs to a tag whose closure
    /// contains this tag. Composites therefore answer for their
    /// constituents whatever way `Set` was built, while holding both stream
    /// halves still does not answer a query for `Stream`.
    type In<Set: Slots>: Bool;
}

/// Map a truth-table cell to a type-level boolean.
#[macro_export]
#[doc(hidden)]
macro_rules! __bit {
    (1) => { $crate::Present };
    (0) => { $crate::Absent };
}

/// `OR` over every slot `U` of `$s`: `$s.U & $tag in closure(U)`.
#[macro_export]
#[doc(hidden)]
macro_rules! __reach_slots {
    (@term $s:ty, $tag:ident, $slot:ident) => {
        <<$s as $crate::set::Slots>::$slot as $crate::Bool>::And<
            <<$crate::interface::$slot as $crate::interface::Interface>::Closure as $crate::set::Slots>::$tag
        >
    };
    ($s:ty, $tag:ident; $last:ident) => {
        $crate::__reach_slots!(@term $s, $tag, $last)
    };
    ($s:ty, $tag:ident; $head:ident, $($rest:ident),+) => {
        <$crate::__reach_slots!(@term $s, $tag, $head) as $crate::Bool>::Or<
            $crate::__reach_slots!($s, $tag; $($rest),+)
        >
    };
}

/// Define the vocabulary.
///
/// Each row names a tag, its own slot as a truth-table row, and optionally
/// the tags it implies. The closure is the union of the row and the closures
/// of the implied tags, so rows must come after the tags they name.
macro_rules! define_interfaces {
    ($(
        $(#[$meta:meta])*
        $name:ident = [$($bit:tt)+] $(=> $($base:ident),+)?;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl $crate::interface::tag::sealed::Sealed for $name {}

            impl $crate::interface::Interface for $name {
                const NAME: &'static str = stringify!($name);

                type Closure = $crate::__union_of!(
                    $crate::set::InterfaceSet<$($crate::__bit!($bit)),+>
                    $($(, <$base as $crate::interface::Interface>::Closure)+)?
                );

                type In<Set: $crate::set::Slots> = $crate::__with_slots!(__reach_slots!(Set, $name));
            }
        )*
    };
}

pub(crate) use define_interfaces;
