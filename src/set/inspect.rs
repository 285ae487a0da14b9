//! Runtime inspection of interface sets
//!
//! Lists the interfaces of a set by name, for debugging and logging. A name
//! is listed iff the set answers membership for it, implied ones included.
//! Nothing here decides behavior: the membership answers are still the
//! constants of [`crate::query`].

use super::node::Slots;

#[macro_export]
#[doc(hidden)]
macro_rules! __inspect_slots {
    ($s:ty, $f:ident; $($slot:ident),+) => {
        $(
            if <<$crate::interface::$slot as $crate::interface::Interface>::In<$s> as $crate::Bool>::VALUE {
                $f(<$crate::interface::$slot as $crate::interface::Interface>::NAME);
            }
        )+
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __count_slots {
    ($s:ty; $($slot:ident),+) => {
        0 $( + (<<$crate::interface::$slot as $crate::interface::Interface>::In<$s> as $crate::Bool>::VALUE as usize) )+
    };
}

/// Runtime inspection of interface sets.
pub trait Inspect: Slots {
    /// Number of interfaces in the set, composites and constituents counted
    /// separately.
    const COUNT: usize;

    /// Calls `f` with the name of each interface in the set, in vocabulary
    /// order.
    fn inspect<F: FnMut(&'static str)>(f: F);
}

impl<S: Slots> Inspect for S {
    const COUNT: usize = crate::__with_slots!(__count_slots!(S));

    fn inspect<F: FnMut(&'static str)>(mut f: F) {
        crate::__with_slots!(__inspect_slots!(S, f));
    }
}
