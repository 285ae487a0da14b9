//! Slot-wise set algebra.
//!
//! All operations are plain associated-type projections over the nine slots,
//! so they resolve during type checking and leave nothing behind.

use super::node::Slots;
use crate::primitives::Bool;

/// `InterfaceSet<op(A.slot, B.slot), ...>` for every slot.
#[macro_export]
#[doc(hidden)]
macro_rules! __zip_slots {
    ($a:ty, $b:ty, $op:ident; $($slot:ident),+) => {
        $crate::set::InterfaceSet<
            $( <<$a as $crate::set::Slots>::$slot as $crate::Bool>::$op<<$b as $crate::set::Slots>::$slot> ),+
        >
    };
}

/// `InterfaceSet<!S.slot, ...>` for every slot.
#[macro_export]
#[doc(hidden)]
macro_rules! __not_slots {
    ($s:ty; $($slot:ident),+) => {
        $crate::set::InterfaceSet<
            $( <<$s as $crate::set::Slots>::$slot as $crate::Bool>::Not ),+
        >
    };
}

/// Fold the slots of a set with `$op` (`And` or `Or`).
#[macro_export]
#[doc(hidden)]
macro_rules! __fold_slots {
    ($s:ty, $op:ident; $last:ident) => {
        <$s as $crate::set::Slots>::$last
    };
    ($s:ty, $op:ident; $head:ident, $($rest:ident),+) => {
        <<$s as $crate::set::Slots>::$head as $crate::Bool>::$op<$crate::__fold_slots!($s, $op; $($rest),+)>
    };
}

/// `InterfaceSet<I.In<S>, ...>`: every slot answered by membership.
#[macro_export]
#[doc(hidden)]
macro_rules! __close_slots {
    ($s:ty; $($slot:ident),+) => {
        $crate::set::InterfaceSet<
            $( <$crate::interface::$slot as $crate::interface::Interface>::In<$s> ),+
        >
    };
}

/// `S` with every implied interface filled in.
///
/// A set written out slot by slot may hold a composite without its
/// constituents; its closure holds both.
pub type Closed<S> = crate::__with_slots!(__close_slots!(S));

/// Union of two sets.
pub trait SetUnion<Other: Slots>: Slots {
    type Out: Slots;
}

impl<A: Slots, B: Slots> SetUnion<B> for A {
    type Out = crate::__with_slots!(__zip_slots!(A, B, Or));
}

/// Intersection of two sets, taken over their closures.
pub trait SetIntersect<Other: Slots>: Slots {
    type Out: Slots;
}

impl<A: Slots, B: Slots> SetIntersect<B> for A {
    type Out = crate::__with_slots!(__zip_slots!(Closed<A>, Closed<B>, And));
}

/// Slot-wise complement of a set.
type Complement<S> = crate::__with_slots!(__not_slots!(S));

/// `Present` iff every slot is `Present`.
pub trait AllSlots: Slots {
    type Out: Bool;
}

impl<S: Slots> AllSlots for S {
    type Out = crate::__with_slots!(__fold_slots!(S, And));
}

/// `Present` iff `Self` contains every interface of `Other`.
///
/// Computed on closures as "no slot of `Other` is set where `Self` is
/// unset", i.e. the slot-wise `!Other | Self` holds everywhere.
pub trait SupersetOf<Other: Slots>: Slots {
    type Out: Bool;
}

impl<A: Slots, B: Slots> SupersetOf<B> for A {
    type Out = <<Complement<Closed<B>> as SetUnion<Closed<A>>>::Out as AllSlots>::Out;
}
