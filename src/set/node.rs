//! Set storage.

use core::marker::PhantomData;

use crate::primitives::{Absent, Bool};

/// Apply a macro to the full slot list, in declaration order.
///
/// `__with_slots!(mac!(args))` expands to `mac!(args; Socket, SyncStream, ...)`.
#[macro_export]
#[doc(hidden)]
macro_rules! __with_slots {
    ($mac:ident ! ( $($args:tt)* )) => {
        $crate::$mac!(
            $($args)* ;
            Socket, SyncStream, AsyncStream, Stream,
            SyncHandshake, SyncBufferedHandshake,
            AsyncHandshake, AsyncBufferedHandshake,
            Handshake
        )
    };
}

/// A set of socket interfaces.
///
/// Each parameter is `Present` or `Absent`; the slot order is the
/// vocabulary order (see [`Slots`]). Never constructed, only named.
#[allow(clippy::type_complexity)]
pub struct InterfaceSet<Sk, Ss, As, St, Sh, Sbh, Ah, Abh, Hs>(
    PhantomData<(Sk, Ss, As, St, Sh, Sbh, Ah, Abh, Hs)>,
);

/// Named access to the slots of a set.
///
/// Slot names match the tag names, so `<M as Slots>::Stream` is the answer
/// to "does M contain `Stream`".
pub trait Slots: 'static {
    type Socket: Bool;
    type SyncStream: Bool;
    type AsyncStream: Bool;
    type Stream: Bool;
    type SyncHandshake: Bool;
    type SyncBufferedHandshake: Bool;
    type AsyncHandshake: Bool;
    type AsyncBufferedHandshake: Bool;
    type Handshake: Bool;
}

impl<Sk, Ss, As, St, Sh, Sbh, Ah, Abh, Hs> Slots for InterfaceSet<Sk, Ss, As, St, Sh, Sbh, Ah, Abh, Hs>
where
    Sk: Bool,
    Ss: Bool,
    As: Bool,
    St: Bool,
    Sh: Bool,
    Sbh: Bool,
    Ah: Bool,
    Abh: Bool,
    Hs: Bool,
{
    type Socket = Sk;
    type SyncStream = Ss;
    type AsyncStream = As;
    type Stream = St;
    type SyncHandshake = Sh;
    type SyncBufferedHandshake = Sbh;
    type AsyncHandshake = Ah;
    type AsyncBufferedHandshake = Abh;
    type Handshake = Hs;
}

/// The set with no interfaces.
pub type Empty = InterfaceSet<
    Absent, Absent, Absent, Absent, Absent,
    Absent, Absent, Absent, Absent,
>;
