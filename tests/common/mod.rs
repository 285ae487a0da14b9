#![allow(dead_code)]

use socket_caps::prelude::*;
use socket_caps::Inspect;

/// Names of every interface `T` resolves to, in vocabulary order.
pub fn names<T: InterfacesOf + ?Sized>() -> Vec<&'static str> {
    let mut out = Vec::new();
    <<T as InterfacesOf>::Out as Inspect>::inspect(|name| out.push(name));
    out
}

/// Every membership answer for `T`, one per tag in vocabulary order.
pub fn answers<T: InterfacesOf + ?Sized>() -> [bool; 9] {
    [
        has_interface::<T, Socket>(),
        has_interface::<T, SyncStream>(),
        has_interface::<T, AsyncStream>(),
        has_interface::<T, Stream>(),
        has_interface::<T, SyncHandshake>(),
        has_interface::<T, SyncBufferedHandshake>(),
        has_interface::<T, AsyncHandshake>(),
        has_interface::<T, AsyncBufferedHandshake>(),
        has_interface::<T, Handshake>(),
    ]
}

/// A composite answer implies the answers of its constituents.
pub fn assert_lattice<T: InterfacesOf + ?Sized>() {
    let implies = |a: bool, b: bool| !a || b;
    let name = std::any::type_name::<T>();

    assert!(implies(has_interface::<T, Stream>(), has_interface::<T, SyncStream>()), "{name}");
    assert!(implies(has_interface::<T, Stream>(), has_interface::<T, AsyncStream>()), "{name}");
    assert!(implies(has_interface::<T, SyncBufferedHandshake>(), has_interface::<T, SyncHandshake>()), "{name}");
    assert!(implies(has_interface::<T, AsyncBufferedHandshake>(), has_interface::<T, AsyncHandshake>()), "{name}");
    assert!(implies(has_interface::<T, Handshake>(), has_interface::<T, SyncBufferedHandshake>()), "{name}");
    assert!(implies(has_interface::<T, Handshake>(), has_interface::<T, AsyncBufferedHandshake>()), "{name}");
}
