//! Logging of resolved interface sets.

use core::any::type_name;

use crate::resolve::InterfacesOf;
use crate::set::Inspect;

/// Emit one `debug` event naming `T` and its resolved interfaces.
///
/// For wrapping layers that log what a connection's transport was resolved
/// to. The event is informational; no behavior depends on it.
pub fn trace_interfaces<T: InterfacesOf + ?Sized>() {
    let mut names: [&'static str; 9] = [""; 9];
    let mut len = 0;
    <<T as InterfacesOf>::Out as Inspect>::inspect(|name| {
        names[len] = name;
        len += 1;
    });

    tracing::debug!(
        socket = type_name::<T>(),
        interfaces = ?&names[..len],
        count = len,
        "resolved socket interfaces"
    );
}
