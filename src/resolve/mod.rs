//! # Layer 3: Resolution
//!
//! Maps a concrete socket type to its interface set.
//!
//! Two paths feed the single [`InterfacesOf`] trait:
//!
//! 1. **Extrinsic**: this crate implements `InterfacesOf` directly for
//!    well-known transport shapes it does not own (see [`extrinsic`]).
//! 2. **Intrusive**: any type implementing [`SocketInterfaces`] resolves to
//!    its nested `SocketInterfaces` set through a blanket impl.
//!
//! A type reached by neither path does not implement `InterfacesOf`, and
//! every query against it is a compile error. There is no implicit empty
//! set:
//!
//! ```compile_fail
//! use socket_caps::{has_interface, Stream};
//!
//! struct Unclassified;
//!
//! const _: bool = has_interface::<Unclassified, Stream>();
//! ```
//!
//! A type cannot take both paths. Declaring an intrusive set on a type that
//! also has a direct `InterfacesOf` impl is a conflicting-impl error:
//!
//! ```compile_fail
//! use socket_caps::{interfaces, InterfacesOf, SocketInterfaces, Socket, Stream};
//!
//! struct Both;
//!
//! impl SocketInterfaces for Both {
//!     type SocketInterfaces = interfaces![Stream];
//! }
//!
//! impl InterfacesOf for Both {
//!     type Out = interfaces![Socket];
//! }
//! ```
//!
//! and the shapes in the extrinsic table cannot be re-declared downstream:
//!
//! ```compile_fail
//! use socket_caps::{interfaces, SocketInterfaces, Stream};
//!
//! impl SocketInterfaces for std::net::TcpStream {
//!     type SocketInterfaces = interfaces![Stream];
//! }
//! ```

pub mod extrinsic;

use crate::set::Slots;

/// Resolved interface set of a socket type.
///
/// Implemented by the extrinsic table and, through a blanket impl, by every
/// [`SocketInterfaces`] type. Downstream crates may implement it directly
/// for their own types instead of using the intrusive convention.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no recognized socket interface set",
    label = "unclassified socket type",
    note = "implement `SocketInterfaces` for `{Self}` (or `#[derive(SocketInterfaces)]`), or implement `InterfacesOf` for its shape"
)]
pub trait InterfacesOf {
    type Out: Slots;
}

/// Intrusive interface declaration.
///
/// A socket type opts in by naming its set:
///
/// ```
/// use socket_caps::{interfaces, has_interface, SocketInterfaces, Stream, Handshake, Socket};
///
/// struct MyHandshakingStream;
///
/// impl SocketInterfaces for MyHandshakingStream {
///     type SocketInterfaces = interfaces![Stream, Handshake];
/// }
///
/// const { assert!(has_interface::<MyHandshakingStream, Handshake>()) };
/// const { assert!(!has_interface::<MyHandshakingStream, Socket>()) };
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no recognized socket interface set",
    label = "unclassified socket type",
    note = "declare the set with `impl SocketInterfaces for {Self} {{ type SocketInterfaces = interfaces![...]; }}`"
)]
pub trait SocketInterfaces {
    /// The set of interfaces this type provides, usually built with
    /// [`interfaces!`](crate::interfaces).
    type SocketInterfaces: Slots;
}

impl<T: SocketInterfaces + ?Sized> InterfacesOf for T {
    type Out = T::SocketInterfaces;
}
