//! Procedural macros for the socket-caps interface system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(SocketInterfaces)]` | struct/enum/union | Intrusive interface declaration |
//! | `#[socket_bound(S: ...)]` | fn/impl | Gate an item on the interfaces of `S` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(SocketInterfaces)]
//! #[socket_interfaces(Stream, Handshake)]
//! struct MyHandshakingStream;
//!
//! struct Wrapper<S>(S);
//!
//! #[socket_bound(S: SyncStream & !Handshake)]
//! impl<S> Wrapper<S> {
//!     fn read_some(&mut self, buf: &mut [u8]) -> usize { ... }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Derive macro implementing `SocketInterfaces`.
///
/// The interfaces are listed in a `#[socket_interfaces(...)]` attribute.
/// Bare names refer to the tags of `socket_caps`; full paths are taken as
/// written.
///
/// # Usage
/// ```ignore
/// #[derive(SocketInterfaces)]
/// #[socket_interfaces(Socket, Stream)]
/// struct MyStreamSocket { fd: RawFd }
///
/// // Generic types get a generic impl
/// #[derive(SocketInterfaces)]
/// #[socket_interfaces(Stream)]
/// struct Buffered<S> { inner: S }
/// ```
#[proc_macro_derive(SocketInterfaces, attributes(socket_interfaces))]
pub fn derive_socket_interfaces(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_socket_interfaces(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Interface constraint attribute with boolean expression support.
///
/// Adds `where S: Require<Query>` to the item, so it only exists for socket
/// types whose interfaces satisfy the expression.
///
/// # Usage
///
/// ```ignore
/// // Simple requirement
/// #[socket_bound(S: AsyncStream)]
/// async fn read_some<S>(socket: &mut S, buf: &mut [u8]) { ... }
///
/// // Boolean logic
/// #[socket_bound(S: (SyncHandshake | AsyncHandshake) & !Socket)]
/// impl<S> Wrapper<S> { ... }
///
/// // Several constrained parameters
/// #[socket_bound(A: Stream, B: Socket)]
/// fn splice<A, B>(a: A, b: B) { ... }
/// ```
#[proc_macro_attribute]
pub fn socket_bound(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::BoundArgs);
    user::expand_socket_bound(args, item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
