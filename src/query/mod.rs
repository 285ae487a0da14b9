//! # Layer 4: Membership
//!
//! Answers "does socket type `T` support interface `I`?" as a type
//! (`Present` / `Absent`) and as a `const bool`.
//!
//! Resolution is two explicit steps: first `T` is resolved to its set
//! `M = <T as InterfacesOf>::Out`, then the tag answers membership in `M`:
//! its own slot, or the slot of any composite implying it. Each step is a separate associated-type projection, never a single
//! composed bound over the unresolved `T`.
//!
//! ```
//! use socket_caps::prelude::*;
//!
//! struct Plain;
//! impl SocketInterfaces for Plain {
//!     type SocketInterfaces = interfaces![Socket];
//! }
//!
//! const { assert!(has_interface::<Plain, Socket>()) };
//! const { assert!(!has_interface::<Plain, Stream>()) };
//! ```

pub mod eval;
pub mod flags;

#[cfg(feature = "tracing")]
pub mod trace;

use crate::interface::Interface;
use crate::primitives::Bool;
use crate::resolve::InterfacesOf;

pub use eval::{Evaluate, Satisfies, Require, IsPresent, Has, And, Or, Not};
pub use flags::InterfaceFlags;

/// Membership of interface `I` in the resolved set of `Self`.
#[diagnostic::on_unimplemented(
    message = "cannot query socket interface `{I}` on `{Self}`",
    label = "`{Self}` has no recognized socket interface set",
    note = "implement `SocketInterfaces` for `{Self}`, or implement `InterfacesOf` for its shape"
)]
pub trait HasInterface<I: Interface> {
    type Out: Bool;
    /// The answer as a constant.
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<T, I> HasInterface<I> for T
where
    T: InterfacesOf + ?Sized,
    I: Interface,
{
    type Out = <I as Interface>::In<<T as InterfacesOf>::Out>;
}

/// Bound form of a positive answer: `T: Supports<I>` holds iff `T` has `I`.
///
/// Meant for `where` clauses of a wrapping layer that exposes an operation
/// only when the wrapped type provides it. A failed bound reports
/// `IsPresent<T, Has<I>>`, naming both the type and the interface.
pub trait Supports<I: Interface> {}

impl<T, I> Supports<I> for T
where
    T: HasInterface<I> + ?Sized,
    I: Interface,
    <T as HasInterface<I>>::Out: IsPresent<T, Has<I>>,
{
}

/// `true` iff `T` supports `I`. Usable in constant context.
#[inline(always)]
pub const fn has_interface<T, I>() -> bool
where
    T: InterfacesOf + ?Sized,
    I: Interface,
{
    <T as HasInterface<I>>::VALUE
}
