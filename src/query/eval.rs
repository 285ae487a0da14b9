//! Query types and evaluation logic
//!
//! Provides the `Evaluate` trait and boolean query types (Has, And, Or, Not).

use core::marker::PhantomData;

use crate::interface::Interface;
use crate::primitives::{Bool, Present};
use crate::resolve::InterfacesOf;
use crate::set::Slots;

// =============================================================================
// Query Types
// =============================================================================

/// Query: Does the set contain interface I?
pub struct Has<I>(PhantomData<I>);

/// Conjunction: L AND R
pub struct And<L, R>(PhantomData<(L, R)>);

/// Disjunction: L OR R
pub struct Or<L, R>(PhantomData<(L, R)>);

/// Negation: NOT Q
pub struct Not<Q>(PhantomData<Q>);

// =============================================================================
// Evaluate (on sets)
// =============================================================================

/// Evaluate a boolean query on an interface set.
///
/// Returns `Present` (true) or `Absent` (false).
#[diagnostic::on_unimplemented(
    message = "interface query `{Query}` cannot be evaluated on `{Self}`",
    label = "expected an interface set and a query built from `Has`, `And`, `Or`, `Not`"
)]
pub trait Evaluate<Query> {
    type Out: Bool;
    /// The boolean result of the evaluation as a constant.
    const RESULT: bool = <Self::Out as Bool>::VALUE;
}

impl<S: Slots, I: Interface> Evaluate<Has<I>> for S {
    type Out = <I as Interface>::In<S>;
}

impl<S, L, R> Evaluate<And<L, R>> for S
where
    S: Evaluate<L> + Evaluate<R>,
{
    type Out = <<S as Evaluate<L>>::Out as Bool>::And<<S as Evaluate<R>>::Out>;
}

impl<S, L, R> Evaluate<Or<L, R>> for S
where
    S: Evaluate<L> + Evaluate<R>,
{
    type Out = <<S as Evaluate<L>>::Out as Bool>::Or<<S as Evaluate<R>>::Out>;
}

impl<S, Q> Evaluate<Not<Q>> for S
where
    S: Evaluate<Q>,
{
    type Out = <<S as Evaluate<Q>>::Out as Bool>::Not;
}

// =============================================================================
// Satisfies (on socket types)
// =============================================================================

/// Evaluate a boolean query on the resolved set of a socket type.
///
/// `#[socket_bound(S: Stream & !Handshake)]` expands to
/// `S: Require<And<Has<Stream>, Not<Has<Handshake>>>>`, which holds iff
/// `Satisfies::Out` is `Present`.
#[diagnostic::on_unimplemented(
    message = "socket interface requirement `{Query}` is not satisfied by `{Self}`",
    label = "`{Self}` is unclassified, or its interface set fails `{Query}`",
    note = "check the interfaces `{Self}` declares against the requirement"
)]
pub trait Satisfies<Query> {
    type Out: Bool;
    const RESULT: bool = <Self::Out as Bool>::VALUE;
}

impl<T, Q> Satisfies<Q> for T
where
    T: InterfacesOf + ?Sized,
    <T as InterfacesOf>::Out: Evaluate<Q>,
{
    type Out = <<T as InterfacesOf>::Out as Evaluate<Q>>::Out;
}

// =============================================================================
// Require (bound form)
// =============================================================================

/// Holds only for `Present`. The parameters exist for the diagnostic.
#[diagnostic::on_unimplemented(
    message = "socket interface requirement `{Query}` is not satisfied by `{T}`",
    label = "requirement evaluated to false",
    note = "check the interfaces `{T}` declares against the requirement"
)]
pub trait IsPresent<T: ?Sized, Query> {}

impl<T: ?Sized, Q> IsPresent<T, Q> for Present {}

/// `T: Require<Q>` holds iff query `Q` evaluates to true on `T`.
///
/// This is the bound `#[socket_bound]` emits.
pub trait Require<Query> {}

impl<T, Q> Require<Q> for T
where
    T: Satisfies<Q> + ?Sized,
    <T as Satisfies<Q>>::Out: IsPresent<T, Q>,
{
}
