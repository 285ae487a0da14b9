//! Interface constraint attribute: #[socket_bound]
//!
//! ```ignore
//! #[socket_bound(S: SyncStream)]
//! fn read_some<S>(socket: &mut S) { ... }
//!
//! #[socket_bound(S: Stream & !Handshake)]
//! impl<S> Wrapper<S> { ... }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Item, Token, Type, WherePredicate,
};

use crate::common::{bool_expr_to_query, BoolExpr};

// =============================================================================
// BoundArgs - Attribute Arguments Parser
// =============================================================================

/// One `Target: Expr` constraint.
pub struct Constraint {
    pub target: Type,
    pub expr: BoolExpr,
}

impl Parse for Constraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let target: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(Constraint { target, expr })
    }
}

pub struct BoundArgs {
    pub constraints: Vec<Constraint>,
}

impl Parse for BoundArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error(
                "expected at least one constraint, e.g. `#[socket_bound(S: Stream)]`",
            ));
        }
        let constraints = Punctuated::<Constraint, Token![,]>::parse_terminated(input)?;
        Ok(BoundArgs {
            constraints: constraints.into_iter().collect(),
        })
    }
}

// =============================================================================
// Predicate Generation
// =============================================================================

/// `Target: ::socket_caps::Require<Query>` for each constraint.
fn generate_predicates(args: &BoundArgs) -> syn::Result<Vec<WherePredicate>> {
    args.constraints
        .iter()
        .map(|constraint| {
            let target = &constraint.target;
            let query = bool_expr_to_query(&constraint.expr)?;
            syn::parse2(quote! { #target: ::socket_caps::Require<#query> })
        })
        .collect()
}

// =============================================================================
// Expand
// =============================================================================

pub fn expand_socket_bound(args: BoundArgs, item: TokenStream2) -> syn::Result<TokenStream2> {
    let predicates = generate_predicates(&args)?;
    let mut item: Item = syn::parse2(item)?;

    let generics = match &mut item {
        Item::Fn(func) => &mut func.sig.generics,
        Item::Impl(item_impl) => &mut item_impl.generics,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "socket_bound supports fn or impl items",
            ));
        }
    };
    generics.make_where_clause().predicates.extend(predicates);

    Ok(item.into_token_stream())
}
