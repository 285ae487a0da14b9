use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{punctuated::Punctuated, DeriveInput, Token, Type};

use crate::common::{check_duplicates, tag_path};

const ATTR: &str = "socket_interfaces";

/// `#[derive(SocketInterfaces)]` implements the intrusive convention:
///
/// ```ignore
/// impl<..> ::socket_caps::SocketInterfaces for Name<..> {
///     type SocketInterfaces = ::socket_caps::interfaces![..];
/// }
/// ```
///
/// An empty list is rejected: a socket type that supports nothing should not
/// be classified at all.
pub fn expand_derive_socket_interfaces(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let mut found = false;
    let mut tags: Vec<Type> = Vec::new();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        found = true;
        let list = attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
        tags.extend(list);
    }

    if !found {
        return Err(syn::Error::new_spanned(
            ident,
            "missing `#[socket_interfaces(...)]`\n\
             \n\
             List the interfaces this type supports, e.g. `#[socket_interfaces(Stream, Handshake)]`.",
        ));
    }
    if tags.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "`#[socket_interfaces]` lists no interfaces; declare at least one",
        ));
    }

    check_duplicates(&tags)?;
    let paths = tags.iter().map(tag_path).collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::socket_caps::SocketInterfaces for #ident #ty_generics #where_clause {
            type SocketInterfaces = ::socket_caps::interfaces![#(#paths),*];
        }
    })
}
