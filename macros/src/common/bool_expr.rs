//! Boolean expressions over interface tags: `Stream & !(Socket | Handshake)`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use super::tag_path;

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Tag(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Tag(ty))
    }
}

// =============================================================================
// Lowering
// =============================================================================

/// Convert BoolExpr to its query type (`Has`, `And`, `Or`, `Not`).
pub fn bool_expr_to_query(expr: &BoolExpr) -> syn::Result<TokenStream> {
    Ok(match expr {
        BoolExpr::Tag(ty) => {
            let tag = tag_path(ty)?;
            quote! { ::socket_caps::Has<#tag> }
        }
        BoolExpr::And(lhs, rhs) => {
            let l = bool_expr_to_query(lhs)?;
            let r = bool_expr_to_query(rhs)?;
            quote! { ::socket_caps::And<#l, #r> }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = bool_expr_to_query(lhs)?;
            let r = bool_expr_to_query(rhs)?;
            quote! { ::socket_caps::Or<#l, #r> }
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_query(operand)?;
            quote! { ::socket_caps::Not<#o> }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(src: &str) -> String {
        let expr: BoolExpr = syn::parse_str(src).unwrap();
        bool_expr_to_query(&expr).unwrap().to_string().replace(' ', "")
    }

    #[test]
    fn single_tag() {
        assert_eq!(lower("Stream"), "::socket_caps::Has<::socket_caps::Stream>");
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            lower("Socket | Stream & !Handshake"),
            "::socket_caps::Or<::socket_caps::Has<::socket_caps::Socket>,\
             ::socket_caps::And<::socket_caps::Has<::socket_caps::Stream>,\
             ::socket_caps::Not<::socket_caps::Has<::socket_caps::Handshake>>>>"
        );
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(
            lower("!(SyncStream | AsyncStream)"),
            "::socket_caps::Not<::socket_caps::Or<::socket_caps::Has<::socket_caps::SyncStream>,\
             ::socket_caps::Has<::socket_caps::AsyncStream>>>"
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let expr: BoolExpr = syn::parse_str("Stream & Datagram").unwrap();
        let err = bool_expr_to_query(&expr).unwrap_err();
        assert!(err.to_string().contains("unknown socket interface `Datagram`"));
    }
}
