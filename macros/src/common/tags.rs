//! Interface tag resolution.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::Type;

/// The interface vocabulary, in slot order.
pub const VOCABULARY: &[&str] = &[
    "Socket",
    "SyncStream",
    "AsyncStream",
    "Stream",
    "SyncHandshake",
    "SyncBufferedHandshake",
    "AsyncHandshake",
    "AsyncBufferedHandshake",
    "Handshake",
];

/// Resolve a tag as written by the user to a path into `socket_caps`.
///
/// A bare name must be one of the vocabulary and maps to
/// `::socket_caps::Name`. Anything longer (`caps::Stream`,
/// `::socket_caps::Stream`) is trusted as written and checked by the
/// `Interface` bound at the use site.
pub fn tag_path(ty: &Type) -> syn::Result<TokenStream> {
    let Type::Path(type_path) = ty else {
        return Err(syn::Error::new_spanned(ty, "expected a socket interface tag, e.g. `Stream`"));
    };

    let path = &type_path.path;
    if type_path.qself.is_some() || path.leading_colon.is_some() || path.segments.len() != 1 {
        return Ok(ty.to_token_stream());
    }

    let segment = &path.segments[0];
    if !segment.arguments.is_empty() {
        return Err(syn::Error::new_spanned(
            &segment.arguments,
            "socket interface tags take no generic arguments",
        ));
    }

    let ident = &segment.ident;
    let name = ident.to_string();
    if !VOCABULARY.contains(&name.as_str()) {
        return Err(syn::Error::new_spanned(
            ident,
            format!(
                "unknown socket interface `{}`\n\
                 \n\
                 Expected one of: {}.",
                name,
                VOCABULARY.join(", ")
            ),
        ));
    }

    Ok(quote! { ::socket_caps::#ident })
}

/// Reject a tag list naming the same tag twice.
///
/// Tags are compared by their last path segment, so `Stream` and
/// `socket_caps::Stream` count as the same tag.
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types {
        let key = match ty {
            Type::Path(type_path) if type_path.qself.is_none() => type_path
                .path
                .segments
                .last()
                .map(|segment| segment.ident.to_string()),
            _ => None,
        }
        .unwrap_or_else(|| ty.to_token_stream().to_string().replace(' ', ""));

        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!("duplicate socket interface `{}`", key),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(src: &str) -> Type {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn bare_names_map_into_the_crate() {
        let path = tag_path(&ty("Handshake")).unwrap().to_string();
        assert_eq!(path.replace(' ', ""), "::socket_caps::Handshake");
    }

    #[test]
    fn qualified_paths_pass_through() {
        let path = tag_path(&ty("caps::Stream")).unwrap().to_string();
        assert_eq!(path.replace(' ', ""), "caps::Stream");
    }

    #[test]
    fn generic_arguments_are_rejected() {
        assert!(tag_path(&ty("Stream<u8>")).is_err());
    }

    #[test]
    fn duplicates() {
        assert!(check_duplicates(&[ty("Socket"), ty("Stream")]).is_ok());
        assert!(check_duplicates(&[ty("Socket"), ty("Stream"), ty("Socket")]).is_err());
    }

    #[test]
    fn duplicates_through_paths() {
        assert!(check_duplicates(&[ty("Stream"), ty("socket_caps::Stream")]).is_err());
        assert!(check_duplicates(&[ty("::socket_caps::Handshake"), ty("Handshake")]).is_err());
        assert!(check_duplicates(&[ty("socket_caps::Stream"), ty("socket_caps::Socket")]).is_ok());
    }
}
