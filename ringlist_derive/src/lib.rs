use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath,
};

struct AnchoredAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for AnchoredAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(AnchoredAttribute { crate_path: path })
    }
}

/// Derive macro for list entry types that embed a `Link`.
///
/// The struct must be `#[repr(C)]` with a first field named `link` of type
/// `Link`, so that an entry pointer and its link pointer coincide. The macro
/// checks those requirements and emits the `unsafe impl Anchored`.
#[proc_macro_derive(Anchored, attributes(anchored))]
pub fn anchored_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::ringlist };

    for attr in &input.attrs {
        if attr.path().is_ident("anchored") {
            match attr.parse_args::<AnchoredAttribute>() {
                Ok(anchored_attr) => {
                    let path = anchored_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    // The cast-based accessors are only sound when the link sits at offset
    // zero, which requires a C layout.
    let mut repr_c = false;
    for attr in &input.attrs {
        if attr.path().is_ident("repr") {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("C") {
                    repr_c = true;
                }
                Ok(())
            });
        }
    }
    if !repr_c {
        return syn::Error::new_spanned(struct_name, "Anchored types must be #[repr(C)]")
            .to_compile_error()
            .into();
    }

    let link_field = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        match fields.named.first() {
            Some(field) if field.ident.as_ref().is_some_and(|ident| ident == "link") => {
                field.clone()
            }
            Some(field) => {
                return syn::Error::new_spanned(
                    field,
                    "The first field must be named 'link' and hold the embedded Link",
                )
                .to_compile_error()
                .into();
            }
            None => {
                return syn::Error::new_spanned(
                    struct_name,
                    "Struct must have a first field named 'link'",
                )
                .to_compile_error()
                .into();
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Anchored derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_type = &link_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = link_type {
        path.segments
            .last()
            .expect("Expected at least one segment in the type path")
            .ident
            .clone()
    } else {
        return syn::Error::new_spanned(link_type, "Field 'link' must be of type Link")
            .to_compile_error()
            .into();
    };

    if type_ident != "Link" {
        return syn::Error::new_spanned(link_type, "Field 'link' must be of type Link")
            .to_compile_error()
            .into();
    }

    let expanded = quote! {
        unsafe impl #impl_generics #crate_path::traits::Anchored for #struct_name #ty_generics #where_clause {
            #[inline]
            fn link(&self) -> &#crate_path::link::Link {
                &self.link
            }

            #[inline]
            fn link_mut(&mut self) -> &mut #crate_path::link::Link {
                &mut self.link
            }
        }
    };

    TokenStream::from(expanded)
}
