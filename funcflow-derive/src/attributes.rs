//! Implementation of the `#[derive(Attributes)]` macro.
//!
//! The generated `attribute` method matches the requested name against the
//! struct's field names and returns the field as `&dyn Any`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, parse_macro_input, parse_quote};

/// Main implementation of the Attributes derive macro.
pub fn derive_attributes_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(input))
}

fn expand(mut input: DeriveInput) -> TokenStream2 {
    let fields = match &input.data {
        Data::Struct(data_struct) => data_struct.fields.clone(),
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                "Attributes can only be derived for structs, not enums.",
            )
            .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Attributes cannot be derived for unions.")
                .to_compile_error();
        }
    };

    let arms: Vec<TokenStream2> = match &fields {
        Fields::Named(named_fields) => named_fields
            .named
            .iter()
            .filter_map(|field| field.ident.as_ref())
            .map(|field_name| {
                let key = field_name.to_string();
                quote! { #key => ::core::option::Option::Some(&self.#field_name) }
            })
            .collect(),
        Fields::Unnamed(unnamed_fields) => (0..unnamed_fields.unnamed.len())
            .map(|position| {
                let key = position.to_string();
                let index = Index::from(position);
                quote! { #key => ::core::option::Option::Some(&self.#index) }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    // Every exposed field must be `Any`, which rules out borrowed fields
    let where_clause = input.generics.make_where_clause();
    for field in &fields {
        let field_type = &field.ty;
        where_clause
            .predicates
            .push(parse_quote!(#field_type: ::core::any::Any));
    }

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::funcflow::sequence::Attributes for #name #type_generics #where_clause {
            fn attribute(&self, name: &str) -> ::core::option::Option<&dyn ::core::any::Any> {
                match name {
                    #(#arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
