//! Config derive macro - generates FIELDS and KEYS.

mod attr;
mod field;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{get_rename_all, get_section};
use field::FieldInfo;
use types::{KeyCase, infer_section};

/// Generate Config implementation.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_section(&input.attrs).unwrap_or_else(|| infer_section(&name.to_string()));

    let case = match get_rename_all(&input.attrs) {
        Some(rule) => match KeyCase::parse(&rule) {
            Some(case) => case,
            None => {
                let msg = format!("unsupported rename_all rule `{rule}`");
                return quote! { compile_error!(#msg); };
            }
        },
        None => KeyCase::Snake,
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|f| FieldInfo::from_field(f, case))
        .filter(|f| !f.skip)
        .collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.key.clone()
        } else {
            format!("{}.{}", section, f.key)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let keys = field_infos.iter().map(|f| f.key.as_str());

    quote! {
        /// Generated field path accessors.
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Keys understood in this table, in declaration order.
            pub const KEYS: &'static [&'static str] = &[#(#keys),*];
        }
    }
}
