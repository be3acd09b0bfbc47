//! Procedural macro for deriving `AnswerSink` implementations.
//!
//! The generated `write_answer` looks up the struct field for a question name and
//! coerces the answer into the field's type with `FromAnswer`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Type, parse_macro_input};

/// Derive the `AnswerSink` trait for a struct with named fields.
///
/// A question name selects a field in two passes:
/// 1. a field whose `#[answer(rename = "...")]` equals the name exactly,
/// 2. otherwise a field whose identifier equals the name, ignoring ASCII case.
///
/// Every field type must implement `FromAnswer`.
///
/// # Attributes
///
/// ## On fields
/// - `#[answer(rename = "...")]` - Record answers to the question with this name here
/// - `#[answer(skip)]` - Never record answers into this field
#[proc_macro_derive(AnswerSink, attributes(answer))]
pub fn derive_answer_sink(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    implement_answer_sink(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn implement_answer_sink(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = collect_fields(input)?;

    let renamed = fields.iter().filter_map(|field| {
        field
            .rename
            .as_ref()
            .map(|rename| assign_field(field, quote! { name == #rename }))
    });

    let by_ident = fields.iter().map(|field| {
        let ident_str = &field.ident_str;
        assign_field(field, quote! { name.eq_ignore_ascii_case(#ident_str) })
    });

    Ok(quote! {
        impl #impl_generics asking::AnswerSink for #name #ty_generics #where_clause {
            fn write_answer(
                &mut self,
                name: &str,
                value: asking::AnswerValue,
            ) -> ::core::result::Result<(), asking::BindError> {
                #(#renamed)*
                #(#by_ident)*
                ::core::result::Result::Err(asking::BindError::UnknownField(name.to_string()))
            }
        }
    })
}

fn assign_field(field: &SinkField, condition: TokenStream2) -> TokenStream2 {
    let ident = &field.ident;
    let ty = &field.ty;
    quote! {
        if #condition {
            self.#ident = <#ty as asking::FromAnswer>::from_answer(value)
                .map_err(|source| asking::BindError::coerce(name, source))?;
            return ::core::result::Result::Ok(());
        }
    }
}

// ============================================================================
// Field Extraction
// ============================================================================

/// A field that answers can be recorded into.
struct SinkField {
    ident: Ident,
    ident_str: String,
    ty: Type,
    rename: Option<String>,
}

fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<SinkField>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "AnswerSink can only be derived for structs",
            ));
        }
    };

    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "AnswerSink can only be derived for structs with named fields",
        ));
    };

    let mut fields = Vec::new();
    for field in &named.named {
        let attrs = FieldAttrs::extract(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let ident_str = ident.to_string();
        let ident_str = ident_str
            .strip_prefix("r#")
            .unwrap_or(&ident_str)
            .to_string();
        fields.push(SinkField {
            ident,
            ident_str,
            ty: field.ty.clone(),
            rename: attrs.rename,
        });
    }
    Ok(fields)
}

/// Attributes that can appear on fields
#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn extract(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut field_attrs = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("answer") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(meta.error("rename must not be empty"));
                    }
                    field_attrs.rename = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    field_attrs.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }

        Ok(field_attrs)
    }
}
