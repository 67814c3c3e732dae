use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{ItemFn, ItemStruct, Lit, LitStr, Meta};

/// Expands the `#[api_model]` attribute macro.
///
/// Automatically adds common derives (`Debug`, `Serialize`, `Deserialize`, `ToSchema`)
/// and configures serde for camelCase and strict field checking.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let ApiModelArgs { rename_all, deny_unknown_fields } = match parse_api_model_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };

    let rename_all = rename_all
        .unwrap_or_else(|| LitStr::new("camelCase", proc_macro2::Span::call_site()));
    let deny_attr = if deny_unknown_fields.unwrap_or(true) {
        quote! { #[serde(deny_unknown_fields)] }
    } else {
        quote! {}
    };

    quote! {
        #[derive(Debug, ::serde::Serialize, ::serde::Deserialize)]
        #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))]
        #[serde(rename_all = #rename_all)]
        #deny_attr
        #input
    }
}

/// Expands the `#[api_handler]` attribute macro.
///
/// Integrates with `utoipa::path` for `OpenAPI` documentation while maintaining
/// clean handler signatures.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let body = &input.block;
    let sig = &input.sig;
    let vis = &input.vis;
    let attrs = &input.attrs;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig {
            #body
        }
    }
}

struct ApiModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

fn parse_api_model_args(args: TokenStream) -> Result<ApiModelArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut rename_all = None;
    let mut deny_unknown_fields = None;

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            )
            .to_compile_error());
        };
        if name_value.path.is_ident("rename_all") {
            if rename_all.is_some() {
                return Err(duplicate(&name_value));
            }
            rename_all = Some(string_literal(&name_value, "rename_all")?);
            continue;
        }
        if name_value.path.is_ident("deny_unknown_fields") {
            if deny_unknown_fields.is_some() {
                return Err(duplicate(&name_value));
            }
            deny_unknown_fields = Some(bool_literal(&name_value, "deny_unknown_fields")?);
            continue;
        }
        return Err(syn::Error::new_spanned(
            name_value.path,
            "Unsupported argument; expected rename_all or deny_unknown_fields",
        )
        .to_compile_error());
    }

    Ok(ApiModelArgs { rename_all, deny_unknown_fields })
}

fn duplicate(token: &syn::MetaNameValue) -> TokenStream {
    syn::Error::new_spanned(token, "Duplicate argument").to_compile_error()
}

fn string_literal(name_value: &syn::MetaNameValue, label: &str) -> Result<LitStr, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value {
        if let Lit::Str(lit) = &expr_lit.lit {
            return Ok(lit.clone());
        }
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a string literal"))
        .to_compile_error())
}

fn bool_literal(name_value: &syn::MetaNameValue, label: &str) -> Result<bool, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value {
        if let Lit::Bool(lit) = &expr_lit.lit {
            return Ok(lit.value);
        }
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a boolean literal"))
        .to_compile_error())
}
