use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr, Type};

/// Parsed `#[env(...)]` options of one field.
struct FieldOpts {
    name: String,
    optional: bool,
}

pub fn generate_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "EnvTarget can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "EnvTarget can only be derived for structs with named fields",
            ));
        }
    };

    let mut bindings = Vec::new();
    for field in fields {
        let Some(opts) = parse_field_opts(field)? else {
            continue;
        };
        bindings.push(generate_binding(field, &opts));
    }

    let type_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envbind::EnvTarget for #type_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envbind::FieldBinding<'_>> {
                ::std::vec![#(#bindings),*]
            }
        }
    })
}

fn parse_field_opts(field: &Field) -> syn::Result<Option<FieldOpts>> {
    let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("env")) else {
        return Ok(None);
    };

    let mut name: Option<LitStr> = None;
    let mut optional = false;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("optional") {
            optional = true;
            Ok(())
        } else {
            Err(meta.error("unsupported env attribute, expected `name` or `optional`"))
        }
    })?;

    let Some(name) = name else {
        return Err(syn::Error::new_spanned(
            attr,
            "missing environment variable name, expected #[env(name = \"VAR\")]",
        ));
    };
    if name.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "environment variable name cannot be empty",
        ));
    }

    Ok(Some(FieldOpts {
        name: name.value(),
        optional,
    }))
}

fn generate_binding(field: &Field, opts: &FieldOpts) -> TokenStream2 {
    // Named fields always carry an ident.
    let ident = field.ident.as_ref();
    let field_name = ident.map(|i| i.to_string()).unwrap_or_default();
    let env_name = &opts.name;

    if is_string(&field.ty) {
        let constructor = if opts.optional {
            quote!(optional)
        } else {
            quote!(text)
        };
        quote! {
            ::envbind::FieldBinding::#constructor(#field_name, #env_name, &mut self.#ident)
        }
    } else {
        let ty = &field.ty;
        let type_name = quote!(#ty).to_string().replace(' ', "");
        quote! {
            ::envbind::FieldBinding::unsupported(#field_name, #env_name, #type_name)
        }
    }
}

fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segments: Vec<String> = type_path
                .path
                .segments
                .iter()
                .map(|s| s.ident.to_string())
                .collect();
            let last_is_plain = type_path
                .path
                .segments
                .last()
                .is_some_and(|s| s.arguments.is_empty());
            last_is_plain
                && matches!(
                    segments.iter().map(String::as_str).collect::<Vec<_>>().as_slice(),
                    ["String"] | ["std", "string", "String"] | ["alloc", "string", "String"]
                )
        }
        _ => false,
    }
}
