use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(Model, attributes(primary_key))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let schema_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Model can only be derived for structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut primary_keys = fields
        .iter()
        .filter(|field| field.attrs.iter().any(|a| a.path().is_ident("primary_key")));
    let primary_key = primary_keys.next();
    if let Some(extra) = primary_keys.next() {
        return syn::Error::new_spanned(extra, "Model can only have one #[primary_key] field")
            .to_compile_error()
            .into();
    }

    let idents: Vec<_> = fields.iter().filter_map(|field| field.ident.as_ref()).collect();
    let names: Vec<_> = idents.iter().map(|ident| ident.to_string()).collect();
    let types: Vec<_> = fields.iter().map(|field| &field.ty).collect();
    let count = idents.len();

    let with_primary_key = primary_key
        .and_then(|field| field.ident.as_ref())
        .map(|ident| {
            let name = ident.to_string();
            quote! { .with_primary_key(#name) }
        });

    let expanded = quote! {
        impl #impl_generics ::listdb::Model for #struct_name #ty_generics #where_clause {
            const NAME: &'static str = #schema_name;

            fn schema() -> ::listdb::ObjectSchema {
                ::listdb::ObjectSchema::new(Self::NAME)
                    #(
                        .with_property(
                            ::listdb::Property::new(
                                #names,
                                <#types as ::listdb::PropertyValue>::KIND,
                            )
                            .with_optional(<#types as ::listdb::PropertyValue>::OPTIONAL),
                        )
                    )*
                    #with_primary_key
            }

            fn into_object(self) -> ::listdb::Result<::listdb::Object> {
                let values: [(&'static str, ::listdb::Value); #count] = [
                    #(
                        (
                            #names,
                            ::listdb::PropertyValue::into_value(self.#idents),
                        ),
                    )*
                ];
                ::listdb::Object::with_values(
                    ::std::sync::Arc::new(<Self as ::listdb::Model>::schema()),
                    values,
                )
            }
        }
    };

    TokenStream::from(expanded)
}
