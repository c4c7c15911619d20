use crate::{r#gen::Implementor, prelude::*};
use podgen_model::ModelError;

///
/// Data struct and static accessor emission.
///
/// This is the stand-in for the surrounding per-property generator: a plain
/// struct (parent embedding first, declared fields, then the additional
/// store) and one getter/setter pair per declared property. The dynamic
/// accessor synthesizer only ever calls these through the resolved
/// getter/setter references on each descriptor.
///

#[must_use]
pub fn type_part(class: &Class) -> TokenStream {
    let ident = class.def.ident();

    let parent = class.extends.as_ref().map(|extends| {
        let field = extends.field_ident();
        let ty = &extends.ty;

        quote!(#field: #ty,)
    });

    let fields = class.fields.iter().map(|property| {
        let field = &property.ident;
        let ty = property.type_expr();

        quote!(#field: #ty,)
    });

    let additional = class.additional.as_ref().map(|additional| {
        let field = additional.field_ident();

        quote! {
            #field: ::std::collections::BTreeMap<::std::string::String, ::podgen::value::Value>,
        }
    });

    quote! {
        #[derive(Clone, Debug, Default)]
        pub struct #ident {
            #parent
            #(#fields)*
            #additional
        }
    }
}

pub fn accessor_part(class: &Class) -> Result<TokenStream, ModelError> {
    let class_name = class.class_name();
    let mut members = TokenStream::new();

    for property in class.fields.iter() {
        let field = &property.ident;
        let ty = property.type_expr();

        let getter = property
            .getter
            .as_ref()
            .ok_or_else(|| ModelError::UnresolvedGetter {
                class: class_name.clone(),
                property: property.schema_name(),
            })?;
        let setter = property
            .setter
            .as_ref()
            .ok_or_else(|| ModelError::UnresolvedSetter {
                class: class_name.clone(),
                property: property.schema_name(),
            })?;

        members.extend(quote! {
            #[must_use]
            pub fn #getter(&self) -> &#ty {
                &self.#field
            }

            pub fn #setter(&mut self, value: #ty) {
                self.#field = value;
            }
        });
    }

    if let Some(extends) = &class.extends {
        let field = extends.field_ident();
        let ty = &extends.ty;

        members.extend(quote! {
            #[must_use]
            pub fn #field(&self) -> &#ty {
                &self.#field
            }
        });
    }

    if let Some(additional) = &class.additional {
        let field = additional.field_ident();
        let getter = additional.getter_ident();
        let getter_mut = additional.getter_mut_ident();

        members.extend(quote! {
            #[must_use]
            pub fn #getter(
                &self,
            ) -> &::std::collections::BTreeMap<::std::string::String, ::podgen::value::Value> {
                &self.#field
            }

            pub fn #getter_mut(
                &mut self,
            ) -> &mut ::std::collections::BTreeMap<::std::string::String, ::podgen::value::Value> {
                &mut self.#field
            }
        });
    }

    Ok(Implementor::new(&class.def, TraitKind::Inherent)
        .set_tokens(members)
        .to_token_stream())
}
