mod r#gen;
mod trait_kind;

pub(crate) mod prelude {
    pub(crate) use crate::trait_kind::TraitKind;
    pub(crate) use podgen_model::prelude::*;
}

use crate::r#gen::ClassGen;
use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
use podgen_model::node::{Class, Def};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Fields, ItemStruct};

/// Expand a schema class declaration into a data struct with static
/// accessors and, per its generation flags, the dynamic get/set/with
/// surface. Declared properties, parent linkage, and the additional
/// properties store all come from the attribute arguments:
///
/// ```ignore
/// #[class_model(fields(
///     field(ident = "name", ty = "string"),
///     field(ident = "count", ty = "integer"),
/// ))]
/// pub struct Widget;
/// ```
#[proc_macro_attribute]
pub fn class_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand(attr.into(), item.into()) {
        Ok(tokens) | Err(tokens) => tokens.into(),
    }
}

fn expand(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2, TokenStream2> {
    // Phase 1: parse the annotated item; its body is replaced wholesale.
    let input: ItemStruct = syn::parse2(item).map_err(|err| err.to_compile_error())?;
    if !matches!(&input.fields, Fields::Unit) && !input.fields.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "class_model replaces the struct body; declare properties in the attribute instead",
        )
        .to_compile_error());
    }

    // Phase 2: parse attribute arguments into the class model.
    let metas = NestedMeta::parse_meta_list(attr)
        .map_err(|err| DarlingError::from(err).write_errors())?;
    let mut class = Class::from_list(&metas).map_err(|err| err.write_errors())?;
    class.def = Def::new(input.ident.clone());

    // Phase 3: validate before any code is generated.
    class.validate().map_err(|err| err.write_errors())?;

    // Phase 4: resolve accessor references the way the surrounding
    // generator names them, then emit.
    for property in class.fields.iter_mut() {
        property.resolve_accessors();
    }

    ClassGen(&class)
        .generate()
        .map_err(|err| syn::Error::new(input.ident.span(), err.to_string()).to_compile_error())
}
