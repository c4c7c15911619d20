use crate::prelude::*;

///
/// Inheritance-chain delegation tails.
///
/// A derived class tries its own declared properties first; the fallthrough
/// is a direct call on the statically known embedded parent field, so the
/// chain needs no virtual or reflective lookup. The root class terminates
/// the get direction with `Lookup::NotFound` and the set direction with
/// `Ok(false)` (set dispatch reports handled/unhandled, not a value).
///

#[must_use]
pub fn get_fallthrough(class: &Class) -> TokenStream {
    match &class.extends {
        Some(extends) => {
            let field = extends.field_ident();

            quote!(self.#field.declared_get(name))
        }
        None => quote!(::podgen::access::Lookup::NotFound),
    }
}

#[must_use]
pub fn set_fallthrough(class: &Class) -> TokenStream {
    match &class.extends {
        Some(extends) => {
            let field = extends.field_ident();

            quote!(self.#field.declared_set(name, value))
        }
        None => quote!(::std::result::Result::Ok(false)),
    }
}
