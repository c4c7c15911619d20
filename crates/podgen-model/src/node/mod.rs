mod class;
mod property;

pub use class::*;
pub use property::*;

use proc_macro2::Span;
use syn::Ident;

///
/// Def
///
/// Identity of the item a model node was parsed from. Filled in by the
/// macro driver after attribute parsing, hence the placeholder default.
///

#[derive(Clone, Debug)]
pub struct Def {
    pub ident: Ident,
}

impl Def {
    #[must_use]
    pub const fn new(ident: Ident) -> Self {
        Self { ident }
    }

    #[must_use]
    pub const fn ident(&self) -> &Ident {
        &self.ident
    }
}

impl Default for Def {
    fn default() -> Self {
        Self {
            ident: Ident::new("__unresolved", Span::call_site()),
        }
    }
}
