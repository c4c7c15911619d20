use proc_macro2::TokenStream;
use quote::quote;

///
/// TraitKind
///
/// Where a block of generated members lands: a runtime trait impl, or an
/// inherent impl for members that are not part of the public surface.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraitKind {
    DynamicAccess,
    DynamicBuild,
    Inherent,
}

impl TraitKind {
    #[must_use]
    pub fn trait_path(self) -> Option<TokenStream> {
        match self {
            Self::DynamicAccess => Some(quote!(::podgen::traits::DynamicAccess)),
            Self::DynamicBuild => Some(quote!(::podgen::traits::DynamicBuild)),
            Self::Inherent => None,
        }
    }
}
