use crate::prelude::*;

///
/// Implementor
///
/// Wraps a block of generated members in the right impl shell for its
/// `TraitKind`.
///

pub struct Implementor<'a> {
    def: &'a Def,
    kind: TraitKind,
    tokens: TokenStream,
}

impl<'a> Implementor<'a> {
    #[must_use]
    pub fn new(def: &'a Def, kind: TraitKind) -> Self {
        Self {
            def,
            kind,
            tokens: TokenStream::new(),
        }
    }

    #[must_use]
    pub fn set_tokens(mut self, tokens: TokenStream) -> Self {
        self.tokens = tokens;
        self
    }
}

impl ToTokens for Implementor<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = self.def.ident();
        let body = &self.tokens;

        tokens.extend(match self.kind.trait_path() {
            Some(path) => quote! {
                impl #path for #ident {
                    #body
                }
            },
            None => quote! {
                impl #ident {
                    #body
                }
            },
        });
    }
}
