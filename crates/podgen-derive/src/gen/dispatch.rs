use crate::prelude::*;

///
/// Dispatch
///
/// The two interchangeable code shapes for per-class name dispatch. Both
/// match at most one property by exact, case-sensitive name equality and
/// fall through to the inheritance-chain tail when nothing matches.
/// `Chain` exists for targets/generation modes without efficient multi-way
/// string branching; it must stay observably equivalent to `Branch`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dispatch {
    Branch,
    Chain,
}

impl Dispatch {
    #[must_use]
    pub const fn from_opts(opts: &Opts) -> Self {
        if opts.branch_dispatch {
            Self::Branch
        } else {
            Self::Chain
        }
    }

    /// Build a dispatch method body from one arm per declared property plus
    /// the fallthrough tail.
    #[must_use]
    pub fn method_body(self, arms: &[DispatchArm], fallthrough: &TokenStream) -> TokenStream {
        match self {
            Self::Branch => branch_body(arms, fallthrough),
            Self::Chain => chain_body(arms, fallthrough),
        }
    }
}

///
/// DispatchArm
///

pub struct DispatchArm {
    pub name: String,
    pub body: TokenStream,
}

// One match arm per property, keyed by the literal schema name.
fn branch_body(arms: &[DispatchArm], fallthrough: &TokenStream) -> TokenStream {
    let cases = arms.iter().map(|arm| {
        let name = &arm.name;
        let body = &arm.body;

        quote!(#name => #body,)
    });

    quote! {
        match name {
            #(#cases)*
            _ => #fallthrough,
        }
    }
}

// Sequential first-match equality chain, built back to front.
fn chain_body(arms: &[DispatchArm], fallthrough: &TokenStream) -> TokenStream {
    let mut expr = quote!(#fallthrough);

    for arm in arms.iter().rev() {
        let name = &arm.name;
        let body = &arm.body;

        expr = quote! {
            if name == #name { #body } else { #expr }
        };
    }

    expr
}
