pub mod node;
pub mod types;
pub mod validate;

use thiserror::Error as ThisError;

/// Maximum length for class schema identifiers.
pub const MAX_CLASS_NAME_LEN: usize = 64;

/// Maximum length for property schema identifiers.
pub const MAX_PROPERTY_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        MAX_CLASS_NAME_LEN, MAX_PROPERTY_NAME_LEN, ModelError,
        node::{AdditionalProps, Class, Def, Extends, Opts, Property, PropertyList},
        types::{Cardinality, Primitive},
    };
    pub use darling::{Error as DarlingError, FromMeta};
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, format_ident, quote};
    pub use syn::{Ident, LitStr, Path};
}

///
/// ModelError
///
/// Fatal generation-time defects. A descriptor that reaches the synthesizer
/// without resolvable accessor references indicates an upstream resolver
/// bug and aborts generation for that class.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("class '{class}' property '{property}' has no resolvable getter reference")]
    UnresolvedGetter { class: String, property: String },

    #[error("class '{class}' property '{property}' has no resolvable setter reference")]
    UnresolvedSetter { class: String, property: String },
}
