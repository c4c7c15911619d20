use crate::{node::{Def, PropertyList}, validate};
use darling::{Error as DarlingError, FromMeta};
use quote::format_ident;
use syn::{Ident, LitStr, Path};

///
/// Class
///
/// Generation-time shape of one generated class: ordered property list,
/// optional parent linkage (single inheritance), optional open property bag,
/// and the per-class generation flags. Read-only for the accessor
/// synthesizer; generated members are appended downstream.
///

#[derive(Debug, FromMeta)]
pub struct Class {
    #[darling(default, skip)]
    pub def: Def,

    #[darling(default)]
    pub name: Option<LitStr>,

    #[darling(default)]
    pub extends: Option<Extends>,

    #[darling(default)]
    pub additional: Option<AdditionalProps>,

    #[darling(default)]
    pub opts: Opts,

    #[darling(default)]
    pub fields: PropertyList,
}

impl Class {
    /// Schema-facing class name: explicit override or the item ident.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| self.def.ident().to_string(), LitStr::value)
    }

    pub fn validate(&self) -> Result<(), DarlingError> {
        validate::validate_class(self)
    }
}

///
/// Extends
///
/// Parent linkage. The parent class is embedded as a named field of the
/// derived struct; generated dispatch delegates through it with a direct,
/// statically resolved call.
///

#[derive(Clone, Debug, FromMeta)]
pub struct Extends {
    pub ty: Path,

    #[darling(default)]
    pub field: Option<Ident>,
}

impl Extends {
    #[must_use]
    pub fn field_ident(&self) -> Ident {
        self.field
            .clone()
            .unwrap_or_else(|| format_ident!("parent"))
    }
}

///
/// AdditionalProps
///
/// Declares the open, name-keyed fallback store. Absence means the class is
/// closed: unmatched names are hard failures.
///

#[derive(Clone, Debug, Default, FromMeta)]
pub struct AdditionalProps {
    #[darling(default)]
    pub field: Option<Ident>,
}

impl AdditionalProps {
    #[must_use]
    pub fn field_ident(&self) -> Ident {
        self.field
            .clone()
            .unwrap_or_else(|| format_ident!("additional_properties"))
    }

    #[must_use]
    pub fn getter_ident(&self) -> Ident {
        self.field_ident()
    }

    #[must_use]
    pub fn getter_mut_ident(&self) -> Ident {
        format_ident!("{}_mut", self.field_ident())
    }
}

///
/// Opts
///
/// Per-class generation flags. `dynamic` gates the whole component;
/// `branch_dispatch` selects the branch-table dispatch shape over the
/// sequential equality chain (a compatibility fallback, behaviorally
/// identical).
///

#[derive(Clone, Copy, Debug, FromMeta)]
pub struct Opts {
    #[darling(default = "default_true")]
    pub accessors: bool,

    #[darling(default = "default_true")]
    pub builders: bool,

    #[darling(default = "default_true")]
    pub dynamic: bool,

    #[darling(default = "default_true")]
    pub branch_dispatch: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            accessors: true,
            builders: true,
            dynamic: true,
            branch_dispatch: true,
        }
    }
}

const fn default_true() -> bool {
    true
}
