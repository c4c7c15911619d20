use crate::types::{Cardinality, Primitive};
use darling::{Error as DarlingError, FromMeta};
use derive_more::{Deref, DerefMut};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, LitStr};

///
/// PropertyList
///
/// Ordered set of one class's declared properties. Order is dispatch order:
/// first match wins within the class, and the whole list is tried before any
/// ancestor delegation.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, FromMeta)]
pub struct PropertyList {
    #[darling(multiple, rename = "field")]
    pub fields: Vec<Property>,
}

impl PropertyList {
    pub fn validate(&self) -> Result<(), DarlingError> {
        for property in &self.fields {
            property.validate()?;
        }
        Ok(())
    }
}

///
/// Property
///
/// One declared property: schema name, declared type, and the generated
/// field/getter/setter identifiers. Immutable once resolved. Accessor
/// references default from the ident at resolution time; a descriptor that
/// reaches the synthesizer without them is a fatal upstream defect.
///

#[derive(Clone, Debug, FromMeta)]
pub struct Property {
    pub ident: Ident,
    pub ty: Primitive,

    #[darling(default)]
    pub opt: bool,

    #[darling(default)]
    pub name: Option<LitStr>,

    #[darling(default)]
    pub getter: Option<Ident>,

    #[darling(default)]
    pub setter: Option<Ident>,
}

impl Property {
    /// Schema-facing property name: explicit override or the field ident.
    #[must_use]
    pub fn schema_name(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| self.ident.to_string(), LitStr::value)
    }

    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        if self.opt {
            Cardinality::Opt
        } else {
            Cardinality::One
        }
    }

    /// The declared Rust type, `Option`-wrapped for nullable properties.
    #[must_use]
    pub fn type_expr(&self) -> TokenStream {
        let ty = self.ty.type_expr();

        match self.cardinality() {
            Cardinality::One => ty,
            Cardinality::Opt => quote!(::std::option::Option<#ty>),
        }
    }

    /// Fill in accessor references the surrounding generator would have
    /// produced for this property, unless explicitly overridden.
    pub fn resolve_accessors(&mut self) {
        if self.getter.is_none() {
            self.getter = Some(self.ident.clone());
        }
        if self.setter.is_none() {
            self.setter = Some(format_ident!("set_{}", self.ident));
        }
    }

    pub fn validate(&self) -> Result<(), DarlingError> {
        crate::validate::validate_property(self)
    }
}
