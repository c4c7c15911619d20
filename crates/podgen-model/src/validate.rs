use crate::{
    MAX_CLASS_NAME_LEN, MAX_PROPERTY_NAME_LEN,
    node::{Class, Property},
};
use convert_case::{Case, Casing};
use darling::Error as DarlingError;
use std::collections::BTreeMap;
use syn::Ident;

// Names claimed by the generated dynamic accessor surface.
const RESERVED_WORDS: [&str; 5] = ["get", "set", "with", "declared_get", "declared_set"];

#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

pub fn validate_class(class: &Class) -> Result<(), DarlingError> {
    let class_name = class.class_name();

    if class_name.len() > MAX_CLASS_NAME_LEN {
        return Err(DarlingError::custom(format!(
            "class name '{class_name}' exceeds max length {MAX_CLASS_NAME_LEN}"
        )));
    }

    class.fields.validate()?;

    // Property names must be unique within the class; dispatch arms would
    // otherwise be unreachable.
    let mut seen: BTreeMap<String, &Ident> = BTreeMap::new();
    for property in class.fields.iter() {
        let name = property.schema_name();
        if seen.insert(name.clone(), &property.ident).is_some() {
            return Err(
                DarlingError::custom(format!("duplicate property name '{name}'"))
                    .with_span(&property.ident),
            );
        }
    }

    validate_accessor_idents(class)?;

    Ok(())
}

pub fn validate_property(property: &Property) -> Result<(), DarlingError> {
    let ident_str = property.ident.to_string();

    if ident_str.len() > MAX_PROPERTY_NAME_LEN {
        return Err(DarlingError::custom(format!(
            "property ident '{ident_str}' exceeds max length {MAX_PROPERTY_NAME_LEN}"
        ))
        .with_span(&property.ident));
    }

    if is_reserved_word(&ident_str) {
        return Err(
            DarlingError::custom(format!("the word '{ident_str}' is reserved"))
                .with_span(&property.ident),
        );
    }

    if !ident_str.is_case(Case::Snake) {
        return Err(DarlingError::custom(format!(
            "property ident '{ident_str}' must be snake_case"
        ))
        .with_span(&property.ident));
    }

    let schema_name = property.schema_name();
    if schema_name.is_empty() || schema_name.len() > MAX_PROPERTY_NAME_LEN {
        return Err(DarlingError::custom(format!(
            "property name '{schema_name}' must be 1..={MAX_PROPERTY_NAME_LEN} characters"
        ))
        .with_span(&property.ident));
    }

    Ok(())
}

// Accessor idents (after defaulting), the parent field, and the additional
// store field all land on one impl block and one struct; clashes there are
// upstream resolver defects, caught before generation.
fn validate_accessor_idents(class: &Class) -> Result<(), DarlingError> {
    let mut used: BTreeMap<String, String> = BTreeMap::new();

    let mut claim = |ident: String, owner: &Property| -> Result<(), DarlingError> {
        if let Some(prev) = used.insert(ident.clone(), owner.schema_name()) {
            return Err(DarlingError::custom(format!(
                "accessor ident '{ident}' of property '{}' clashes with property '{prev}'",
                owner.schema_name()
            ))
            .with_span(&owner.ident));
        }
        Ok(())
    };

    for property in class.fields.iter() {
        let getter = property
            .getter
            .as_ref()
            .map_or_else(|| property.ident.to_string(), Ident::to_string);
        let setter = property
            .setter
            .as_ref()
            .map_or_else(|| format!("set_{}", property.ident), Ident::to_string);

        claim(getter, property)?;
        claim(setter, property)?;
    }

    let mut struct_fields: BTreeMap<String, &'static str> = BTreeMap::new();
    if let Some(extends) = &class.extends {
        struct_fields.insert(extends.field_ident().to_string(), "parent link");
    }
    if let Some(additional) = &class.additional {
        struct_fields.insert(additional.field_ident().to_string(), "additional store");
    }

    for property in class.fields.iter() {
        if let Some(kind) = struct_fields.get(&property.ident.to_string()) {
            return Err(DarlingError::custom(format!(
                "property ident '{}' clashes with the class's {kind} field",
                property.ident
            ))
            .with_span(&property.ident));
        }
    }

    Ok(())
}
