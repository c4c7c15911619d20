use crate::{
    r#gen::{
        Implementor, chain,
        dispatch::{Dispatch, DispatchArm},
    },
    prelude::*,
};
use podgen_model::ModelError;

///
/// AccessorSynthesizer
///
/// For one class, emits the internal dispatch pair (`declared_get` /
/// `declared_set`) and the public dynamic operations, conditioned on the
/// class's generation flags. The internal pair is needed by both accessors
/// and builders, so it is emitted whenever either is requested; the
/// additional-properties store is bridged only in the public operations,
/// never inside the dispatch chain.
///

pub fn synthesize(class: &Class) -> Result<TokenStream, ModelError> {
    let opts = &class.opts;

    if !opts.dynamic {
        return Ok(TokenStream::new());
    }

    let mut tokens = TokenStream::new();

    if opts.accessors || opts.builders {
        tokens.extend(internal_pair(class)?);
    }
    if opts.accessors {
        tokens.extend(public_accessors(class));
    }
    if opts.builders {
        tokens.extend(public_builder(class));
    }

    Ok(tokens)
}

// The per-class dispatch pair. Not part of the public surface, but derived
// classes' generated code calls straight into it, hence doc(hidden) pub.
fn internal_pair(class: &Class) -> Result<TokenStream, ModelError> {
    let dispatch = Dispatch::from_opts(&class.opts);

    let get_body = dispatch.method_body(&get_arms(class)?, &chain::get_fallthrough(class));
    let set_body = dispatch.method_body(&set_arms(class)?, &chain::set_fallthrough(class));

    let q = quote! {
        #[doc(hidden)]
        pub fn declared_get(&self, name: &str) -> ::podgen::access::Lookup {
            #get_body
        }

        #[doc(hidden)]
        pub fn declared_set(
            &mut self,
            name: &str,
            value: &::podgen::value::Value,
        ) -> ::std::result::Result<bool, ::podgen::access::AccessError> {
            #set_body
        }
    };

    Ok(Implementor::new(&class.def, TraitKind::Inherent)
        .set_tokens(q)
        .to_token_stream())
}

fn get_arms(class: &Class) -> Result<Vec<DispatchArm>, ModelError> {
    let class_name = class.class_name();

    class
        .fields
        .iter()
        .map(|property| {
            let getter = property
                .getter
                .as_ref()
                .ok_or_else(|| ModelError::UnresolvedGetter {
                    class: class_name.clone(),
                    property: property.schema_name(),
                })?;

            let body = quote! {
                ::podgen::access::Lookup::Found(
                    ::podgen::traits::FieldValue::to_value(self.#getter())
                )
            };

            Ok(DispatchArm {
                name: property.schema_name(),
                body,
            })
        })
        .collect()
}

// The set direction carries the type-compatibility check: an incompatible
// value raises TypeMismatch before any setter runs, so the stored value is
// never half-updated.
fn set_arms(class: &Class) -> Result<Vec<DispatchArm>, ModelError> {
    let class_name = class.class_name();

    class
        .fields
        .iter()
        .map(|property| {
            let setter = property
                .setter
                .as_ref()
                .ok_or_else(|| ModelError::UnresolvedSetter {
                    class: class_name.clone(),
                    property: property.schema_name(),
                })?;

            let ty = property.type_expr();
            let class_lit = class_name.clone();
            let name_lit = property.schema_name();
            let expected_lit = property.ty.schema_name();

            let body = quote! {
                match <#ty as ::podgen::traits::FieldValue>::from_value(value) {
                    ::std::option::Option::Some(value) => {
                        self.#setter(value);
                        ::std::result::Result::Ok(true)
                    }
                    ::std::option::Option::None => {
                        ::std::result::Result::Err(::podgen::access::AccessError::type_mismatch(
                            #class_lit,
                            #name_lit,
                            #expected_lit,
                            value.kind(),
                        ))
                    }
                }
            };

            Ok(DispatchArm {
                name: property.schema_name(),
                body,
            })
        })
        .collect()
}

fn public_accessors(class: &Class) -> TokenStream {
    let miss_get = miss_get(class);
    let miss_set = miss_set(class);

    let q = quote! {
        fn get(
            &self,
            name: &str,
        ) -> ::std::result::Result<::podgen::value::Value, ::podgen::access::AccessError> {
            match self.declared_get(name) {
                ::podgen::access::Lookup::Found(value) => ::std::result::Result::Ok(value),
                ::podgen::access::Lookup::NotFound => #miss_get,
            }
        }

        fn set(
            &mut self,
            name: &str,
            value: ::podgen::value::Value,
        ) -> ::std::result::Result<(), ::podgen::access::AccessError> {
            if self.declared_set(name, &value)? {
                return ::std::result::Result::Ok(());
            }

            #miss_set
        }
    };

    Implementor::new(&class.def, TraitKind::DynamicAccess)
        .set_tokens(q)
        .to_token_stream()
}

// `with` duplicates the set-path bridging rather than calling `set`, so a
// builders-only configuration works without the accessor surface.
fn public_builder(class: &Class) -> TokenStream {
    let miss_with = miss_with(class);

    let q = quote! {
        fn with(
            mut self,
            name: &str,
            value: ::podgen::value::Value,
        ) -> ::std::result::Result<Self, ::podgen::access::AccessError> {
            if self.declared_set(name, &value)? {
                return ::std::result::Result::Ok(self);
            }

            #miss_with
        }
    };

    Implementor::new(&class.def, TraitKind::DynamicBuild)
        .set_tokens(q)
        .to_token_stream()
}

// Read-path bridge: the store's own absence semantics is a null value, so
// only a closed class turns an unmatched name into an error.
fn miss_get(class: &Class) -> TokenStream {
    match &class.additional {
        Some(additional) => {
            let getter = additional.getter_ident();

            quote! {
                ::std::result::Result::Ok(
                    self.#getter()
                        .get(name)
                        .cloned()
                        .unwrap_or(::podgen::value::Value::Null)
                )
            }
        }
        None => unknown_property(class),
    }
}

fn miss_set(class: &Class) -> TokenStream {
    match &class.additional {
        Some(additional) => {
            let getter_mut = additional.getter_mut_ident();

            quote! {
                self.#getter_mut().insert(::std::string::String::from(name), value);
                ::std::result::Result::Ok(())
            }
        }
        None => unknown_property(class),
    }
}

fn miss_with(class: &Class) -> TokenStream {
    match &class.additional {
        Some(additional) => {
            let getter_mut = additional.getter_mut_ident();

            quote! {
                self.#getter_mut().insert(::std::string::String::from(name), value);
                ::std::result::Result::Ok(self)
            }
        }
        None => unknown_property(class),
    }
}

fn unknown_property(class: &Class) -> TokenStream {
    let class_lit = class.class_name();

    quote! {
        ::std::result::Result::Err(::podgen::access::AccessError::unknown_property(
            #class_lit,
            name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(ident: &str, ty: Primitive) -> Property {
        let mut property = Property {
            ident: format_ident!("{ident}"),
            ty,
            opt: false,
            name: None,
            getter: None,
            setter: None,
        };
        property.resolve_accessors();

        property
    }

    fn widget() -> Class {
        Class {
            def: Def::new(format_ident!("Widget")),
            name: None,
            extends: None,
            additional: None,
            opts: Opts::default(),
            fields: PropertyList {
                fields: vec![
                    property("name", Primitive::String),
                    property("count", Primitive::Integer),
                ],
            },
        }
    }

    fn squash(tokens: &TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn dynamic_off_is_a_no_op() {
        let mut class = widget();
        class.opts.dynamic = false;

        let tokens = synthesize(&class).expect("synthesis succeeds");
        assert!(tokens.is_empty());
    }

    #[test]
    fn emits_internal_pair_and_both_surfaces() {
        let s = squash(&synthesize(&widget()).expect("synthesis succeeds"));

        assert!(s.contains("fndeclared_get"));
        assert!(s.contains("fndeclared_set"));
        assert!(s.contains("impl::podgen::traits::DynamicAccessforWidget"));
        assert!(s.contains("impl::podgen::traits::DynamicBuildforWidget"));
    }

    #[test]
    fn accessors_only_skips_builder_impl() {
        let mut class = widget();
        class.opts.builders = false;

        let s = squash(&synthesize(&class).expect("synthesis succeeds"));
        assert!(s.contains("DynamicAccessforWidget"));
        assert!(!s.contains("DynamicBuild"));
    }

    #[test]
    fn builders_only_still_emits_internal_pair() {
        let mut class = widget();
        class.opts.accessors = false;

        let s = squash(&synthesize(&class).expect("synthesis succeeds"));
        assert!(s.contains("fndeclared_set"));
        assert!(s.contains("DynamicBuildforWidget"));
        assert!(!s.contains("DynamicAccess"));
    }

    #[test]
    fn branch_and_chain_strategies_cover_the_same_arms() {
        let branch = squash(&synthesize(&widget()).expect("synthesis succeeds"));

        let mut class = widget();
        class.opts.branch_dispatch = false;
        let chain = squash(&synthesize(&class).expect("synthesis succeeds"));

        assert!(branch.contains("matchname{"));
        assert!(chain.contains("ifname==\"name\""));
        for s in [&branch, &chain] {
            assert!(s.contains("\"name\""));
            assert!(s.contains("\"count\""));
        }
    }

    #[test]
    fn closed_class_misses_raise_unknown_property() {
        let s = squash(&synthesize(&widget()).expect("synthesis succeeds"));
        assert!(s.contains("AccessError::unknown_property"));
        assert!(!s.contains("additional_properties"));
    }

    #[test]
    fn open_class_bridges_to_its_own_store() {
        let mut class = widget();
        class.additional = Some(AdditionalProps::default());

        let s = squash(&synthesize(&class).expect("synthesis succeeds"));
        assert!(s.contains("self.additional_properties()"));
        assert!(s.contains("self.additional_properties_mut()"));
        assert!(!s.contains("unknown_property"));
    }

    #[test]
    fn derived_class_delegates_to_parent_dispatch() {
        let mut class = widget();
        class.extends = Some(Extends {
            ty: syn::parse_str("Base").expect("path parses"),
            field: None,
        });

        let s = squash(&synthesize(&class).expect("synthesis succeeds"));
        assert!(s.contains("self.parent.declared_get(name)"));
        assert!(s.contains("self.parent.declared_set(name,value)"));
    }

    #[test]
    fn type_check_guards_every_set_arm() {
        let s = squash(&synthesize(&widget()).expect("synthesis succeeds"));
        assert!(s.contains("AccessError::type_mismatch"));
        assert!(s.contains("::from_value(value)"));
        assert!(s.contains("\"integer\""));
    }

    #[test]
    fn missing_setter_reference_aborts_generation() {
        let mut class = widget();
        class.fields.fields[1].setter = None;

        let err = synthesize(&class).expect_err("unresolved setter is fatal");
        assert_eq!(
            err,
            ModelError::UnresolvedSetter {
                class: "Widget".to_string(),
                property: "count".to_string(),
            }
        );
    }

    #[test]
    fn missing_getter_reference_aborts_generation() {
        let mut class = widget();
        class.fields.fields[0].getter = None;

        let err = synthesize(&class).expect_err("unresolved getter is fatal");
        assert_eq!(
            err,
            ModelError::UnresolvedGetter {
                class: "Widget".to_string(),
                property: "name".to_string(),
            }
        );
    }
}
