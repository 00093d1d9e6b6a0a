/*
    ===================  components/build_schema/src/lib.rs  ===================
    Derives command-line options from an entry point signature.

    Parameters are named first, in declaration order, and always keep the
    names derived from their identifiers. Built-in options are fitted
    around them afterwards according to the shadow policy.
    ---------------------------------------------------------------------------
*/

mod error;
mod naming;

use domain::DomainType;
pub use error::SchemaError;
use indexmap::{IndexMap, IndexSet};
pub use naming::{alias_candidate, kebab_case};
use schema::{
    Arity, Builtin, OptionSpec, ResolvedBuiltin, Schema, ShadowPolicy, Shadowing, Signature,
};

pub fn build_schema(signature: &Signature, policy: ShadowPolicy) -> Result<Schema, SchemaError> {
    let mut longs = IndexMap::<String, String>::new();
    let mut shorts = IndexSet::<char>::new();
    let mut options = Vec::with_capacity(signature.parameters.len());

    for parameter in signature.parameters.iter() {
        if parameter.ty.element().is_some_and(DomainType::is_array) {
            return Err(SchemaError::UnsupportedType {
                parameter: parameter.name.clone(),
                ty: parameter.ty.clone(),
            });
        }

        let long = kebab_case(&parameter.name);

        if long.is_empty() || long.starts_with('-') || long.chars().any(char::is_whitespace) {
            return Err(SchemaError::InvalidParameterName(parameter.name.clone()));
        }

        if let Some(first) = longs.get(&long) {
            return Err(SchemaError::DuplicateOptionName {
                name: long,
                first: first.clone(),
                second: parameter.name.clone(),
            });
        }

        let short = alias_candidate(&parameter.name).filter(|short| shorts.insert(*short));
        longs.insert(long.clone(), parameter.name.clone());

        options.push(OptionSpec {
            long,
            short,
            arity: Arity::of(&parameter.ty),
            parameter: parameter.clone(),
        });
    }

    let mut builtins = Vec::with_capacity(Builtin::ALL.len());
    let mut shadowings = Vec::new();

    for builtin in Builtin::ALL {
        let claimed_by = longs.get(builtin.primary()).cloned();

        let long = match (&claimed_by, policy) {
            (None, _) => Some(builtin.primary()),
            (Some(_), ShadowPolicy::Rename) => Some(builtin.alternate())
                .filter(|alternate| !longs.contains_key(*alternate)),
            (Some(_), ShadowPolicy::Omit) => None,
        };

        if let Some(parameter) = claimed_by {
            shadowings.push(Shadowing {
                builtin,
                parameter,
                renamed_to: long.map(String::from),
            });
        }

        let Some(long) = long else {
            continue;
        };

        longs.insert(long.into(), format!("<{}>", builtin.primary()));

        builtins.push(ResolvedBuiltin {
            builtin,
            long: long.into(),
            shorts: builtin
                .shorts()
                .iter()
                .copied()
                .filter(|short| shorts.insert(*short))
                .collect(),
        });
    }

    Ok(Schema::new(
        signature.documentation.clone(),
        options,
        builtins,
        shadowings,
    ))
}

#[cfg(test)]
mod tests;
