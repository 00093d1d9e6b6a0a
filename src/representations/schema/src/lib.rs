mod builtin;
mod option;
mod signature;

pub use builtin::{Builtin, ResolvedBuiltin, Shadowing, ShadowPolicy};
use derive_more::IsVariant;
use indexmap::IndexMap;
pub use option::{Arity, OptionSpec};
pub use signature::{ParameterSpec, Signature};
use token_cursor::FlagSet;

/// Refers to whatever a command-line flag resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum OptionRef {
    Parameter(usize),
    Builtin(Builtin),
}

/// The option schema for one entry point, built once and read-only thereafter.
#[derive(Clone, Debug)]
pub struct Schema {
    summary: Option<String>,
    options: Vec<OptionSpec>,
    builtins: Vec<ResolvedBuiltin>,
    shadowings: Vec<Shadowing>,
    flags: IndexMap<String, OptionRef>,
}

impl Schema {
    pub fn new(
        summary: Option<String>,
        options: Vec<OptionSpec>,
        builtins: Vec<ResolvedBuiltin>,
        shadowings: Vec<Shadowing>,
    ) -> Self {
        let mut flags = IndexMap::new();

        for (index, option) in options.iter().enumerate() {
            for flag in option.flags() {
                flags.entry(flag).or_insert(OptionRef::Parameter(index));
            }
        }

        for builtin in builtins.iter() {
            for flag in builtin.flags() {
                flags.entry(flag).or_insert(OptionRef::Builtin(builtin.builtin));
            }
        }

        Self {
            summary,
            options,
            builtins,
            shadowings,
            flags,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn option(&self, index: usize) -> &OptionSpec {
        &self.options[index]
    }

    pub fn builtins(&self) -> &[ResolvedBuiltin] {
        &self.builtins
    }

    pub fn builtin(&self, builtin: Builtin) -> Option<&ResolvedBuiltin> {
        self.builtins
            .iter()
            .find(|resolved| resolved.builtin == builtin)
    }

    pub fn shadowings(&self) -> &[Shadowing] {
        &self.shadowings
    }

    /// Resolves a command-line token to the option it names, if any.
    /// Long names match case-insensitively, short aliases match exactly.
    pub fn lookup(&self, token: &str) -> Option<OptionRef> {
        if let Some(name) = token.strip_prefix("--") {
            self.flags
                .get(&format!("--{}", name.to_lowercase()))
                .copied()
        } else if token.starts_with('-') && token.chars().count() == 2 {
            self.flags.get(token).copied()
        } else {
            None
        }
    }
}

impl FlagSet for Schema {
    fn is_flag(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }
}
