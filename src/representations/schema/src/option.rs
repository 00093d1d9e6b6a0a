use crate::ParameterSpec;
use derive_more::IsVariant;
use domain::DomainType;

/// How many tokens an option consumes after its flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Arity {
    Single,
    Flag,
    Greedy,
}

impl Arity {
    pub fn of(ty: &DomainType) -> Self {
        match ty {
            DomainType::Bool => Self::Flag,
            DomainType::Range | DomainType::Array(_) => Self::Greedy,
            _ => Self::Single,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSpec {
    pub long: String,
    pub short: Option<char>,
    pub arity: Arity,
    pub parameter: ParameterSpec,
}

impl OptionSpec {
    pub fn ty(&self) -> &DomainType {
        &self.parameter.ty
    }

    pub fn long_flag(&self) -> String {
        format!("--{}", self.long)
    }

    pub fn short_flag(&self) -> Option<String> {
        self.short.map(|short| format!("-{}", short))
    }

    pub fn flags(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.long_flag()).chain(self.short_flag())
    }
}
