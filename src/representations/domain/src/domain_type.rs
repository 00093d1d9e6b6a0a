use derive_more::IsVariant;
use std::fmt::Display;

/// The closed set of value kinds an entry point parameter or return value may have.
#[derive(Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum DomainType {
    Unit,
    Int64,
    BigInteger,
    Double,
    Bool,
    Pauli,
    Result,
    Range,
    String,
    Array(Box<DomainType>),
}

impl DomainType {
    pub fn array_of(element: DomainType) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn element(&self) -> Option<&DomainType> {
        match self {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl Display for DomainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => f.write_str("Unit"),
            Self::Int64 => f.write_str("Int64"),
            Self::BigInteger => f.write_str("BigInteger"),
            Self::Double => f.write_str("Double"),
            Self::Bool => f.write_str("Bool"),
            Self::Pauli => f.write_str("Pauli"),
            Self::Result => f.write_str("Result"),
            Self::Range => f.write_str("Range"),
            Self::String => f.write_str("String"),
            Self::Array(element) => write!(f, "{}[]", element),
        }
    }
}
