use domain::DomainType;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    DuplicateOptionName {
        name: String,
        first: String,
        second: String,
    },
    InvalidParameterName(String),
    UnsupportedType {
        parameter: String,
        ty: DomainType,
    },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::DuplicateOptionName {
                name,
                first,
                second,
            } => write!(
                f,
                "Parameters '{}' and '{}' both map to option '--{}'",
                first, second, name
            ),
            SchemaError::InvalidParameterName(name) => {
                write!(f, "Parameter name '{}' cannot be used as an option", name)
            }
            SchemaError::UnsupportedType { parameter, ty } => write!(
                f,
                "Parameter '{}' has type '{}', which cannot be given on the command line",
                parameter, ty
            ),
        }
    }
}

impl std::error::Error for SchemaError {}
