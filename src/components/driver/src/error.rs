use crate::ExitStatus;
use build_schema::SchemaError;
use derive_more::{From, IsVariant};
use domain::DomainType;
use itertools::Itertools;
use parse_value::ValueError;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum ParseError {
    UnknownOption(String),
    UnexpectedArgument(String),
    MissingRequiredOption(String),
    DuplicateOption(String),
    UnknownSimulator {
        name: String,
        available: Vec<String>,
    },
    Value {
        option: String,
        error: ValueError,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownOption(token) => write!(f, "Unrecognized option '{}'", token),
            ParseError::UnexpectedArgument(token) => {
                write!(f, "Unexpected argument '{}'", token)
            }
            ParseError::MissingRequiredOption(option) => {
                write!(f, "Option '{}' is required", option)
            }
            ParseError::DuplicateOption(option) => {
                write!(f, "Option '{}' was given more than once", option)
            }
            ParseError::UnknownSimulator { name, available } => write!(
                f,
                "Simulator '{}' is not available, expected one of: {}",
                name,
                available.iter().join(", ")
            ),
            ParseError::Value { option, error } => {
                write!(f, "Invalid value for option '{}': {}", option, error)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A failure while running the entry point itself, as opposed to reading its arguments.
#[derive(Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum InvocationError {
    Failed(String),
    ReturnTypeMismatch { expected: DomainType, found: String },
}

impl InvocationError {
    pub fn new(message: impl ToString) -> Self {
        Self::Failed(message.to_string())
    }
}

impl Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationError::Failed(message) => f.write_str(message),
            InvocationError::ReturnTypeMismatch { expected, found } => write!(
                f,
                "Entry point returned '{}', which is not a value of type '{}'",
                found, expected
            ),
        }
    }
}

impl std::error::Error for InvocationError {}

#[derive(Clone, Debug, PartialEq, Eq, From, IsVariant)]
pub enum DriverError {
    Schema(SchemaError),
    Parse(ParseError),
    Invocation(InvocationError),
}

impl DriverError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            DriverError::Schema(_) => ExitStatus::SchemaFailure,
            DriverError::Parse(_) => ExitStatus::ParseFailure,
            DriverError::Invocation(_) => ExitStatus::InvocationFailure,
        }
    }
}

impl Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::Schema(error) => error.fmt(f),
            DriverError::Parse(error) => error.fmt(f),
            DriverError::Invocation(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for DriverError {}
