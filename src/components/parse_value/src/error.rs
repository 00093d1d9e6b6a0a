use derive_more::IsVariant;
use domain::DomainType;
use itertools::Itertools;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum ValueError {
    MissingRequiredValue {
        ty: DomainType,
    },
    TypeConversion {
        ty: DomainType,
        token: String,
        reason: Option<&'static str>,
    },
    RangeGrammar {
        tokens: Vec<String>,
    },
}

impl ValueError {
    pub fn conversion(ty: DomainType, token: &str) -> Self {
        Self::TypeConversion {
            ty,
            token: token.into(),
            reason: None,
        }
    }

    pub fn conversion_because(ty: DomainType, token: &str, reason: &'static str) -> Self {
        Self::TypeConversion {
            ty,
            token: token.into(),
            reason: Some(reason),
        }
    }
}

impl Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueError::MissingRequiredValue { ty } => {
                write!(f, "Expected a value of type '{}'", ty)
            }
            ValueError::TypeConversion {
                ty,
                token,
                reason: None,
            } => write!(f, "Cannot parse '{}' as '{}'", token, ty),
            ValueError::TypeConversion {
                ty,
                token,
                reason: Some(reason),
            } => write!(f, "Cannot parse '{}' as '{}', {}", token, ty, reason),
            ValueError::RangeGrammar { tokens } => write!(
                f,
                "Malformed range '{}', expected 'start..end' or 'start..step..end'",
                tokens.iter().join(" ")
            ),
        }
    }
}

impl std::error::Error for ValueError {}
