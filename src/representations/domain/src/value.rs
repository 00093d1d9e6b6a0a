use crate::{DomainType, Pauli, RangeValue, ResultValue};
use derive_more::IsVariant;
use num_bigint::BigInt;

#[derive(Clone, Debug, PartialEq, IsVariant)]
pub enum Value {
    Unit,
    Int64(i64),
    BigInteger(BigInt),
    Double(f64),
    Bool(bool),
    Pauli(Pauli),
    Result(ResultValue),
    Range(RangeValue),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn conforms_to(&self, ty: &DomainType) -> bool {
        match (self, ty) {
            (Self::Unit, DomainType::Unit)
            | (Self::Int64(_), DomainType::Int64)
            | (Self::BigInteger(_), DomainType::BigInteger)
            | (Self::Double(_), DomainType::Double)
            | (Self::Bool(_), DomainType::Bool)
            | (Self::Pauli(_), DomainType::Pauli)
            | (Self::Result(_), DomainType::Result)
            | (Self::Range(_), DomainType::Range)
            | (Self::String(_), DomainType::String) => true,
            (Self::Array(elements), DomainType::Array(element)) => elements
                .iter()
                .all(|value| value.conforms_to(element)),
            _ => false,
        }
    }

    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Self::Int64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_big_integer(&self) -> Option<&BigInt> {
        match self {
            Self::BigInteger(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<RangeValue> {
        match self {
            Self::Range(range) => Some(*range),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::BigInteger(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Pauli> for Value {
    fn from(value: Pauli) -> Self {
        Self::Pauli(value)
    }
}

impl From<ResultValue> for Value {
    fn from(value: ResultValue) -> Self {
        Self::Result(value)
    }
}

impl From<RangeValue> for Value {
    fn from(value: RangeValue) -> Self {
        Self::Range(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}
