/*
    ==================  representations/domain/src/display.rs  =================
    Canonical text for domain values.

    This is the only text the driver writes to standard output, so each
    form must be parseable again by the value parser. Ranges always show
    their step, and measurement results always use their names.
    ---------------------------------------------------------------------------
*/

use crate::{Pauli, RangeValue, ResultValue, Value};
use itertools::Itertools;
use std::fmt::Display;

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Unit => Ok(()),
            Value::Int64(value) => write!(f, "{}", value),
            Value::BigInteger(value) => write!(f, "{}", value),
            Value::Double(value) => write!(f, "{}", value),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Pauli(pauli) => write!(f, "{}", pauli),
            Value::Result(result) => write!(f, "{}", result),
            Value::Range(range) => write!(f, "{}", range),
            Value::String(value) => f.write_str(value),
            Value::Array(values) => write!(f, "[{}]", values.iter().format(",")),
        }
    }
}

impl Display for Pauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for ResultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for RangeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}..{}", self.start, self.step, self.end)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigInt, DomainType, Pauli, RangeValue, ResultValue, Value};

    #[test]
    fn scalars() {
        assert_eq!(Value::Unit.to_string(), "");
        assert_eq!(Value::Int64(-42).to_string(), "-42");
        assert_eq!(Value::Double(4.2).to_string(), "4.2");
        assert_eq!(Value::Double(1.0).to_string(), "1");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::Pauli(Pauli::Y).to_string(), "PauliY");
        assert_eq!(Value::Result(ResultValue::One).to_string(), "One");
        assert_eq!(Value::from("with spaces").to_string(), "with spaces");
    }

    #[test]
    fn big_integer_keeps_every_digit() {
        let big: BigInt = "-92233720368547758080".parse().unwrap();
        assert_eq!(Value::BigInteger(big).to_string(), "-92233720368547758080");
    }

    #[test]
    fn range_always_shows_step() {
        let range = RangeValue::with_unit_step(0, 0);
        assert_eq!(Value::Range(range).to_string(), "0..1..0");
        assert_eq!(RangeValue::new(10, -2, 0).to_string(), "10..-2..0");
    }

    #[test]
    fn arrays() {
        assert_eq!(Value::from(vec!["foo"]).to_string(), "[foo]");
        assert_eq!(Value::from(vec!["foo", "bar"]).to_string(), "[foo,bar]");
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
        assert_eq!(
            Value::from(vec![ResultValue::Zero, ResultValue::One]).to_string(),
            "[Zero,One]"
        );
    }

    #[test]
    fn type_names() {
        assert_eq!(DomainType::BigInteger.to_string(), "BigInteger");
        assert_eq!(DomainType::array_of(DomainType::Pauli).to_string(), "Pauli[]");
    }

    #[test]
    fn conformance() {
        let ty = DomainType::array_of(DomainType::Int64);
        assert!(Value::from(vec![1i64, 2]).conforms_to(&ty));
        assert!(Value::Array(vec![]).conforms_to(&ty));
        assert!(!Value::from(vec!["1"]).conforms_to(&ty));
        assert!(!Value::Int64(1).conforms_to(&DomainType::BigInteger));
    }
}
