mod error;
mod range;

use domain::{DomainType, Pauli, ResultValue, Value};
use num_bigint::BigInt;
pub use error::ValueError;
pub use range::{Fragment, fragments, parse_range, parse_range_token};
use std::num::IntErrorKind;
use token_cursor::TokenCursor;

/// Parses the value of one option, consuming as many tokens as its type calls for.
pub fn parse_value(ty: &DomainType, cursor: &mut TokenCursor) -> Result<Value, ValueError> {
    match ty {
        DomainType::Bool => Ok(Value::Bool(parse_flag(cursor))),
        DomainType::Range => parse_range(cursor).map(Value::Range),
        DomainType::Array(element) => parse_array(ty, element, cursor),
        _ => {
            let token = cursor
                .next_value()
                .ok_or_else(|| ValueError::MissingRequiredValue { ty: ty.clone() })?;

            parse_token(ty, token)
        }
    }
}

/// A bare flag means true. An explicit `true` or `false` that follows is
/// consumed, anything else is left for whatever comes next.
pub fn parse_flag(cursor: &mut TokenCursor) -> bool {
    match cursor.peek_value().and_then(parse_bool) {
        Some(value) => {
            cursor.next();
            value
        }
        None => true,
    }
}

/// Parses a value that is given as exactly one token.
pub fn parse_token(ty: &DomainType, token: &str) -> Result<Value, ValueError> {
    let conversion = || ValueError::conversion(ty.clone(), token);

    match ty {
        DomainType::Unit => (token == "()").then_some(Value::Unit).ok_or_else(conversion),
        DomainType::Int64 => parse_int64(token).map(Value::Int64),
        DomainType::BigInteger => parse_big_integer(token).map(Value::BigInteger),
        DomainType::Double => parse_double(token).map(Value::Double),
        DomainType::Bool => parse_bool(token).map(Value::Bool).ok_or_else(conversion),
        DomainType::Pauli => Pauli::from_name(token)
            .map(Value::Pauli)
            .ok_or_else(conversion),
        DomainType::Result => ResultValue::from_token(token)
            .map(Value::Result)
            .ok_or_else(conversion),
        DomainType::Range => parse_range_token(token).map(Value::Range),
        DomainType::String => Ok(Value::String(token.into())),
        DomainType::Array(_) => Err(ValueError::conversion_because(
            ty.clone(),
            token,
            "arrays take one token per element",
        )),
    }
}

fn parse_array(
    ty: &DomainType,
    element: &DomainType,
    cursor: &mut TokenCursor,
) -> Result<Value, ValueError> {
    let mut values = Vec::new();

    while let Some(token) = cursor.peek_value() {
        let value = if element.is_range() {
            parse_range(cursor).map(Value::Range)?
        } else {
            cursor.next();
            parse_token(element, token)?
        };

        values.push(value);
    }

    if values.is_empty() {
        return Err(ValueError::MissingRequiredValue { ty: ty.clone() });
    }

    Ok(Value::Array(values))
}

fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_int64(token: &str) -> Result<i64, ValueError> {
    token.parse::<i64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValueError::conversion_because(
            DomainType::Int64,
            token,
            "it does not fit in a 64-bit signed integer",
        ),
        _ => ValueError::conversion(DomainType::Int64, token),
    })
}

// Only finite values have a decimal form, so `inf`, `nan` and literals
// too large for a double are refused.
fn parse_double(token: &str) -> Result<f64, ValueError> {
    let value = token
        .parse::<f64>()
        .map_err(|_| ValueError::conversion(DomainType::Double, token))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValueError::conversion_because(
            DomainType::Double,
            token,
            "it is not a finite number",
        ))
    }
}

fn parse_big_integer(token: &str) -> Result<BigInt, ValueError> {
    if !is_integer_literal(token) {
        return Err(ValueError::conversion(DomainType::BigInteger, token));
    }

    token
        .parse::<BigInt>()
        .map_err(|_| ValueError::conversion(DomainType::BigInteger, token))
}

// Optional sign followed by decimal digits only. The big integer parser on
// its own would also let digit separators through.
pub(crate) fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}
