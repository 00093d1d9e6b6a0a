use crate::{
    DriverSettings, ParseError, ParsedArguments,
    request::{HelpRequest, Request, RunRequest, VersionRequest},
};
use domain::{DomainType, Value};
use parse_value::{ValueError, parse_value};
use schema::{Builtin, OptionRef, Schema};
use token_cursor::TokenCursor;

/// Reads the whole argument vector in a single forward pass. Nothing is
/// invoked from here, so a failure leaves no side effects behind.
pub fn parse_arguments(
    schema: &Schema,
    settings: &DriverSettings,
    args: &[String],
) -> Result<Request, ParseError> {
    let mut cursor = TokenCursor::new(args, schema);
    let mut values: Vec<Option<Value>> = vec![None; schema.options().len()];
    let mut simulator = None;

    while let Some(token) = cursor.next() {
        match schema.lookup(token) {
            Some(OptionRef::Parameter(index)) => {
                let option = schema.option(index);

                if values[index].is_some() {
                    return Err(ParseError::DuplicateOption(option.long_flag()));
                }

                let value =
                    parse_value(option.ty(), &mut cursor).map_err(|error| ParseError::Value {
                        option: option.long_flag(),
                        error,
                    })?;

                values[index] = Some(value);
            }
            Some(OptionRef::Builtin(Builtin::Help)) => return Ok(HelpRequest.into()),
            Some(OptionRef::Builtin(Builtin::Version)) => return Ok(VersionRequest.into()),
            Some(OptionRef::Builtin(Builtin::Simulator)) => {
                let flag = schema
                    .builtin(Builtin::Simulator)
                    .map_or_else(|| token.to_string(), |resolved| resolved.long_flag());

                if simulator.is_some() {
                    return Err(ParseError::DuplicateOption(flag));
                }

                let Some(name) = cursor.next_value() else {
                    return Err(ParseError::Value {
                        option: flag,
                        error: ValueError::MissingRequiredValue {
                            ty: DomainType::String,
                        },
                    });
                };

                if !settings.simulators.iter().any(|known| known == name) {
                    return Err(ParseError::UnknownSimulator {
                        name: name.into(),
                        available: settings.simulators.clone(),
                    });
                }

                simulator = Some(name.to_string());
            }
            None if token.len() > 1 && token.starts_with('-') => {
                return Err(ParseError::UnknownOption(token.into()));
            }
            None => return Err(ParseError::UnexpectedArgument(token.into())),
        }
    }

    let arguments = schema
        .options()
        .iter()
        .zip(values)
        .map(|(option, value)| match value {
            Some(value) => Ok((option.parameter.name.clone(), value)),
            None => Err(ParseError::MissingRequiredOption(option.long_flag())),
        })
        .collect::<Result<ParsedArguments, _>>()?;

    Ok(RunRequest {
        arguments,
        simulator: simulator.unwrap_or_else(|| settings.default_simulator.clone()),
    }
    .into())
}
