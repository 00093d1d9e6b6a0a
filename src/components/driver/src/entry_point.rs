use crate::{InvocationError, ParsedArguments};
use domain::Value;

#[derive(Copy, Clone, Debug)]
pub struct Invocation<'a> {
    pub arguments: &'a ParsedArguments,
    pub simulator: &'a str,
}

/// The callable behind a driver.
pub trait EntryPoint {
    fn invoke(&self, invocation: Invocation<'_>) -> Result<Value, InvocationError>;
}

impl<F> EntryPoint for F
where
    F: Fn(Invocation<'_>) -> Result<Value, InvocationError>,
{
    fn invoke(&self, invocation: Invocation<'_>) -> Result<Value, InvocationError> {
        self(invocation)
    }
}
