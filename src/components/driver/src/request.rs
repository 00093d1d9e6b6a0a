use crate::{Invocation, InvocationError, ParsedArguments};
use domain::{DomainType, Value};
use enum_dispatch::enum_dispatch;

/// What a driver exposes to the requests it has parsed.
pub trait Responder {
    fn help_text(&self) -> String;
    fn version(&self) -> &str;
    fn return_type(&self) -> &DomainType;
    fn invoke(&self, invocation: Invocation<'_>) -> Result<Value, InvocationError>;
}

#[enum_dispatch]
pub trait Respond {
    fn respond(self, responder: &dyn Responder) -> Result<String, InvocationError>;
}

#[enum_dispatch(Respond)]
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Help(HelpRequest),
    Version(VersionRequest),
    Run(RunRequest),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HelpRequest;

#[derive(Clone, Debug, PartialEq)]
pub struct VersionRequest;

#[derive(Clone, Debug, PartialEq)]
pub struct RunRequest {
    pub arguments: ParsedArguments,
    pub simulator: String,
}

impl Respond for HelpRequest {
    fn respond(self, responder: &dyn Responder) -> Result<String, InvocationError> {
        Ok(responder.help_text())
    }
}

impl Respond for VersionRequest {
    fn respond(self, responder: &dyn Responder) -> Result<String, InvocationError> {
        Ok(format!("{}\n", responder.version()))
    }
}

impl Respond for RunRequest {
    fn respond(self, responder: &dyn Responder) -> Result<String, InvocationError> {
        let value = responder.invoke(Invocation {
            arguments: &self.arguments,
            simulator: &self.simulator,
        })?;

        if !value.conforms_to(responder.return_type()) {
            return Err(InvocationError::ReturnTypeMismatch {
                expected: responder.return_type().clone(),
                found: value.to_string(),
            });
        }

        Ok(value.to_string())
    }
}
