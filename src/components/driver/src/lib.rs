/*
    ======================  components/driver/src/lib.rs  ======================
    Command-line driver for an entry point.

    The option schema is derived from the signature when the driver is
    created and shared by every run. A run parses the full argument
    vector first, and only a successful parse reaches the entry point.
    Diagnostics are held back until a run is known to have failed.
    ---------------------------------------------------------------------------
*/

mod arguments;
mod entry_point;
mod error;
mod exit;
mod parse;
mod request;
mod settings;

pub use arguments::ParsedArguments;
use build_help::build_help;
use build_schema::{SchemaError, build_schema};
use diagnostics::{DiagnosticFlags, Diagnostics, ErrorDiagnostic, WarningDiagnostic};
use domain::{DomainType, Value};
pub use entry_point::{EntryPoint, Invocation};
pub use error::{DriverError, InvocationError, ParseError};
pub use exit::{ExitResult, ExitStatus};
use parse::parse_arguments;
pub use request::{HelpRequest, Request, Respond, Responder, RunRequest, VersionRequest};
use schema::{Builtin, Schema, Signature};
pub use settings::DriverSettings;

pub struct Driver<E> {
    signature: Signature,
    schema: Schema,
    settings: DriverSettings,
    entry_point: E,
}

impl<E: EntryPoint> Driver<E> {
    pub fn new(
        signature: Signature,
        entry_point: E,
        settings: DriverSettings,
    ) -> Result<Self, SchemaError> {
        let schema = build_schema(&signature, settings.shadow_policy)?;

        Ok(Self {
            signature,
            schema,
            settings,
            entry_point,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn help(&self) -> String {
        build_help(&self.schema, &self.settings.program_name)
    }

    pub fn parse(&self, args: &[String]) -> Result<Request, ParseError> {
        parse_arguments(&self.schema, &self.settings, args)
    }

    pub fn try_run(&self, args: &[String]) -> Result<String, DriverError> {
        let request = self.parse(args)?;
        Ok(request.respond(self)?)
    }

    pub fn run<I, S>(&self, args: I) -> ExitResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = args.into_iter().map(Into::into).collect::<Vec<String>>();
        let diagnostics = Diagnostics::new(DiagnosticFlags::collecting());

        let error = match self.try_run(&args) {
            Ok(output) => return ExitResult::success(output),
            Err(error) => error,
        };

        let diagnostic = ErrorDiagnostic::plain(&error);

        if error.is_parse() {
            diagnostics.push(self.usage_hint(diagnostic));
        } else {
            diagnostics.push(diagnostic);
        }

        for warning in self.shadow_warnings() {
            diagnostics.push(warning);
        }

        ExitResult::failure(error.exit_status(), diagnostics.drain())
    }

    fn usage_hint(&self, diagnostic: ErrorDiagnostic) -> ErrorDiagnostic {
        match self.schema.builtin(Builtin::Help) {
            Some(help) => diagnostic.with_note(format!(
                "run with '{}' to see the available options",
                help.long_flag()
            )),
            None => diagnostic,
        }
    }

    fn shadow_warnings(&self) -> impl Iterator<Item = WarningDiagnostic> + '_ {
        self.schema.shadowings().iter().map(|shadowing| {
            let primary = shadowing.builtin.primary();

            WarningDiagnostic::plain(match &shadowing.renamed_to {
                Some(renamed_to) => format!(
                    "Parameter '{}' shadows '--{}', the built-in option is available as '--{}'",
                    shadowing.parameter, primary, renamed_to
                ),
                None => format!(
                    "Parameter '{}' shadows '--{}', the built-in option is unavailable",
                    shadowing.parameter, primary
                ),
            })
        })
    }
}

impl<E: EntryPoint> Responder for Driver<E> {
    fn help_text(&self) -> String {
        self.help()
    }

    fn version(&self) -> &str {
        &self.settings.version
    }

    fn return_type(&self) -> &DomainType {
        &self.signature.return_type
    }

    fn invoke(&self, invocation: Invocation<'_>) -> Result<Value, InvocationError> {
        self.entry_point.invoke(invocation)
    }
}
