use derive_more::IsVariant;
use diagnostics::{ErrorDiagnostic, Show};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum ExitStatus {
    Success,
    InvocationFailure,
    ParseFailure,
    SchemaFailure,
    OutputFailure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::InvocationFailure => 1,
            Self::ParseFailure => 2,
            Self::SchemaFailure => 3,
            Self::OutputFailure => 4,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// The outcome of one run, ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitResult {
    pub status: ExitStatus,
    pub output: String,
    pub diagnostics: Vec<String>,
}

impl ExitResult {
    pub fn success(output: String) -> Self {
        Self {
            status: ExitStatus::Success,
            output,
            diagnostics: Vec::new(),
        }
    }

    pub fn failure(status: ExitStatus, diagnostics: Vec<String>) -> Self {
        Self {
            status,
            output: String::new(),
            diagnostics,
        }
    }

    pub fn code(&self) -> u8 {
        self.status.code()
    }

    /// Writes output to stdout and diagnostics to stderr, returning the process exit code.
    pub fn emit(&self) -> std::process::ExitCode {
        self.emit_to(&mut std::io::stdout().lock(), &mut std::io::stderr().lock())
            .into()
    }

    /// Output that cannot be written turns a successful run into an `OutputFailure`.
    pub fn emit_to(&self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> ExitStatus {
        let written = stdout
            .write_all(self.output.as_bytes())
            .and_then(|()| stdout.flush());

        if let Err(error) = written {
            let diagnostic = ErrorDiagnostic::plain(format!("Cannot write the result: {}", error));

            // stderr is the last place left to report to
            let _ = writeln!(stderr, "{}", diagnostic.render());
            return ExitStatus::OutputFailure;
        }

        let reported = self
            .diagnostics
            .iter()
            .try_for_each(|diagnostic| writeln!(stderr, "{diagnostic}"));

        match reported {
            Err(_) if self.status.is_success() => ExitStatus::OutputFailure,
            _ => self.status,
        }
    }
}
