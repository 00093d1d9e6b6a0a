use crate::{Diagnostic, show::Show};
use colored::Colorize;

#[derive(Debug)]
pub struct WarningDiagnostic {
    message: String,
}

impl WarningDiagnostic {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(w, "{} {}", "warning:".yellow().bold(), self.message)
    }
}

impl Diagnostic for WarningDiagnostic {}
