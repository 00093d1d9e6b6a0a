use crate::{Diagnostic, Show};
use colored::Colorize;

#[derive(Debug)]
pub struct ErrorDiagnostic {
    message: String,
    note: Option<String>,
}

impl ErrorDiagnostic {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl ToString) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

impl Show for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(w, "{} {}", "error:".red().bold(), self.message)?;

        if let Some(note) = &self.note {
            write!(w, "\n  {} {}", "note:".bold(), note)?;
        }

        Ok(())
    }
}

impl Diagnostic for ErrorDiagnostic {}
