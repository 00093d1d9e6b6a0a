mod error;
mod show;
mod warning;

use core::fmt::Debug;
pub use error::ErrorDiagnostic;
pub use show::Show;
use std::cell::RefCell;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show {}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
        }
    }
}

impl DiagnosticFlags {
    pub fn collecting() -> Self {
        Self {
            print_without_collecting: false,
        }
    }
}

pub struct Diagnostics {
    diagnostics: RefCell<Vec<Box<dyn Diagnostic>>>,
    flags: DiagnosticFlags,
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl Diagnostics {
    pub fn new(flags: DiagnosticFlags) -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            flags,
        }
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.borrow_mut().push(Box::new(diagnostic));
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders and removes everything collected so far, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.diagnostics
            .borrow_mut()
            .drain(..)
            .map(|diagnostic| diagnostic.render())
            .collect()
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        eprintln!("{}", diagnostic.render());
    }
}
