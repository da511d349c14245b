//! Compilation unit options.

use rest_diagnostic::DiagnosticConfig;

/// Options for one [`Program`](crate::Program).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProgramOptions {
    /// How the diagnostic sink filters reports.
    pub diagnostics: DiagnosticConfig,
}

impl ProgramOptions {
    /// Options with the given diagnostic configuration.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
