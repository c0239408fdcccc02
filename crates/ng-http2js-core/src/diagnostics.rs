use std::sync::Mutex;

use crate::errors::TransformError;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// A message reported on the pipeline's error channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub plugin: String,
    /// Path of the input file the diagnostic concerns, if any
    pub file: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            plugin: plugin.into(),
            file: None,
            message: message.into(),
        }
    }

    pub fn warning(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            plugin: plugin.into(),
            file: None,
            message: message.into(),
        }
    }

    pub fn info(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            plugin: plugin.into(),
            file: None,
            message: message.into(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&TransformError> for Diagnostic {
    fn from(err: &TransformError) -> Self {
        Diagnostic::error(err.plugin(), err.message())
    }
}

/// Trait for handling diagnostics
/// This allows for dependency injection and testing with mock handlers
pub trait DiagnosticHandler: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);

    fn error(&self, plugin: &str, message: &str) {
        self.report(Diagnostic::error(plugin, message));
    }

    fn warning(&self, plugin: &str, message: &str) {
        self.report(Diagnostic::warning(plugin, message));
    }

    fn info(&self, plugin: &str, message: &str) {
        self.report(Diagnostic::info(plugin, message));
    }

    fn has_errors(&self) -> bool;
    fn error_count(&self) -> usize;
    fn warning_count(&self) -> usize;
    fn get_diagnostics(&self) -> Vec<Diagnostic>;
}

fn count_level(diagnostics: &Mutex<Vec<Diagnostic>>, level: DiagnosticLevel) -> usize {
    diagnostics
        .lock()
        .unwrap()
        .iter()
        .filter(|d| d.level == level)
        .count()
}

/// Render a diagnostic as one console line, optionally with a bold level
pub fn format_diagnostic(diagnostic: &Diagnostic, pretty: bool) -> String {
    let level_str = match diagnostic.level {
        DiagnosticLevel::Error => "error",
        DiagnosticLevel::Warning => "warning",
        DiagnosticLevel::Info => "info",
    };
    let location = diagnostic
        .file
        .as_deref()
        .map(|f| format!(" ({})", f))
        .unwrap_or_default();

    if pretty {
        format!(
            "\x1b[1m{}\x1b[0m [{}]{}: {}",
            level_str, diagnostic.plugin, location, diagnostic.message
        )
    } else {
        format!(
            "{} [{}]{}: {}",
            level_str, diagnostic.plugin, location, diagnostic.message
        )
    }
}

/// Console-based diagnostic handler that prints to stderr
pub struct ConsoleDiagnosticHandler {
    diagnostics: Mutex<Vec<Diagnostic>>,
    pretty: bool,
}

impl ConsoleDiagnosticHandler {
    pub fn new(pretty: bool) -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            pretty,
        }
    }
}

impl Default for ConsoleDiagnosticHandler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DiagnosticHandler for ConsoleDiagnosticHandler {
    fn report(&self, diagnostic: Diagnostic) {
        eprintln!("{}", format_diagnostic(&diagnostic, self.pretty));
        self.diagnostics.lock().unwrap().push(diagnostic);
    }

    fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn error_count(&self) -> usize {
        count_level(&self.diagnostics, DiagnosticLevel::Error)
    }

    fn warning_count(&self) -> usize {
        count_level(&self.diagnostics, DiagnosticLevel::Warning)
    }

    fn get_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }
}

/// Collecting diagnostic handler for testing
/// Collects all diagnostics without printing
pub struct CollectingDiagnosticHandler {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnosticHandler {
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
        }
    }
}

impl Default for CollectingDiagnosticHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticHandler for CollectingDiagnosticHandler {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().unwrap().push(diagnostic);
    }

    fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn error_count(&self) -> usize {
        count_level(&self.diagnostics, DiagnosticLevel::Error)
    }

    fn warning_count(&self) -> usize {
        count_level(&self.diagnostics, DiagnosticLevel::Warning)
    }

    fn get_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("gulp-ng-http2js", "Test error").with_file("a.html");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "Test error");
        assert_eq!(diag.file.as_deref(), Some("a.html"));
    }

    #[test]
    fn test_collecting_handler() {
        let handler = CollectingDiagnosticHandler::new();

        handler.error("p", "Error 1");
        handler.warning("p", "Warning 1");
        handler.error("p", "Error 2");

        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
        assert!(handler.has_errors());
        assert_eq!(handler.get_diagnostics().len(), 3);
    }

    #[test]
    fn test_no_errors() {
        let handler = CollectingDiagnosticHandler::new();

        handler.warning("p", "Warning 1");
        handler.info("p", "Info 1");

        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_console_handler_counts() {
        let handler = ConsoleDiagnosticHandler::new(false);

        let err = TransformError::streaming_not_supported();
        handler.report(Diagnostic::from(&err).with_file("s.html"));
        handler.warning("p", "Warning 1");

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);

        let diagnostics = handler.get_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].file.as_deref(), Some("s.html"));
    }

    #[test]
    fn test_format_diagnostic() {
        let diag =
            Diagnostic::error("gulp-ng-http2js", "Streaming not supported").with_file("s.html");
        assert_eq!(
            format_diagnostic(&diag, false),
            "error [gulp-ng-http2js] (s.html): Streaming not supported"
        );
        assert_eq!(
            format_diagnostic(&diag, true),
            "\x1b[1merror\x1b[0m [gulp-ng-http2js] (s.html): Streaming not supported"
        );

        let info = Diagnostic::info("p", "done");
        assert_eq!(format_diagnostic(&info, false), "info [p]: done");
    }

    #[test]
    fn test_from_transform_error() {
        let diag = Diagnostic::from(&TransformError::streaming_not_supported());
        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.plugin, "gulp-ng-http2js");
        assert_eq!(diag.message, "Streaming not supported");
    }
}
