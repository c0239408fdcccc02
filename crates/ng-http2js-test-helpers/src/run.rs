//! Helpers for running a whole transform in tests

use ng_http2js_core::config::TransformConfig;
use ng_http2js_core::errors::TransformError;
use ng_http2js_core::file::InputFile;
use ng_http2js_core::pipeline::Pipeline;
use std::sync::Arc;

use crate::logging::init_tracing;
use crate::mocks::MockDiagnosticHandler;

/// Outcome of one transform run
pub struct RunResult {
    pub output: String,
    pub errors: Vec<TransformError>,
    pub handler: Arc<MockDiagnosticHandler>,
}

/// Ingest `files` into a fresh pipeline and finalize it
///
/// # Panics
/// Panics if finalization fails, which a fresh pipeline never does
pub fn run(config: TransformConfig, files: Vec<InputFile>) -> RunResult {
    init_tracing();
    let handler = MockDiagnosticHandler::new();
    let mut pipeline = Pipeline::with_diagnostic_handler(config, handler.clone());
    let errors = pipeline.ingest_all(files);
    let artifact = pipeline
        .finalize()
        .expect("fresh pipeline should finalize");

    RunResult {
        output: artifact.contents,
        errors,
        handler,
    }
}

/// Render `files` with only a module name configured
pub fn render(module_name: &str, files: Vec<InputFile>) -> String {
    run(TransformConfig::new(module_name), files).output
}
