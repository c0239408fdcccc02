pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod file;
pub mod pipeline;

pub use codegen::{derive_url, escape_content, render_module, Request, UrlOptions};
pub use config::{ConfigOverrides, RenameFn, TransformConfig, DEFAULT_CACHE_ID};
pub use diagnostics::{
    format_diagnostic, CollectingDiagnosticHandler, ConsoleDiagnosticHandler, Diagnostic,
    DiagnosticHandler, DiagnosticLevel,
};
pub use errors::{TransformError, PLUGIN_NAME};
pub use file::{FileContents, InputFile};
pub use pipeline::{transform, OutputArtifact, Pipeline, PipelineBuilder, OUTPUT_FILE_NAME};
