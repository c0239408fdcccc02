//! Ingest-then-finalize pipeline producing the `requests.js` artifact
//!
//! A [`Pipeline`] accepts input files one at a time through
//! [`Pipeline::ingest`], turning each buffered file into a [`Request`]. Once
//! the producer is done, [`Pipeline::finalize`] renders every request, in
//! arrival order, into a single [`OutputArtifact`]. Each run needs a fresh
//! pipeline; a finalized pipeline rejects further input.

mod artifact;
mod builder;

pub use artifact::{OutputArtifact, OUTPUT_FILE_NAME};
pub use builder::PipelineBuilder;

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::codegen::{derive_url, render_module, Request, UrlOptions};
use crate::config::TransformConfig;
use crate::diagnostics::{CollectingDiagnosticHandler, Diagnostic, DiagnosticHandler};
use crate::errors::{Result, TransformError};
use crate::file::{FileContents, InputFile};

pub struct Pipeline {
    config: TransformConfig,
    url_options: UrlOptions,
    requests: Vec<Request>,
    diagnostic_handler: Arc<dyn DiagnosticHandler>,
    finalized: bool,
}

impl Pipeline {
    /// Create a pipeline that collects diagnostics without printing them
    pub fn new(config: TransformConfig) -> Self {
        Self::with_diagnostic_handler(config, Arc::new(CollectingDiagnosticHandler::new()))
    }

    pub fn with_diagnostic_handler(
        config: TransformConfig,
        diagnostic_handler: Arc<dyn DiagnosticHandler>,
    ) -> Self {
        let url_options = UrlOptions::from(&config);
        Self {
            config,
            url_options,
            requests: Vec::new(),
            diagnostic_handler,
            finalized: false,
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn diagnostic_handler(&self) -> &Arc<dyn DiagnosticHandler> {
        &self.diagnostic_handler
    }

    /// Requests accumulated so far, in ingestion order
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Ingest one file.
    ///
    /// Null files are skipped silently. Streaming files are rejected with
    /// [`TransformError::StreamingNotSupported`], which is both reported to the
    /// diagnostic handler and returned; the pipeline stays usable. Errors are
    /// never fatal to the run.
    pub fn ingest(&mut self, file: impl Into<InputFile>) -> Vec<TransformError> {
        let file = file.into();

        if self.finalized {
            let err = TransformError::AlreadyFinalized;
            self.report(&err, &file.path);
            return vec![err];
        }

        match &file.contents {
            FileContents::Null => {
                debug!("Skipping empty file {}", file.path);
                Vec::new()
            }
            FileContents::Stream(_) => {
                warn!("Streaming input rejected: {}", file.path);
                let err = TransformError::streaming_not_supported();
                self.report(&err, &file.path);
                vec![err]
            }
            FileContents::Buffer(bytes) => {
                let uri = derive_url(&file.path, &self.url_options);
                let text = file.text().unwrap_or_default();
                debug!("Caching {} as '{}' ({} bytes)", file.path, uri, bytes.len());
                self.requests.push(Request::from_raw(uri, &text));
                Vec::new()
            }
        }
    }

    /// Ingest files in order, returning every error raised along the way
    pub fn ingest_all<I>(&mut self, files: I) -> Vec<TransformError>
    where
        I: IntoIterator,
        I::Item: Into<InputFile>,
    {
        files
            .into_iter()
            .flat_map(|file| self.ingest(file))
            .collect()
    }

    /// Render the accumulated requests into the output artifact.
    ///
    /// Runs exactly once; a second call returns
    /// [`TransformError::AlreadyFinalized`]. An empty pipeline still yields a
    /// valid module with no cache entries.
    pub fn finalize(&mut self) -> Result<OutputArtifact> {
        if self.finalized {
            let err = TransformError::AlreadyFinalized;
            self.report(&err, OUTPUT_FILE_NAME);
            return Err(err);
        }
        self.finalized = true;

        let contents = render_module(
            &self.config.module_name,
            self.config.effective_cache_id(),
            &self.requests,
        );
        info!(
            "Generated {} with {} cached request(s) for module '{}'",
            OUTPUT_FILE_NAME,
            self.requests.len(),
            self.config.module_name
        );

        Ok(OutputArtifact::new(contents))
    }

    fn report(&self, err: &TransformError, path: &str) {
        let diagnostic = Diagnostic::from(err);
        let diagnostic = if path.is_empty() {
            diagnostic
        } else {
            diagnostic.with_file(path)
        };
        self.diagnostic_handler.report(diagnostic);
    }
}

/// Run a complete transform over `files` with a fresh pipeline
pub fn transform<I>(
    config: TransformConfig,
    files: I,
) -> Result<(OutputArtifact, Vec<TransformError>)>
where
    I: IntoIterator,
    I::Item: Into<InputFile>,
{
    let mut pipeline = Pipeline::new(config);
    let errors = pipeline.ingest_all(files);
    let artifact = pipeline.finalize()?;
    Ok((artifact, errors))
}
