//! Upload → parse → display pipeline.
//!
//! [`Page::handle_upload`] is a pure function from the current input (an
//! optional uploaded file) to the list of effects the presentation surface
//! should perform. It holds no state between calls; hosts call it afresh on
//! every interaction.
//!
//! Every failure after a file is supplied ends up as a single
//! [`ErrorReport`]; nothing escapes `handle_upload`.

use std::fmt;
use std::io::Read;

use crate::config::PageConfig;
use crate::effect::Effect;
use crate::parse::{ParseOptions, parse_csv};
use crate::{PipelineError, Table, UploadedFile};

/// Prefix of every user-visible failure message.
pub const ERROR_PREFIX: &str = "An error occurred: ";

/// User-visible description of a failed pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
}

impl ErrorReport {
    pub fn from_failure(err: &PipelineError) -> Self {
        Self {
            message: format!("{ERROR_PREFIX}{err}"),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one invocation. At most one of table or report exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No file supplied yet.
    Awaiting,
    Loaded(Table),
    Failed(ErrorReport),
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Outcome::Awaiting)
    }
}

/// The upload page: static text, parse options, and the pipeline itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub config: PageConfig,
    pub options: ParseOptions,
}

impl Page {
    pub fn new(config: PageConfig, options: ParseOptions) -> Self {
        Self { config, options }
    }

    /// Parse an uploaded file into a table.
    pub fn resolve(&self, file: &UploadedFile) -> Result<Table, PipelineError> {
        parse_csv(&file.bytes, &self.options)
    }

    /// Run the pipeline for the current input and report the outcome.
    pub fn outcome(&self, file: Option<&UploadedFile>) -> Outcome {
        let Some(file) = file else {
            return Outcome::Awaiting;
        };
        match self.resolve(file) {
            Ok(table) => {
                tracing::info!(
                    file = %file.name,
                    bytes = file.len(),
                    rows = table.row_count(),
                    "upload parsed"
                );
                Outcome::Loaded(table)
            }
            Err(e) => {
                tracing::warn!(file = %file.name, error = %e, "upload failed");
                Outcome::Failed(ErrorReport::from_failure(&e))
            }
        }
    }

    /// Effects to perform for the current input.
    pub fn handle_upload(&self, file: Option<&UploadedFile>) -> Vec<Effect> {
        self.effects_for(self.outcome(file))
    }

    /// Read a stream as the uploaded file, then behave like
    /// [`handle_upload`](Self::handle_upload). Read failures are reported,
    /// not returned.
    pub fn handle_stream(&self, name: &str, reader: impl Read) -> Vec<Effect> {
        match UploadedFile::read_from(name, reader, self.options.max_bytes) {
            Ok(file) => self.handle_upload(Some(&file)),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "upload read failed");
                self.effects_for(Outcome::Failed(ErrorReport::from_failure(&e)))
            }
        }
    }

    /// Map an outcome onto presentation effects.
    pub fn effects_for(&self, outcome: Outcome) -> Vec<Effect> {
        let mut effects = self.static_effects();
        match outcome {
            Outcome::Awaiting => {}
            Outcome::Loaded(table) => {
                effects.push(Effect::Success(self.config.success_message.clone()));
                effects.push(Effect::Table(table));
            }
            Outcome::Failed(report) => effects.push(Effect::Error(report.message)),
        }
        effects
    }

    fn static_effects(&self) -> Vec<Effect> {
        vec![
            Effect::Title(self.config.title.clone()),
            Effect::Text(self.config.welcome.clone()),
            Effect::Uploader {
                label: self.config.upload_label.clone(),
                accept: self.config.accept.clone(),
            },
        ]
    }
}
