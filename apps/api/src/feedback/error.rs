use thiserror::Error;

/// Construction-time failures of the report core. Either one means no render tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A required category is missing, duplicated or unrecognised, or a score is out of range.
    #[error("Malformed report: {0}")]
    MalformedReport(String),

    /// The composer was asked to pre-open a section id that is not in the report.
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}
