use std::path::PathBuf;

/// Errors raised by the generation pipeline
///
/// Every variant is fatal to the build: the binary exits nonzero and the
/// host build tool reports the failure. Nothing is retried or swallowed.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("required environment variable {0} is not set")]
    MissingConfiguration(&'static str),
    #[error("failed to decode token configuration: {0}")]
    Decode(String),
    #[error("token configuration failed schema validation:\n  {}", .0.join("\n  "))]
    SchemaValidation(Vec<String>),
    #[error("failed to write generated module '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
