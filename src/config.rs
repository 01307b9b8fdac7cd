use log::warn;
use std::path::PathBuf;

/// Environment variable carrying the base64-encoded JSON token array.
pub const TOKENS_VAR: &str = "CONFIGURED_CUSTOM_TOKENS";

/// Skip flag: when set to exactly "true", generation emits an empty token
/// list without consulting [`TOKENS_VAR`].
///
/// The misspelling is part of the external contract; deployed environments
/// already set the variable under this name.
pub const SKIP_VAR: &str = "SKIP_ENV_VALDIATION";

/// Project-relative path the generated module is written to.
pub const DEFAULT_OUTPUT: &str = "src/generated/tokens.ts";

/// Options for one generator invocation, resolved once at startup and
/// passed explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Skip-mode: emit an empty token list regardless of the environment.
    pub skip: bool,
    /// Raw base64 payload, if present in the environment.
    pub encoded: Option<String>,
    /// Destination for the generated module.
    pub output: PathBuf,
}

impl RunOptions {
    /// Resolve options from the process environment.
    ///
    /// In skip-mode the token variable is never read.
    pub fn from_env(output: PathBuf) -> Self {
        let skip = std::env::var(SKIP_VAR).map(|v| v == "true").unwrap_or(false);
        let encoded = if skip {
            warn!("{SKIP_VAR} is set, token configuration will not be validated");
            None
        } else {
            std::env::var(TOKENS_VAR).ok()
        };

        Self {
            skip,
            encoded,
            output,
        }
    }
}
