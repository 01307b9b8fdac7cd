use crate::config::{RunOptions, TOKENS_VAR};
use crate::error::GeneratorError;
use crate::schema::TokenValidator;
use crate::token::TokenRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;
use serde_json::Value;

/// Decode and validate the configured token set.
///
/// Skip-mode short-circuits to an empty set before the payload is looked at.
/// Otherwise the payload goes base64 -> UTF-8 -> JSON -> schema, and each
/// stage failure maps to the matching [`GeneratorError`] variant.
pub fn load_tokens(
    options: &RunOptions,
    validator: &dyn TokenValidator,
) -> Result<Vec<TokenRecord>, GeneratorError> {
    if options.skip {
        info!("Skip-mode active, producing an empty token list");
        return Ok(Vec::new());
    }

    let encoded = options
        .encoded
        .as_deref()
        .ok_or(GeneratorError::MissingConfiguration(TOKENS_VAR))?;

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| GeneratorError::Decode(format!("invalid base64: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| GeneratorError::Decode(format!("payload is not UTF-8: {e}")))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| GeneratorError::Decode(format!("payload is not valid JSON: {e}")))?;

    validator
        .validate(&value)
        .map_err(GeneratorError::SchemaValidation)?;

    // Cannot fail after validation pinned the shape, but propagate anyway
    let tokens: Vec<TokenRecord> = serde_json::from_value(value)
        .map_err(|e| GeneratorError::Decode(format!("payload is not a token array: {e}")))?;

    info!("Decoded {} configured token(s)", tokens.len());
    Ok(tokens)
}
