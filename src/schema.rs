//! Schema validation for the decoded token configuration.
//!
//! Validation is an injected capability: the pipeline takes any
//! [`TokenValidator`], and [`BuiltinSchema`] is the fixed shape the
//! generated module depends on. Errors are collected rather than reported
//! one at a time, so a broken configuration surfaces everything wrong with
//! it in a single failed build.

use serde_json::Value;

/// Token variants the generated `TokenType` enumeration knows about.
///
/// An unknown tag would render as a `TokenType.<tag>` reference that does
/// not exist in the consuming project, so it is rejected here.
pub const TOKEN_TYPES: &[&str] = &["ERC20", "ERC721", "ERC1155", "NATIVE"];

/// Required fields per variant, in addition to `type` itself.
fn required_fields(variant: &str) -> &'static [&'static str] {
    match variant {
        "ERC20" => &["symbol", "address", "decimals", "chainId"],
        "ERC721" => &["symbol", "address", "chainId"],
        "ERC1155" => &["address", "chainId"],
        "NATIVE" => &["symbol", "decimals", "chainId"],
        _ => &[],
    }
}

/// Structural validation of the decoded JSON before it becomes token records.
pub trait TokenValidator {
    /// Returns `Ok(())` if the value conforms, otherwise every violation found.
    fn validate(&self, value: &Value) -> Result<(), Vec<String>>;
}

/// The fixed schema: an array of token objects with a known `type` tag and
/// the per-variant required fields.
#[derive(Debug, Default)]
pub struct BuiltinSchema;

impl TokenValidator for BuiltinSchema {
    fn validate(&self, value: &Value) -> Result<(), Vec<String>> {
        let Some(items) = value.as_array() else {
            return Err(vec!["token configuration must be a JSON array".to_string()]);
        };

        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let Some(object) = item.as_object() else {
                errors.push(format!("token {index}: must be an object"));
                continue;
            };

            match object.get("type") {
                None => {
                    errors.push(format!("token {index}: missing required field 'type'"));
                    continue;
                }
                Some(Value::String(tag)) if TOKEN_TYPES.contains(&tag.as_str()) => {
                    for field in required_fields(tag) {
                        if !object.contains_key(*field) {
                            errors.push(format!(
                                "token {index} ({tag}): missing required field '{field}'"
                            ));
                        }
                    }
                    check_field_shapes(index, object, &mut errors);
                }
                Some(Value::String(tag)) => {
                    errors.push(format!(
                        "token {index}: unknown token type '{tag}' (expected one of {TOKEN_TYPES:?})"
                    ));
                }
                Some(_) => {
                    errors.push(format!("token {index}: field 'type' must be a string"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Shape checks for well-known fields, applied whenever the field is present.
fn check_field_shapes(index: usize, object: &serde_json::Map<String, Value>, errors: &mut Vec<String>) {
    for key in ["symbol", "address"] {
        if let Some(value) = object.get(key) {
            if !value.is_string() {
                errors.push(format!("token {index}: field '{key}' must be a string"));
            }
        }
    }

    if let Some(decimals) = object.get("decimals") {
        if !decimals.as_u64().is_some_and(|d| d <= u64::from(u8::MAX)) {
            errors.push(format!(
                "token {index}: field 'decimals' must be an integer between 0 and 255"
            ));
        }
    }

    if let Some(chain_id) = object.get("chainId") {
        if !chain_id.as_u64().is_some_and(|c| c > 0) {
            errors.push(format!(
                "token {index}: field 'chainId' must be a positive integer"
            ));
        }
    }
}
