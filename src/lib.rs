//! # Tokengen - build-time generator for the configured custom token module
//!
//! This library decodes a base64-encoded JSON array of token definitions
//! supplied through the environment, validates it against a fixed schema,
//! and emits a generated source module exporting a typed token list.
//!
//! ## Overview
//!
//! Tokengen runs once at the start of a build. The pipeline is strictly
//! sequential with no retries: resolve options, load and validate the
//! configured tokens, emit the module body, format it to project style,
//! and overwrite the output file. Skip-mode (used in environments without
//! secrets) short-circuits loading and emits an empty token list.
//!
//! ## Architecture
//!
//! - `config`: invocation options resolved once from the environment
//! - `error`: the fatal error taxonomy for the pipeline
//! - `token`: order-preserving token record model
//! - `schema`: injectable schema validation with a built-in token schema
//! - `loader`: base64 -> JSON -> validated token records
//! - `emit`: typed declaration IR and module rendering
//! - `format`: project-style text normalization
//! - `generate`: pipeline orchestration and file write
//!
//! ## Error Handling
//!
//! Library code returns the typed [`error::GeneratorError`]; the binaries
//! use `color_eyre` at the edge so failures propagate to the host build
//! tool with context. Every error aborts the build; none are swallowed.

pub mod config;
pub mod emit;
pub mod error;
pub mod format;
pub mod generate;
pub mod loader;
pub mod schema;
pub mod token;
