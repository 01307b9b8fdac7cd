//! Generation pipeline orchestrator.
//!
//! Coordinates the flow from option resolution through module write:
//! Load -> Emit -> Format -> Write, strictly sequential. Any stage failure
//! aborts before the output file is touched.

use crate::config::RunOptions;
use crate::emit::{token_literal, Declaration, Literal, Module};
use crate::error::GeneratorError;
use crate::format::format_source;
use crate::loader::load_tokens;
use crate::schema::TokenValidator;
use crate::token::TokenRecord;
use chrono::Local;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Name of the exported constant in the generated module.
pub const CONST_NAME: &str = "CONFIGURED_TOKENS";

/// Module the `Token` type and `TokenType` enumeration are imported from,
/// relative to the output file.
pub const TOKEN_MODULE: &str = "../types/tokens";

/// Run the whole pipeline and return the path of the written module.
pub fn generate_token_module(
    options: &RunOptions,
    validator: &dyn TokenValidator,
) -> Result<PathBuf, GeneratorError> {
    let tokens = load_tokens(options, validator)?;
    let module = build_module(&tokens);
    let formatted = format_source(&module.render());
    write_module(options, &formatted)?;
    Ok(options.output.clone())
}

/// Assemble the four sections of the generated module: banner, do-not-edit
/// warning, the two imports, and the exported constant.
fn build_module(tokens: &[TokenRecord]) -> Module {
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S %Z");
    Module::new(vec![
        Declaration::Comment(format!("Generated by tokengen on {generated_at}.")),
        Declaration::Comment(
            "Do not edit this file by hand; it is overwritten on every build.".to_string(),
        ),
        Declaration::ImportType {
            names: vec!["Token".to_string()],
            from: TOKEN_MODULE.to_string(),
        },
        Declaration::Import {
            names: vec!["TokenType".to_string()],
            from: TOKEN_MODULE.to_string(),
        },
        Declaration::ExportConst {
            name: CONST_NAME.to_string(),
            ty: "Token[]".to_string(),
            value: Literal::Array(tokens.iter().map(token_literal).collect()),
        },
    ])
}

/// Destructive overwrite of the output file, creating its parent directory
/// if needed. The artifact is regenerable, so a partial write on crash is
/// acceptable and no atomic rename is attempted.
fn write_module(options: &RunOptions, contents: &str) -> Result<(), GeneratorError> {
    let write_err = |source| GeneratorError::Write {
        path: options.output.clone(),
        source,
    };

    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(&options.output, contents).map_err(write_err)?;

    info!("Generated token module at {:?}", options.output);
    Ok(())
}
