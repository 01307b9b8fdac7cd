//! End-to-end tests for the token module generation pipeline.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;
use tempfile::TempDir;

use tokengen::config::RunOptions;
use tokengen::error::GeneratorError;
use tokengen::generate::generate_token_module;
use tokengen::schema::BuiltinSchema;

fn options(encoded: Option<String>, skip: bool, output: PathBuf) -> RunOptions {
    RunOptions {
        skip,
        encoded,
        output,
    }
}

fn encode(json: &str) -> String {
    STANDARD.encode(json)
}

const THREE_TOKENS: &str = r#"[
    {"type": "ERC20", "symbol": "USDT", "address": "0xdac17f958d2ee523a2206206994597c13d831ec7", "decimals": 6, "chainId": 1},
    {"type": "NATIVE", "symbol": "ETH", "decimals": 18, "chainId": 1},
    {"type": "ERC721", "symbol": "PUNK", "address": "0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb", "chainId": 1}
]"#;

#[test]
fn element_count_and_order_match_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");

    generate_token_module(
        &options(Some(encode(THREE_TOKENS)), false, output.clone()),
        &BuiltinSchema,
    )
    .unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.matches("type: TokenType.").count(), 3);

    // Emission order mirrors input order
    let usdt = text.find("'USDT'").unwrap();
    let eth = text.find("'ETH'").unwrap();
    let punk = text.find("'PUNK'").unwrap();
    assert!(usdt < eth && eth < punk);
}

#[test]
fn skip_mode_always_emits_empty_list() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");

    // Even a valid payload is ignored in skip-mode
    generate_token_module(
        &options(Some(encode(THREE_TOKENS)), true, output.clone()),
        &BuiltinSchema,
    )
    .unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("export const CONFIGURED_TOKENS: Token[] = [];"));
    assert!(!text.contains("TokenType."));
}

#[test]
fn erc20_type_field_is_enum_reference_not_string() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");
    let payload = encode(
        r#"[{"type": "ERC20", "symbol": "USDT", "address": "0x0", "decimals": 6, "chainId": 1}]"#,
    );

    generate_token_module(&options(Some(payload), false, output.clone()), &BuiltinSchema).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("TokenType.ERC20"));
    assert!(!text.contains("'ERC20'"));
    assert!(!text.contains("\"ERC20\""));
}

#[test]
fn malformed_base64_fails_with_decode_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");

    let err = generate_token_module(
        &options(Some("%%%not base64%%%".to_string()), false, output.clone()),
        &BuiltinSchema,
    )
    .unwrap_err();

    assert!(matches!(err, GeneratorError::Decode(_)));
    assert!(!output.exists());
}

#[test]
fn valid_base64_of_non_json_fails_with_decode_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");

    let err = generate_token_module(
        &options(Some(encode("this is not json")), false, output.clone()),
        &BuiltinSchema,
    )
    .unwrap_err();

    assert!(matches!(err, GeneratorError::Decode(_)));
    assert!(!output.exists());
}

#[test]
fn schema_failure_leaves_existing_output_untouched() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");
    std::fs::write(&output, "previous contents\n").unwrap();

    // ERC20 missing its required address field
    let payload = encode(r#"[{"type": "ERC20", "symbol": "USDT", "decimals": 6, "chainId": 1}]"#);
    let err = generate_token_module(&options(Some(payload), false, output.clone()), &BuiltinSchema)
        .unwrap_err();

    match err {
        GeneratorError::SchemaValidation(errors) => {
            assert!(errors.iter().any(|e| e.contains("address")));
        }
        other => panic!("expected SchemaValidation, got {other:?}"),
    }
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "previous contents\n"
    );
}

#[test]
fn missing_payload_fails_the_build() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");

    let err = generate_token_module(&options(None, false, output.clone()), &BuiltinSchema)
        .unwrap_err();

    assert!(matches!(err, GeneratorError::MissingConfiguration(_)));
    assert!(!output.exists());
}

#[test]
fn reruns_are_identical_apart_from_the_banner() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.ts");
    let second = dir.path().join("second.ts");
    let payload = encode(THREE_TOKENS);

    generate_token_module(&options(Some(payload.clone()), false, first.clone()), &BuiltinSchema)
        .unwrap();
    generate_token_module(&options(Some(payload), false, second.clone()), &BuiltinSchema).unwrap();

    let strip_banner = |path: &PathBuf| -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("// Generated by tokengen on "))
            .map(str::to_string)
            .collect()
    };

    assert_eq!(strip_banner(&first), strip_banner(&second));
}

#[test]
fn nested_object_fields_render_as_literals() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");
    let payload = encode(
        r#"[{"type": "ERC20", "symbol": "USDT", "address": "0x0", "decimals": 6, "chainId": 1,
            "extensions": {"bridged": true, "origin": {"chainId": 10}}}]"#,
    );

    generate_token_module(&options(Some(payload), false, output.clone()), &BuiltinSchema).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("extensions: {"));
    assert!(text.contains("bridged: true,"));
    assert!(text.contains("origin: {"));
    assert!(text.contains("chainId: 10,"));
}

#[test]
fn output_is_destructively_overwritten() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("tokens.ts");
    std::fs::write(&output, "stale generated module with old tokens\n").unwrap();

    generate_token_module(&options(None, true, output.clone()), &BuiltinSchema).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.contains("CONFIGURED_TOKENS"));
}
