use pretty_assertions::assert_eq;
use tower_lsp::lsp_types::Url;

use super::ServerError;

#[test]
fn document_not_found_names_the_uri() {
    let uri = Url::parse("file:///src/boot.asm").expect("valid uri");
    assert_eq!(
        ServerError::DocumentNotFound(uri).to_string(),
        "document not found: file:///src/boot.asm"
    );
}

#[test]
fn invalid_config_wraps_json_error() {
    let source = serde_json::from_str::<bool>("\"yes\"").expect_err("not a bool");
    let err = ServerError::from(source);
    assert!(matches!(err, ServerError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("invalid initialization options: "));
}
