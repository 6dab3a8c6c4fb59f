//! Drives the store through an editing session the way the server does.

use asm_analysis::{apply_edit, decode, DocumentAnalysisStore, TokensDelta};
use pretty_assertions::assert_eq;

const URI: &str = "file:///work/hello.asm";

#[test]
fn typing_a_label_fixes_the_diagnostic() {
    let mut store = DocumentAnalysisStore::new();
    store.open(URI);

    let text = "section .text\nstart\n  mov eax, 1\n";
    let first = store.full(URI, text).clone();
    let diagnostics = store.take_diagnostics(URI, text);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "missing colon for label");

    let text = "section .text\nstart:\n  mov eax, 1\n";
    store.invalidate(URI);
    let TokensDelta::Edits { edits, .. } = store.delta(URI, text, &first.result_id) else {
        panic!("expected an incremental answer");
    };
    assert_eq!(edits.len(), 1);

    let patched = apply_edit(&first.data, &edits[0]);
    let label = decode(&patched)
        .into_iter()
        .find(|t| t.line == 1 && t.column == 0);
    assert_eq!(label.map(|t| (t.category, t.modifiers)), Some((1, 1)));

    assert!(store.take_diagnostics(URI, text).is_empty());
}

#[test]
fn closing_forgets_the_document() {
    let mut store = DocumentAnalysisStore::new();
    let id = store.full(URI, "nop").result_id.clone();
    store.close(URI);

    assert!(matches!(store.delta(URI, "nop", &id), TokensDelta::Full(_)));
}
