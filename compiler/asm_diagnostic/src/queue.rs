//! Per-pass diagnostic collection.
//!
//! One queue lives for exactly one analysis pass. Producers push in whatever
//! order they walk the document; [`DiagnosticQueue::into_sorted`] hands back
//! the list ordered by position so repeated passes over the same text yield
//! identical output.

use crate::Diagnostic;

#[derive(Default, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain the queue, ordered by start position. The sort is stable, so
    /// diagnostics at the same position keep their push order.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| d.span.start);
        self.diagnostics
    }
}
