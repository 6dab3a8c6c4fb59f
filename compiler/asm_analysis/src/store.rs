//! Per-document analysis state.
//!
//! The store is the only state that outlives an analysis pass. For each open
//! document it keeps the last token snapshot handed to the client (so the
//! next highlighting request can be answered with a delta) and a one-shot
//! slot of diagnostics waiting to be pulled.
//!
//! # Lifecycle
//!
//! - `open`: fresh entry, no snapshot, no pending diagnostics.
//! - `invalidate` (text changed): pending diagnostics are dropped as stale;
//!   the snapshot is kept as the base for the next delta.
//! - `full` / `delta`: analyze, replace the snapshot, refill the slot.
//! - `take_diagnostics`: empties the slot, analyzing first if it is empty.
//! - `close`: entry removed.
//!
//! The store takes `&mut self` everywhere and does no locking of its own.

use asm_diagnostic::Diagnostic;
use rustc_hash::FxHashMap;

use crate::{analyze, Analysis};
use crate::delta::{compute_edit, TokenEdit};
use crate::encode::TOKEN_STRIDE;

/// Encoded tokens as last sent to the client, tagged with a result id.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Snapshot {
    pub result_id: String,
    pub data: Vec<u32>,
}

/// Answer to a delta highlighting request.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TokensDelta {
    /// The client's previous result is known; `edits` holds at most one
    /// edit and is empty when nothing changed.
    Edits {
        result_id: String,
        edits: Vec<TokenEdit>,
    },
    /// The previous result id is unknown or stale; here is everything.
    Full(Snapshot),
}

/// One pass over `text`, tracing the declared labels for `uri`.
fn analyze_document(uri: &str, text: &str) -> Analysis {
    let analysis = analyze(text);
    tracing::trace!(uri, labels = ?analysis.labels, "declared labels");
    analysis
}

#[derive(Default, Debug)]
struct DocumentAnalysisState {
    last: Option<Snapshot>,
    pending_diagnostics: Option<Vec<Diagnostic>>,
}

#[derive(Default, Debug)]
pub struct DocumentAnalysisStore {
    documents: FxHashMap<String, DocumentAnalysisState>,
    next_result_id: u64,
}

impl DocumentAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_result_id(&mut self) -> String {
        self.next_result_id += 1;
        self.next_result_id.to_string()
    }

    /// Start tracking `uri`, discarding any earlier state for it.
    pub fn open(&mut self, uri: &str) {
        self.documents
            .insert(uri.to_owned(), DocumentAnalysisState::default());
    }

    /// The text of `uri` changed: pending diagnostics no longer apply.
    pub fn invalidate(&mut self, uri: &str) {
        self.documents
            .entry(uri.to_owned())
            .or_default()
            .pending_diagnostics = None;
    }

    /// Stop tracking `uri`. Returns whether it was tracked.
    pub fn close(&mut self, uri: &str) -> bool {
        self.documents.remove(uri).is_some()
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Analyze `text` and make the result the new snapshot for `uri`.
    pub fn full(&mut self, uri: &str, text: &str) -> &Snapshot {
        let analysis = analyze_document(uri, text);
        let result_id = self.fresh_result_id();
        let state = self.documents.entry(uri.to_owned()).or_default();

        state.pending_diagnostics = Some(analysis.diagnostics);
        state.last.insert(Snapshot {
            result_id,
            data: analysis.tokens,
        })
    }

    /// Analyze `text` and describe it relative to the client's previous
    /// result. The new result becomes the snapshot either way.
    pub fn delta(&mut self, uri: &str, text: &str, previous_result_id: &str) -> TokensDelta {
        let analysis = analyze_document(uri, text);
        let result_id = self.fresh_result_id();
        let state = self.documents.entry(uri.to_owned()).or_default();

        let previous = state
            .last
            .take()
            .filter(|snapshot| snapshot.result_id == previous_result_id);
        let snapshot = Snapshot {
            result_id,
            data: analysis.tokens,
        };

        let outcome = match previous {
            Some(previous) => TokensDelta::Edits {
                result_id: snapshot.result_id.clone(),
                edits: compute_edit(&previous.data, &snapshot.data, TOKEN_STRIDE)
                    .into_iter()
                    .collect(),
            },
            None => {
                tracing::debug!(
                    uri,
                    previous_result_id,
                    "unknown previous result; sending full tokens"
                );
                TokensDelta::Full(snapshot.clone())
            }
        };

        state.pending_diagnostics = Some(analysis.diagnostics);
        state.last = Some(snapshot);
        outcome
    }

    /// Take the diagnostics of the last pass, consuming them.
    ///
    /// When no pass has filled the slot since it was last read (or since the
    /// text changed), `text` is analyzed on the spot. That eager pass does
    /// not touch the highlighting snapshot, since its tokens never reach the
    /// client.
    pub fn take_diagnostics(&mut self, uri: &str, text: &str) -> Vec<Diagnostic> {
        let state = self.documents.entry(uri.to_owned()).or_default();
        if let Some(pending) = state.pending_diagnostics.take() {
            return pending;
        }
        tracing::debug!(uri, "no pending diagnostics; analyzing eagerly");
        analyze_document(uri, text).diagnostics
    }
}
