//! Label syntax validation.
//!
//! Only instructions whose head token is still [`Category::Unknown`] are
//! inspected; anything headed by a mnemonic, directive, register or number is
//! assumed well formed at this layer.
//!
//! | Tokens on the line            | Outcome                             |
//! |-------------------------------|-------------------------------------|
//! | `name :`                      | label declaration                   |
//! | `name` then two or more more  | E1002 over everything after `name`  |
//! | `name` alone, or `name x`     | E1001 over `name`                   |
//!
//! Validation is split in two phases. [`validate`] reads the instructions
//! and records what it found in a [`LabelReport`]; [`LabelReport::apply`]
//! then settles the token categories. The classifier and the validator stay
//! independent, and nothing is mutated while the instruction views are alive.

use asm_diagnostic::{content_after_label, missing_label_colon, Diagnostic, DiagnosticQueue};
use asm_ir::{Category, Modifiers, Token};

use crate::instruction::Instruction;

/// Findings of one validation pass.
#[derive(Debug, Default)]
pub struct LabelReport {
    /// Document token indices of label heads, in line order.
    declarations: Vec<usize>,
    diagnostics: DiagnosticQueue,
}

impl LabelReport {
    /// Names of the declared labels, looked up in the document token list.
    pub fn label_names(&self, tokens: &[Token<'_>]) -> Vec<String> {
        self.declarations
            .iter()
            .map(|&i| tokens[i].text.to_owned())
            .collect()
    }

    /// Settle categories: every declared head becomes a
    /// [`Category::FunctionLabel`] with the declaration modifier.
    ///
    /// Returns the pass's diagnostics in position order.
    pub fn apply(self, tokens: &mut [Token<'_>]) -> Vec<Diagnostic> {
        for &index in &self.declarations {
            let token = &mut tokens[index];
            debug_assert_eq!(token.category, Category::Unknown);
            token.category = Category::FunctionLabel;
            token.modifiers |= Modifiers::DECLARATION;
        }
        self.diagnostics.into_sorted()
    }
}

/// Inspect every instruction headed by an unclassified identifier.
///
/// A violation is recorded and validation continues with the next line.
pub fn validate(instructions: &[Instruction<'_, '_>]) -> LabelReport {
    let mut report = LabelReport::default();

    for instruction in instructions {
        let Some(head) = instruction.head() else {
            continue;
        };
        if head.category != Category::Unknown {
            continue;
        }

        let diagnostic = match instruction.tokens {
            [_, colon] if colon.is_colon() => {
                report.declarations.push(instruction.first_index);
                continue;
            }
            [_, first, .., last] => content_after_label(first, last),
            _ => missing_label_colon(head),
        };
        tracing::trace!(%diagnostic, "label violation");
        report.diagnostics.push(diagnostic);
    }

    tracing::trace!(
        labels = report.declarations.len(),
        errors = report.diagnostics.iter().count(),
        "validated labels"
    );
    report
}
