// ── Sanitizer ──
//
// Applies the redaction table to a rendered public document, then
// re-scans the result for every literal. A survivor is a hard failure:
// the document must not be published.

use crate::error::CoreError;

use super::table::RedactionTable;

/// A literal found in supposedly sanitized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leak {
    /// Obscured, loggable description of the literal.
    pub hint: String,
}

#[derive(Debug, Clone)]
pub struct Sanitizer {
    table: RedactionTable,
}

impl Sanitizer {
    pub fn new(table: RedactionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RedactionTable {
        &self.table
    }

    /// Substitute, then verify. Fails with [`CoreError::Leak`] naming the
    /// document and an obscured hint if any literal remains.
    pub fn sanitize(&self, document: &str, text: &str) -> Result<String, CoreError> {
        let sanitized = self.table.apply(text);
        let leaks = self.verify(&sanitized);

        let Some(first) = leaks.first() else {
            return Ok(sanitized);
        };
        for leak in &leaks {
            tracing::error!(document, hint = %leak.hint, "sensitive literal survived sanitization");
        }
        Err(CoreError::Leak {
            document: document.into(),
            hint: first.hint.clone(),
            count: leaks.len(),
        })
    }

    /// Every table literal still present in `text`.
    pub fn verify(&self, text: &str) -> Vec<Leak> {
        self.table
            .rules()
            .iter()
            .filter(|rule| rule.occurs_in(text))
            .map(|rule| Leak { hint: rule.hint() })
            .collect()
    }
}
