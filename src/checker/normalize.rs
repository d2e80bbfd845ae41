//! Turns structured selections and comma-separated free text into one
//! canonical symptom set.

use crate::models::Symptom;

use super::types::UserSymptomSet;

/// Normalize raw symptom input.
///
/// Each selection and each comma-separated segment of `free_text` is trimmed
/// and lower-cased; blanks are dropped and duplicates merged. Unknown labels
/// are kept as-is. An empty result means "no symptoms provided".
pub fn normalize<S: AsRef<str>>(selections: &[S], free_text: &str) -> UserSymptomSet {
    let mut symptoms: UserSymptomSet = selections
        .iter()
        .filter_map(|s| Symptom::parse(s.as_ref()))
        .collect();

    symptoms.extend(free_text.split(',').filter_map(Symptom::parse));

    tracing::debug!(
        selections = selections.len(),
        canonical = symptoms.len(),
        "Normalized symptom input"
    );

    symptoms
}
