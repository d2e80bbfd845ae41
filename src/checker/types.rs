use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Symptom;

// ---------------------------------------------------------------------------
// UserSymptomSet
// ---------------------------------------------------------------------------

/// Canonical symptoms reported in one request. Iterates in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSymptomSet(BTreeSet<Symptom>);

impl UserSymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symptom; returns false when it was already present.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        self.0.insert(symptom)
    }

    pub fn contains(&self, symptom: &Symptom) -> bool {
        self.0.contains(symptom)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.0.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<Symptom> {
        &self.0
    }

    /// Join the symptoms with `sep`, e.g. for display or re-submission as free text.
    pub fn joined(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(Symptom::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl FromIterator<Symptom> for UserSymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Symptom> for UserSymptomSet {
    fn extend<I: IntoIterator<Item = Symptom>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

// ---------------------------------------------------------------------------
// ScoredCandidate & Ranking
// ---------------------------------------------------------------------------

/// Overlap score of one disease against the user's symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub disease: String,
    /// Intersection of user and disease symptoms, sorted.
    pub matched_symptoms: Vec<Symptom>,
    pub match_count: usize,
    pub disease_symptom_count: usize,
    /// `match_count / max(1, disease_symptom_count)`, in [0, 1].
    pub confidence: f64,
}

impl ScoredCandidate {
    pub fn is_match(&self) -> bool {
        self.match_count > 0
    }

    /// Every symptom of the disease was reported.
    pub fn is_full_coverage(&self) -> bool {
        self.disease_symptom_count > 0 && self.match_count == self.disease_symptom_count
    }
}

/// All diseases of a knowledge base, best candidate first.
pub type Ranking = Vec<ScoredCandidate>;

// ---------------------------------------------------------------------------
// CheckerError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Duplicate disease in knowledge base: {0}")]
    DuplicateDisease(String),

    #[error("Knowledge base entry has a blank disease name")]
    BlankDiseaseName,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
