use std::time::Instant;

use chrono::Local;

use crate::config::CheckerConfig;

use super::normalize::normalize;
use super::reference::ReferenceData;
use super::report::CheckOutcome;
use super::scoring::score;
use super::types::{Ranking, UserSymptomSet};

/// Runs normalize → score → report against one immutable reference dataset.
/// Shareable across threads; every call works on its own data.
pub struct SymptomChecker {
    reference: ReferenceData,
    config: CheckerConfig,
}

impl SymptomChecker {
    pub fn new(reference: ReferenceData) -> Self {
        Self::with_config(reference, CheckerConfig::default())
    }

    pub fn with_config(reference: ReferenceData, config: CheckerConfig) -> Self {
        Self { reference, config }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Full ranking for an already-normalized symptom set.
    pub fn rank(&self, symptoms: &UserSymptomSet) -> Ranking {
        score(symptoms, &self.reference.knowledge_base)
    }

    /// Check raw input. Empty input short-circuits to `NoSymptoms`.
    pub fn check<S: AsRef<str>>(&self, selections: &[S], free_text: &str) -> CheckOutcome {
        let start = Instant::now();

        let symptoms = normalize(selections, free_text);
        if symptoms.is_empty() {
            tracing::info!("Symptom check skipped: no symptoms provided");
            return CheckOutcome::NoSymptoms;
        }

        let symptom_count = symptoms.len();
        let ranking = self.rank(&symptoms);
        let outcome = CheckOutcome::from_ranking(
            symptoms,
            &ranking,
            &self.reference,
            self.config.top_n,
            Local::now().naive_local(),
        );

        let elapsed_us = start.elapsed().as_micros() as u64;
        match &outcome {
            CheckOutcome::Matches(report) => tracing::info!(
                symptoms = symptom_count,
                candidates = report.top_matches.len(),
                most_likely = %report.most_likely.candidate.disease,
                elapsed_us,
                "Symptom check complete"
            ),
            _ => tracing::info!(
                symptoms = symptom_count,
                elapsed_us,
                "Symptom check complete: no matches"
            ),
        }

        outcome
    }
}
