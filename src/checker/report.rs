//! Presentation policy over a ranking: positive matches only, top-N view,
//! and the most likely candidate enriched with its description and advice.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::DiseaseInfo;

use super::reference::ReferenceData;
use super::types::{Ranking, ScoredCandidate, UserSymptomSet};

pub const DISCLAIMER: &str = "Disclaimer: This application is a simple demo and not a substitute for \
professional medical diagnosis. If you are experiencing serious or life-threatening symptoms \
(chest pain, difficulty breathing, severe bleeding, confusion, fainting), seek emergency \
medical care immediately.";

pub const NO_SYMPTOMS_MESSAGE: &str = "Please select or enter at least one symptom.";

pub const NO_MATCHES_MESSAGE: &str = "No strong matches found in the demo knowledge base. \
Consider adding more specific symptoms or consult a clinician.";

/// Result of one symptom check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Input normalized to nothing; scoring was skipped.
    NoSymptoms,
    /// Scored, but no disease shares a symptom with the input.
    NoMatches { symptoms: UserSymptomSet },
    Matches(CheckReport),
}

impl CheckOutcome {
    /// Build the outcome for an already-scored ranking.
    pub fn from_ranking(
        symptoms: UserSymptomSet,
        ranking: &Ranking,
        reference: &ReferenceData,
        top_n: usize,
        checked_at: NaiveDateTime,
    ) -> Self {
        let top = top_matches(ranking, top_n);
        let Some(best) = top.first().cloned() else {
            return Self::NoMatches { symptoms };
        };

        let info = reference.info_for(&best.disease).cloned();
        Self::Matches(CheckReport {
            symptoms,
            top_matches: top,
            most_likely: MostLikely {
                candidate: best,
                info,
            },
            checked_at,
        })
    }

    /// User-facing status line for the non-match outcomes.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoSymptoms => Some(NO_SYMPTOMS_MESSAGE),
            Self::NoMatches { .. } => Some(NO_MATCHES_MESSAGE),
            Self::Matches(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub symptoms: UserSymptomSet,
    /// Positive matches only, best first, at most top-N.
    pub top_matches: Vec<ScoredCandidate>,
    pub most_likely: MostLikely,
    pub checked_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostLikely {
    pub candidate: ScoredCandidate,
    /// Missing when the disease has no entry in disease_info.
    pub info: Option<DiseaseInfo>,
}

/// Candidates sharing at least one symptom, truncated to `n`.
pub fn top_matches(ranking: &Ranking, n: usize) -> Vec<ScoredCandidate> {
    ranking
        .iter()
        .filter(|c| c.is_match())
        .take(n)
        .cloned()
        .collect()
}

/// Confidence as a percentage rounded to one decimal.
pub fn confidence_percent(candidate: &ScoredCandidate) -> f64 {
    (candidate.confidence * 1000.0).round() / 10.0
}

/// Render the top matches as an aligned text table.
pub fn format_table(candidates: &[ScoredCandidate]) -> String {
    let header = [
        "Disease",
        "Matched Symptoms",
        "Match Count",
        "Total Disease Symptoms",
        "Confidence (%)",
    ];
    let rows: Vec<[String; 5]> = candidates
        .iter()
        .map(|c| {
            [
                c.disease.clone(),
                c.matched_symptoms
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                c.match_count.to_string(),
                c.disease_symptom_count.to_string(),
                format!("{:.1}", confidence_percent(c)),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let render = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = render(&header[..]);
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        out.push('\n');
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render(&cells));
    }
    out
}

/// One line per disease: `Disease: symptom, symptom, ...`, symptoms in
/// declaration order.
pub fn format_knowledge_base(reference: &ReferenceData) -> String {
    reference
        .knowledge_base
        .diseases()
        .iter()
        .map(|d| {
            let symptoms: Vec<&str> = d.declared.iter().map(|s| s.as_str()).collect();
            format!("{}: {}", d.name, symptoms.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
