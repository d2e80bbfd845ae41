//! Overlap scoring of every known disease against a user symptom set.

use std::cmp::Ordering;

use super::reference::{DiseaseEntry, KnowledgeBase};
use super::types::{Ranking, ScoredCandidate, UserSymptomSet};

/// Score every disease in `kb` and order the result with [`rank_order`].
///
/// Callers should not pass an empty symptom set; if they do, every candidate
/// scores zero. An empty knowledge base yields an empty ranking.
pub fn score(symptoms: &UserSymptomSet, kb: &KnowledgeBase) -> Ranking {
    let mut ranking: Ranking = kb
        .diseases()
        .iter()
        .map(|entry| score_disease(symptoms, entry))
        .collect();

    // sort_by is stable: equal keys keep knowledge base order.
    ranking.sort_by(rank_order);

    tracing::debug!(
        symptoms = symptoms.len(),
        diseases = ranking.len(),
        matched = ranking.iter().filter(|c| c.is_match()).count(),
        "Scored diseases"
    );

    ranking
}

/// Score one disease: confidence is `|matched| / max(1, |disease symptoms|)`.
pub fn score_disease(symptoms: &UserSymptomSet, entry: &DiseaseEntry) -> ScoredCandidate {
    let matched_symptoms: Vec<_> = entry
        .symptoms
        .intersection(symptoms.as_set())
        .cloned()
        .collect();
    let match_count = matched_symptoms.len();
    let disease_symptom_count = entry.symptoms.len();
    let confidence = match_count as f64 / disease_symptom_count.max(1) as f64;

    ScoredCandidate {
        disease: entry.name.clone(),
        matched_symptoms,
        match_count,
        disease_symptom_count,
        confidence,
    }
}

/// Ranking comparator: confidence descending, then match count descending.
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| b.match_count.cmp(&a.match_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::normalize::normalize;
    use crate::checker::reference::ReferenceData;
    use crate::models::DiseaseRecord;

    const NONE: &[&str] = &[];

    fn kb(entries: &[(&str, &[&str])]) -> KnowledgeBase {
        KnowledgeBase::from_records(
            entries
                .iter()
                .map(|(d, s)| DiseaseRecord {
                    disease: (*d).into(),
                    symptoms: s.iter().map(|x| (*x).into()).collect(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn demo_kb() -> KnowledgeBase {
        ReferenceData::demo().knowledge_base
    }

    fn symptoms(text: &str) -> UserSymptomSet {
        normalize(NONE, text)
    }

    fn names(ranking: &Ranking) -> Vec<&str> {
        ranking.iter().map(|c| c.disease.as_str()).collect()
    }

    fn assert_sorted(ranking: &Ranking) {
        for pair in ranking.windows(2) {
            let key_a = (pair[0].confidence, pair[0].match_count);
            let key_b = (pair[1].confidence, pair[1].match_count);
            assert!(
                key_a.0 > key_b.0 || (key_a.0 == key_b.0 && key_a.1 >= key_b.1),
                "{:?} ranked above {:?}",
                pair[0].disease,
                pair[1].disease
            );
        }
    }

    #[test]
    fn one_candidate_per_disease() {
        let kb = demo_kb();
        let ranking = score(&symptoms("fever, cough"), &kb);
        assert_eq!(ranking.len(), kb.len());
        let mut seen = names(&ranking);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), kb.len());
    }

    #[test]
    fn smaller_disease_wins_on_equal_matches() {
        let kb = kb(&[
            (
                "Influenza (Flu)",
                &["fever", "cough", "body aches", "chills", "fatigue", "headache", "sore throat"],
            ),
            (
                "COVID-19",
                &["fever", "cough", "fatigue", "loss of taste", "loss of smell", "shortness of breath"],
            ),
        ]);
        let ranking = score(&symptoms("fever, cough"), &kb);

        assert_eq!(names(&ranking), vec!["COVID-19", "Influenza (Flu)"]);
        assert_eq!(ranking[0].match_count, 2);
        assert_eq!(ranking[1].match_count, 2);
        assert!((ranking[0].confidence - 2.0 / 6.0).abs() < 1e-12);
        assert!((ranking[1].confidence - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn demo_fever_cough_uses_exact_matching() {
        let ranking = score(&symptoms("fever, cough"), &demo_kb());

        // "high fever", "mild fever" and "dry cough" are distinct symptoms.
        // Cold and COVID-19 tie at 1/6 and keep knowledge base order.
        assert_eq!(&names(&ranking)[..3], &["Common Cold", "COVID-19", "Influenza (Flu)"]);
        assert_eq!(ranking[0].matched_symptoms[0].as_str(), "cough");
        assert_eq!(ranking[1].matched_symptoms[0].as_str(), "fever");
        assert!(ranking[3..].iter().all(|c| c.match_count == 0));
        assert_sorted(&ranking);
    }

    #[test]
    fn unknown_symptom_scores_zero_everywhere() {
        let ranking = score(&symptoms("nonexistent symptom"), &demo_kb());
        assert_eq!(ranking.len(), 7);
        for c in &ranking {
            assert_eq!(c.match_count, 0);
            assert_eq!(c.confidence, 0.0);
            assert!(c.matched_symptoms.is_empty());
        }
        // No reordering among all-zero candidates.
        assert_eq!(ranking[0].disease, "Common Cold");
        assert_eq!(ranking[6].disease, "Hypertension (high BP)");
    }

    #[test]
    fn empty_knowledge_base_yields_empty_ranking() {
        let ranking = score(&symptoms("fever"), &KnowledgeBase::default());
        assert!(ranking.is_empty());
    }

    #[test]
    fn empty_symptom_set_scores_zero() {
        let ranking = score(&UserSymptomSet::new(), &demo_kb());
        assert_eq!(ranking.len(), 7);
        assert!(ranking.iter().all(|c| c.confidence == 0.0));
    }

    #[test]
    fn disease_without_symptoms_scores_zero() {
        let kb = kb(&[("Mystery", &[]), ("Cold", &["cough"])]);
        let ranking = score(&symptoms("cough"), &kb);
        assert_eq!(names(&ranking), vec!["Cold", "Mystery"]);
        assert_eq!(ranking[1].disease_symptom_count, 0);
        assert_eq!(ranking[1].confidence, 0.0);
    }

    #[test]
    fn full_coverage_iff_confidence_one() {
        let kb = demo_kb();
        for entry in kb.diseases() {
            let reported: UserSymptomSet = entry.symptoms.iter().cloned().collect();
            let ranking = score(&reported, &kb);
            for c in &ranking {
                assert!((0.0..=1.0).contains(&c.confidence));
                let full = kb.symptoms_for(&c.disease).unwrap().iter().cloned().collect::<Vec<_>>()
                    == c.matched_symptoms;
                assert_eq!(c.confidence == 1.0, full, "{}", c.disease);
                assert_eq!(c.is_full_coverage(), full);
            }
            assert_eq!(ranking[0].disease, entry.name);
        }
    }

    #[test]
    fn match_count_breaks_confidence_ties() {
        let kb = kb(&[
            ("Small", &["a", "b"]),
            ("Large", &["a", "b", "c", "d"]),
        ]);
        let ranking = score(&symptoms("a, c, d, b"), &kb);
        // both 100%; Large matched 4 vs 2
        assert_eq!(names(&ranking), vec!["Large", "Small"]);

        let ranking = score(&symptoms("a, c"), &kb);
        // 1/2 vs 2/4: equal confidence, Large has more matches
        assert_eq!(names(&ranking), vec!["Large", "Small"]);
    }

    #[test]
    fn matched_symptoms_sorted() {
        let ranking = score(&symptoms("sore throat, cough, chills, body aches"), &demo_kb());
        let flu = ranking.iter().find(|c| c.disease == "Influenza (Flu)").unwrap();
        let labels: Vec<_> = flu.matched_symptoms.iter().map(|s| s.as_str()).collect();
        assert_eq!(labels, vec!["body aches", "chills", "cough", "sore throat"]);
        assert_eq!(flu.match_count, 4);
        assert_eq!(flu.disease_symptom_count, 7);
        assert_eq!(ranking[0].disease, "Influenza (Flu)");
    }

    #[test]
    fn deterministic_across_calls() {
        let kb = demo_kb();
        let input = symptoms("headache, nausea, fatigue, shortness of breath");
        let first = score(&input, &kb);
        for _ in 0..5 {
            assert_eq!(score(&input, &kb), first);
        }
        assert_sorted(&first);
    }

    #[test]
    fn rank_order_descending() {
        let make = |confidence: f64, match_count: usize| ScoredCandidate {
            disease: String::new(),
            matched_symptoms: vec![],
            match_count,
            disease_symptom_count: 4,
            confidence,
        };
        assert_eq!(rank_order(&make(0.5, 2), &make(0.25, 1)), Ordering::Less);
        assert_eq!(rank_order(&make(0.5, 1), &make(0.5, 2)), Ordering::Greater);
        assert_eq!(rank_order(&make(0.5, 2), &make(0.5, 2)), Ordering::Equal);
    }
}
