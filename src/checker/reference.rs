use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::models::{DiseaseInfo, DiseaseRecord, Symptom};

use super::types::CheckerError;

pub const KNOWLEDGE_BASE_FILE: &str = "knowledge_base.json";
pub const DISEASE_INFO_FILE: &str = "disease_info.json";

/// A disease and its canonical symptom set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub name: String,
    pub symptoms: BTreeSet<Symptom>,
    /// Same symptoms in declaration order, for listings.
    pub declared: Vec<Symptom>,
}

impl DiseaseEntry {
    fn new<S: AsRef<str>>(name: String, raw: &[S]) -> Self {
        let mut symptoms = BTreeSet::new();
        let declared = raw
            .iter()
            .filter_map(|s| Symptom::parse(s.as_ref()))
            .filter(|s| symptoms.insert(s.clone()))
            .collect();
        Self {
            name,
            symptoms,
            declared,
        }
    }
}

/// Immutable disease → symptoms mapping. Keeps declaration order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    diseases: Vec<DiseaseEntry>,
}

impl KnowledgeBase {
    /// Build from raw records, canonicalizing symptom labels.
    ///
    /// Rejects blank or repeated disease names. A disease left with no
    /// symptoms is kept (it always scores zero) and logged.
    pub fn from_records(records: Vec<DiseaseRecord>) -> Result<Self, CheckerError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut diseases = Vec::with_capacity(records.len());

        for record in records {
            let name = record.disease.trim().to_string();
            if name.is_empty() {
                return Err(CheckerError::BlankDiseaseName);
            }
            if !seen.insert(name.clone()) {
                return Err(CheckerError::DuplicateDisease(name));
            }

            let entry = DiseaseEntry::new(name, &record.symptoms);
            if entry.symptoms.is_empty() {
                tracing::warn!(disease = %entry.name, "Disease has no symptoms; it will never match");
            }

            diseases.push(entry);
        }

        Ok(Self { diseases })
    }

    pub fn diseases(&self) -> &[DiseaseEntry] {
        &self.diseases
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    /// Look up the symptom set of a disease by exact name.
    pub fn symptoms_for(&self, disease: &str) -> Option<&BTreeSet<Symptom>> {
        self.diseases
            .iter()
            .find(|d| d.name == disease)
            .map(|d| &d.symptoms)
    }

    /// Sorted vocabulary of every known symptom, for structured selection.
    pub fn all_symptoms(&self) -> BTreeSet<Symptom> {
        self.diseases
            .iter()
            .flat_map(|d| d.symptoms.iter().cloned())
            .collect()
    }
}

/// Knowledge base plus the descriptive info shown for the top candidate.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub knowledge_base: KnowledgeBase,
    pub disease_info: Vec<DiseaseInfo>,
}

impl ReferenceData {
    /// Load reference data from bundled JSON files.
    pub fn load(resources_dir: &Path) -> Result<Self, CheckerError> {
        let records: Vec<DiseaseRecord> = read_json(resources_dir, KNOWLEDGE_BASE_FILE)?;
        let disease_info: Vec<DiseaseInfo> = read_json(resources_dir, DISEASE_INFO_FILE)?;

        let knowledge_base = KnowledgeBase::from_records(records)?;

        for info in &disease_info {
            if knowledge_base.symptoms_for(&info.disease).is_none() {
                tracing::warn!(disease = %info.disease, "Disease info has no knowledge base entry");
            }
        }
        for disease in duplicate_info_names(&disease_info) {
            tracing::warn!(disease = %disease, "Repeated disease info entry; only the first is used");
        }

        tracing::info!(
            dir = %resources_dir.display(),
            diseases = knowledge_base.len(),
            info_entries = disease_info.len(),
            "Reference data loaded"
        );

        Ok(Self {
            knowledge_base,
            disease_info,
        })
    }

    /// Built-in seven-disease demo dataset (no file I/O).
    pub fn demo() -> Self {
        let diseases = DEMO_DISEASES
            .iter()
            .map(|(disease, symptoms)| DiseaseEntry::new((*disease).into(), &symptoms[..]))
            .collect();

        let disease_info = DEMO_INFO
            .iter()
            .map(|(disease, description, advice)| DiseaseInfo {
                disease: (*disease).into(),
                description: (*description).into(),
                advice: (*advice).into(),
            })
            .collect();

        Self {
            knowledge_base: KnowledgeBase { diseases },
            disease_info,
        }
    }

    /// Look up descriptive info for a disease by exact name.
    pub fn info_for(&self, disease: &str) -> Option<&DiseaseInfo> {
        self.disease_info.iter().find(|i| i.disease == disease)
    }
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, CheckerError> {
    let path = dir.join(file);
    let json = std::fs::read_to_string(&path).map_err(|e| {
        CheckerError::ReferenceDataLoad(path.display().to_string(), e.to_string())
    })?;
    serde_json::from_str(&json)
        .map_err(|e| CheckerError::ReferenceDataParse(file.into(), e.to_string()))
}

/// Disease names that appear more than once in the info table, in first-repeat order.
fn duplicate_info_names(info: &[DiseaseInfo]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for entry in info {
        let name = entry.disease.as_str();
        if !seen.insert(name) && !repeated.contains(&name) {
            repeated.push(name);
        }
    }
    repeated
}

const DEMO_DISEASES: &[(&str, &[&str])] = &[
    (
        "Common Cold",
        &["cough", "sore throat", "runny nose", "congestion", "sneezing", "mild fever"],
    ),
    (
        "Influenza (Flu)",
        &[
            "high fever",
            "body aches",
            "chills",
            "fatigue",
            "cough",
            "headache",
            "sore throat",
        ],
    ),
    (
        "COVID-19",
        &[
            "fever",
            "dry cough",
            "fatigue",
            "loss of taste",
            "loss of smell",
            "shortness of breath",
        ],
    ),
    (
        "Gastroenteritis",
        &["nausea", "vomiting", "diarrhea", "stomach pain", "dehydration"],
    ),
    (
        "Migraine",
        &["severe headache", "nausea", "sensitivity to light", "visual aura"],
    ),
    (
        "Urinary Tract Infection",
        &[
            "painful urination",
            "frequent urination",
            "lower abdominal pain",
            "cloudy urine",
        ],
    ),
    (
        "Hypertension (high BP)",
        &["headache", "dizziness", "nosebleed", "shortness of breath"],
    ),
];

const DEMO_INFO: &[(&str, &str, &str)] = &[
    (
        "Common Cold",
        "A mild viral respiratory infection. Symptoms are usually mild and self-limiting.",
        "Rest, fluids, OTC cold remedies. See doctor if high fever or symptoms worsen.",
    ),
    (
        "Influenza (Flu)",
        "A contagious respiratory illness caused by influenza viruses. Can be serious for some groups.",
        "Antiviral medication if prescribed, rest, fluids. Seek medical care for breathing problems or persistent fever.",
    ),
    (
        "COVID-19",
        "Respiratory illness caused by SARS-CoV-2. Symptoms range from mild to severe.",
        "Test for COVID-19 if appropriate, isolate if positive, seek care for breathing difficulty.",
    ),
    (
        "Gastroenteritis",
        "Inflammation of the stomach and intestines, often causing vomiting and diarrhea.",
        "Oral rehydration, rest. Seek care for signs of severe dehydration.",
    ),
    (
        "Migraine",
        "A neurological condition characterized by intense headaches and other symptoms.",
        "Rest in a dark quiet room, prescribed migraine medications, and consult a neurologist for recurrent attacks.",
    ),
    (
        "Urinary Tract Infection",
        "Infection of the urinary tract, commonly causing burning urination and frequency.",
        "See a clinician for urine testing and antibiotics if indicated.",
    ),
    (
        "Hypertension (high BP)",
        "Elevated blood pressure which may be asymptomatic or cause headaches/dizziness.",
        "Measure BP, lifestyle changes, and consult a doctor for long-term management.",
    ),
];
