use serde::{Deserialize, Serialize};

/// One row of `knowledge_base.json`: a disease and its typical symptoms.
///
/// Symptom labels stay raw here; the knowledge base canonicalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub disease: String,
    pub symptoms: Vec<String>,
}

/// Descriptive text for a disease (loaded from disease_info.json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub disease: String,
    pub description: String,
    pub advice: String,
}
