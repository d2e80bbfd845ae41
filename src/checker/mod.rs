//! Symptom normalization, overlap scoring and the report built on top of it.

pub mod engine;
pub mod normalize;
pub mod reference;
pub mod report;
pub mod scoring;
pub mod types;

pub use engine::SymptomChecker;
pub use normalize::normalize;
pub use reference::{DiseaseEntry, KnowledgeBase, ReferenceData};
pub use report::{CheckOutcome, CheckReport, MostLikely};
pub use scoring::{rank_order, score};
pub use types::{CheckerError, Ranking, ScoredCandidate, UserSymptomSet};
