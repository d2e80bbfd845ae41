pub mod disease;
pub mod symptom;

pub use disease::{DiseaseInfo, DiseaseRecord};
pub use symptom::Symptom;
