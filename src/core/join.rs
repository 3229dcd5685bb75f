// join.rs - Intersect expression patients with clinical feature completeness

use crate::data::{ClinicalFeatureMap, PatientKey};
use std::collections::{BTreeMap, HashMap};

/// Patients present in both sources with every requested feature populated.
/// Keys iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidPatients {
    pub patients: BTreeMap<PatientKey, HashMap<String, String>>,
}

impl ValidPatients {
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PatientKey> {
        self.patients.keys()
    }

    pub fn value(&self, patient: &PatientKey, feature: &str) -> Option<&str> {
        self.patients
            .get(patient)
            .and_then(|features| features.get(feature))
            .map(String::as_str)
    }
}

/// Keep expression patients whose clinical entry covers every requested feature
pub fn join_and_filter<'a, I>(
    expression_patients: I,
    clinical: &ClinicalFeatureMap,
    required_features: &[String],
) -> ValidPatients
where
    I: IntoIterator<Item = &'a PatientKey>,
{
    let patients = expression_patients
        .into_iter()
        .filter_map(|patient| {
            let features = clinical.features_for(patient)?;
            required_features
                .iter()
                .all(|feature| features.contains_key(feature))
                .then(|| (patient.clone(), features.clone()))
        })
        .collect();

    ValidPatients { patients }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PatientKeyExtractor;
    use std::collections::BTreeSet;

    fn key(barcode: &str) -> PatientKey {
        PatientKeyExtractor::new().extract_from_barcode(barcode).unwrap()
    }

    fn features(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn clinical() -> ClinicalFeatureMap {
        let mut map = ClinicalFeatureMap::new();
        map.record(key("TCGA-12-3456"), "gender", "male".to_string());
        map.record(key("TCGA-12-3456"), "vital_status", "Alive".to_string());
        map.record(key("TCGA-99-0001"), "gender", "female".to_string());
        map.record(key("TCGA-55-5555"), "gender", "female".to_string());
        map.record(key("TCGA-55-5555"), "vital_status", "Dead".to_string());
        map
    }

    #[test]
    fn test_incomplete_patients_are_excluded() {
        let expression: BTreeSet<PatientKey> =
            [key("TCGA-12-3456"), key("TCGA-99-0001")].into_iter().collect();

        let valid = join_and_filter(&expression, &clinical(), &features(&["gender", "vital_status"]));

        assert_eq!(valid.len(), 1);
        assert_eq!(valid.value(&key("TCGA-12-3456"), "vital_status"), Some("Alive"));
        assert!(valid.value(&key("TCGA-99-0001"), "gender").is_none());
    }

    #[test]
    fn test_patients_need_expression_data() {
        let expression: BTreeSet<PatientKey> = [key("TCGA-12-3456")].into_iter().collect();

        let valid = join_and_filter(&expression, &clinical(), &features(&["gender"]));

        let keys: Vec<&str> = valid.keys().map(PatientKey::as_str).collect();
        assert_eq!(keys, vec!["12-3456"]);
    }

    #[test]
    fn test_patients_need_clinical_data() {
        let expression: BTreeSet<PatientKey> = [key("TCGA-00-0000")].into_iter().collect();
        let valid = join_and_filter(&expression, &clinical(), &features(&["gender"]));
        assert!(valid.is_empty());
    }

    #[test]
    fn test_keys_are_sorted() {
        let expression = vec![key("TCGA-55-5555"), key("TCGA-12-3456"), key("TCGA-99-0001")];

        let valid = join_and_filter(&expression, &clinical(), &features(&["gender"]));

        let keys: Vec<&str> = valid.keys().map(PatientKey::as_str).collect();
        assert_eq!(keys, vec!["12-3456", "55-5555", "99-0001"]);
    }

    #[test]
    fn test_no_required_features_keeps_all_matched() {
        let expression = vec![key("TCGA-12-3456"), key("TCGA-00-0000")];
        let valid = join_and_filter(&expression, &clinical(), &[]);
        assert_eq!(valid.len(), 1);
    }
}
