use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed assessment questionnaire, in presentation order.
pub const QUESTION_KEYS: [&str; 6] = ["q1", "q2", "q3", "q4", "q5", "q6"];

/// A career entry in the catalog. Read-only reference data for the scorer.
///
/// Collection fields default to empty when a stored record omits them, so a
/// partially filled profile still scores (it just matches fewer rules).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills_needed: Vec<String>,
    #[serde(default)]
    pub average_salary_usd: u64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub work_environment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_areas: Option<Vec<String>>,
}

impl CareerProfile {
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    pub fn has_work_environment(&self, environment: &str) -> bool {
        self.work_environment.iter().any(|e| e == environment)
    }

    /// Absent `impact_areas` behaves like an empty set.
    pub fn has_impact_area(&self, area: &str) -> bool {
        self.impact_areas
            .as_deref()
            .is_some_and(|areas| areas.iter().any(|a| a == area))
    }
}

/// A user's answers keyed by question (`q1`..`q6`). May be partial or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an answer set from a loosely typed JSON document, keeping only
    /// string-valued entries. Anything that is not an object yields an empty set.
    pub fn from_json_lenient(value: &Value) -> Self {
        let answers = value
            .as_object()
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Self(answers)
    }

    /// Returns the answer for `question`; blank answers count as unanswered.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.0
            .get(question)
            .map(String::as_str)
            .filter(|a| !a.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Questions from the fixed questionnaire with no usable answer.
    pub fn unanswered(&self) -> Vec<&'static str> {
        QUESTION_KEYS
            .iter()
            .copied()
            .filter(|q| self.get(q).is_none())
            .collect()
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.0).unwrap_or(Value::Null)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A catalog profile annotated with its match score for one request.
/// Serialised flat: every profile field plus `score`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: CareerProfile,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_collections_default_to_empty() {
        let profile: CareerProfile =
            serde_json::from_value(json!({"id": "x", "name": "Nameless"})).unwrap();
        assert!(profile.interests.is_empty());
        assert!(profile.work_environment.is_empty());
        assert_eq!(profile.impact_areas, None);
        assert_eq!(profile.average_salary_usd, 0);
        assert!(!profile.has_impact_area("anything"));
    }

    #[test]
    fn test_lenient_answers_drop_non_strings() {
        let answers = AnswerSet::from_json_lenient(&json!({"q1": "Math", "q2": 7, "q3": null}));
        assert_eq!(answers.get("q1"), Some("Math"));
        assert_eq!(answers.get("q2"), None);
        assert_eq!(answers.get("q3"), None);
    }

    #[test]
    fn test_lenient_answers_non_object_is_empty() {
        assert!(AnswerSet::from_json_lenient(&json!(["q1"])).is_empty());
    }

    #[test]
    fn test_blank_answer_treated_as_unanswered() {
        let answers: AnswerSet = [("q1", ""), ("q2", "Science")].into_iter().collect();
        assert_eq!(answers.get("q1"), None);
        assert_eq!(answers.unanswered(), vec!["q1", "q3", "q4", "q5", "q6"]);
    }

    #[test]
    fn test_scored_profile_serialises_flat_without_absent_impact_areas() {
        let scored = ScoredProfile {
            profile: CareerProfile {
                id: "cp1".to_string(),
                name: "Engineer".to_string(),
                description: String::new(),
                skills_needed: vec![],
                average_salary_usd: 100,
                interests: vec![],
                work_environment: vec![],
                impact_areas: None,
            },
            score: 4,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "cp1");
        assert_eq!(value["score"], 4);
        assert!(value.get("impact_areas").is_none());
    }
}
