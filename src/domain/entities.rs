//! Domain entities. Pure data structures for the core business.
//!
//! Two layers: `*Record` types mirror the loosely-shaped input (every field
//! optional, so one malformed student never blocks loading the batch), and the
//! plain types (`Student`, `Semester`, ...) are what survives boundary
//! validation in the transcript builder.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A numeric input field as it arrived. Anything that is not a JSON number,
/// including a literal `null`, is kept verbatim so validation can name it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreInput {
    Number(f64),
    Other(Value),
}

impl ScoreInput {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Other(_) => None,
        }
    }
}

impl From<f64> for ScoreInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Value> for ScoreInput {
    fn from(v: Value) -> Self {
        match v.as_f64() {
            Some(n) => Self::Number(n),
            None => Self::Other(v),
        }
    }
}

impl fmt::Display for ScoreInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

// Records decode only from JSON objects. A derived struct decoder would also
// accept arrays and fill fields by position.
pub type JsonObject = Map<String, Value>;

/// Present, non-null field decoded as `T`.
fn field<T: DeserializeOwned>(
    obj: &mut JsonObject,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match obj.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v).map(Some),
    }
}

/// Numeric field. `null` stays distinguishable from an absent key.
fn score_field(obj: &mut JsonObject, key: &str) -> Option<ScoreInput> {
    obj.remove(key).map(ScoreInput::from)
}

/// Identifier field: strings as-is, numbers by their JSON text.
fn id_field(obj: &mut JsonObject, key: &str) -> Result<Option<String>, serde_json::Error> {
    match obj.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(v) => serde_json::from_value(v).map(Some),
    }
}

/// Raw performance metrics for one subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct PerformanceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignments: Option<ScoreInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exams: Option<ScoreInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<ScoreInput>,
}

impl PerformanceInput {
    pub fn new(assignments: f64, exams: f64, attendance: f64) -> Self {
        Self {
            assignments: Some(assignments.into()),
            exams: Some(exams.into()),
            attendance: Some(attendance.into()),
        }
    }
}

impl TryFrom<JsonObject> for PerformanceInput {
    type Error = serde_json::Error;

    fn try_from(mut obj: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            assignments: score_field(&mut obj, "assignments"),
            exams: score_field(&mut obj, "exams"),
            attendance: score_field(&mut obj, "attendance"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct SubjectRecord {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<ScoreInput>,
    pub performance: Option<PerformanceInput>,
}

impl SubjectRecord {
    pub fn new(name: &str, credits: f64, performance: PerformanceInput) -> Self {
        Self {
            name: Some(name.to_string()),
            credits: Some(credits.into()),
            performance: Some(performance),
        }
    }
}

impl TryFrom<JsonObject> for SubjectRecord {
    type Error = serde_json::Error;

    fn try_from(mut obj: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            name: field(&mut obj, "name")?,
            credits: score_field(&mut obj, "credits"),
            performance: field(&mut obj, "performance")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct SemesterRecord {
    pub term: Option<String>,
    pub subjects: Option<Vec<SubjectRecord>>,
}

impl SemesterRecord {
    pub fn new(term: &str, subjects: Vec<SubjectRecord>) -> Self {
        Self {
            term: Some(term.to_string()),
            subjects: Some(subjects),
        }
    }
}

impl TryFrom<JsonObject> for SemesterRecord {
    type Error = serde_json::Error;

    fn try_from(mut obj: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            term: field(&mut obj, "term")?,
            subjects: field(&mut obj, "subjects")?,
        })
    }
}

/// Top-level input unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct StudentRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub semesters: Option<Vec<SemesterRecord>>,
}

impl TryFrom<JsonObject> for StudentRecord {
    type Error = serde_json::Error;

    fn try_from(mut obj: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            id: id_field(&mut obj, "id")?,
            name: field(&mut obj, "name")?,
            semesters: field(&mut obj, "semesters")?,
        })
    }
}

impl StudentRecord {
    pub fn new(id: &str, name: &str, semesters: Vec<SemesterRecord>) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            semesters: Some(semesters),
        }
    }

    /// Id of an element that may not decode as a record: same rules as the
    /// decoded `id` field, "Unknown" when absent, empty or unusable.
    pub fn id_of(value: &Value) -> String {
        match value.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => "Unknown".to_string(),
        }
    }

    /// Id used in diagnostics: the record's id when present and non-empty, else "Unknown".
    pub fn display_id(&self) -> &str {
        non_empty(&self.id).unwrap_or("Unknown")
    }
}

/// Returns the string when present and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Validated performance metrics, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceRecord {
    pub assignments: f64,
    pub exams: f64,
    pub attendance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    pub credits: f64,
    pub performance: PerformanceRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    pub term: String,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub semesters: Vec<Semester>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let rec: StudentRecord = serde_json::from_str(r#"{"name": "Eve"}"#).unwrap();
        assert_eq!(rec.id, None);
        assert_eq!(rec.display_id(), "Unknown");
        assert!(rec.semesters.is_none());
    }

    #[test]
    fn test_non_numeric_score_is_kept() {
        let perf: PerformanceInput =
            serde_json::from_str(r#"{"assignments": "ninety", "exams": 70, "attendance": null}"#)
                .unwrap();
        assert_eq!(
            perf.assignments,
            Some(ScoreInput::Other(serde_json::json!("ninety")))
        );
        assert_eq!(perf.exams.as_ref().and_then(ScoreInput::as_number), Some(70.0));
        assert_eq!(perf.attendance, Some(ScoreInput::Other(Value::Null)));

        let partial: PerformanceInput = serde_json::from_str(r#"{"exams": 70}"#).unwrap();
        assert_eq!(partial.attendance, None);
    }

    #[test]
    fn test_records_reject_arrays() {
        assert!(serde_json::from_str::<PerformanceInput>("[80, 70, 85]").is_err());
        assert!(serde_json::from_str::<SubjectRecord>(r#"["Math", 3, [80, 70, 85]]"#).is_err());
        assert!(serde_json::from_str::<SemesterRecord>(r#"["Fall", []]"#).is_err());
        assert!(serde_json::from_str::<StudentRecord>(r#"["S1", "Ann", []]"#).is_err());
    }

    #[test]
    fn test_numeric_id_uses_json_text() {
        let rec: StudentRecord = serde_json::from_str(r#"{"id": 123, "name": "Num"}"#).unwrap();
        assert_eq!(rec.display_id(), "123");
        assert_eq!(StudentRecord::id_of(&serde_json::json!({"id": 7})), "7");
        assert_eq!(StudentRecord::id_of(&serde_json::json!({"id": ""})), "Unknown");
        assert_eq!(StudentRecord::id_of(&serde_json::json!([1, 2])), "Unknown");
    }

    #[test]
    fn test_sample_round_trip_keeps_scores() {
        let rec = SubjectRecord::new("Math", 4.0, PerformanceInput::new(80.0, 70.0, 85.0));
        let back: SubjectRecord =
            serde_json::from_value(serde_json::to_value(&rec).unwrap()).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(ScoreInput::Number(120.0).to_string(), "120");
        assert_eq!(ScoreInput::Number(-0.5).to_string(), "-0.5");
        assert_eq!(
            ScoreInput::Other(serde_json::json!("abc")).to_string(),
            "\"abc\""
        );
    }
}
