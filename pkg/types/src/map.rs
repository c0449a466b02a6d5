use serde::{Deserialize, Serialize};

// --- Map identifier ---

/// Opaque chart handle issued by the charting service on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(String);

impl MapId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Case data ---

/// One row of the county case file, normally `(county, cases)`.
///
/// Rows are kept exactly as read. The charting service decides what is
/// valid, so a row with a different field count is still forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseRecord {
    fields: Vec<String>,
}

impl CaseRecord {
    pub fn new(county: impl Into<String>, cases: impl Into<String>) -> Self {
        Self {
            fields: vec![county.into(), cases.into()],
        }
    }

    pub fn from_fields(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_id_serializes_as_plain_string() {
        let id = MapId::new("aB3xY");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"aB3xY\"");
        assert_eq!(id.to_string(), "aB3xY");
    }

    #[test]
    fn case_record_keeps_fields_in_order() {
        let rec = CaseRecord::new("CARLOW", "5");
        assert_eq!(rec.fields(), ["CARLOW".to_string(), "5".to_string()]);

        let short = CaseRecord::from_fields(vec!["CAVAN".to_string()]);
        assert_eq!(short.fields(), ["CAVAN".to_string()]);
        assert!(CaseRecord::default().fields().is_empty());
    }
}
